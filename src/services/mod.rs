// src/services/mod.rs
pub mod categoria_service;
pub mod curso_service;
pub mod professor_service;
pub mod seed_service;
