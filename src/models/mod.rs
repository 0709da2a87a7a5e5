// src/models/mod.rs
pub mod categoria;
pub mod curso;
pub mod professor;
pub mod validacao;
