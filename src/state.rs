// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado pelos handlers: apenas o pool da DB
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}
