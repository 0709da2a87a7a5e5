// src/web/mod.rs
pub mod categoria_handlers;
pub mod curso_handlers;
pub mod professor_handlers;
pub mod routes;

use axum::response::Redirect;
use serde::Deserialize;

/// Mensagens de feedback passadas na query string após um redirect (?success=...&error=...).
#[derive(Deserialize, Debug, Default)]
pub struct FeedbackParams {
    pub success: Option<String>,
    pub error: Option<String>,
}

pub fn redirect_success(path: &str, mensagem: &str) -> Redirect {
    let redirect_url = format!("{}?success={}", path, urlencoding::encode(mensagem));
    Redirect::to(&redirect_url)
}

pub fn redirect_error(path: &str, mensagem: &str) -> Redirect {
    let redirect_url = format!("{}?error={}", path, urlencoding::encode(mensagem));
    Redirect::to(&redirect_url)
}
