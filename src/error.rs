// src/error.rs
use askama::Template;
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("{entidade} com id {id} não encontrado")]
    NotFound { entidade: &'static str, id: i64 },

    // Violação de chave estrangeira reportada pelo SQLite
    #[error("Conflito referencial: {0}")]
    ConflitoReferencial(String),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    /// Converte um erro do sqlx em `ConflitoReferencial` quando a causa é uma
    /// chave estrangeira; qualquer outro erro segue como `SqlxError`.
    pub fn from_sqlx_fk(err: sqlx::Error, mensagem: impl Into<String>) -> Self {
        let fk = matches!(&err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation());
        if fk {
            AppError::ConflitoReferencial(mensagem.into())
        } else {
            AppError::SqlxError(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ConflitoReferencial(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Template)]
#[template(path = "erro.html")]
struct ErroPage {
    status: u16,
    mensagem: String,
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::warn!("Pedido recusado: {}", self);
        }

        let user_message = match &self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                "Erro ao aceder aos dados.".to_string()
            }
            AppError::EnvVarError(_) => "Erro de configuração.".to_string(),
            AppError::NotFound { .. } | AppError::ConflitoReferencial(_) => self.to_string(),
            AppError::InternalServerError => "Ocorreu um erro inesperado.".to_string(),
        };

        let page = ErroPage { status: status.as_u16(), mensagem: user_message };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Falha ao renderizar página de erro: {}", e);
                (status, page.mensagem).into_response()
            }
        }
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_is_404() {
        let err = AppError::NotFound { entidade: "Curso", id: 5 };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn conflito_is_409() {
        let err = AppError::ConflitoReferencial("professor em uso".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn internal_is_500() {
        let response = AppError::InternalServerError.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn error_page_escapes_markup() {
        let err = AppError::ConflitoReferencial("<b>\"x\" & y</b>".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Erro 409"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
