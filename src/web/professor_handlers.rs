// src/web/professor_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::professor::ProfessorForm,
    services::professor_service,
    state::AppState,
    templates::{render, ProfessorFormPage, ProfessoresListPage},
    web::{redirect_error, redirect_success, FeedbackParams},
};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

/// GET /professores
pub async fn list_professores(
    State(state): State<AppState>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<Html<String>> {
    tracing::debug!("GET /professores");
    let professores = professor_service::find_all_professores(&state.db_pool).await?;
    render(&ProfessoresListPage {
        professores,
        success_message: params.success,
        error_message: params.error,
    })
}

/// GET /professores/new
pub async fn show_new_professor_form() -> AppResult<Html<String>> {
    render(&ProfessorFormPage::novo())
}

/// POST /professores
pub async fn handle_create_professor(
    State(state): State<AppState>,
    Form(form): Form<ProfessorForm>,
) -> AppResult<Response> {
    tracing::info!("POST /professores: criando professor '{}'", form.nome);

    let novo = match form.validar() {
        Ok(novo) => novo,
        Err(erros) => {
            tracing::warn!("Criação de professor recusada: campos inválidos {:?}", erros.campos().collect::<Vec<_>>());
            let html = render(&ProfessorFormPage::com_erros(None, form, &erros))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
        }
    };

    let professor = professor_service::create_professor(&state.db_pool, &novo).await?;
    let mensagem = format!("Professor '{}' criado com sucesso.", professor.nome);
    Ok(redirect_success("/professores", &mensagem).into_response())
}

/// GET /professores/{id}/edit
pub async fn show_edit_professor_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    tracing::debug!("GET /professores/{}/edit", id);
    let professor = professor_service::get_professor(&state.db_pool, id).await?;
    render(&ProfessorFormPage::edicao(&professor))
}

/// POST /professores/{id}
pub async fn handle_update_professor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProfessorForm>,
) -> AppResult<Response> {
    tracing::info!("POST /professores/{}: atualizando", id);
    professor_service::get_professor(&state.db_pool, id).await?;

    let dados = match form.validar() {
        Ok(dados) => dados,
        Err(erros) => {
            let html = render(&ProfessorFormPage::com_erros(Some(id), form, &erros))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
        }
    };

    let professor = professor_service::update_professor(&state.db_pool, id, &dados).await?;
    let mensagem = format!("Professor '{}' atualizado.", professor.nome);
    Ok(redirect_success("/professores", &mensagem).into_response())
}

/// POST /professores/{id}/delete
pub async fn handle_delete_professor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    tracing::info!("POST /professores/{}/delete", id);
    match professor_service::delete_professor(&state.db_pool, id).await {
        Ok(()) => Ok(redirect_success("/professores", "Professor removido.")),
        Err(AppError::ConflitoReferencial(mensagem)) => {
            tracing::warn!("Remoção do professor {} recusada: {}", id, mensagem);
            Ok(redirect_error("/professores", &mensagem))
        }
        Err(e) => Err(e),
    }
}
