// src/web/categoria_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::categoria::CategoriaForm,
    services::categoria_service,
    state::AppState,
    templates::{render, CategoriaFormPage, CategoriasListPage},
    web::{redirect_error, redirect_success, FeedbackParams},
};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

pub async fn list_categorias(
    State(state): State<AppState>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<Html<String>> {
    let categorias = categoria_service::find_all_categorias(&state.db_pool).await?;
    render(&CategoriasListPage {
        categorias,
        success_message: params.success,
        error_message: params.error,
    })
}

pub async fn show_new_categoria_form() -> AppResult<Html<String>> {
    render(&CategoriaFormPage::novo())
}

pub async fn handle_create_categoria(
    State(state): State<AppState>,
    Form(form): Form<CategoriaForm>,
) -> AppResult<Response> {
    tracing::info!("POST /categorias: criando categoria '{}'", form.nome);
    let nova = match form.validar() {
        Ok(nova) => nova,
        Err(erros) => {
            let html = render(&CategoriaFormPage::com_erros(None, form, &erros))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
        }
    };

    let categoria = categoria_service::create_categoria(&state.db_pool, &nova).await?;
    let mensagem = format!("Categoria '{}' criada com sucesso.", categoria.nome);
    Ok(redirect_success("/categorias", &mensagem).into_response())
}

pub async fn show_edit_categoria_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let categoria = categoria_service::get_categoria(&state.db_pool, id).await?;
    render(&CategoriaFormPage::edicao(&categoria))
}

pub async fn handle_update_categoria(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CategoriaForm>,
) -> AppResult<Response> {
    tracing::info!("POST /categorias/{}: atualizando", id);
    categoria_service::get_categoria(&state.db_pool, id).await?;

    let dados = match form.validar() {
        Ok(dados) => dados,
        Err(erros) => {
            let html = render(&CategoriaFormPage::com_erros(Some(id), form, &erros))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
        }
    };

    let categoria = categoria_service::update_categoria(&state.db_pool, id, &dados).await?;
    let mensagem = format!("Categoria '{}' atualizada.", categoria.nome);
    Ok(redirect_success("/categorias", &mensagem).into_response())
}

pub async fn handle_delete_categoria(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    tracing::info!("POST /categorias/{}/delete", id);
    match categoria_service::delete_categoria(&state.db_pool, id).await {
        Ok(()) => Ok(redirect_success("/categorias", "Categoria removida.")),
        Err(AppError::ConflitoReferencial(mensagem)) => {
            tracing::warn!("Remoção da categoria {} recusada: {}", id, mensagem);
            Ok(redirect_error("/categorias", &mensagem))
        }
        Err(e) => Err(e),
    }
}
