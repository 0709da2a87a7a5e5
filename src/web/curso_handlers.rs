// src/web/curso_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        curso::CursoForm,
        validacao::ErrosValidacao,
    },
    services::{categoria_service, curso_service, professor_service},
    state::AppState,
    templates::{render, CursoDetailsPage, CursoFormPage, CursosListPage, OpcaoSelect},
    web::redirect_success,
};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use sqlx::SqlitePool;

// Filtros da listagem. Valores vazios (ex.: opção "Todas") contam como ausentes.
#[derive(Deserialize, Debug, Default)]
pub struct ListarCursosParams {
    #[serde(rename = "categoriaId")]
    categoria_id: Option<String>,
    #[serde(rename = "professorId")]
    professor_id: Option<String>,
    nome: Option<String>,
    success: Option<String>,
    error: Option<String>,
}

fn id_param(nome: &str, valor: Option<&str>) -> Option<i64> {
    let valor = valor.map(str::trim).filter(|v| !v.is_empty())?;
    match valor.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!("Filtro {}={:?} ignorado: não é um id.", nome, valor);
            None
        }
    }
}

/// GET /cursos
pub async fn list_cursos(
    State(state): State<AppState>,
    Query(params): Query<ListarCursosParams>,
) -> AppResult<Html<String>> {
    let categoria_id = id_param("categoriaId", params.categoria_id.as_deref());
    let professor_id = id_param("professorId", params.professor_id.as_deref());
    let nome = params.nome.unwrap_or_default();
    tracing::debug!(
        "GET /cursos: categoria={:?} professor={:?} nome={:?}",
        categoria_id,
        professor_id,
        nome
    );

    let cursos = if let Some(id) = categoria_id {
        curso_service::find_cursos_by_categoria(&state.db_pool, id).await?
    } else if let Some(id) = professor_id {
        curso_service::find_cursos_by_professor(&state.db_pool, id).await?
    } else if !nome.trim().is_empty() {
        curso_service::find_cursos_by_nome(&state.db_pool, nome.trim()).await?
    } else {
        curso_service::find_all_cursos(&state.db_pool).await?
    };

    let categorias = categoria_service::find_all_categorias(&state.db_pool).await?;
    render(&CursosListPage {
        cursos,
        categorias: OpcaoSelect::categorias(&categorias, categoria_id),
        filtro_nome: nome,
        success_message: params.success,
        error_message: params.error,
    })
}

/// Formulário de curso com as listas de professores e categorias carregadas.
async fn form_page(
    db_pool: &SqlitePool,
    id: Option<i64>,
    form: CursoForm,
    erros: &ErrosValidacao,
) -> AppResult<CursoFormPage> {
    let professores = professor_service::find_all_professores(db_pool).await?;
    let categorias = categoria_service::find_all_categorias(db_pool).await?;
    Ok(CursoFormPage::new(id, form, &professores, &categorias, erros))
}

/// Responde a uma submissão recusada, sem redirect.
async fn rerender(
    db_pool: &SqlitePool,
    status: StatusCode,
    id: Option<i64>,
    form: CursoForm,
    erros: &ErrosValidacao,
    mensagem: Option<String>,
) -> AppResult<Response> {
    let mut page = form_page(db_pool, id, form, erros).await?;
    if let Some(mensagem) = mensagem {
        page = page.with_error(mensagem);
    }
    Ok((status, render(&page)?).into_response())
}

/// GET /cursos/new
pub async fn show_new_curso_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = form_page(&state.db_pool, None, CursoForm::default(), &ErrosValidacao::default()).await?;
    render(&page)
}

/// POST /cursos
pub async fn handle_create_curso(
    State(state): State<AppState>,
    Form(form): Form<CursoForm>,
) -> AppResult<Response> {
    tracing::info!("POST /cursos: criando curso '{}'", form.nome);

    let novo = match form.validar() {
        Ok(novo) => novo,
        Err(erros) => {
            tracing::warn!("Criação de curso recusada: campos inválidos {:?}", erros.campos().collect::<Vec<_>>());
            return rerender(&state.db_pool, StatusCode::UNPROCESSABLE_ENTITY, None, form, &erros, None).await;
        }
    };

    match curso_service::create_curso(&state.db_pool, &novo).await {
        Ok(curso) => {
            let mensagem = format!("Curso '{}' criado com sucesso.", curso.nome);
            Ok(redirect_success("/cursos", &mensagem).into_response())
        }
        Err(AppError::ConflitoReferencial(mensagem)) => {
            tracing::warn!("Criação de curso recusada: {}", mensagem);
            let erros = ErrosValidacao::default();
            rerender(&state.db_pool, StatusCode::CONFLICT, None, form, &erros, Some(mensagem)).await
        }
        Err(e) => Err(e),
    }
}

/// GET /cursos/{id}
pub async fn show_curso_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let detalhe = curso_service::get_curso_detalhe(&state.db_pool, id).await?;
    render(&CursoDetailsPage { detalhe })
}

/// GET /cursos/{id}/edit
pub async fn show_edit_curso_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let curso = curso_service::find_curso_by_id(&state.db_pool, id)
        .await?
        .ok_or(AppError::NotFound { entidade: "Curso", id })?;
    let page = form_page(&state.db_pool, Some(id), (&curso).into(), &ErrosValidacao::default()).await?;
    render(&page)
}

/// POST /cursos/{id}
pub async fn handle_update_curso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CursoForm>,
) -> AppResult<Response> {
    tracing::info!("POST /cursos/{}: atualizando", id);
    // Um id inexistente é 404 mesmo com o formulário inválido
    curso_service::find_curso_by_id(&state.db_pool, id)
        .await?
        .ok_or(AppError::NotFound { entidade: "Curso", id })?;

    let dados = match form.validar() {
        Ok(dados) => dados,
        Err(erros) => {
            return rerender(&state.db_pool, StatusCode::UNPROCESSABLE_ENTITY, Some(id), form, &erros, None).await;
        }
    };

    match curso_service::update_curso(&state.db_pool, id, &dados).await {
        Ok(curso) => {
            let mensagem = format!("Curso '{}' atualizado.", curso.nome);
            Ok(redirect_success("/cursos", &mensagem).into_response())
        }
        Err(AppError::ConflitoReferencial(mensagem)) => {
            let erros = ErrosValidacao::default();
            rerender(&state.db_pool, StatusCode::CONFLICT, Some(id), form, &erros, Some(mensagem)).await
        }
        Err(e) => Err(e),
    }
}

/// POST /cursos/{id}/delete
pub async fn handle_delete_curso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    tracing::info!("POST /cursos/{}/delete", id);
    curso_service::delete_curso(&state.db_pool, id).await?;
    Ok(redirect_success("/cursos", "Curso removido."))
}
