// src/web/routes.rs
use crate::{
    state::AppState,
    web::{categoria_handlers, curso_handlers, professor_handlers},
};
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    let professor_routes = Router::new()
        .route(
            "/",
            get(professor_handlers::list_professores).post(professor_handlers::handle_create_professor),
        )
        .route("/new", get(professor_handlers::show_new_professor_form))
        .route("/{id}", post(professor_handlers::handle_update_professor))
        .route("/{id}/edit", get(professor_handlers::show_edit_professor_form))
        .route("/{id}/delete", post(professor_handlers::handle_delete_professor));

    let categoria_routes = Router::new()
        .route(
            "/",
            get(categoria_handlers::list_categorias).post(categoria_handlers::handle_create_categoria),
        )
        .route("/new", get(categoria_handlers::show_new_categoria_form))
        .route("/{id}", post(categoria_handlers::handle_update_categoria))
        .route("/{id}/edit", get(categoria_handlers::show_edit_categoria_form))
        .route("/{id}/delete", post(categoria_handlers::handle_delete_categoria));

    let curso_routes = Router::new()
        .route("/", get(curso_handlers::list_cursos).post(curso_handlers::handle_create_curso))
        .route("/new", get(curso_handlers::show_new_curso_form))
        .route(
            "/{id}",
            get(curso_handlers::show_curso_details).post(curso_handlers::handle_update_curso),
        )
        .route("/{id}/edit", get(curso_handlers::show_edit_curso_form))
        .route("/{id}/delete", post(curso_handlers::handle_delete_curso));

    Router::new()
        .route("/", get(|| async { Redirect::to("/cursos") }))
        .nest("/professores", professor_routes)
        .nest("/categorias", categoria_routes)
        .nest("/cursos", curso_routes)
        .with_state(app_state)
}
