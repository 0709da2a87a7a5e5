// src/templates.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        categoria::{Categoria, CategoriaForm},
        curso::{CursoDetalhe, CursoForm},
        professor::{Professor, ProfessorForm},
        validacao::ErrosValidacao,
    },
};
use askama::Template;
use axum::response::Html;

/// Renderiza um template, registando a falha antes de a converter em erro 500.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    template.render().map(Html).map_err(|e| {
        tracing::error!("Falha ao renderizar template: {}", e);
        AppError::InternalServerError
    })
}

// Entrada de um <select>
#[derive(Clone, Debug)]
pub struct OpcaoSelect {
    pub id: i64,
    pub nome: String,
    pub selecionada: bool,
}

impl OpcaoSelect {
    fn lista<T>(itens: &[T], selecionada: Option<i64>, campos: impl Fn(&T) -> (i64, &str)) -> Vec<Self> {
        itens
            .iter()
            .map(|item| {
                let (id, nome) = campos(item);
                OpcaoSelect {
                    id,
                    nome: nome.to_string(),
                    selecionada: Some(id) == selecionada,
                }
            })
            .collect()
    }

    pub fn professores(professores: &[Professor], selecionado: Option<i64>) -> Vec<Self> {
        Self::lista(professores, selecionado, |p| (p.id, p.nome.as_str()))
    }

    pub fn categorias(categorias: &[Categoria], selecionada: Option<i64>) -> Vec<Self> {
        Self::lista(categorias, selecionada, |c| (c.id, c.nome.as_str()))
    }
}

// --- Professores ---

#[derive(Template)]
#[template(path = "professores/list.html")]
pub struct ProfessoresListPage {
    pub professores: Vec<Professor>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "professores/form.html")]
pub struct ProfessorFormPage {
    pub titulo: &'static str,
    pub action: String,
    pub form: ProfessorForm,
    pub erro_nome: Option<String>,
    pub erro_email: Option<String>,
}

impl ProfessorFormPage {
    pub fn novo() -> Self {
        Self::montar(None, ProfessorForm::default(), &ErrosValidacao::default())
    }

    pub fn edicao(professor: &Professor) -> Self {
        Self::montar(Some(professor.id), professor.into(), &ErrosValidacao::default())
    }

    pub fn com_erros(id: Option<i64>, form: ProfessorForm, erros: &ErrosValidacao) -> Self {
        Self::montar(id, form, erros)
    }

    fn montar(id: Option<i64>, form: ProfessorForm, erros: &ErrosValidacao) -> Self {
        ProfessorFormPage {
            titulo: if id.is_some() { "Editar professor" } else { "Novo professor" },
            action: id.map_or_else(|| "/professores".to_string(), |id| format!("/professores/{id}")),
            form,
            erro_nome: erros.mensagem("nome"),
            erro_email: erros.mensagem("email"),
        }
    }
}

// --- Categorias ---

#[derive(Template)]
#[template(path = "categorias/list.html")]
pub struct CategoriasListPage {
    pub categorias: Vec<Categoria>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "categorias/form.html")]
pub struct CategoriaFormPage {
    pub titulo: &'static str,
    pub action: String,
    pub form: CategoriaForm,
    pub erro_nome: Option<String>,
}

impl CategoriaFormPage {
    pub fn novo() -> Self {
        Self::com_erros(None, CategoriaForm::default(), &ErrosValidacao::default())
    }

    pub fn edicao(categoria: &Categoria) -> Self {
        Self::com_erros(Some(categoria.id), categoria.into(), &ErrosValidacao::default())
    }

    pub fn com_erros(id: Option<i64>, form: CategoriaForm, erros: &ErrosValidacao) -> Self {
        CategoriaFormPage {
            titulo: if id.is_some() { "Editar categoria" } else { "Nova categoria" },
            action: id.map_or_else(|| "/categorias".to_string(), |id| format!("/categorias/{id}")),
            form,
            erro_nome: erros.mensagem("nome"),
        }
    }
}

// --- Cursos ---

#[derive(Template)]
#[template(path = "cursos/list.html")]
pub struct CursosListPage {
    pub cursos: Vec<CursoDetalhe>,
    // Opções do filtro por categoria, com a selecionada marcada
    pub categorias: Vec<OpcaoSelect>,
    pub filtro_nome: String,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "cursos/details.html")]
pub struct CursoDetailsPage {
    pub detalhe: CursoDetalhe,
}

#[derive(Template)]
#[template(path = "cursos/form.html")]
pub struct CursoFormPage {
    pub titulo: &'static str,
    pub action: String,
    pub form: CursoForm,
    pub professores: Vec<OpcaoSelect>,
    pub categorias: Vec<OpcaoSelect>,
    pub erro_nome: Option<String>,
    pub erro_data_inicio: Option<String>,
    pub erro_data_final: Option<String>,
    pub erro_professor: Option<String>,
    pub erro_categoria: Option<String>,
    pub error_message: Option<String>,
}

impl CursoFormPage {
    pub fn new(
        id: Option<i64>,
        form: CursoForm,
        professores: &[Professor],
        categorias: &[Categoria],
        erros: &ErrosValidacao,
    ) -> Self {
        let professor_id = form.professor_id.trim().parse().ok();
        let categoria_id = form.categoria_id.trim().parse().ok();
        CursoFormPage {
            titulo: if id.is_some() { "Editar curso" } else { "Novo curso" },
            action: id.map_or_else(|| "/cursos".to_string(), |id| format!("/cursos/{id}")),
            professores: OpcaoSelect::professores(professores, professor_id),
            categorias: OpcaoSelect::categorias(categorias, categoria_id),
            form,
            erro_nome: erros.mensagem("nome"),
            erro_data_inicio: erros.mensagem("dataInicio"),
            erro_data_final: erros.mensagem("dataFinal"),
            erro_professor: erros.mensagem("professorId"),
            erro_categoria: erros.mensagem("categoriaId"),
            error_message: None,
        }
    }

    pub fn with_error(mut self, mensagem: impl Into<String>) -> Self {
        self.error_message = Some(mensagem.into());
        self
    }
}
