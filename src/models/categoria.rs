// src/models/categoria.rs
use crate::models::validacao::{obrigatorio, ErrosValidacao};
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Categoria {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NovaCategoria {
    pub nome: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriaForm {
    #[serde(default)]
    pub nome: String,
}

impl CategoriaForm {
    // Sem verificação de unicidade do nome
    pub fn validar(&self) -> Result<NovaCategoria, ErrosValidacao> {
        let mut erros = ErrosValidacao::default();
        let nome = obrigatorio(&mut erros, "nome", &self.nome);
        if !erros.is_empty() {
            return Err(erros);
        }
        Ok(NovaCategoria { nome })
    }
}

impl From<&Categoria> for CategoriaForm {
    fn from(c: &Categoria) -> Self {
        CategoriaForm { nome: c.nome.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nome_obrigatorio() {
        let form = CategoriaForm { nome: " ".into() };
        assert!(form.validar().unwrap_err().mensagem("nome").is_some());

        let form = CategoriaForm { nome: "Dados".into() };
        assert_eq!(form.validar().unwrap(), NovaCategoria { nome: "Dados".into() });
    }
}
