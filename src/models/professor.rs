// src/models/professor.rs
use crate::models::validacao::{email_valido, obrigatorio, opcional, ErrosValidacao};
use serde::Deserialize;
use sqlx::FromRow;

// Representa uma linha da tabela 'professores'
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Professor {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub imagem: Option<String>,
}

/// Dados validados para inserir ou substituir um professor.
#[derive(Debug, Clone, PartialEq)]
pub struct NovoProfessor {
    pub nome: String,
    pub email: String,
    pub imagem: Option<String>,
}

// Formulário HTML de criação/edição
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessorForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub imagem: String,
}

impl ProfessorForm {
    pub fn validar(&self) -> Result<NovoProfessor, ErrosValidacao> {
        let mut erros = ErrosValidacao::default();
        let nome = obrigatorio(&mut erros, "nome", &self.nome);
        let email = obrigatorio(&mut erros, "email", &self.email);
        if !email.is_empty() && !email_valido(&email) {
            erros.adicionar("email", "Email inválido.");
        }

        if !erros.is_empty() {
            return Err(erros);
        }
        Ok(NovoProfessor {
            nome,
            email,
            imagem: opcional(&self.imagem),
        })
    }
}

impl From<&Professor> for ProfessorForm {
    fn from(p: &Professor) -> Self {
        ProfessorForm {
            nome: p.nome.clone(),
            email: p.email.clone(),
            imagem: p.imagem.clone().unwrap_or_default(),
        }
    }
}
