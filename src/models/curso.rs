// src/models/curso.rs
use crate::models::validacao::{obrigatorio, opcional, ErrosValidacao};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;

pub const FORMATO_DATA: &str = "%Y-%m-%d";

// Linha da tabela 'cursos'
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Curso {
    pub id: i64,
    pub nome: String,
    pub descricao: Option<String>,
    pub data_inicio: NaiveDate,
    // Não se garante que seja posterior a data_inicio
    pub data_final: NaiveDate,
    pub imagem: Option<String>,
    pub professor_id: i64,
    pub categoria_id: i64,
}

/// Curso com os nomes do professor e da categoria, para listagens e detalhes.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CursoDetalhe {
    #[sqlx(flatten)]
    pub curso: Curso,
    pub professor_nome: String,
    pub categoria_nome: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NovoCurso {
    pub nome: String,
    pub descricao: Option<String>,
    pub data_inicio: NaiveDate,
    pub data_final: NaiveDate,
    pub imagem: Option<String>,
    pub professor_id: i64,
    pub categoria_id: i64,
}

/// Formulário de curso. As datas chegam como parâmetros próprios
/// (`dataInicio`, `dataFinal`) e são interpretadas à parte em `parse_datas`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub data_inicio: String,
    #[serde(default)]
    pub data_final: String,
    #[serde(default)]
    pub imagem: String,
    #[serde(default)]
    pub professor_id: String,
    #[serde(default)]
    pub categoria_id: String,
}

/// Interpreta uma data ISO-8601 (AAAA-MM-DD).
pub fn parse_data(valor: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(valor.trim(), FORMATO_DATA).ok()
}

fn parse_id(erros: &mut ErrosValidacao, campo: &'static str, valor: &str) -> i64 {
    let valor = valor.trim();
    if valor.is_empty() {
        erros.adicionar(campo, "Selecione uma opção.");
        return 0;
    }
    valor.parse().unwrap_or_else(|_| {
        erros.adicionar(campo, "Opção inválida.");
        0
    })
}

impl CursoForm {
    pub fn parse_datas(
        &self,
        erros: &mut ErrosValidacao,
    ) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let mut ler = |campo: &'static str, valor: &str| {
            if valor.trim().is_empty() {
                erros.adicionar(campo, "Campo obrigatório.");
                return None;
            }
            let data = parse_data(valor);
            if data.is_none() {
                erros.adicionar(campo, "Data inválida (use AAAA-MM-DD).");
            }
            data
        };
        let inicio = ler("dataInicio", &self.data_inicio);
        let fim = ler("dataFinal", &self.data_final);
        (inicio, fim)
    }

    pub fn validar(&self) -> Result<NovoCurso, ErrosValidacao> {
        let mut erros = ErrosValidacao::default();
        let nome = obrigatorio(&mut erros, "nome", &self.nome);
        let professor_id = parse_id(&mut erros, "professorId", &self.professor_id);
        let categoria_id = parse_id(&mut erros, "categoriaId", &self.categoria_id);
        let (inicio, fim) = self.parse_datas(&mut erros);

        match (inicio, fim) {
            (Some(data_inicio), Some(data_final)) if erros.is_empty() => Ok(NovoCurso {
                nome,
                descricao: opcional(&self.descricao),
                data_inicio,
                data_final,
                imagem: opcional(&self.imagem),
                professor_id,
                categoria_id,
            }),
            _ => Err(erros),
        }
    }
}

impl From<&Curso> for CursoForm {
    fn from(c: &Curso) -> Self {
        CursoForm {
            nome: c.nome.clone(),
            descricao: c.descricao.clone().unwrap_or_default(),
            data_inicio: c.data_inicio.format(FORMATO_DATA).to_string(),
            data_final: c.data_final.format(FORMATO_DATA).to_string(),
            imagem: c.imagem.clone().unwrap_or_default(),
            professor_id: c.professor_id.to_string(),
            categoria_id: c.categoria_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_valido() -> CursoForm {
        CursoForm {
            nome: "Java Web".into(),
            descricao: "Spring Boot + Thymeleaf + CRUD".into(),
            data_inicio: "2026-03-01".into(),
            data_final: "2026-05-01".into(),
            imagem: String::new(),
            professor_id: "1".into(),
            categoria_id: "2".into(),
        }
    }

    #[test]
    fn valida_curso_completo() {
        let novo = form_valido().validar().unwrap();
        assert_eq!(novo.data_inicio, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(novo.data_final, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        assert_eq!(novo.professor_id, 1);
        assert_eq!(novo.categoria_id, 2);
        assert_eq!(novo.imagem, None);
        assert_eq!(novo.descricao.as_deref(), Some("Spring Boot + Thymeleaf + CRUD"));
    }

    #[test]
    fn data_final_anterior_e_aceite() {
        let mut form = form_valido();
        form.data_final = "2025-01-01".into();
        assert!(form.validar().is_ok());
    }

    #[test]
    fn datas_ausentes_ou_malformadas() {
        let mut form = form_valido();
        form.data_inicio = String::new();
        form.data_final = "01/05/2026".into();
        let erros = form.validar().unwrap_err();
        assert_eq!(erros.mensagem("dataInicio").as_deref(), Some("Campo obrigatório."));
        assert!(erros.mensagem("dataFinal").unwrap().starts_with("Data inválida"));
    }

    #[test]
    fn referencias_obrigatorias() {
        let mut form = form_valido();
        form.professor_id = String::new();
        form.categoria_id = "abc".into();
        let erros = form.validar().unwrap_err();
        assert_eq!(erros.mensagem("professorId").as_deref(), Some("Selecione uma opção."));
        assert_eq!(erros.mensagem("categoriaId").as_deref(), Some("Opção inválida."));
    }

    #[test]
    fn formulario_a_partir_do_curso() {
        let curso = Curso {
            id: 7,
            nome: "UX Básico".into(),
            descricao: None,
            data_inicio: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            data_final: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            imagem: Some("https://picsum.photos/seed/ux/600/300".into()),
            professor_id: 2,
            categoria_id: 3,
        };
        let form = CursoForm::from(&curso);
        assert_eq!(form.data_inicio, "2026-01-02");
        assert_eq!(form.professor_id, "2");
        assert_eq!(form.descricao, "");
    }
}
