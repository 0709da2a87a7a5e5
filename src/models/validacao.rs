// src/models/validacao.rs
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// local@dominio, sem espaços, com um único '@' e rótulos de domínio não vazios
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").expect("regex de email válida")
});

pub fn email_valido(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Mensagens de validação por campo do formulário.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrosValidacao {
    campos: BTreeMap<&'static str, String>,
}

impl ErrosValidacao {
    pub fn adicionar(&mut self, campo: &'static str, mensagem: impl Into<String>) {
        // Mantém a primeira mensagem de cada campo
        self.campos.entry(campo).or_insert_with(|| mensagem.into());
    }

    pub fn is_empty(&self) -> bool {
        self.campos.is_empty()
    }

    pub fn mensagem(&self, campo: &str) -> Option<String> {
        self.campos.get(campo).cloned()
    }

    pub fn campos(&self) -> impl Iterator<Item = &&'static str> {
        self.campos.keys()
    }
}

/// Campo de texto obrigatório; devolve o valor sem espaços nas pontas.
pub fn obrigatorio(
    erros: &mut ErrosValidacao,
    campo: &'static str,
    valor: &str,
) -> String {
    let valor = valor.trim();
    if valor.is_empty() {
        erros.adicionar(campo, "Campo obrigatório.");
    }
    valor.to_string()
}

/// Campo de texto opcional: vazio vira `None`.
pub fn opcional(valor: &str) -> Option<String> {
    let valor = valor.trim();
    (!valor.is_empty()).then(|| valor.to_string())
}
