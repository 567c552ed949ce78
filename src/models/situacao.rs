// src/models/situacao.rs
use crate::models::chave_ordenacao;
use serde::{Deserialize, Serialize};

/// Valor de tabela auxiliar (status do aluno ou situação da matrícula).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situacao {
    pub id: i64,
    pub descricao: String,
}

impl Situacao {
    pub fn so_id(id: i64) -> Self {
        Situacao { id, descricao: String::new() }
    }
}

/// Ordena alfabeticamente pela descrição, ignorando acentos.
pub fn ordenar_por_descricao(situacoes: &[Situacao]) -> Vec<&Situacao> {
    let mut ordenadas: Vec<&Situacao> = situacoes.iter().collect();
    ordenadas.sort_by_key(|s| chave_ordenacao(&s.descricao));
    ordenadas
}

pub fn por_id(situacoes: &[Situacao], id: Option<i64>) -> Option<Situacao> {
    let id = id?;
    situacoes.iter().find(|s| s.id == id).cloned()
}

/// Procura pela descrição, sem distinguir maiúsculas ("ativa" == "ATIVA").
pub fn por_descricao(situacoes: &[Situacao], descricao: &str) -> Option<Situacao> {
    situacoes
        .iter()
        .find(|s| s.descricao.to_lowercase() == descricao.to_lowercase())
        .cloned()
}
