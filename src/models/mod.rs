// src/models/mod.rs
pub mod aluno;
pub mod dashboard;
pub mod datas;
pub mod matricula;
pub mod modal;
pub mod situacao;
pub mod turma;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registos editáveis no modal. Sem id = ainda não existe no backend.
pub trait Registro {
    fn id(&self) -> Option<i64>;
}

/// Referência mínima enviada ao backend (`{ "id": 3 }`) em vez do objeto completo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Referencia {
    pub id: i64,
}

/// Alguns campos chegam do backend ora como número, ora como texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextoOuNumero {
    Numero(i64),
    Texto(String),
}

impl fmt::Display for TextoOuNumero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextoOuNumero::Numero(n) => write!(f, "{n}"),
            TextoOuNumero::Texto(s) => f.write_str(s),
        }
    }
}

/// Filtro de texto livre: substring sem distinção de maiúsculas. Filtro vazio aceita tudo.
pub fn contem(campo: &str, filtro: &str) -> bool {
    campo.to_lowercase().contains(&filtro.to_lowercase())
}

/// Filtro de valor enumerado: igualdade exata após normalizar maiúsculas.
pub fn igual_ou_vazio(campo: &str, filtro: &str) -> bool {
    filtro.is_empty() || campo.to_lowercase() == filtro.to_lowercase()
}

/// Chave de ordenação que ignora acentos e maiúsculas ("Álvaro" fica junto de "alvaro").
pub fn chave_ordenacao(texto: &str) -> String {
    texto
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            outro => outro,
        })
        .collect()
}

/// Texto opcional vindo de formulário: vazio (ou só espaços) vira `None`.
pub fn texto_ou_nulo(valor: &str) -> Option<String> {
    if valor.trim().is_empty() {
        None
    } else {
        Some(valor.to_string())
    }
}
