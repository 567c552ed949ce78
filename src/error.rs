// src/error.rs
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

/// Falhas da camada de comunicação com o backend REST.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Falha de comunicação com o backend: {0}")]
    Transporte(#[from] reqwest::Error),

    #[error("Backend respondeu HTTP {status}: {corpo}")]
    Status { status: u16, corpo: String },

    #[error("Resposta inválida do backend: {0}")]
    Decodificacao(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Variável de ambiente {nome} inválida: {valor}")]
    ValorInvalido { nome: &'static str, valor: String },

    #[error("API_BASE_URL é obrigatória fora do ambiente local")]
    BackendNaoDefinido,
}

/// Erros que chegam a interromper um pedido. Falhas do backend não entram aqui:
/// os ecrãs degradam para listas vazias ou mostram a mensagem no modal.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro ao renderizar página: {0}")]
    Template(#[from] askama::Error),

    #[error("Página não encontrada")]
    NaoEncontrado,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match self {
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado."),
            AppError::NaoEncontrado => (StatusCode::NOT_FOUND, "Página não encontrada."),
        };

        (status, Html(format!(r#"
            <!DOCTYPE html><html><head><title>Erro</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Erro {status_code}</h1><p>{message}</p><a href="/">Voltar ao início</a></body></html>
         "#, status_code = status.as_u16(), message = user_message))).into_response()
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;
