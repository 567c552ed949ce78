// src/services/api_client.rs
use crate::{config::Config, error::ApiError};
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};

/// Cliente HTTP do backend REST. Sem retry nem cache: cada chamada é um pedido.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.api_timeout).build()?;
        Ok(ApiClient {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    fn url(&self, caminho: &str) -> String {
        format!("{}{}", self.base_url, caminho)
    }

    /// GET com corpo JSON.
    pub async fn buscar<T: DeserializeOwned>(&self, caminho: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", caminho);
        let resp = self.http.get(self.url(caminho)).send().await?;
        let status = resp.status();
        let corpo = resp.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                corpo: String::from_utf8_lossy(&corpo).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&corpo)?)
    }

    /// POST/PUT com corpo JSON. O corpo da resposta de sucesso é ignorado.
    pub async fn enviar<B: Serialize>(
        &self,
        metodo: Method,
        caminho: &str,
        corpo: &B,
    ) -> Result<(), ApiError> {
        tracing::debug!("{} {}", metodo, caminho);
        let resp = self
            .http
            .request(metodo, self.url(caminho))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(corpo)
            .send()
            .await?;
        Self::verificar(resp).await
    }

    pub async fn excluir(&self, caminho: &str) -> Result<(), ApiError> {
        tracing::debug!("DELETE {}", caminho);
        let resp = self.http.delete(self.url(caminho)).send().await?;
        Self::verificar(resp).await
    }

    async fn verificar(resp: reqwest::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let corpo = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status: status.as_u16(), corpo })
    }
}

/// POST para criar (sem id) ou PUT para atualizar (`/{id}`).
pub fn metodo_e_caminho(colecao: &str, id: Option<i64>) -> (Method, String) {
    match id {
        Some(id) => (Method::PUT, format!("{colecao}/{id}")),
        None => (Method::POST, colecao.to_string()),
    }
}

/// O que uma gravação bem-sucedida fez, para escolher a mensagem do banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravacao {
    Criado,
    Atualizado,
}

impl Gravacao {
    pub fn de(id: Option<i64>) -> Self {
        if id.is_some() {
            Gravacao::Atualizado
        } else {
            Gravacao::Criado
        }
    }
}
