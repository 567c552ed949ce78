// src/state.rs
use crate::{config::Config, error::ApiError, services::api_client::ApiClient};

/// Estado partilhado pelos handlers. Não guarda dados dos ecrãs: cada pedido
/// busca as suas listas ao backend.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(AppState {
            api: ApiClient::new(config)?,
        })
    }
}
