// src/config.rs
use crate::error::ConfigError;
use std::{net::SocketAddr, time::Duration};

/// Backend usado quando se corre tudo na máquina local.
pub const BACKEND_LOCAL: &str = "http://localhost:8080";

/// Configuração resolvida uma única vez no arranque e partilhada por todos os ecrãs.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|nome| std::env::var(nome).ok())
    }

    /// Lê as variáveis através de `lookup`, o que permite testar sem mexer no ambiente.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ambiente = lookup("APP_ENV").unwrap_or_else(|| "local".to_string());

        let api_base_url = match lookup("API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::ValorInvalido { nome: "API_BASE_URL", valor: url });
                }
                url.trim_end_matches('/').to_string()
            }
            None if ambiente.eq_ignore_ascii_case("local") => BACKEND_LOCAL.to_string(),
            None => return Err(ConfigError::BackendNaoDefinido),
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::ValorInvalido { nome: "BIND_ADDR", valor: v })?,
            None => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let api_timeout = match lookup("API_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse()
                    .map_err(|_| ConfigError::ValorInvalido { nome: "API_TIMEOUT_SECS", valor: v })?,
            ),
            None => Duration::from_secs(15),
        };

        Ok(Config { api_base_url, bind_addr, api_timeout })
    }
}
