// src/web/dashboard_handlers.rs
use crate::{
    error::{AppError, AppResult},
    services::dashboard_service,
    state::AppState,
    templates::{DashboardPage, HomePage},
    web::renderizar,
};
use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse},
};

/// GET /
pub async fn pagina_inicial() -> AppResult<Html<String>> {
    renderizar(&HomePage::nova())
}

/// GET /dashboard
pub async fn pagina_dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    tracing::debug!("GET /dashboard");
    let dados = match dashboard_service::buscar(&state.api).await {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::error!("Falha ao carregar dashboard: {}", e);
            None
        }
    };
    renderizar(&DashboardPage::nova(dados))
}

/// GET /static/app.css
pub async fn estilo() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/app.css"),
    )
}

pub async fn nao_encontrado(uri: Uri) -> AppError {
    tracing::warn!("Rota desconhecida: {}", uri);
    AppError::NaoEncontrado
}
