// src/services/dashboard_service.rs
use crate::{error::ApiError, models::dashboard::Dashboard, services::api_client::ApiClient};

pub async fn buscar(api: &ApiClient) -> Result<Dashboard, ApiError> {
    api.buscar("/api/dashboard").await
}
