use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    services::seed_service::{self, SeedOutcome},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_count: Option<usize>,
}

#[utoipa::path(
    post,
    path = "/api/init-data",
    responses(
        (status = 200, description = "Seed the catalog when empty; no-op otherwise", body = SeedResponse)
    ),
    tag = "Seed"
)]
pub async fn init_data(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let response = match seed_service::seed(&state).await? {
        SeedOutcome::AlreadyInitialized => SeedResponse {
            message: "Data already initialized".to_string(),
            products_count: None,
        },
        SeedOutcome::Seeded(count) => SeedResponse {
            message: "Mock data initialized successfully".to_string(),
            products_count: Some(count),
        },
    };
    Ok(Json(response))
}
