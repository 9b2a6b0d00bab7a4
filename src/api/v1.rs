use axum::{
    extract::{FromRequestParts, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::{error::ApiError, health, impact, renewables, solar},
    config::{MAX_DAYS, MIN_DAYS},
    controller::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/renewables/series", get(renewables::get_series))
        .route("/renewables/status", get(renewables::get_status))
        .route("/renewables/overview", get(renewables::get_overview))
        .route("/solar/series", get(solar::get_series))
        .route("/solar/status", get(solar::get_status))
        .route("/solar/overview", get(solar::get_overview))
        .route("/impact", get(impact::get_impact))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// Query-string extractor whose rejections use the JSON error body
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// History selection shared by the series and overview endpoints
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SeriesQuery {
    /// Days of history (7-90); the configured default when absent
    #[validate(range(min = MIN_DAYS, max = MAX_DAYS))]
    pub days: Option<u32>,
    /// Bypass the series cache
    #[serde(default)]
    pub refresh: bool,
    /// Return only the latest `limit` records
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

impl SeriesQuery {
    pub fn days_or(&self, default_days: u32) -> u32 {
        self.days.unwrap_or(default_days)
    }
}
