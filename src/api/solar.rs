use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Instant;
use validator::Validate;

use crate::{
    analytics::{self, SolarDailyTotals, SolarSummary},
    api::{error::ApiError, response::ApiResponse, v1::{ApiQuery, SeriesQuery}},
    controller::AppState,
    domain::{EnvironmentalImpact, PlantSpec, SolarCurrentStatus, SolarHourlySample},
    simulation::compute_impact,
};

#[derive(Debug, Serialize)]
pub struct SolarOverview {
    pub plant: PlantSpec,
    pub status: SolarCurrentStatus,
    /// Solar totals of the last 7 days
    pub daily_totals: Vec<SolarDailyTotals>,
    pub impact: EnvironmentalImpact,
    pub summary: Option<SolarSummary>,
    pub recent: Vec<SolarHourlySample>,
}

/// GET /api/v1/solar/series - Hourly solar plant history
pub async fn get_series(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<SeriesQuery>,
) -> Result<Json<ApiResponse<Vec<SolarHourlySample>>>, ApiError> {
    q.validate()?;
    let start = Instant::now();
    let days = q.days_or(state.cfg.dashboard.default_days);

    let (series, cache) = state.dashboard.solar_series(days, q.refresh)?;
    let records = match q.limit {
        Some(n) => analytics::latest(&series, n).to_vec(),
        None => series.to_vec(),
    };

    let count = records.len();
    Ok(Json(
        ApiResponse::success(records)
            .with_count(count)
            .with_days(days)
            .with_cache(cache)
            .with_duration(start.elapsed().as_millis() as u64),
    ))
}

/// GET /api/v1/solar/status - Live plant reading
pub async fn get_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SolarCurrentStatus>>, ApiError> {
    let status = state.dashboard.solar_status()?;
    Ok(Json(ApiResponse::success(status)))
}

/// GET /api/v1/solar/overview - Status, daily totals, impact and plant summary
pub async fn get_overview(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<SeriesQuery>,
) -> Result<Json<ApiResponse<SolarOverview>>, ApiError> {
    q.validate()?;
    let start = Instant::now();
    let days = q.days_or(state.cfg.dashboard.default_days);

    let (series, cache) = state.dashboard.solar_series(days, q.refresh)?;
    let status = state.dashboard.solar_status()?;

    let daily = analytics::solar_daily_totals(&series);
    let total_kwh: f64 = series.iter().map(|s| s.solar_kwh).sum();

    let overview = SolarOverview {
        plant: *state.dashboard.solar_model().spec(),
        status,
        daily_totals: analytics::last_days(&daily, analytics::DAILY_BREAKDOWN_DAYS).to_vec(),
        impact: compute_impact(total_kwh),
        summary: analytics::solar_summary(&series),
        recent: analytics::latest(&series, state.cfg.dashboard.raw_records_limit).to_vec(),
    };

    Ok(Json(
        ApiResponse::success(overview)
            .with_count(series.len())
            .with_days(days)
            .with_cache(cache)
            .with_duration(start.elapsed().as_millis() as u64),
    ))
}
