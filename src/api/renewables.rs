use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Instant;
use validator::Validate;

use crate::{
    analytics::{self, DailyTotals, EnergyMix, PerformanceSummary},
    api::{error::ApiError, response::ApiResponse, v1::{ApiQuery, SeriesQuery}},
    controller::AppState,
    domain::{CurrentStatus, EnvironmentalImpact, HourlySample},
    simulation::compute_impact,
};

/// Everything the multi-source dashboard shows for one history window
#[derive(Debug, Serialize)]
pub struct RenewablesOverview {
    pub status: CurrentStatus,
    pub average_efficiency_pct: f64,
    /// Energy mix of the last 24 hours
    pub energy_mix: EnergyMix,
    /// Per-source totals of the last 7 days
    pub daily_totals: Vec<DailyTotals>,
    /// Impact of all energy in the window
    pub impact: EnvironmentalImpact,
    pub performance: Option<PerformanceSummary>,
    /// Latest raw records
    pub recent: Vec<HourlySample>,
}

/// GET /api/v1/renewables/series - Hourly multi-source history
pub async fn get_series(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<SeriesQuery>,
) -> Result<Json<ApiResponse<Vec<HourlySample>>>, ApiError> {
    q.validate()?;
    let start = Instant::now();
    let days = q.days_or(state.cfg.dashboard.default_days);

    let (series, cache) = state.dashboard.renewables_series(days, q.refresh)?;
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

/// GET /api/v1/renewables/status - Live reading of every source
pub async fn get_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CurrentStatus>>, ApiError> {
    let status = state.dashboard.renewables_status()?;
    Ok(Json(ApiResponse::success(status)))
}

/// GET /api/v1/renewables/overview - Status, mix, daily totals, impact and performance
pub async fn get_overview(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<SeriesQuery>,
) -> Result<Json<ApiResponse<RenewablesOverview>>, ApiError> {
    q.validate()?;
    let start = Instant::now();
    let days = q.days_or(state.cfg.dashboard.default_days);

    let (series, cache) = state.dashboard.renewables_series(days, q.refresh)?;
    let status = state.dashboard.renewables_status()?;

    let daily = analytics::daily_totals(&series);
    let total_kwh: f64 = series.iter().map(|s| s.total_kwh).sum();

    let overview = RenewablesOverview {
        average_efficiency_pct: analytics::average_efficiency(&status),
        status,
        energy_mix: analytics::energy_mix(&series, analytics::MIX_WINDOW_HOURS),
        daily_totals: analytics::last_days(&daily, analytics::DAILY_BREAKDOWN_DAYS).to_vec(),
        impact: compute_impact(total_kwh),
        performance: analytics::performance_summary(&series),
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
