use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::time::Instant;

use crate::{controller::AppState, simulation::ProductionModel};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: String,
    uptime_seconds: u64,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    renewables: ComponentHealth,
    solar: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy(latency_ms: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            latency_ms: None,
            error: Some(error),
        }
    }

    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Time a snapshot generation
fn check<T, E: std::fmt::Display>(probe: impl FnOnce() -> Result<T, E>) -> ComponentHealth {
    let start = Instant::now();
    match probe() {
        Ok(_) => ComponentHealth::healthy(start.elapsed().as_millis() as u64),
        Err(e) => ComponentHealth::unhealthy(e.to_string()),
    }
}

/// GET /health - Health check endpoint
///
/// Probes both generators with a live snapshot. Probes draw from their own
/// random source so a seeded dashboard sequence is left untouched.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    let renewables = check(|| state.dashboard.renewables_model().generate_snapshot(&mut rng));
    let solar = check(|| state.dashboard.solar_model().generate_snapshot(&mut rng));
    let all_healthy = renewables.is_healthy() && solar.is_healthy();

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.dashboard.uptime().as_secs(),
        checks: HealthChecks { renewables, solar },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(healthy = all_healthy, "Health check completed");
    (status_code, Json(response))
}

/// GET /health/ready - Readiness probe
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    match state.dashboard.renewables_model().generate_snapshot(&mut rng) {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
