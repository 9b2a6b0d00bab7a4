pub mod error;
pub mod health;
pub mod impact;
pub mod renewables;
pub mod response;
pub mod solar;
pub mod v1;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

use crate::{config::Config, controller::AppState};

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new().nest("/api/v1", v1::router(state));

    if cfg.server.enable_cors {
        match cfg.server.cors_origin.parse::<HeaderValue>() {
            Ok(origin) => {
                let cors = CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET])
                    .allow_headers([axum::http::header::CONTENT_TYPE]);
                router = router.layer(cors);
            }
            Err(e) => {
                warn!(origin = %cfg.server.cors_origin, error = %e, "invalid CORS origin, CORS disabled");
            }
        }
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(cfg.server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}
