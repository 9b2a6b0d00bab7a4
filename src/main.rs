use anyhow::{Context, Result};
use axum::Router;
use renewable_energy_monitor::{api, config, controller, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the environment and config file still apply
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = Config::load().context("failed to load configuration")?;
    let app_state = controller::AppState::new(cfg.clone());
    let app: Router = api::router(app_state, &cfg);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("Server binding to 0.0.0.0 - dashboard API will be reachable from the network");
    }

    info!(
        %addr,
        default_days = cfg.dashboard.default_days,
        cache_ttl_seconds = cfg.dashboard.cache_ttl_seconds,
        seeded = cfg.dashboard.random_seed.is_some(),
        "starting Renewable Energy Monitor"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
