use anyhow::{ensure, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::domain::PlantSpec;

/// Smallest and largest history a dashboard may request, in days
pub const MIN_DAYS: u32 = 7;
pub const MAX_DAYS: u32 = 90;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub plant: PlantConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            enable_cors: false,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// History shown when a request does not name a day count
    pub default_days: u32,
    /// How long a generated series is served before it is regenerated
    pub cache_ttl_seconds: u64,
    /// Rows returned by the raw-data view
    pub raw_records_limit: usize,
    /// Fixed seed for reproducible output (None = entropy)
    pub random_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_days: 30,
            cache_ttl_seconds: 30,
            raw_records_limit: 100,
            random_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantConfig {
    pub capacity_kw: f64,
    pub total_panels: u32,
    pub rated_efficiency: f64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        let spec = PlantSpec::default();
        Self {
            capacity_kw: spec.capacity_kw,
            total_panels: spec.total_panels,
            rated_efficiency: spec.rated_efficiency,
        }
    }
}

impl PlantConfig {
    pub fn spec(&self) -> PlantSpec {
        PlantSpec {
            capacity_kw: self.capacity_kw,
            total_panels: self.total_panels,
            rated_efficiency: self.rated_efficiency,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file("config/default.toml"))
                .merge(Env::prefixed("REM__").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract().context("invalid configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_DAYS..=MAX_DAYS).contains(&self.dashboard.default_days),
            "dashboard.default_days must be between {MIN_DAYS} and {MAX_DAYS}, got {}",
            self.dashboard.default_days
        );
        ensure!(self.plant.total_panels > 0, "plant.total_panels must be positive");
        ensure!(
            self.plant.rated_efficiency > 0.0 && self.plant.rated_efficiency <= 1.0,
            "plant.rated_efficiency must be in (0, 1], got {}",
            self.plant.rated_efficiency
        );
        ensure!(self.plant.capacity_kw > 0.0, "plant.capacity_kw must be positive");
        Ok(())
    }
}
