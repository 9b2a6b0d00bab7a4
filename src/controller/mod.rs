pub mod cache;

use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::Config;
use crate::domain::{CurrentStatus, HourlySample, SolarCurrentStatus, SolarHourlySample};
use crate::simulation::{self, MultiSourceEnergyModel, ProductionModel, SolarPlantModel};

pub use cache::{CacheStatus, SeriesCache};

/// A generated series shared between requests
pub type Series<T> = Arc<Vec<T>>;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let dashboard = Arc::new(Dashboard::new(&cfg));
        Self { cfg, dashboard }
    }
}

/// Owns the generators, the shared random source and the series caches
pub struct Dashboard {
    rng: Mutex<StdRng>,
    renewables: MultiSourceEnergyModel,
    solar: SolarPlantModel,
    renewables_cache: SeriesCache<u32, Vec<HourlySample>>,
    solar_cache: SeriesCache<u32, Vec<SolarHourlySample>>,
    started_at: Instant,
}

impl Dashboard {
    pub fn new(cfg: &Config) -> Self {
        let rng = match cfg.dashboard.random_seed {
            Some(seed) => {
                info!(seed, "using fixed simulation seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let ttl = Duration::from_secs(cfg.dashboard.cache_ttl_seconds);

        Self {
            rng: Mutex::new(rng),
            renewables: MultiSourceEnergyModel::new(),
            solar: SolarPlantModel::new(cfg.plant.spec()),
            renewables_cache: SeriesCache::new(ttl),
            solar_cache: SeriesCache::new(ttl),
            started_at: Instant::now(),
        }
    }

    pub fn renewables_model(&self) -> &MultiSourceEnergyModel {
        &self.renewables
    }

    pub fn solar_model(&self) -> &SolarPlantModel {
        &self.solar
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn renewables_series(
        &self,
        days: u32,
        refresh: bool,
    ) -> simulation::Result<(Series<HourlySample>, CacheStatus)> {
        self.renewables_cache.get_or_try_insert(days, refresh, || {
            self.renewables.generate_series(days, &mut *self.rng.lock())
        })
    }

    pub fn renewables_status(&self) -> simulation::Result<CurrentStatus> {
        self.renewables.generate_snapshot(&mut *self.rng.lock())
    }

    pub fn solar_series(
        &self,
        days: u32,
        refresh: bool,
    ) -> simulation::Result<(Series<SolarHourlySample>, CacheStatus)> {
        self.solar_cache.get_or_try_insert(days, refresh, || {
            self.solar.generate_series(days, &mut *self.rng.lock())
        })
    }

    pub fn solar_status(&self) -> simulation::Result<SolarCurrentStatus> {
        self.solar.generate_snapshot(&mut *self.rng.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Config {
        let mut cfg = Config::default();
        cfg.dashboard.random_seed = Some(seed);
        cfg
    }

    #[test]
    fn test_series_cached_per_day_count() {
        let state = AppState::new(seeded(1));
        let (a, first) = state.dashboard.renewables_series(7, false).unwrap();
        let (b, second) = state.dashboard.renewables_series(7, false).unwrap();
        assert_eq!(first, CacheStatus::Miss);
        assert_eq!(second, CacheStatus::Hit);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 169);

        let (c, status) = state.dashboard.renewables_series(14, false).unwrap();
        assert_eq!(status, CacheStatus::Miss);
        assert_eq!(c.len(), 14 * 24 + 1);
    }

    #[test]
    fn test_refresh_regenerates() {
        let state = AppState::new(seeded(2));
        let (a, _) = state.dashboard.solar_series(7, false).unwrap();
        let (b, status) = state.dashboard.solar_series(7, true).unwrap();
        assert_eq!(status, CacheStatus::Miss);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_zero_days_is_an_error() {
        let state = AppState::new(seeded(3));
        assert!(state.dashboard.renewables_series(0, false).is_err());
        assert!(state.dashboard.solar_series(0, false).is_err());
    }

    #[test]
    fn test_solar_status_uses_configured_plant() {
        let mut cfg = seeded(4);
        cfg.plant.total_panels = 120;
        cfg.plant.capacity_kw = 30.0;
        let state = AppState::new(cfg);
        let status = state.dashboard.solar_status().unwrap();
        assert_eq!(status.total_panels, 120);
        assert_eq!(status.system_capacity_kw, 30.0);
        assert!(status.panels_active <= 120);
    }
}
