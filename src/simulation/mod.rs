//! # Production Simulation Module
//!
//! Synthetic energy-production generators behind the monitoring dashboards.
//!
//! ## Components
//!
//! - **Renewables**: four-source plant (solar, wind, hydro, biomass) sharing an hourly shape
//! - **Solar**: single solar plant with irradiance, temperature, cloud and panel covariates
//! - **Impact**: conversion of produced energy into environmental equivalents
//! - **Profile**: the diurnal and seasonal base curves
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use renewable_energy_monitor::simulation::{MultiSourceEnergyModel, ProductionModel};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let model = MultiSourceEnergyModel::default();
//!
//! let series = model.generate_series(7, &mut rng).unwrap();
//! assert_eq!(series.len(), 7 * 24 + 1);
//!
//! let status = model.generate_snapshot(&mut rng).unwrap();
//! assert!(status.total_current_kwh >= 0.0);
//! ```

pub mod impact;
pub mod profile;
pub mod renewables;
pub mod solar;

pub use impact::compute_impact;
pub use renewables::MultiSourceEnergyModel;
pub use solar::SolarPlantModel;

use chrono::{Duration, DurationRound, Local, NaiveDateTime};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("day count must be positive, got {0}")]
    InvalidDayCount(u32),

    #[error("unable to align timestamp to the hour: {0}")]
    Clock(#[from] chrono::RoundingError),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Hourly timestamp grid covering `[now - days, now]`, both ends inclusive.
///
/// `now` is truncated to the hour first, so the grid has exactly
/// `days * 24 + 1` entries.
pub fn hourly_grid(days: u32, now: NaiveDateTime) -> Result<Vec<NaiveDateTime>> {
    if days == 0 {
        return Err(SimulationError::InvalidDayCount(days));
    }
    let end = now.duration_trunc(Duration::hours(1))?;
    let start = end - Duration::days(days as i64);
    let hours = days as i64 * 24;
    Ok((0..=hours).map(|h| start + Duration::hours(h)).collect())
}

/// Local wall-clock time, which drives the hour-of-day curves
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A synthetic plant that can produce an hourly history and a live snapshot
pub trait ProductionModel {
    type Sample;
    type Status;

    /// Simulate a single hour at `timestamp`
    fn sample_at<R: Rng + ?Sized>(&self, timestamp: NaiveDateTime, rng: &mut R) -> Self::Sample;

    /// Simulate the live reading at `now`
    fn snapshot_at<R: Rng + ?Sized>(&self, now: NaiveDateTime, rng: &mut R) -> Self::Status;

    /// Hourly history ending at `now`
    fn generate_series_at<R: Rng + ?Sized>(
        &self,
        days: u32,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Vec<Self::Sample>> {
        let grid = hourly_grid(days, now)?;
        let samples: Vec<Self::Sample> = grid.into_iter().map(|ts| self.sample_at(ts, rng)).collect();
        debug!(days, samples = samples.len(), "generated production series");
        Ok(samples)
    }

    /// Hourly history ending at the current local hour
    fn generate_series<R: Rng + ?Sized>(&self, days: u32, rng: &mut R) -> Result<Vec<Self::Sample>> {
        self.generate_series_at(days, local_now(), rng)
    }

    fn generate_snapshot<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Status> {
        Ok(self.snapshot_at(local_now(), rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_grid_length_and_endpoints() {
        let now = at(14, 37, 12);
        let grid = hourly_grid(7, now).unwrap();
        assert_eq!(grid.len(), 169);
        assert_eq!(*grid.last().unwrap(), at(14, 0, 0));
        assert_eq!(grid[0], at(14, 0, 0) - Duration::days(7));
    }

    #[test]
    fn test_grid_is_hour_aligned_and_uniform() {
        let grid = hourly_grid(3, at(9, 59, 59)).unwrap();
        for pair in grid.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::hours(1));
        }
        assert!(grid.iter().all(|t| t.minute() == 0 && t.second() == 0));
    }

    #[test]
    fn test_grid_rejects_zero_days() {
        let err = hourly_grid(0, at(12, 0, 0)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidDayCount(0)));
        assert_eq!(err.to_string(), "day count must be positive, got 0");
    }

    #[test]
    fn test_grid_is_deterministic_for_same_now() {
        let now = at(23, 5, 0);
        assert_eq!(hourly_grid(30, now).unwrap(), hourly_grid(30, now).unwrap());
    }
}
