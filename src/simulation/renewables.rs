//! # Multi-Source Renewable Plant
//!
//! Solar, wind, hydro and biomass output following fixed hourly curves with
//! independent uniform noise per source.

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;

use super::{profile::base_kwh, ProductionModel};
use crate::domain::{round1, round2, CurrentStatus, EnergySource, HourlySample, SourceStatus};

/// Noise and efficiency characteristics of one source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceProfile {
    /// Half-width of the uniform noise applied to historical samples (kWh)
    pub series_noise_kwh: f64,
    /// Half-width of the uniform noise applied to the live snapshot (kWh)
    pub snapshot_noise_kwh: f64,
    /// Reported efficiency band in percent (min, max)
    pub efficiency_band: (f64, f64),
}

impl SourceProfile {
    pub fn for_source(source: EnergySource) -> Self {
        match source {
            EnergySource::Solar => Self {
                series_noise_kwh: 20.0,
                snapshot_noise_kwh: 10.0,
                efficiency_band: (85.0, 95.0),
            },
            EnergySource::Wind => Self {
                series_noise_kwh: 15.0,
                snapshot_noise_kwh: 10.0,
                efficiency_band: (80.0, 92.0),
            },
            EnergySource::Hydro => Self {
                series_noise_kwh: 10.0,
                snapshot_noise_kwh: 5.0,
                efficiency_band: (88.0, 96.0),
            },
            EnergySource::Biomass => Self {
                series_noise_kwh: 5.0,
                snapshot_noise_kwh: 3.0,
                efficiency_band: (75.0, 88.0),
            },
        }
    }
}

/// Generator for the multi-source renewable monitor
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSourceEnergyModel;

impl MultiSourceEnergyModel {
    pub fn new() -> Self {
        Self
    }

    /// Base curve plus uniform noise of +/- `noise`, floored at zero
    fn perturbed<R: Rng + ?Sized>(source: EnergySource, hour: u32, noise: f64, rng: &mut R) -> f64 {
        (base_kwh(source, hour) + rng.gen_range(-noise..=noise)).max(0.0)
    }

    fn source_status<R: Rng + ?Sized>(source: EnergySource, hour: u32, rng: &mut R) -> (f64, SourceStatus) {
        let profile = SourceProfile::for_source(source);
        let kwh = Self::perturbed(source, hour, profile.snapshot_noise_kwh, rng);
        let (lo, hi) = profile.efficiency_band;
        let status = SourceStatus {
            current_kwh: round2(kwh),
            efficiency_pct: round1(rng.gen_range(lo..=hi)),
        };
        (kwh, status)
    }
}

impl ProductionModel for MultiSourceEnergyModel {
    type Sample = HourlySample;
    type Status = CurrentStatus;

    fn sample_at<R: Rng + ?Sized>(&self, timestamp: NaiveDateTime, rng: &mut R) -> HourlySample {
        let hour = timestamp.hour();
        let mut draw = |source| {
            let noise = SourceProfile::for_source(source).series_noise_kwh;
            Self::perturbed(source, hour, noise, rng)
        };

        let solar_kwh = round2(draw(EnergySource::Solar));
        let wind_kwh = round2(draw(EnergySource::Wind));
        let hydro_kwh = round2(draw(EnergySource::Hydro));
        let biomass_kwh = round2(draw(EnergySource::Biomass));

        // Total is built from the rounded parts so it always matches them
        HourlySample {
            timestamp,
            solar_kwh,
            wind_kwh,
            hydro_kwh,
            biomass_kwh,
            total_kwh: round2(solar_kwh + wind_kwh + hydro_kwh + biomass_kwh),
        }
    }

    fn snapshot_at<R: Rng + ?Sized>(&self, now: NaiveDateTime, rng: &mut R) -> CurrentStatus {
        let hour = now.hour();
        let (solar_kwh, solar) = Self::source_status(EnergySource::Solar, hour, rng);
        let (wind_kwh, wind) = Self::source_status(EnergySource::Wind, hour, rng);
        let (hydro_kwh, hydro) = Self::source_status(EnergySource::Hydro, hour, rng);
        let (biomass_kwh, biomass) = Self::source_status(EnergySource::Biomass, hour, rng);

        CurrentStatus {
            timestamp: now,
            solar,
            wind,
            hydro,
            biomass,
            total_current_kwh: round2(solar_kwh + wind_kwh + hydro_kwh + biomass_kwh),
        }
    }
}
