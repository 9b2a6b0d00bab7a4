//! # Solar Plant Simulation
//!
//! Models a fixed-size PV plant: a half-sine daylight curve scaled by a
//! seasonal swing, random weather and thermal derating, plus independently
//! drawn covariates (irradiance, temperatures, cloud cover, active panels).

use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::Rng;

use super::{
    profile::{is_daylight, seasonal_factor, solar_base},
    ProductionModel,
};
use crate::domain::{round1, round2, PlantSpec, SolarCurrentStatus, SolarHourlySample};

/// Uniform draw ranges used for one kind of solar reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarNoiseBands {
    /// Cloud/rain attenuation (0.0-1.0)
    pub weather_factor: (f64, f64),
    /// Thermal derating (0.0-1.0)
    pub temp_factor: (f64, f64),
    /// Panel degradation applied to the rated efficiency
    pub degradation: (f64, f64),
    pub panel_temp_producing_c: (f64, f64),
    pub panel_temp_idle_c: (f64, f64),
    pub ambient_temp_producing_c: (f64, f64),
    pub ambient_temp_idle_c: (f64, f64),
    /// Share of the installed panels reported active while producing
    pub active_panel_share: (f64, f64),
}

impl SolarNoiseBands {
    /// Ranges for historical hourly samples
    pub const SERIES: Self = Self {
        weather_factor: (0.3, 1.0),
        temp_factor: (0.85, 1.0),
        degradation: (0.95, 1.0),
        panel_temp_producing_c: (15.0, 75.0),
        panel_temp_idle_c: (5.0, 25.0),
        ambient_temp_producing_c: (10.0, 35.0),
        ambient_temp_idle_c: (10.0, 35.0),
        active_panel_share: (0.95, 1.0),
    };

    /// Ranges for the live snapshot
    pub const SNAPSHOT: Self = Self {
        weather_factor: (0.4, 1.0),
        temp_factor: (0.85, 1.0),
        degradation: (0.95, 1.0),
        panel_temp_producing_c: (25.0, 75.0),
        panel_temp_idle_c: (5.0, 20.0),
        ambient_temp_producing_c: (15.0, 35.0),
        ambient_temp_idle_c: (5.0, 20.0),
        active_panel_share: (0.9625, 1.0),
    };
}

const IRRADIANCE_PER_KWH: f64 = 10.0;
const IRRADIANCE_NOISE_WM2: f64 = 50.0;
const CLOUD_NOISE_PCT: f64 = 20.0;

/// One simulated hour before it is shaped into a sample or a status
#[derive(Debug, Clone, Copy)]
struct SolarReading {
    solar_kwh: f64,
    irradiance_wm2: f64,
    panel_temp_c: f64,
    ambient_temp_c: f64,
    cloud_cover_pct: f64,
    efficiency_pct: f64,
    panels_active: u32,
}

/// Generator for the solar-only plant monitor
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarPlantModel {
    spec: PlantSpec,
}

impl SolarPlantModel {
    pub fn new(spec: PlantSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &PlantSpec {
        &self.spec
    }

    fn draw<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
        rng.gen_range(lo..=hi)
    }

    /// Inclusive panel-count range for a share band of the installed panels
    fn active_panel_range(&self, (lo, hi): (f64, f64)) -> (u32, u32) {
        let total = self.spec.total_panels as f64;
        let min = (total * lo).round() as u32;
        let max = (total * hi).round() as u32;
        (min.min(max), max.min(self.spec.total_panels))
    }

    fn simulate<R: Rng + ?Sized>(
        &self,
        timestamp: NaiveDateTime,
        bands: &SolarNoiseBands,
        rng: &mut R,
    ) -> SolarReading {
        let hour = timestamp.hour();

        let (solar_kwh, efficiency) = if is_daylight(hour) {
            let seasonal = seasonal_factor(timestamp.ordinal());
            let weather = Self::draw(rng, bands.weather_factor);
            let thermal = Self::draw(rng, bands.temp_factor);
            let raw = solar_base(hour) * seasonal * weather * thermal;
            let efficiency = self.spec.rated_efficiency * Self::draw(rng, bands.degradation);
            (round2((raw * efficiency).max(0.0)), efficiency)
        } else {
            (0.0, 0.0)
        };
        let producing = solar_kwh > 0.0;

        let irradiance = (solar_kwh * IRRADIANCE_PER_KWH
            + rng.gen_range(-IRRADIANCE_NOISE_WM2..=IRRADIANCE_NOISE_WM2))
        .max(0.0);
        let (panel_band, ambient_band) = if producing {
            (bands.panel_temp_producing_c, bands.ambient_temp_producing_c)
        } else {
            (bands.panel_temp_idle_c, bands.ambient_temp_idle_c)
        };
        let panel_temp = Self::draw(rng, panel_band);
        let ambient_temp = Self::draw(rng, ambient_band);
        let cloud_cover = (100.0 - (solar_kwh / 100.0) * 100.0
            + rng.gen_range(-CLOUD_NOISE_PCT..=CLOUD_NOISE_PCT))
        .clamp(0.0, 100.0);
        let panels_active = if producing {
            let (lo, hi) = self.active_panel_range(bands.active_panel_share);
            rng.gen_range(lo..=hi)
        } else {
            0
        };

        SolarReading {
            solar_kwh,
            irradiance_wm2: round1(irradiance),
            panel_temp_c: round1(panel_temp),
            ambient_temp_c: round1(ambient_temp),
            cloud_cover_pct: round1(cloud_cover),
            efficiency_pct: round2(efficiency * 100.0),
            panels_active,
        }
    }
}

impl ProductionModel for SolarPlantModel {
    type Sample = SolarHourlySample;
    type Status = SolarCurrentStatus;

    fn sample_at<R: Rng + ?Sized>(&self, timestamp: NaiveDateTime, rng: &mut R) -> SolarHourlySample {
        let r = self.simulate(timestamp, &SolarNoiseBands::SERIES, rng);
        SolarHourlySample {
            timestamp,
            solar_kwh: r.solar_kwh,
            irradiance_wm2: r.irradiance_wm2,
            panel_temp_c: r.panel_temp_c,
            ambient_temp_c: r.ambient_temp_c,
            cloud_cover_pct: r.cloud_cover_pct,
            efficiency_pct: r.efficiency_pct,
            panels_active: r.panels_active,
        }
    }

    fn snapshot_at<R: Rng + ?Sized>(&self, now: NaiveDateTime, rng: &mut R) -> SolarCurrentStatus {
        let r = self.simulate(now, &SolarNoiseBands::SNAPSHOT, rng);
        SolarCurrentStatus {
            timestamp: now,
            current_kwh: r.solar_kwh,
            irradiance_wm2: r.irradiance_wm2,
            panel_temp_c: r.panel_temp_c,
            ambient_temp_c: r.ambient_temp_c,
            cloud_cover_pct: r.cloud_cover_pct,
            efficiency_pct: r.efficiency_pct,
            panels_active: r.panels_active,
            total_panels: self.spec.total_panels,
            system_capacity_kw: self.spec.capacity_kw,
        }
    }
}
