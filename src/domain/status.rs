use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::types::EnergySource;

/// Live reading for one generation source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceStatus {
    /// Current production in kWh (2 decimals, never negative)
    pub current_kwh: f64,
    /// Reported conversion efficiency in percent (1 decimal)
    pub efficiency_pct: f64,
}

/// Snapshot of the multi-source plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentStatus {
    pub timestamp: NaiveDateTime,
    pub solar: SourceStatus,
    pub wind: SourceStatus,
    pub hydro: SourceStatus,
    pub biomass: SourceStatus,
    pub total_current_kwh: f64,
}

impl CurrentStatus {
    pub fn source(&self, source: EnergySource) -> &SourceStatus {
        match source {
            EnergySource::Solar => &self.solar,
            EnergySource::Wind => &self.wind,
            EnergySource::Hydro => &self.hydro,
            EnergySource::Biomass => &self.biomass,
        }
    }

    /// Iterate over all sources in display order
    pub fn sources(&self) -> impl Iterator<Item = (EnergySource, &SourceStatus)> {
        [
            (EnergySource::Solar, &self.solar),
            (EnergySource::Wind, &self.wind),
            (EnergySource::Hydro, &self.hydro),
            (EnergySource::Biomass, &self.biomass),
        ]
        .into_iter()
    }
}

/// Snapshot of the solar plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarCurrentStatus {
    pub timestamp: NaiveDateTime,
    pub current_kwh: f64,
    pub irradiance_wm2: f64,
    pub panel_temp_c: f64,
    pub ambient_temp_c: f64,
    pub cloud_cover_pct: f64,
    pub efficiency_pct: f64,
    pub panels_active: u32,
    pub total_panels: u32,
    pub system_capacity_kw: f64,
}
