use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::types::EnergySource;

/// One hour of multi-source production (all values in kWh, 2 decimals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    pub solar_kwh: f64,
    pub wind_kwh: f64,
    pub hydro_kwh: f64,
    pub biomass_kwh: f64,
    pub total_kwh: f64,
}

impl HourlySample {
    /// Production of a single source
    pub fn source_kwh(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::Solar => self.solar_kwh,
            EnergySource::Wind => self.wind_kwh,
            EnergySource::Hydro => self.hydro_kwh,
            EnergySource::Biomass => self.biomass_kwh,
        }
    }

    /// Sum of the rounded per-source values
    pub fn component_sum(&self) -> f64 {
        self.solar_kwh + self.wind_kwh + self.hydro_kwh + self.biomass_kwh
    }
}

/// One hour of solar plant operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarHourlySample {
    pub timestamp: NaiveDateTime,
    /// Energy produced in kWh
    pub solar_kwh: f64,
    /// Plane-of-array irradiance in W/m²
    pub irradiance_wm2: f64,
    pub panel_temp_c: f64,
    pub ambient_temp_c: f64,
    /// Cloud cover (0-100%)
    pub cloud_cover_pct: f64,
    /// Conversion efficiency (0-100%), zero outside daylight
    pub efficiency_pct: f64,
    pub panels_active: u32,
}

impl SolarHourlySample {
    pub fn is_producing(&self) -> bool {
        self.solar_kwh > 0.0
    }
}
