use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ============================================================================
// Energy Sources
// ============================================================================

/// Renewable generation source tracked by the multi-source monitor
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum EnergySource {
    Solar,
    Wind,
    Hydro,
    Biomass,
}

// ============================================================================
// Plant Configuration
// ============================================================================

/// Static nameplate data of the simulated solar plant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantSpec {
    /// Nameplate capacity in kW
    pub capacity_kw: f64,
    /// Number of installed panels
    pub total_panels: u32,
    /// Rated panel efficiency (0.0-1.0)
    pub rated_efficiency: f64,
}

impl Default for PlantSpec {
    fn default() -> Self {
        Self {
            capacity_kw: 100.0,
            total_panels: 400,
            rated_efficiency: 0.20,
        }
    }
}

// ============================================================================
// Rounding Helpers
// ============================================================================

/// Round to two decimals (kWh, kg)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal (percentages, temperatures)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
