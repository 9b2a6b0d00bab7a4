//! Environmental equivalents of produced renewable energy.

use crate::domain::{round2, EnvironmentalImpact};

/// CO₂ emitted by average fossil generation per kWh
pub const CO2_KG_PER_KWH: f64 = 0.5;
/// Daily consumption of an average home
pub const HOME_KWH_PER_DAY: f64 = 30.0;
/// CO₂ absorbed by one tree per year
pub const TREE_CO2_KG_PER_YEAR: f64 = 22.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Convert a total energy quantity into CO₂, homes and trees equivalents.
///
/// Negative or non-finite input is treated as zero.
pub fn compute_impact(total_kwh: f64) -> EnvironmentalImpact {
    let total_kwh = if total_kwh.is_finite() { total_kwh.max(0.0) } else { 0.0 };

    let co2_avoided_kg = round2(total_kwh * CO2_KG_PER_KWH);
    let homes_powered = (total_kwh / HOME_KWH_PER_DAY).round() as u64;
    let trees_equivalent = (co2_avoided_kg / TREE_CO2_KG_PER_YEAR * DAYS_PER_YEAR).round() as u64;

    EnvironmentalImpact {
        co2_avoided_kg,
        homes_powered,
        trees_equivalent,
    }
}
