use serde::{Deserialize, Serialize};

/// Environmental equivalents of a quantity of renewable energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// CO₂ emissions avoided versus fossil generation, in kg
    pub co2_avoided_kg: f64,
    /// Household-days of consumption covered
    pub homes_powered: u64,
    /// Trees needed to absorb the same CO₂ over a year
    pub trees_equivalent: u64,
}
