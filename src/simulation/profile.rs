//! # Diurnal and Seasonal Production Profiles
//!
//! Closed-form base curves shared by both plant models. Hours are local
//! wall-clock hours (0-23); values are kWh before random perturbation.

use std::f64::consts::PI;

use crate::domain::EnergySource;

/// First and last hour of the daylight window (inclusive)
pub const DAYLIGHT_START_HOUR: u32 = 6;
pub const DAYLIGHT_END_HOUR: u32 = 18;

/// Day of year used as the phase reference of the seasonal swing
pub const SEASONAL_PHASE_DAY: f64 = 80.0;

pub fn is_daylight(hour: u32) -> bool {
    (DAYLIGHT_START_HOUR..=DAYLIGHT_END_HOUR).contains(&hour)
}

/// Half-sine solar curve peaking at noon with 100 kWh
pub fn solar_base(hour: u32) -> f64 {
    if !is_daylight(hour) {
        return 0.0;
    }
    let h = hour as f64;
    (100.0 * ((h - 6.0) * PI / 12.0).sin()).max(0.0)
}

pub fn wind_base(hour: u32) -> f64 {
    50.0 + 30.0 * (hour as f64 * PI / 12.0).sin()
}

pub fn hydro_base(hour: u32) -> f64 {
    80.0 + 10.0 * (hour as f64 * PI / 24.0).sin()
}

pub fn biomass_base(hour: u32) -> f64 {
    40.0 + 5.0 * (hour as f64 * PI / 6.0).sin()
}

/// Base production of `source` at `hour`
pub fn base_kwh(source: EnergySource, hour: u32) -> f64 {
    match source {
        EnergySource::Solar => solar_base(hour),
        EnergySource::Wind => wind_base(hour),
        EnergySource::Hydro => hydro_base(hour),
        EnergySource::Biomass => biomass_base(hour),
    }
}

/// Summer/winter insolation multiplier in [0.4, 1.2]
pub fn seasonal_factor(day_of_year: u32) -> f64 {
    0.8 + 0.4 * ((day_of_year as f64 - SEASONAL_PHASE_DAY) * 2.0 * PI / 365.0).sin()
}
