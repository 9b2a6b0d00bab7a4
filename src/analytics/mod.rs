//! Dashboard Analytics
//!
//! Aggregations computed over generated series: the energy mix of a recent
//! window, per-day totals, production summaries and the raw-record tail.

use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::{round1, round2, CurrentStatus, EnergySource, HourlySample, SolarHourlySample};

/// Hours covered by the energy-mix breakdown
pub const MIX_WINDOW_HOURS: usize = 24;
/// Days shown in the daily production breakdown
pub const DAILY_BREAKDOWN_DAYS: usize = 7;

/// One source's contribution to the energy mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShare {
    pub source: EnergySource,
    pub kwh: f64,
    /// Share of the window total (0-100%)
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMix {
    /// Number of hourly samples actually aggregated
    pub window_hours: usize,
    pub total_kwh: f64,
    pub shares: Vec<SourceShare>,
}

/// Per-source energy of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub solar_kwh: f64,
    pub wind_kwh: f64,
    pub hydro_kwh: f64,
    pub biomass_kwh: f64,
    pub total_kwh: f64,
    /// Hourly samples contributing to this day
    pub hours: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarDailyTotals {
    pub date: NaiveDate,
    pub solar_kwh: f64,
    pub peak_kwh: f64,
    pub producing_hours: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub total_kwh: f64,
    /// Mean of the per-date totals
    pub avg_daily_production_kwh: f64,
    pub peak_total_kwh: f64,
    /// First hour reaching the peak
    pub peak_at: NaiveDateTime,
    pub days_covered: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSummary {
    pub total_kwh: f64,
    pub avg_daily_production_kwh: f64,
    pub peak_kwh: f64,
    pub peak_at: NaiveDateTime,
    /// Mean efficiency over daylight hours (0 when there are none)
    pub avg_daylight_efficiency_pct: f64,
    /// Mean active panel count over producing hours (0 when there are none)
    pub avg_active_panels: f64,
    pub days_covered: usize,
}

/// Per-source totals over the last `hours` samples
pub fn energy_mix(samples: &[HourlySample], hours: usize) -> EnergyMix {
    let window = latest(samples, hours);
    let per_source: Vec<(EnergySource, f64)> = EnergySource::iter()
        .map(|source| (source, window.iter().map(|s| s.source_kwh(source)).sum::<f64>()))
        .collect();
    let total: f64 = per_source.iter().map(|(_, kwh)| kwh).sum();

    let shares = per_source
        .into_iter()
        .map(|(source, kwh)| SourceShare {
            source,
            kwh: round2(kwh),
            share_pct: if total > 0.0 { round1(kwh / total * 100.0) } else { 0.0 },
        })
        .collect();

    EnergyMix {
        window_hours: window.len(),
        total_kwh: round2(total),
        shares,
    }
}

/// Per-date totals in chronological order. Input must be time-ordered.
pub fn daily_totals(samples: &[HourlySample]) -> Vec<DailyTotals> {
    let mut out = Vec::new();
    for (date, day) in &samples.iter().chunk_by(|s| s.timestamp.date()) {
        let day: Vec<&HourlySample> = day.collect();
        let sum = |f: fn(&HourlySample) -> f64| round2(day.iter().map(|s| f(s)).sum());
        out.push(DailyTotals {
            date,
            solar_kwh: sum(|s| s.solar_kwh),
            wind_kwh: sum(|s| s.wind_kwh),
            hydro_kwh: sum(|s| s.hydro_kwh),
            biomass_kwh: sum(|s| s.biomass_kwh),
            total_kwh: sum(|s| s.total_kwh),
            hours: day.len(),
        });
    }
    out
}

pub fn solar_daily_totals(samples: &[SolarHourlySample]) -> Vec<SolarDailyTotals> {
    let mut out = Vec::new();
    for (date, day) in &samples.iter().chunk_by(|s| s.timestamp.date()) {
        let (total, peak, producing) = day.fold((0.0, 0.0_f64, 0), |(total, peak, n), s| {
            (
                total + s.solar_kwh,
                peak.max(s.solar_kwh),
                n + usize::from(s.is_producing()),
            )
        });
        out.push(SolarDailyTotals {
            date,
            solar_kwh: round2(total),
            peak_kwh: peak,
            producing_hours: producing,
        });
    }
    out
}

/// Trailing `n` entries (all of them when shorter)
pub fn last_days<T>(totals: &[T], n: usize) -> &[T] {
    latest(totals, n)
}

/// The last `n` records of a series
pub fn latest<T>(samples: &[T], n: usize) -> &[T] {
    &samples[samples.len().saturating_sub(n)..]
}

/// First sample holding the maximum of `value`
fn first_peak<T>(samples: &[T], value: impl Fn(&T) -> f64) -> Option<&T> {
    samples.iter().fold(None, |best: Option<&T>, s| match best {
        Some(b) if value(b) >= value(s) => Some(b),
        _ => Some(s),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

pub fn performance_summary(samples: &[HourlySample]) -> Option<PerformanceSummary> {
    let peak = first_peak(samples, |s| s.total_kwh)?;
    let days = daily_totals(samples);

    Some(PerformanceSummary {
        total_kwh: round2(samples.iter().map(|s| s.total_kwh).sum()),
        avg_daily_production_kwh: round2(mean(days.iter().map(|d| d.total_kwh))),
        peak_total_kwh: peak.total_kwh,
        peak_at: peak.timestamp,
        days_covered: days.len(),
    })
}

pub fn solar_summary(samples: &[SolarHourlySample]) -> Option<SolarSummary> {
    let peak = first_peak(samples, |s| s.solar_kwh)?;
    let days = solar_daily_totals(samples);

    Some(SolarSummary {
        total_kwh: round2(samples.iter().map(|s| s.solar_kwh).sum()),
        avg_daily_production_kwh: round2(mean(days.iter().map(|d| d.solar_kwh))),
        peak_kwh: peak.solar_kwh,
        peak_at: peak.timestamp,
        avg_daylight_efficiency_pct: round2(mean(
            samples
                .iter()
                .filter(|s| s.efficiency_pct > 0.0)
                .map(|s| s.efficiency_pct),
        )),
        avg_active_panels: round1(mean(
            samples
                .iter()
                .filter(|s| s.is_producing())
                .map(|s| s.panels_active as f64),
        )),
        days_covered: days.len(),
    })
}

/// Mean reported efficiency across all sources
pub fn average_efficiency(status: &CurrentStatus) -> f64 {
    round1(mean(status.sources().map(|(_, s)| s.efficiency_pct)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceStatus;
    use crate::simulation::{MultiSourceEnergyModel, ProductionModel, SolarPlantModel};
    use chrono::{Duration, Timelike};
    use rand::{rngs::StdRng, SeedableRng};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn sample(hour_offset: i64, solar: f64, wind: f64, hydro: f64, biomass: f64) -> HourlySample {
        HourlySample {
            timestamp: start() + Duration::hours(hour_offset),
            solar_kwh: solar,
            wind_kwh: wind,
            hydro_kwh: hydro,
            biomass_kwh: biomass,
            total_kwh: solar + wind + hydro + biomass,
        }
    }

    #[test]
    fn test_energy_mix_uses_trailing_window() {
        let mut samples: Vec<_> = (0..10).map(|h| sample(h, 100.0, 0.0, 0.0, 0.0)).collect();
        samples.extend((10..34).map(|h| sample(h, 1.0, 1.0, 1.0, 1.0)));

        let mix = energy_mix(&samples, MIX_WINDOW_HOURS);
        assert_eq!(mix.window_hours, 24);
        assert_eq!(mix.total_kwh, 96.0);
        for share in &mix.shares {
            assert_eq!(share.kwh, 24.0);
            assert_eq!(share.share_pct, 25.0);
        }
        let order: Vec<_> = mix.shares.iter().map(|s| s.source).collect();
        assert_eq!(order, EnergySource::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_energy_mix_empty_window() {
        let mix = energy_mix(&[], 24);
        assert_eq!(mix.window_hours, 0);
        assert_eq!(mix.total_kwh, 0.0);
        assert!(mix.shares.iter().all(|s| s.share_pct == 0.0));
    }

    #[test]
    fn test_daily_totals_group_by_date() {
        let samples: Vec<_> = (0..48).map(|h| sample(h, 1.0, 2.0, 3.0, 4.0)).collect();
        let days = daily_totals(&samples);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, start().date());
        assert_eq!(days[0].hours, 24);
        assert_eq!(days[0].solar_kwh, 24.0);
        assert_eq!(days[1].biomass_kwh, 96.0);
        assert_eq!(days[1].total_kwh, 240.0);
    }

    #[test]
    fn test_daily_totals_sum_to_series_total() {
        let mut rng = StdRng::seed_from_u64(21);
        let now = start() + Duration::minutes(17 * 60 + 20);
        let series = MultiSourceEnergyModel::new()
            .generate_series_at(30, now, &mut rng)
            .unwrap();
        let days = daily_totals(&series);
        // A 30-day window ending mid-day touches 31 calendar dates
        assert_eq!(days.len(), 31);
        let by_day: f64 = days.iter().map(|d| d.total_kwh).sum();
        let direct: f64 = series.iter().map(|s| s.total_kwh).sum();
        assert!((by_day - direct).abs() < 0.5);
        assert_eq!(days.iter().map(|d| d.hours).sum::<usize>(), series.len());
    }

    #[test]
    fn test_last_days_and_latest() {
        let values: Vec<u32> = (0..10).collect();
        assert_eq!(last_days(&values, 7), &[3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(latest(&values, 100).len(), 10);
        assert!(latest(&values, 0).is_empty());
    }

    #[test]
    fn test_performance_summary_peak_is_first_max() {
        let samples = vec![
            sample(0, 1.0, 1.0, 1.0, 1.0),
            sample(1, 10.0, 0.0, 0.0, 0.0),
            sample(2, 5.0, 5.0, 0.0, 0.0),
            sample(25, 0.0, 0.0, 0.0, 2.0),
        ];
        let summary = performance_summary(&samples).unwrap();
        assert_eq!(summary.peak_total_kwh, 10.0);
        assert_eq!(summary.peak_at.hour(), 1);
        assert_eq!(summary.total_kwh, 26.0);
        assert_eq!(summary.days_covered, 2);
        assert_eq!(summary.avg_daily_production_kwh, 13.0);
    }

    #[test]
    fn test_summaries_of_empty_series() {
        assert!(performance_summary(&[]).is_none());
        assert!(solar_summary(&[]).is_none());
    }

    #[test]
    fn test_solar_summary_and_daily_totals() {
        let mut rng = StdRng::seed_from_u64(4);
        let now = start() + Duration::hours(23);
        let series = SolarPlantModel::default()
            .generate_series_at(3, now, &mut rng)
            .unwrap();

        let days = solar_daily_totals(&series);
        assert_eq!(days.len(), 4);
        assert!(days.iter().all(|d| d.producing_hours <= 13));

        let summary = solar_summary(&series).unwrap();
        let max = series.iter().map(|s| s.solar_kwh).fold(0.0, f64::max);
        assert_eq!(summary.peak_kwh, max);
        assert!((19.0..=20.0).contains(&summary.avg_daylight_efficiency_pct));
        assert!((380.0..=400.0).contains(&summary.avg_active_panels));
    }

    #[test]
    fn test_average_efficiency() {
        let src = |eff| SourceStatus {
            current_kwh: 1.0,
            efficiency_pct: eff,
        };
        let status = CurrentStatus {
            timestamp: start(),
            solar: src(90.0),
            wind: src(85.0),
            hydro: src(92.0),
            biomass: src(80.0),
            total_current_kwh: 4.0,
        };
        assert_eq!(average_efficiency(&status), 86.8);
    }
}
