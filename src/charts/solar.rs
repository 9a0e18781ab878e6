//! Solar energy trend: measured readings followed by the forecast
//!
//! Both series share one label axis. Each is padded with nulls over the
//! other's span so the real line stops where measurements end.

use std::iter;

use super::{ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, LINE_TENSION};
use crate::payload::SolarReading;

pub const REAL_LABEL: &str = "Real";
pub const FORECAST_LABEL: &str = "Forecast (AI)";

/// Dash pattern distinguishing the forecast line
pub const FORECAST_DASH: [u32; 2] = [5, 5];

const MAX_X_TICKS: u32 = 8;

/// Build the solar line chart. Both series have `solar.len() + forecast.len()` points.
pub fn build_solar_chart(solar: &[SolarReading], forecast: &[SolarReading]) -> ChartConfig {
    let labels = solar
        .iter()
        .chain(forecast)
        .map(|reading| reading.day.clone())
        .collect();

    let real = solar
        .iter()
        .map(|reading| reading.energy_kwh)
        .chain(iter::repeat(None).take(forecast.len()))
        .collect();

    let predicted = iter::repeat(None)
        .take(solar.len())
        .chain(forecast.iter().map(|reading| reading.energy_kwh))
        .collect();

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![
                Dataset::new(real).label(REAL_LABEL).tension(LINE_TENSION),
                Dataset::new(predicted)
                    .label(FORECAST_LABEL)
                    .border_dash(FORECAST_DASH.to_vec())
                    .tension(LINE_TENSION),
            ],
        },
        options: ChartOptions::with_axes(MAX_X_TICKS),
    }
}
