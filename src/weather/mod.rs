pub mod aggregator;

use crate::error::ReportError;
use aggregator::DayDetail;
use report_api::ForecastPeriod;
use serde::Serialize;
use std::ops::Range;

/// Where one calendar day sits in the two forecast feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub label: &'static str,
    /// Hour offsets into the hourly feed.
    pub hours: Range<usize>,
    /// Days from today in the half-day feed.
    pub day_offset: usize,
}

pub fn today() -> DayWindow {
    DayWindow { label: "today", hours: 0..24, day_offset: 0 }
}

pub fn tomorrow() -> DayWindow {
    DayWindow { label: "tomorrow", hours: 24..48, day_offset: 1 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayWeatherSummary {
    pub high: i32,
    pub low: i32,
    pub chance_of_rain: u8,
    pub detailed_forecast: DayDetail,
}

pub fn summarize_day(
    hourly: &[ForecastPeriod],
    half_days: &[ForecastPeriod],
    window: &DayWindow,
) -> Result<DayWeatherSummary, ReportError> {
    let rollup = aggregator::aggregate(hourly, window.hours.clone())?;
    let detailed_forecast = aggregator::detail(half_days, window.day_offset)?;
    Ok(DayWeatherSummary {
        high: rollup.high,
        low: rollup.low,
        chance_of_rain: rollup.chance_of_rain,
        detailed_forecast,
    })
}
