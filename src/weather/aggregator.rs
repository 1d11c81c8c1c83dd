use crate::error::ReportError;
use log::debug;
use report_api::ForecastPeriod;
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Range;

/// High, low and worst-case chance of rain over one window of the hourly feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRollup {
    pub high: i32,
    pub low: i32,
    pub chance_of_rain: u8,
}

/// Day and night narrative for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayDetail {
    pub day: String,
    pub night: String,
}

/// Roll the periods in `window` up into one day.
///
/// The window is taken as given; it is clipped to the feed length but never
/// shifted or inferred. Precipitation is the maximum seen, not an average.
pub fn aggregate(periods: &[ForecastPeriod], window: Range<usize>) -> Result<DayRollup, ReportError> {
    let end = window.end.min(periods.len());
    if end < window.end {
        debug!(
            "hourly window {window:?} clipped to {}..{end}, feed has {} periods",
            window.start,
            periods.len()
        );
    }
    let slice = periods.get(window.start..end).unwrap_or_default();

    let (first, rest) = slice.split_first().ok_or_else(|| ReportError::InsufficientData {
        what: "hourly forecast",
        window: window.clone(),
    })?;

    let mut rollup = DayRollup {
        high: first.temperature,
        low: first.temperature,
        chance_of_rain: first.precipitation_probability,
    };
    for period in rest {
        rollup.high = rollup.high.max(period.temperature);
        rollup.low = rollup.low.min(period.temperature);
        rollup.chance_of_rain = rollup.chance_of_rain.max(period.precipitation_probability);
    }
    Ok(rollup)
}

/// Half-day narratives keyed by half-day index: `2 * day` for the day,
/// `2 * day + 1` for the night. Built from each period's own `index` rather
/// than its position in the slice.
#[derive(Debug, Default)]
pub struct HalfDayNarratives<'a> {
    by_index: HashMap<usize, &'a str>,
}

impl<'a> HalfDayNarratives<'a> {
    pub fn new(periods: &'a [ForecastPeriod]) -> Self {
        let by_index = periods
            .iter()
            .map(|p| (p.index, p.detailed_forecast.as_str()))
            .collect();
        Self { by_index }
    }

    pub fn day(&self, day_offset: usize) -> Option<&'a str> {
        self.by_index.get(&(2 * day_offset)).copied()
    }

    pub fn night(&self, day_offset: usize) -> Option<&'a str> {
        self.by_index.get(&(2 * day_offset + 1)).copied()
    }
}

/// Day and night narrative for the day `day_offset` days from now.
///
/// One missing half renders empty; both missing is an error.
pub fn detail(periods: &[ForecastPeriod], day_offset: usize) -> Result<DayDetail, ReportError> {
    let narratives = HalfDayNarratives::new(periods);
    match (narratives.day(day_offset), narratives.night(day_offset)) {
        (None, None) => Err(ReportError::InsufficientData {
            what: "half-day forecast",
            window: 2 * day_offset..2 * day_offset + 2,
        }),
        (day, night) => Ok(DayDetail {
            day: day.unwrap_or_default().to_owned(),
            night: night.unwrap_or_default().to_owned(),
        }),
    }
}
