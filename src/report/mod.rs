pub mod assembler;
pub mod publish;
pub mod render;

use crate::sports::TeamReport;
use crate::weather::DayWeatherSummary;
use chrono::NaiveDate;
use report_api::{League, SunTimes};
use serde::Serialize;

/// Identifies which markdown layout a report is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Sports,
    Weather,
}

impl Template {
    /// File the rendered report is published as.
    pub fn file_name(&self) -> &'static str {
        match self {
            Template::Sports => "sports.md",
            Template::Weather => "weather.md",
        }
    }
}

/// Merged data for one report, handed to the renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportData {
    Sports(SportsReport),
    Weather(WeatherReport),
}

impl ReportData {
    pub fn template(&self) -> Template {
        match self {
            ReportData::Sports(_) => Template::Sports,
            ReportData::Weather(_) => Template::Weather,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsReport {
    pub title: String,
    pub date: NaiveDate,
    pub leagues: Vec<LeagueSection>,
}

/// Followed teams of one league, in configured order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueSection {
    pub league: League,
    pub teams: Vec<TeamReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub title: String,
    pub date: NaiveDate,
    /// Absent when the sunrise lookup failed.
    pub risenset: Option<SunTimes>,
    pub weather: Vec<DayEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    pub label: String,
    #[serde(flatten)]
    pub summary: DayWeatherSummary,
}
