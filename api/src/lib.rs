pub mod client;
pub mod espn;
pub mod nws;
pub mod sunrise;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of provider wire formats
// ---------------------------------------------------------------------------

/// Leagues the report knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Nfl,
    Nba,
}

impl League {
    pub const ALL: [League; 2] = [League::Nfl, League::Nba];

    pub fn label(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Nba => "NBA",
        }
    }

    /// Settings key and ESPN league slug.
    pub fn key(&self) -> &'static str {
        match self {
            League::Nfl => "nfl",
            League::Nba => "nba",
        }
    }

    /// ESPN sport slug, e.g. `football/nfl`.
    pub fn espn_path(&self) -> &'static str {
        match self {
            League::Nfl => "football/nfl",
            League::Nba => "basketball/nba",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    pub abbreviation: String, // "SF", "GS"
    pub name: String,         // "San Francisco 49ers"
    pub wins: u32,
    pub losses: u32,
    /// Chronological, earliest first.
    pub schedule: Vec<Game>,
}

impl Team {
    pub fn record(&self) -> String {
        format!("{} - {}", self.wins, self.losses)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub date: NaiveDate,
    pub opponent_abbreviation: String,
    pub opponent_name: String,
    pub location: Location,
    pub time: Option<NaiveTime>,
    pub result: Option<GameResult>, // None until the game is final
    pub points_scored: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Home,
    Away,
    Neutral,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Location::Home => "Home",
            Location::Away => "Away",
            Location::Neutral => "Neutral",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
            GameResult::Tie => "T",
        })
    }
}

/// One slice of a forecast feed: an hour for the hourly feed, a day or a
/// night for the half-day feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForecastPeriod {
    /// Position in the feed; 0 is the current hour (or current half-day).
    pub index: usize,
    pub start_time: Option<DateTime<Utc>>,
    pub is_daytime: bool,
    pub temperature: i32, // provider unit, °F for NWS
    pub precipitation_probability: u8,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

/// Sun event times for a location, as display strings in local time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SunTimes {
    pub dawn: String,
    pub sunrise: String,
    pub sunset: String,
    pub dusk: String,
    pub solar_noon: String,
    pub golden_hour: String,
    pub day_length: String,
    pub first_light: String,
    pub last_light: String,
}

/// Latitude/longitude pair used for the weather lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
