use anyhow::Context;
use log::LevelFilter;
use report_api::{Coordinates, League};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_PATH: &str = "cfg/settings.json";

/// Contents of the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub web: WebSettings,
    pub location: Coordinates,
    /// Keyed by league slug ("nfl", "nba").
    #[serde(default)]
    pub sports: BTreeMap<String, LeagueSettings>,
    pub repos: RepoSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSettings {
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSettings {
    /// Abbreviations of the teams to report on.
    #[serde(default)]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoSettings {
    pub daily_report: RepoTarget,
}

/// Git repository the rendered reports are committed to.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoTarget {
    pub remote: String,
    pub local: PathBuf,
    pub sub_folder: String,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Configured teams for a league, empty when the league is not followed.
    pub fn teams_for(&self, league: League) -> &[String] {
        self.sports
            .get(league.key())
            .map(|s| s.teams.as_slice())
            .unwrap_or_default()
    }
}

/// Options taken from the command line and environment.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settings_path: PathBuf,
    pub dry_run: bool,
    pub only: Option<ReportKind>,
    pub log_level: LevelFilter,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            settings_path: std::env::var_os("RUPERT_SETTINGS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH)),
            dry_run: false,
            only: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sports,
    Weather,
}

impl ReportKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sports" => Some(ReportKind::Sports),
            "weather" => Some(ReportKind::Weather),
            _ => None,
        }
    }
}
