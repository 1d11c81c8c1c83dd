use crate::report::{DayEntry, LeagueSection, ReportData, SportsReport, WeatherReport};
use crate::settings::Settings;
use crate::sports::{self, TeamReport, directory::TeamDirectory};
use crate::weather::{self, DayWindow};
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use report_api::client::{ApiResult, ReportApi};
use report_api::{Coordinates, ForecastPeriod, League, SunTimes, Team};

/// Source of league rosters and schedules.
pub trait SportsProvider {
    async fn league_teams(&self, league: League) -> ApiResult<Vec<Team>>;
}

/// Source of forecast feeds (hourly, half-day) and sun times.
pub trait WeatherProvider {
    async fn forecasts(&self, at: Coordinates) -> ApiResult<(Vec<ForecastPeriod>, Vec<ForecastPeriod>)>;
    async fn sun_times(&self, at: Coordinates) -> ApiResult<SunTimes>;
}

impl SportsProvider for ReportApi {
    async fn league_teams(&self, league: League) -> ApiResult<Vec<Team>> {
        self.fetch_league(league).await
    }
}

impl WeatherProvider for ReportApi {
    async fn forecasts(&self, at: Coordinates) -> ApiResult<(Vec<ForecastPeriod>, Vec<ForecastPeriod>)> {
        self.fetch_forecasts(at).await
    }

    async fn sun_times(&self, at: Coordinates) -> ApiResult<SunTimes> {
        self.fetch_sun_times(at).await
    }
}

/// Build the sports report for every followed team.
///
/// A league that cannot be fetched or indexed is left out, as is a team that
/// cannot be resolved; everything else is still reported.
pub async fn build_sports<P: SportsProvider>(provider: &P, settings: &Settings, date: NaiveDate) -> ReportData {
    let mut leagues = Vec::new();
    for league in League::ALL {
        let followed = settings.teams_for(league);
        if followed.is_empty() {
            debug!("{league}: no teams followed");
            continue;
        }

        let directory = match provider.league_teams(league).await {
            Ok(teams) => match TeamDirectory::build(teams) {
                Ok(directory) if directory.is_empty() => {
                    error!("{league}: skipping league, provider returned no teams");
                    continue;
                }
                Ok(directory) => directory,
                Err(e) => {
                    error!("{league}: skipping league, {e}");
                    continue;
                }
            },
            Err(e) => {
                error!("{league}: skipping league, {e}");
                continue;
            }
        };
        info!("{league}: {} teams loaded", directory.len());

        let rules = sports::rules_for(league);
        let teams: Vec<TeamReport> = followed
            .iter()
            .filter_map(|abbreviation| match sports::team_report(&directory, abbreviation, rules) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("{league}: skipping {abbreviation}, {e}");
                    None
                }
            })
            .collect();

        leagues.push(LeagueSection { league, teams });
    }

    ReportData::Sports(SportsReport {
        title: "Sports".into(),
        date,
        leagues,
    })
}

/// Build the weather report: sun times plus today's and tomorrow's forecast.
///
/// Each section is independent; a failed lookup only drops its own section.
pub async fn build_weather<P: WeatherProvider>(provider: &P, at: Coordinates, date: NaiveDate) -> ReportData {
    let risenset = match provider.sun_times(at).await {
        Ok(sun) => Some(sun),
        Err(e) => {
            warn!("skipping sun times, {e}");
            None
        }
    };

    let weather = match provider.forecasts(at).await {
        Ok((hourly, half_days)) => {
            debug!("{} hourly and {} half-day periods", hourly.len(), half_days.len());
            [weather::today(), weather::tomorrow()]
                .iter()
                .filter_map(|window| day_entry(&hourly, &half_days, window))
                .collect()
        }
        Err(e) => {
            error!("skipping forecast, {e}");
            Vec::new()
        }
    };

    ReportData::Weather(WeatherReport {
        title: "Weather".into(),
        date,
        risenset,
        weather,
    })
}

fn day_entry(hourly: &[ForecastPeriod], half_days: &[ForecastPeriod], window: &DayWindow) -> Option<DayEntry> {
    match weather::summarize_day(hourly, half_days, window) {
        Ok(summary) => Some(DayEntry { label: window.label.to_owned(), summary }),
        Err(e) => {
            warn!("skipping {}, {e}", window.label);
            None
        }
    }
}
