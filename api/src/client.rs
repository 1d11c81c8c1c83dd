use crate::espn::{EspnCompetitor, EspnEvent, ScheduleResponse, TeamsResponse};
use crate::nws::{ForecastResponse, NwsPeriod, PointsResponse};
use crate::sunrise::SunriseResponse;
use crate::{Coordinates, ForecastPeriod, Game, GameResult, League, Location, SunTimes, Team};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";
const NWS: &str = "https://api.weather.gov";
const SUNRISE_SUNSET: &str = "https://api.sunrisesunset.io";
const DEFAULT_USER_AGENT: &str = "rupert-report/0.2 (daily report builder)";

/// Base URLs for each provider. Overridable so tests can point at a local server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub espn: String,
    pub nws: String,
    pub sunrise: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            espn: ESPN_SITE_V2.to_owned(),
            nws: NWS.to_owned(),
            sunrise: SUNRISE_SUNSET.to_owned(),
        }
    }
}

/// Client for the schedule, forecast and sunrise providers behind the report.
#[derive(Debug, Clone)]
pub struct ReportApi {
    client: Client,
    endpoints: Endpoints,
    timeout: Duration,
}

impl Default for ReportApi {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ReportApi {
    /// NWS rejects requests without an identifying user agent.
    pub fn new(user_agent: &str) -> Self {
        Self::with_endpoints(user_agent, Endpoints::default())
    }

    pub fn with_endpoints(user_agent: &str, endpoints: Endpoints) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent.to_owned())
                .build()
                .unwrap_or_default(),
            endpoints,
            timeout: Duration::from_secs(10),
        }
    }

    /// Fetch every team in a league together with its schedule and record.
    ///
    /// One request for the team list, then one schedule request per team.
    /// A team whose schedule cannot be fetched is logged and left out; the
    /// rest of the league is still returned.
    pub async fn fetch_league(&self, league: League) -> ApiResult<Vec<Team>> {
        let url = format!("{}/{}/teams", self.endpoints.espn, league.espn_path());
        let raw: TeamsResponse = self.get(&url).await?;

        let abbreviations: Vec<String> = raw
            .teams_iter()
            .filter_map(|t| t.abbreviation.clone())
            .collect();
        if abbreviations.is_empty() {
            return Err(ApiError::NotFound(format!("no teams listed for {league}")));
        }
        debug!("{league}: fetching schedules for {} teams", abbreviations.len());

        let mut teams = Vec::with_capacity(abbreviations.len());
        for abbreviation in abbreviations {
            match self.fetch_team(league, &abbreviation).await {
                Ok(team) => teams.push(team),
                Err(e) => warn!("{league}: leaving out {abbreviation}, {e}"),
            }
        }
        Ok(teams)
    }

    /// Fetch one team's schedule and record.
    pub async fn fetch_team(&self, league: League, abbreviation: &str) -> ApiResult<Team> {
        let url = format!(
            "{}/{}/teams/{}/schedule",
            self.endpoints.espn,
            league.espn_path(),
            abbreviation.to_lowercase()
        );
        let raw: ScheduleResponse = self.get(&url).await?;
        Ok(map_schedule(abbreviation, raw))
    }

    /// Fetch the hourly and half-day forecast feeds for a location, in that order.
    pub async fn fetch_forecasts(
        &self,
        at: Coordinates,
    ) -> ApiResult<(Vec<ForecastPeriod>, Vec<ForecastPeriod>)> {
        let url = format!(
            "{}/points/{:.4},{:.4}",
            self.endpoints.nws, at.latitude, at.longitude
        );
        let points: PointsResponse = self.get(&url).await?;
        let props = points
            .properties
            .ok_or_else(|| ApiError::NotFound(format!("no grid point for {url}")))?;
        let hourly_url = props
            .forecast_hourly
            .ok_or_else(|| ApiError::NotFound(format!("no hourly forecast for {url}")))?;
        let half_day_url = props
            .forecast
            .ok_or_else(|| ApiError::NotFound(format!("no forecast for {url}")))?;

        let hourly = self.fetch_periods(&hourly_url).await?;
        let half_days = align_half_days(self.fetch_periods(&half_day_url).await?);
        Ok((hourly, half_days))
    }

    /// Fetch today's sun event times for a location.
    pub async fn fetch_sun_times(&self, at: Coordinates) -> ApiResult<SunTimes> {
        let url = format!(
            "{}/json?lat={}&lng={}",
            self.endpoints.sunrise, at.latitude, at.longitude
        );
        let raw: SunriseResponse = self.get(&url).await?;
        if raw.status.as_deref().is_some_and(|s| s != "OK") {
            return Err(ApiError::Other(format!(
                "sunrise lookup for {url} returned status {}",
                raw.status.unwrap_or_default()
            )));
        }
        let results = raw
            .results
            .ok_or_else(|| ApiError::NotFound(format!("no sun times in {url}")))?;
        Ok(SunTimes {
            dawn: results.dawn.unwrap_or_default(),
            sunrise: results.sunrise.unwrap_or_default(),
            sunset: results.sunset.unwrap_or_default(),
            dusk: results.dusk.unwrap_or_default(),
            solar_noon: results.solar_noon.unwrap_or_default(),
            golden_hour: results.golden_hour.unwrap_or_default(),
            day_length: results.day_length.unwrap_or_default(),
            first_light: results.first_light.unwrap_or_default(),
            last_light: results.last_light.unwrap_or_default(),
        })
    }

    async fn fetch_periods(&self, url: &str) -> ApiResult<Vec<ForecastPeriod>> {
        let raw: ForecastResponse = self.get(url).await?;
        let periods = raw
            .properties
            .and_then(|p| p.periods)
            .unwrap_or_default();
        if periods.is_empty() {
            return Err(ApiError::NotFound(format!("no forecast periods in {url}")));
        }
        Ok(periods
            .iter()
            .enumerate()
            .map(|(position, p)| map_period(position, p))
            .collect())
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                Err(ApiError::NotFound(url.to_owned()))
            }
            Err(e) => Err(ApiError::Api(e, url.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_schedule(abbreviation: &str, raw: ScheduleResponse) -> Team {
    let team = raw.team.unwrap_or_default();
    let (wins, losses) = team
        .record_summary
        .as_deref()
        .and_then(parse_record)
        .unwrap_or_default();

    // The schedule is keyed on the abbreviation ESPN echoes back; fall back to
    // the one we asked for.
    let abbreviation = team
        .abbreviation
        .clone()
        .unwrap_or_else(|| abbreviation.to_uppercase());

    let schedule = raw
        .events
        .unwrap_or_default()
        .iter()
        .filter_map(|event| map_event(&abbreviation, event, &Local))
        .collect();

    Team {
        name: team.display_name.unwrap_or_else(|| abbreviation.clone()),
        abbreviation,
        wins,
        losses,
        schedule,
    }
}

/// Map one schedule event to a game from `abbreviation`'s point of view,
/// with date and start time in `tz`.
fn map_event<Tz: TimeZone>(abbreviation: &str, event: &EspnEvent, tz: &Tz) -> Option<Game> {
    let competition = event.competitions.as_deref()?.first()?;
    let competitors = competition.competitors.as_deref().unwrap_or_default();

    let is_us = |c: &&EspnCompetitor| {
        c.team
            .as_ref()
            .and_then(|t| t.abbreviation.as_deref())
            .is_some_and(|a| a.eq_ignore_ascii_case(abbreviation))
    };
    let Some(us) = competitors.iter().find(is_us) else {
        debug!(
            "event {} does not list {abbreviation} as a competitor",
            event.id.as_deref().unwrap_or("?")
        );
        return None;
    };
    let opponent = competitors.iter().find(|c| !is_us(c))?;
    let opponent_team = opponent.team.clone().unwrap_or_default();

    let Some(kickoff) = event.date.as_deref().and_then(parse_espn_date) else {
        warn!(
            "event {} has no usable date, skipping",
            event.id.as_deref().unwrap_or("?")
        );
        return None;
    };
    let local = kickoff.with_timezone(tz);

    let location = if competition.neutral_site == Some(true) {
        Location::Neutral
    } else if us.home_away.as_deref() == Some("home") {
        Location::Home
    } else {
        Location::Away
    };

    let completed = competition
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.completed)
        .unwrap_or(false);

    let result = completed.then(|| match (us.winner, opponent.winner) {
        (Some(true), _) => GameResult::Win,
        (_, Some(true)) => GameResult::Loss,
        _ => GameResult::Tie,
    });

    let points_scored = if completed {
        us.score
            .as_ref()
            .and_then(|s| s.value)
            .map(|v| v.round() as u32)
    } else {
        None
    };

    let opponent_abbreviation = opponent_team.abbreviation.unwrap_or_default();
    Some(Game {
        date: local.date_naive(),
        opponent_name: opponent_team
            .display_name
            .unwrap_or_else(|| opponent_abbreviation.clone()),
        opponent_abbreviation,
        location,
        time: Some(local.time()),
        result,
        points_scored,
    })
}

/// ESPN schedule dates omit seconds ("2024-09-10T00:15Z"); the scoreboard
/// sends full RFC 3339. Accept both.
fn parse_espn_date(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|dt| dt.and_utc())
        })
}

/// "10-7" → (10, 7). A trailing tie count ("6-10-1") is ignored.
fn parse_record(summary: &str) -> Option<(u32, u32)> {
    let mut parts = summary.split('-').map(|p| p.trim().parse::<u32>());
    let wins = parts.next()?.ok()?;
    let losses = parts.next()?.ok()?;
    Some((wins, losses))
}

// ---------------------------------------------------------------------------
// Mapping: NWS wire types → clean domain types
// ---------------------------------------------------------------------------

/// Re-key a half-day feed so day periods sit on even indices and night
/// periods on odd ones. A feed fetched after sunset opens with "Tonight",
/// which belongs in slot 1 with today's day slot left empty.
fn align_half_days(mut periods: Vec<ForecastPeriod>) -> Vec<ForecastPeriod> {
    let opens_at_night = periods
        .iter()
        .min_by_key(|p| p.index)
        .is_some_and(|p| !p.is_daytime);
    if opens_at_night {
        debug!("half-day feed opens at night, shifting by one slot");
        for period in &mut periods {
            period.index += 1;
        }
    }
    periods
}

fn map_period(position: usize, p: &NwsPeriod) -> ForecastPeriod {
    // NWS numbers periods from 1; fall back to feed position if absent.
    let index = p
        .number
        .and_then(|n| (n as usize).checked_sub(1))
        .unwrap_or(position);

    let precipitation_probability = p
        .probability_of_precipitation
        .as_ref()
        .and_then(|q| q.value)
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0);

    ForecastPeriod {
        index,
        start_time: p
            .start_time
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc)),
        is_daytime: p.is_daytime.unwrap_or(false),
        temperature: p.temperature.map(|t| t.round() as i32).unwrap_or_default(),
        precipitation_probability,
        short_forecast: p.short_forecast.clone().unwrap_or_default(),
        detailed_forecast: p.detailed_forecast.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::espn::{EspnCompetition, EspnScore, EspnStatus, EspnStatusType, EspnTeam};
    use crate::nws::NwsQuantity;
    use chrono::NaiveDate;

    fn competitor(abbr: &str, home_away: &str, score: Option<f64>, winner: Option<bool>) -> EspnCompetitor {
        EspnCompetitor {
            id: None,
            home_away: Some(home_away.into()),
            team: Some(EspnTeam {
                abbreviation: Some(abbr.into()),
                display_name: Some(format!("{abbr} Team")),
                ..Default::default()
            }),
            score: score.map(|v| EspnScore { value: Some(v), display_value: Some(v.to_string()) }),
            winner,
        }
    }

    fn event(date: &str, completed: bool, competitors: Vec<EspnCompetitor>) -> EspnEvent {
        EspnEvent {
            id: Some("401".into()),
            date: Some(date.into()),
            competitions: Some(vec![EspnCompetition {
                neutral_site: Some(false),
                status: Some(EspnStatus {
                    status_type: Some(EspnStatusType {
                        name: None,
                        completed: Some(completed),
                    }),
                }),
                competitors: Some(competitors),
            }]),
        }
    }

    #[test]
    fn parses_minute_precision_espn_dates() {
        let expected = Utc.with_ymd_and_hms(2024, 9, 10, 0, 15, 0).unwrap();
        assert_eq!(parse_espn_date("2024-09-10T00:15Z"), Some(expected));
        assert_eq!(parse_espn_date("2024-09-10T00:15:00Z"), Some(expected));
        assert_eq!(parse_espn_date("next tuesday"), None);
    }

    #[test]
    fn record_summary_ignores_ties() {
        assert_eq!(parse_record("10-7"), Some((10, 7)));
        assert_eq!(parse_record("6-10-1"), Some((6, 10)));
        assert_eq!(parse_record(""), None);
    }

    #[test]
    fn completed_event_maps_result_and_points() {
        let ev = event(
            "2024-09-15T12:00Z",
            true,
            vec![
                competitor("SF", "away", Some(27.0), Some(true)),
                competitor("MIN", "home", Some(23.0), Some(false)),
            ],
        );
        let game = map_event("SF", &ev, &Utc).expect("game should map");
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2024, 9, 15).unwrap());
        assert_eq!(game.opponent_abbreviation, "MIN");
        assert_eq!(game.opponent_name, "MIN Team");
        assert_eq!(game.location, Location::Away);
        assert_eq!(game.result, Some(GameResult::Win));
        assert_eq!(game.points_scored, Some(27));
    }

    #[test]
    fn completed_event_without_winner_is_a_tie() {
        let ev = event(
            "2024-09-15T12:00Z",
            true,
            vec![
                competitor("SF", "home", Some(20.0), Some(false)),
                competitor("LAR", "away", Some(20.0), Some(false)),
            ],
        );
        let game = map_event("SF", &ev, &Utc).unwrap();
        assert_eq!(game.result, Some(GameResult::Tie));
        assert_eq!(game.location, Location::Home);
    }

    #[test]
    fn scheduled_event_has_no_result_or_points() {
        let ev = event(
            "2024-12-01T12:00Z",
            false,
            vec![competitor("SF", "home", None, None), competitor("GB", "away", None, None)],
        );
        let game = map_event("SF", &ev, &Utc).unwrap();
        assert_eq!(game.result, None);
        assert_eq!(game.points_scored, None);
        assert!(game.time.is_some());
    }

    #[test]
    fn event_without_our_team_is_skipped() {
        let ev = event(
            "2024-12-01T12:00Z",
            false,
            vec![competitor("DAL", "home", None, None), competitor("GB", "away", None, None)],
        );
        assert!(map_event("SF", &ev, &Utc).is_none());
    }

    #[test]
    fn nws_period_maps_one_based_number_and_null_precipitation() {
        let raw = NwsPeriod {
            number: Some(3),
            temperature: Some(57.6),
            probability_of_precipitation: Some(NwsQuantity { unit_code: None, value: None }),
            detailed_forecast: Some("Mostly sunny.".into()),
            is_daytime: Some(true),
            ..Default::default()
        };
        let period = map_period(7, &raw);
        assert_eq!(period.index, 2);
        assert_eq!(period.temperature, 58);
        assert_eq!(period.precipitation_probability, 0);
        assert!(period.is_daytime);
        assert_eq!(period.detailed_forecast, "Mostly sunny.");
    }

    #[test]
    fn nws_period_without_number_uses_feed_position() {
        let raw = NwsPeriod {
            probability_of_precipitation: Some(NwsQuantity { unit_code: None, value: Some(40.0) }),
            ..Default::default()
        };
        let period = map_period(5, &raw);
        assert_eq!(period.index, 5);
        assert_eq!(period.precipitation_probability, 40);
    }

    // -----------------------------------------------------------------------
    // HTTP tests against a local mock server
    // -----------------------------------------------------------------------

    fn api_for(server: &mockito::ServerGuard) -> ReportApi {
        ReportApi::with_endpoints(
            "rupert-report tests",
            Endpoints {
                espn: server.url(),
                nws: server.url(),
                sunrise: server.url(),
            },
        )
    }

    #[tokio::test]
    async fn fetch_team_reads_record_and_schedule() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "team": { "abbreviation": "SF", "displayName": "San Francisco 49ers", "recordSummary": "1-0" },
            "events": [{
                "id": "1",
                "date": "2024-09-10T12:00Z",
                "competitions": [{
                    "neutralSite": false,
                    "status": { "type": { "name": "STATUS_FINAL", "completed": true } },
                    "competitors": [
                        { "homeAway": "home", "winner": true, "team": { "abbreviation": "SF", "displayName": "San Francisco 49ers" }, "score": { "value": 32.0, "displayValue": "32" } },
                        { "homeAway": "away", "winner": false, "team": { "abbreviation": "NYJ", "displayName": "New York Jets" }, "score": { "value": 19.0, "displayValue": "19" } }
                    ]
                }]
            }]
        }"#;
        let mock = server
            .mock("GET", "/football/nfl/teams/sf/schedule")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let team = api_for(&server).fetch_team(League::Nfl, "SF").await.unwrap();
        mock.assert_async().await;
        assert_eq!(team.name, "San Francisco 49ers");
        assert_eq!((team.wins, team.losses), (1, 0));
        assert_eq!(team.schedule.len(), 1);
        assert_eq!(team.schedule[0].opponent_name, "New York Jets");
        assert_eq!(team.schedule[0].result, Some(GameResult::Win));
    }

    #[tokio::test]
    async fn fetch_league_leaves_out_a_team_whose_schedule_is_missing() {
        let mut server = mockito::Server::new_async().await;
        let _teams = server
            .mock("GET", "/basketball/nba/teams")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"sports":[{"leagues":[{"teams":[
                    {"team":{"abbreviation":"GS"}},
                    {"team":{"abbreviation":"LAL"}}
                ]}]}]}"#,
            )
            .create_async()
            .await;
        let _gs = server
            .mock("GET", "/basketball/nba/teams/gs/schedule")
            .with_status(404)
            .create_async()
            .await;
        let _lal = server
            .mock("GET", "/basketball/nba/teams/lal/schedule")
            .with_status(200)
            .with_body(r#"{"team":{"abbreviation":"LAL","displayName":"Los Angeles Lakers","recordSummary":"2-1"},"events":[]}"#)
            .create_async()
            .await;

        let teams = api_for(&server).fetch_league(League::Nba).await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].abbreviation, "LAL");
        assert_eq!((teams[0].wins, teams[0].losses), (2, 1));
    }

    #[test]
    fn half_day_feed_opening_at_night_shifts_one_slot() {
        let night = NwsPeriod { number: Some(1), is_daytime: Some(false), ..Default::default() };
        let day = NwsPeriod { number: Some(2), is_daytime: Some(true), ..Default::default() };
        let periods = align_half_days(vec![map_period(0, &night), map_period(1, &day)]);
        assert_eq!((periods[0].index, periods[1].index), (1, 2));

        let periods = align_half_days(vec![map_period(0, &day), map_period(1, &night)]);
        assert_eq!((periods[0].index, periods[1].index), (0, 1));
    }

    #[tokio::test]
    async fn evening_forecast_puts_tonight_in_the_night_slot() {
        let mut server = mockito::Server::new_async().await;
        let points = format!(
            r#"{{"properties":{{"forecast":"{0}/gridpoints/STO/13,50/forecast","forecastHourly":"{0}/gridpoints/STO/13,50/forecast/hourly"}}}}"#,
            server.url()
        );
        let _points = server
            .mock("GET", "/points/38.0636,-122.1632")
            .with_status(200)
            .with_body(points)
            .create_async()
            .await;
        let _hourly = server
            .mock("GET", "/gridpoints/STO/13,50/forecast/hourly")
            .with_status(200)
            .with_body(r#"{"properties":{"periods":[{"number":1,"temperature":50}]}}"#)
            .create_async()
            .await;
        let _half_days = server
            .mock("GET", "/gridpoints/STO/13,50/forecast")
            .with_status(200)
            .with_body(r#"{"properties":{"periods":[
                {"number":1,"isDaytime":false,"detailedForecast":"Tonight: clear, low 43."},
                {"number":2,"isDaytime":true,"detailedForecast":"Monday: sunny, high 61."},
                {"number":3,"isDaytime":false,"detailedForecast":"Monday Night: rain, low 48."}
            ]}}"#)
            .create_async()
            .await;

        let at = Coordinates { latitude: 38.06355895008784, longitude: -122.16322946135749 };
        let (_, half_days) = api_for(&server).fetch_forecasts(at).await.unwrap();
        let indices: Vec<_> = half_days.iter().map(|p| p.index).collect();
        assert_eq!(indices, [1, 2, 3]);
        assert!(!half_days[0].is_daytime);
    }

    #[tokio::test]
    async fn fetch_forecasts_follows_grid_point_links() {
        let mut server = mockito::Server::new_async().await;
        let points = format!(
            r#"{{"properties":{{"forecast":"{0}/gridpoints/STO/13,50/forecast","forecastHourly":"{0}/gridpoints/STO/13,50/forecast/hourly"}}}}"#,
            server.url()
        );
        let _points = server
            .mock("GET", "/points/38.0636,-122.1632")
            .with_status(200)
            .with_body(points)
            .create_async()
            .await;
        let _hourly = server
            .mock("GET", "/gridpoints/STO/13,50/forecast/hourly")
            .with_status(200)
            .with_body(r#"{"properties":{"periods":[
                {"number":1,"temperature":58,"probabilityOfPrecipitation":{"value":10}},
                {"number":2,"temperature":43,"probabilityOfPrecipitation":{"value":40}}
            ]}}"#)
            .create_async()
            .await;
        let _half_days = server
            .mock("GET", "/gridpoints/STO/13,50/forecast")
            .with_status(200)
            .with_body(r#"{"properties":{"periods":[
                {"number":1,"isDaytime":true,"detailedForecast":"Sunny."},
                {"number":2,"isDaytime":false,"detailedForecast":"Clear."}
            ]}}"#)
            .create_async()
            .await;

        let at = Coordinates { latitude: 38.06355895008784, longitude: -122.16322946135749 };
        let (hourly, half_days) = api_for(&server).fetch_forecasts(at).await.unwrap();
        assert_eq!(hourly.len(), 2);
        assert_eq!(hourly[1].temperature, 43);
        assert_eq!(hourly[1].precipitation_probability, 40);
        assert_eq!(half_days[0].detailed_forecast, "Sunny.");
        assert_eq!(half_days[1].index, 1);
    }

    #[tokio::test]
    async fn fetch_sun_times_maps_results() {
        let mut server = mockito::Server::new_async().await;
        let _sun = server
            .mock("GET", "/json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"OK","results":{"sunrise":"7:14:02 AM","sunset":"6:21:40 PM","day_length":"11:07:38"}}"#)
            .create_async()
            .await;

        let at = Coordinates { latitude: 38.06, longitude: -122.16 };
        let sun = api_for(&server).fetch_sun_times(at).await.unwrap();
        assert_eq!(sun.sunrise, "7:14:02 AM");
        assert_eq!(sun.sunset, "6:21:40 PM");
        assert_eq!(sun.dawn, "");
    }

    #[tokio::test]
    async fn server_errors_surface_as_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _sun = server
            .mock("GET", "/json")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let at = Coordinates { latitude: 38.06, longitude: -122.16 };
        let err = api_for(&server).fetch_sun_times(at).await.unwrap_err();
        assert!(matches!(err, ApiError::Api(_, _)), "got {err}");
    }
}
