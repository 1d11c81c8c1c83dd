/// ESPN API raw wire types — serde shapes for deserializing ESPN responses.
/// These map to our clean domain types in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// League team list  (site v2 API: /{sport}/{league}/teams)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamsResponse {
    pub sports: Option<Vec<EspnSport>>,
}

impl TeamsResponse {
    pub fn teams_iter(&self) -> impl Iterator<Item = &EspnTeam> {
        self.sports
            .iter()
            .flatten()
            .flat_map(|s| s.leagues.iter().flatten())
            .flat_map(|l| l.teams.iter().flatten())
            .filter_map(|entry| entry.team.as_ref())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnSport {
    pub leagues: Option<Vec<EspnLeague>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnLeague {
    pub teams: Option<Vec<EspnTeamEntry>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeamEntry {
    pub team: Option<EspnTeam>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeam {
    pub id: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// Only present on the schedule endpoint, e.g. "10-7" or "6-10-1".
    #[serde(rename = "recordSummary")]
    pub record_summary: Option<String>,
}

// ---------------------------------------------------------------------------
// Team schedule  (site v2 API: /{sport}/{league}/teams/{abbr}/schedule)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    pub team: Option<EspnTeam>,
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub date: Option<String>, // ISO 8601, minutes precision: "2024-09-10T00:15Z"
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    #[serde(rename = "neutralSite")]
    pub neutral_site: Option<bool>,
    pub status: Option<EspnStatus>,
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_FINAL"
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<EspnScore>,
    pub winner: Option<bool>,
}

/// Schedule scores come as an object; absent until the game has started.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnScore {
    pub value: Option<f64>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}
