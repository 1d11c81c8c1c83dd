pub mod directory;
pub mod resolver;

use crate::error::ReportError;
use directory::TeamDirectory;
use report_api::League;
use resolver::{LeagueRules, points_missing, result_missing};
use serde::Serialize;

/// Per-league resolution rules. NFL schedules record a result as soon as a
/// game is final; NBA schedules are keyed on the score instead.
pub fn rules_for(league: League) -> LeagueRules {
    match league {
        League::Nfl => LeagueRules { unplayed: result_missing, show_time: false },
        League::Nba => LeagueRules { unplayed: points_missing, show_time: true },
    }
}

/// Everything the report shows for one followed team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    pub abbreviation: String,
    pub name: String,
    pub record: String,
    pub last: String,
    pub next: String,
}

pub fn team_report(
    directory: &TeamDirectory,
    abbreviation: &str,
    rules: LeagueRules,
) -> Result<TeamReport, ReportError> {
    let team = directory.require(abbreviation)?;
    let summary = resolver::summarize(team, directory, rules)?;
    Ok(TeamReport {
        abbreviation: team.abbreviation.clone(),
        name: team.name.clone(),
        record: team.record(),
        last: summary.last,
        next: summary.next,
    })
}
