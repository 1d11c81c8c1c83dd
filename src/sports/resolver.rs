use crate::error::ReportError;
use crate::sports::directory::TeamDirectory;
use chrono::NaiveDate;
use log::warn;
use report_api::{Game, Team};
use serde::Serialize;

pub const NO_LAST_GAME: &str = "No games played yet";
pub const NO_NEXT_GAME: &str = "Season complete";

/// League-specific rule for "this game has not been played yet".
pub type UnplayedPredicate = fn(&Game) -> bool;

/// Unplayed until a result is recorded.
pub fn result_missing(game: &Game) -> bool {
    game.result.is_none()
}

/// Unplayed until a score is recorded.
pub fn points_missing(game: &Game) -> bool {
    game.points_scored.is_none()
}

/// How one league's games are resolved and displayed.
#[derive(Debug, Clone, Copy)]
pub struct LeagueRules {
    pub unplayed: UnplayedPredicate,
    /// Include the start time in the next-game line.
    pub show_time: bool,
}

/// The boundary games of a schedule. Either side may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub last: Option<&'a Game>,
    pub next: Option<&'a Game>,
}

/// Display-ready last/next lines for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub last: String,
    pub next: String,
}

/// Find the most recent played game and the first unplayed one.
///
/// Scans in encounter order and stops at the first unplayed game, so a
/// malformed schedule still resolves to something sensible.
pub fn resolve(schedule: &[Game], unplayed: UnplayedPredicate) -> Resolution<'_> {
    let mut last = None;
    for game in schedule {
        if unplayed(game) {
            return Resolution { last, next: Some(game) };
        }
        last = Some(game);
    }
    Resolution { last, next: None }
}

/// Resolve and format `team`'s boundary games, looking opponents up in
/// `directory` for their record.
pub fn summarize(
    team: &Team,
    directory: &TeamDirectory,
    rules: LeagueRules,
) -> Result<GameSummary, ReportError> {
    check_ordering(team, rules.unplayed);
    let resolution = resolve(&team.schedule, rules.unplayed);

    let last = match resolution.last {
        Some(game) => format_last(game),
        None => NO_LAST_GAME.to_owned(),
    };
    let next = match resolution.next {
        Some(game) => {
            let opponent = directory.get(&game.opponent_abbreviation).ok_or_else(|| {
                ReportError::UnresolvableGame {
                    team: team.abbreviation.clone(),
                    reason: format!(
                        "next opponent {:?} is not in the league directory",
                        game.opponent_abbreviation
                    ),
                }
            })?;
            format_next(game, opponent, rules.show_time)
        }
        None => NO_NEXT_GAME.to_owned(),
    };

    Ok(GameSummary { last, next })
}

/// A schedule that is not in the order resolution assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingIssue {
    /// A game dated earlier than the one listed before it.
    DateOutOfOrder { listed: NaiveDate, before: NaiveDate },
    /// A played game listed after the first unplayed one.
    PlayedAfterUnplayed { played: NaiveDate, unplayed: NaiveDate },
}

/// Find the first instance of each kind of ordering problem in a schedule.
pub fn ordering_issues(schedule: &[Game], unplayed: UnplayedPredicate) -> Vec<OrderingIssue> {
    let mut issues = Vec::new();
    if let Some(pair) = schedule.windows(2).find(|w| w[0].date > w[1].date) {
        issues.push(OrderingIssue::DateOutOfOrder {
            listed: pair[0].date,
            before: pair[1].date,
        });
    }

    if let Some(boundary) = schedule.iter().position(unplayed) {
        if let Some(stray) = schedule[boundary..].iter().find(|g| !unplayed(g)) {
            issues.push(OrderingIssue::PlayedAfterUnplayed {
                played: stray.date,
                unplayed: schedule[boundary].date,
            });
        }
    }
    issues
}

/// Warn about schedules that break the ordering invariant. Never fails.
fn check_ordering(team: &Team, unplayed: UnplayedPredicate) {
    for issue in ordering_issues(&team.schedule, unplayed) {
        match issue {
            OrderingIssue::DateOutOfOrder { listed, before } => warn!(
                "{}: schedule out of date order ({listed} listed before {before})",
                team.abbreviation
            ),
            OrderingIssue::PlayedAfterUnplayed { played, unplayed } => warn!(
                "{}: played game on {played} appears after unplayed game on {unplayed}; using encounter order",
                team.abbreviation
            ),
        }
    }
}

fn format_last(game: &Game) -> String {
    let result = game
        .result
        .map(|r| r.to_string())
        .unwrap_or_else(|| "?".to_owned());
    format!("{} {} - {}", game.date.format("%a %b %-d"), game.opponent_name, result)
}

fn format_next(game: &Game, opponent: &Team, show_time: bool) -> String {
    let when = match game.time.filter(|_| show_time) {
        Some(time) => format!("{} {}", game.date.format("%a %b %-d"), time.format("%-I:%M %p")),
        None => game.date.format("%a %b %-d").to_string(),
    };
    format!(
        "{when} {}: {} @ {}",
        game.opponent_name,
        opponent.record(),
        game.location
    )
}
