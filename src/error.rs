use std::ops::Range;
use thiserror::Error;

/// Failures of the data-reduction core. Provider and publishing failures are
/// reported by their own layers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("duplicate team abbreviation {abbreviation:?}")]
    DuplicateAbbreviation { abbreviation: String },

    #[error("cannot resolve games for {team}: {reason}")]
    UnresolvableGame { team: String, reason: String },

    #[error("team {abbreviation:?} is not in the league directory")]
    UnknownTeam { abbreviation: String },

    #[error("not enough {what} data for window {window:?}")]
    InsufficientData { what: &'static str, window: Range<usize> },
}
