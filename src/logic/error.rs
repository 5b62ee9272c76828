// Errors and warnings of the engine.
use serde::Serialize;
use thiserror::Error;

use crate::logic::types::{GroupLabel, TeamId};

/// The slot assigner cannot work with what it was given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no weekdays are enabled for matches")]
    NoWeekdays,

    #[error("no times of day are available for matches")]
    NoTimeSlots,

    // Only reachable near the end of the representable calendar.
    #[error("ran out of calendar dates while scheduling")]
    DateOutOfRange,
}

/// Problems with a tournament setup file.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("could not read the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("time of day must be HH:MM, got {0:?}")]
    InvalidTimeSlot(String),

    #[error("a tournament can have at most {max} teams, got {count}")]
    TooManyTeams { count: usize, max: usize },

    #[error("a tournament can have at most {max} groups, got {count}")]
    TooManyGroups { count: usize, max: usize },

    #[error("cannot draw teams into {0} groups")]
    InvalidGroupCount(usize),

    #[error("team id {0:?} appears more than once")]
    DuplicateTeam(TeamId),

    #[error("team {0:?} has no group and no draw was requested")]
    MissingGroup(TeamId),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Why a head-to-head cluster stayed in its base order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieReason {
    ClusterTooLarge,
    NoFinishedMatch,
    Draw,
}

/// Non-fatal conditions. Reported next to the result, never instead of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    // A group with fewer than two teams; it gets no matches.
    DegenerateGroup { group: GroupLabel, team_count: usize },

    // Teams level on points that head-to-head could not separate.
    UnresolvedTie { team_ids: Vec<TeamId>, reason: TieReason },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::DegenerateGroup { group, team_count } => {
                write!(f, "group {group} has {team_count} team(s), no matches scheduled")
            }
            Warning::UnresolvedTie { team_ids, reason } => {
                write!(f, "tie between {} left in base order ({reason:?})", team_ids.join(", "))
            }
        }
    }
}
