use thiserror::Error;

use crate::models::{LeagueId, TeamId};

/// Failures raised while preparing rate tables and rosters, before any game
/// is run. The simulation core itself is total for well-formed inputs; every
/// malformed-data condition is rejected here at the boundary.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("team {team}: no pitching rows on record")]
    NoPitcher { team: TeamId },

    #[error("team {team}: pitcher {player} has no batting line")]
    MissingPitcherBattingLine { team: TeamId, player: String },

    #[error("team {team}: only {found} qualifying batters, need {need}")]
    NotEnoughBatters { team: TeamId, found: usize, need: usize },

    #[error("player {player}: {category} rate {value} outside [0,1]")]
    RateOutOfRange {
        player: String,
        category: &'static str,
        value: f64,
    },

    #[error("league {league}: only {found} teams, need at least 2")]
    NotEnoughTeams { league: LeagueId, found: usize },

    #[error("duplicate team id {team}")]
    DuplicateTeam { team: TeamId },

    #[error("series length must be at least 1")]
    ZeroSeriesLength,

    #[error("expected exactly 2 leagues, found {found}")]
    LeagueCount { found: usize },
}

/// Failures at the JSON seam. Malformed JSON, JSON of the wrong shape, and
/// rejected data each map to their own variant so hosts can tell them apart.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("malformed request JSON: {0}")]
    MalformedRequest(serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(serde_json::Error),

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ApiError::InvalidRequest(err)
        } else if err.is_syntax() || err.is_eof() {
            ApiError::MalformedRequest(err)
        } else {
            ApiError::Serialization(err)
        }
    }
}
