//! Season simulation JSON API.

use serde::{Deserialize, Serialize};

use crate::data::LeagueData;
use crate::engine::season::{simulate_seasons, SeasonConfig, SeasonReport};
use crate::error::{ApiError, DataError};
use crate::models::{BatterRates, LeagueId, PitcherRates, Roster, TeamId};

/// Current request/response schema version.
pub const SCHEMA_VERSION: u8 = 1;

fn default_seasons() -> usize {
    1
}

fn default_series_len() -> u32 {
    9
}

/// Host request: prepared rate tables for exactly two leagues, plus seed
/// and season-shape configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Independent seasons to simulate.
    #[serde(default = "default_seasons")]
    pub seasons: usize,
    /// Home games per opposing pair in the regular season.
    #[serde(default = "default_series_len")]
    pub series_len: u32,
    pub leagues: Vec<LeagueRequest>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueRequest {
    pub name: String,
    pub teams: Vec<TeamRequest>,
}

/// One team's full prepared roster: the 9-man batting order and the
/// starting pitcher's rate line.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamRequest {
    pub id: TeamId,
    pub batters: Vec<BatterRates>,
    pub pitcher: PitcherRates,
}

/// Response: one champion per simulated season plus the full reports.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    pub champions: Vec<TeamId>,
    pub reports: Vec<SeasonReport>,
}

/// Main entry point for the JSON API: simulate seasons from a JSON request.
///
/// Applies the full boundary validation (exactly two leagues, at least two
/// teams per league, no duplicate team ids, 9 batters per team, all rates
/// within [0,1], a nonzero series length) before any game is run.
pub fn simulate_season_json(request_json: &str) -> Result<String, ApiError> {
    let request: SeasonRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(ApiError::UnsupportedSchemaVersion(request.schema_version));
    }
    // a zero-length series would leave every league log empty and the
    // season with no standings rows to pick a leader from
    if request.series_len == 0 {
        return Err(ApiError::Data(DataError::ZeroSeriesLength));
    }

    let data = build_snapshot(request.leagues)?;
    let config = SeasonConfig { series_len: request.series_len };
    let reports = simulate_seasons(&data, &config, request.seasons, request.seed);
    let champions = reports.iter().map(|r| r.champion.clone()).collect();

    let response =
        SeasonResponse { schema_version: SCHEMA_VERSION, champions, reports };
    Ok(serde_json::to_string(&response)?)
}

fn build_snapshot(leagues: Vec<LeagueRequest>) -> Result<LeagueData, ApiError> {
    if leagues.len() != 2 {
        return Err(ApiError::Data(DataError::LeagueCount { found: leagues.len() }));
    }
    let league_rosters = leagues
        .into_iter()
        .map(|league| {
            let rosters: Vec<Roster> = league
                .teams
                .into_iter()
                .map(|team| Roster {
                    team_id: team.id,
                    batting_order: team.batters,
                    pitcher: team.pitcher,
                })
                .collect();
            (LeagueId(league.name), rosters)
        })
        .collect::<Vec<_>>();
    // from_rosters re-checks team counts and every rate at the boundary
    Ok(LeagueData::from_rosters(league_rosters)?)
}
