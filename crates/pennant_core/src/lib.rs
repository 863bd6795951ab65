//! # pennant_core - Stochastic Baseball Season Simulation Engine
//!
//! This library simulates complete baseball seasons from historical per-player
//! rate statistics: at-bats, innings, games, round-robin league play, and a
//! best-of-seven championship playoff between the two league leaders.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same season)
//! - At-bat odds derived from Lahman-format batting and pitching rates
//! - Embarrassingly parallel multi-season batches over a rayon pool
//! - JSON API for easy integration with host programs

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main API surface
pub use api::{simulate_season_json, SeasonRequest, SeasonResponse};
pub use data::{load_batting, load_pitching, LeagueData};
pub use engine::season::{run_season, simulate_seasons, SeasonConfig, SeasonReport};
pub use error::{ApiError, DataError};
pub use models::{
    BatterRates, GameLog, GameRecord, LeagueId, PitcherRates, Roster, Standings, StandingsRow,
    TeamId, TeamSide,
};
