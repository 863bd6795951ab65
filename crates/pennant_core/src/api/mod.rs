//! JSON API layer for host-program integration.
//!
//! String-in/string-out: hosts submit prepared rate tables plus a seed and
//! season configuration as JSON and receive structured season results.

pub mod json_api;

pub use json_api::{
    simulate_season_json, LeagueRequest, SeasonRequest, SeasonResponse, TeamRequest,
    SCHEMA_VERSION,
};
