//! League-relative rate rows for batters and pitchers.
//!
//! Rates are fractions of plate appearances (batters) or batters faced
//! (pitchers), prepared once by the data layer and shared read-only across
//! every simulated season.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team identifier (Lahman `teamID`, e.g. "DET").
///
/// Ordered and hashable: it keys the roster index and serves as the final
/// tie-break in standings, so ranking is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        TeamId(id.to_string())
    }
}

/// League identifier (Lahman `lgID`, e.g. "NL" / "AL").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeagueId(pub String);

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeagueId {
    fn from(id: &str) -> Self {
        LeagueId(id.to_string())
    }
}

/// One batter's season line as fractions of plate appearances.
///
/// The six outcome categories (single, double, triple, home run, walk,
/// strikeout) plus `other_out` partition a plate appearance by construction
/// from the source counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterRates {
    pub player_id: String,
    pub team_id: TeamId,
    pub league_id: LeagueId,
    /// Rate denominator: AB + BB.
    pub plate_appearances: u32,
    /// All hit types combined.
    pub hits: f64,
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    pub home_run: f64,
    pub walk: f64,
    pub strikeout: f64,
    pub other_out: f64,
}

impl BatterRates {
    /// Rate categories checked by boundary validation, with display names.
    pub fn rate_categories(&self) -> [(&'static str, f64); 8] {
        [
            ("hits", self.hits),
            ("single", self.single),
            ("double", self.double),
            ("triple", self.triple),
            ("home_run", self.home_run),
            ("walk", self.walk),
            ("strikeout", self.strikeout),
            ("other_out", self.other_out),
        ]
    }
}

/// One pitcher's season line as fractions of batters faced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitcherRates {
    pub player_id: String,
    pub team_id: TeamId,
    pub league_id: LeagueId,
    /// Rate denominator: BFP.
    pub batters_faced: u32,
    /// All hit types allowed, combined.
    pub hits: f64,
    pub home_run: f64,
    pub walk: f64,
    pub strikeout: f64,
    pub other_out: f64,
}

impl PitcherRates {
    pub fn rate_categories(&self) -> [(&'static str, f64); 5] {
        [
            ("hits", self.hits),
            ("home_run", self.home_run),
            ("walk", self.walk),
            ("strikeout", self.strikeout),
            ("other_out", self.other_out),
        ]
    }
}
