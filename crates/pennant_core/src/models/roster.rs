use serde::{Deserialize, Serialize};

use super::rates::{BatterRates, PitcherRates, TeamId};

/// Batting order length: 8 regular batters plus the starting pitcher.
pub const LINEUP_SIZE: usize = 9;

/// One team's simulation roster: a 9-man batting order and the starting
/// pitcher (the pitcher's own batting line fills the ninth spot).
///
/// Built once by the data layer before any simulation runs and shared
/// read-only across all concurrently simulated seasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub team_id: TeamId,
    /// Exactly [`LINEUP_SIZE`] entries, validated at construction.
    pub batting_order: Vec<BatterRates>,
    pub pitcher: PitcherRates,
}

impl Roster {
    /// Batter at a lineup cursor position (0..=8).
    pub fn batter(&self, cursor: usize) -> &BatterRates {
        &self.batting_order[cursor]
    }
}
