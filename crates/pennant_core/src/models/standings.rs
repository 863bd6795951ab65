use serde::{Deserialize, Serialize};
use std::fmt;

use super::rates::TeamId;

/// One team's win/loss record with home/away splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: TeamId,
    pub wins: u32,
    pub losses: u32,
    pub home_wins: u32,
    pub home_losses: u32,
    pub away_wins: u32,
    pub away_losses: u32,
}

impl StandingsRow {
    /// Ranking key: standings sort descending on (wins, home wins, away
    /// wins, team id). Team id last makes the order total, so no tie ever
    /// remains unresolved. The same key decides playoff home-field
    /// advantage.
    pub fn rank_key(&self) -> (u32, u32, u32, &TeamId) {
        (self.wins, self.home_wins, self.away_wins, &self.team)
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}

/// A ranked standings table, best team first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
}

impl Standings {
    /// Top-ranked team.
    ///
    /// The rows come pre-sorted from the standings calculator; callers pass
    /// logs with at least one game (validated upstream).
    pub fn leader(&self) -> &StandingsRow {
        &self.rows[0]
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<6} {:>4} {:>4} {:>8} {:>8}", "TEAM", "W", "L", "HOME", "AWAY")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<6} {:>4} {:>4} {:>4}-{:<3} {:>4}-{:<3}",
                row.team,
                row.wins,
                row.losses,
                row.home_wins,
                row.home_losses,
                row.away_wins,
                row.away_losses
            )?;
        }
        Ok(())
    }
}
