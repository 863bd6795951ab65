//! Single-game driver: alternating half-innings until a winner exists.

use rand::Rng;
use tracing::debug;

use super::inning::run_half_inning;
use crate::models::{Roster, TeamSide};

/// Final score of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub home_score: u32,
    pub away_score: u32,
    pub winner: TeamSide,
    /// Completed innings; at least 9, more if extras were needed.
    pub innings: u32,
}

/// Play one game between two rosters.
///
/// Innings run until at least nine are complete and the score is not
/// level; extra innings continue indefinitely until the tie breaks, with
/// no iteration cap. The bottom half is always played in full, even when
/// the home side already leads. Each side's lineup cursor starts at the
/// top of the order and persists across innings independently.
pub fn run_game<R: Rng>(home: &Roster, away: &Roster, rng: &mut R) -> GameResult {
    let mut home_score = 0u32;
    let mut away_score = 0u32;
    let mut inning = 1u32;
    let mut home_next = 0usize;
    let mut away_next = 0usize;
    while inning <= 9 || home_score == away_score {
        debug!(inning, "top");
        let top = run_half_inning(away, home, away_next, rng);
        away_score += top.runs;
        away_next = top.next_batter;
        debug!(inning, "bottom");
        let bottom = run_half_inning(home, away, home_next, rng);
        home_score += bottom.runs;
        home_next = bottom.next_batter;
        inning += 1;
    }
    // a tie is structurally impossible here, so strict less-than suffices
    let winner = if home_score < away_score { TeamSide::Away } else { TeamSide::Home };
    GameResult { home_score, away_score, winner, innings: inning - 1 }
}
