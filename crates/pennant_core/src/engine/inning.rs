//! Half-inning driver: repeated at-bats until three outs.

use rand::Rng;
use tracing::trace;

use super::at_bat::run_at_bat;
use super::bases::Bases;
use crate::models::{Roster, LINEUP_SIZE};

/// Result of one half-inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfInning {
    pub runs: u32,
    /// Lineup cursor for the offense's next half-inning; may be mid-order.
    pub next_batter: usize,
}

/// Run one half-inning of `offense` batting against `defense`'s starting
/// pitcher, leading off from lineup position `lead_off`.
///
/// The cursor wraps after the ninth spot and is returned rather than
/// reset: a team's lineup order is continuous across an entire game.
pub fn run_half_inning<R: Rng>(
    offense: &Roster,
    defense: &Roster,
    lead_off: usize,
    rng: &mut R,
) -> HalfInning {
    let pitcher = &defense.pitcher;
    let mut cursor = lead_off;
    let mut outs = 0u8;
    let mut bases = Bases::new();
    while outs < 3 {
        let batter = offense.batter(cursor);
        let outcome = run_at_bat(batter, pitcher, rng);
        let (advance, out) = outcome.effect();
        bases.play(advance);
        outs += out;
        cursor += 1;
        if cursor >= LINEUP_SIZE {
            cursor = 0;
        }
        trace!(%bases, outs, "after at-bat");
    }
    HalfInning { runs: bases.runs(), next_batter: cursor }
}
