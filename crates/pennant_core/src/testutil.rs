//! Shared test fixtures: synthetic rate rows, rosters, and a scripted RNG
//! for replaying exact draw sequences through the engine.

use rand::RngCore;

use crate::data::LeagueData;
use crate::models::{BatterRates, LeagueId, PitcherRates, Roster, TeamId, LINEUP_SIZE};

/// A zero-rate batter line, customized by the closure.
pub fn batter(
    player: &str,
    team: &str,
    league: &str,
    customize: impl FnOnce(&mut BatterRates),
) -> BatterRates {
    let mut rates = BatterRates {
        player_id: player.to_string(),
        team_id: TeamId::from(team),
        league_id: LeagueId::from(league),
        plate_appearances: 500,
        hits: 0.0,
        single: 0.0,
        double: 0.0,
        triple: 0.0,
        home_run: 0.0,
        walk: 0.0,
        strikeout: 0.0,
        other_out: 0.0,
    };
    customize(&mut rates);
    rates
}

/// A zero-rate pitcher line, customized by the closure.
pub fn pitcher(
    player: &str,
    team: &str,
    league: &str,
    customize: impl FnOnce(&mut PitcherRates),
) -> PitcherRates {
    let mut rates = PitcherRates {
        player_id: player.to_string(),
        team_id: TeamId::from(team),
        league_id: LeagueId::from(league),
        batters_faced: 1000,
        hits: 0.0,
        home_run: 0.0,
        walk: 0.0,
        strikeout: 0.0,
        other_out: 0.0,
    };
    customize(&mut rates);
    rates
}

/// Roster whose nine batters and pitcher share one rate line.
pub fn uniform_roster(
    team: &str,
    league: &str,
    batter_rates: impl Fn(&mut BatterRates),
    pitcher_rates: impl Fn(&mut PitcherRates),
) -> Roster {
    let batting_order = (0..LINEUP_SIZE)
        .map(|spot| batter(&format!("{team}-bat{spot}"), team, league, &batter_rates))
        .collect();
    Roster {
        team_id: TeamId::from(team),
        batting_order,
        pitcher: pitcher(&format!("{team}-pit"), team, league, &pitcher_rates),
    }
}

/// Roster where every plate appearance is a strikeout, whoever pitches.
pub fn all_strikeout_roster(team: &str, league: &str) -> Roster {
    uniform_roster(team, league, |b| b.strikeout = 1.0, |p| p.strikeout = 1.0)
}

/// Roster with a plausible mixed rate line; games between two of these
/// terminate and score within a few innings' worth of draws.
pub fn mixed_roster(team: &str, league: &str) -> Roster {
    uniform_roster(
        team,
        league,
        |b| {
            b.hits = 0.25;
            b.single = 0.16;
            b.double = 0.05;
            b.triple = 0.01;
            b.home_run = 0.03;
            b.walk = 0.08;
            b.strikeout = 0.15;
            b.other_out = 0.52;
        },
        |p| {
            p.hits = 0.24;
            p.home_run = 0.02;
            p.walk = 0.07;
            p.strikeout = 0.16;
            p.other_out = 0.51;
        },
    )
}

/// Validated snapshot of mixed-rate rosters, one league per entry.
pub fn mixed_snapshot(leagues: &[(&str, &[&str])]) -> LeagueData {
    let league_rosters = leagues
        .iter()
        .map(|(league, teams)| {
            let rosters = teams.iter().map(|team| mixed_roster(team, league)).collect();
            (LeagueId::from(*league), rosters)
        })
        .collect();
    LeagueData::from_rosters(league_rosters).expect("test snapshot is well-formed")
}

/// RNG that replays a fixed sequence of uniform draws, then repeats it.
///
/// Encodes each `f64` so that `rng.gen::<f64>()` reproduces it exactly
/// (for draws with at most 53 significant bits).
pub struct ScriptedRng {
    words: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    pub fn from_draws(draws: &[f64]) -> Self {
        let words = draws
            .iter()
            .map(|&draw| ((draw * (1u64 << 53) as f64) as u64) << 11)
            .collect();
        ScriptedRng { words, pos: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn scripted_rng_replays_exact_draws() {
        let draws = [0.0, 0.25, 0.5, 0.9375];
        let mut rng = ScriptedRng::from_draws(&draws);
        for &expected in &draws {
            assert_eq!(rng.gen::<f64>(), expected);
        }
        // wraps around
        assert_eq!(rng.gen::<f64>(), 0.0);
    }
}
