//! Season orchestration: two league round-robins, the championship
//! playoff, and the parallel multi-season batch API.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::league::run_league;
use super::playoff::run_playoff;
use super::standings::compute_standings;
use crate::data::LeagueData;
use crate::models::{GameLog, LeagueId, Standings, TeamId};

/// Season-shape knobs. Total regular-season games per team come out to
/// `series_len * (teams - 1) * 2` (one home series hosted against every
/// opponent, one visited).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Home games per opposing pair; at least 1 (validated at the JSON
    /// and CLI boundaries).
    pub series_len: u32,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig { series_len: 9 }
    }
}

/// Final standings of one league's round-robin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueOutcome {
    pub league: LeagueId,
    pub standings: Standings,
}

/// Everything a completed season produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub league_standings: Vec<LeagueOutcome>,
    pub playoff_log: GameLog,
    pub playoff_standings: Standings,
    pub champion: TeamId,
}

/// Run one complete season: each league's round-robin, standings, the
/// playoff between the two league leaders, and the playoff standings
/// whose top row is the champion.
///
/// The snapshot must carry exactly two leagues of at least two teams
/// each. `LeagueData::build` and the JSON API guarantee that shape;
/// `LeagueData::from_rosters` does not check league count, so callers
/// going through it supply two leagues themselves -- the assertion here
/// catches the mismatch up front. `series_len` must be at least 1
/// (boundary-validated), or no league would produce a single game.
pub fn run_season<R: Rng>(data: &LeagueData, config: &SeasonConfig, rng: &mut R) -> SeasonReport {
    assert_eq!(data.leagues().len(), 2, "run_season requires exactly two leagues");
    let mut league_standings = Vec::with_capacity(2);
    let mut leaders = Vec::with_capacity(2);
    for (league, teams) in data.leagues() {
        let log = run_league(data, teams, config.series_len, rng);
        let standings = compute_standings(&log);
        info!(%league, leader = %standings.leader().team, "league decided");
        leaders.push(standings.leader().clone());
        league_standings.push(LeagueOutcome { league: league.clone(), standings });
    }

    let playoff_log = run_playoff(data, &leaders[0], &leaders[1], rng);
    let playoff_standings = compute_standings(&playoff_log);
    let champion = playoff_standings.leader().team.clone();
    info!(%champion, "season complete");

    SeasonReport { league_standings, playoff_log, playoff_standings, champion }
}

/// Below this many seasons the rayon dispatch overhead is not worth it.
const PARALLEL_THRESHOLD: usize = 4;

/// Run `count` independent seasons and collect their reports in order.
///
/// Season `i` seeds its own ChaCha8 RNG from `base_seed + i`, so a whole
/// batch is reproducible from one seed and the reports are identical
/// whether the batch ran sequentially or across the rayon pool. Workers
/// share only the read-only snapshot; there is no other cross-season
/// state.
pub fn simulate_seasons(
    data: &LeagueData,
    config: &SeasonConfig,
    count: usize,
    base_seed: u64,
) -> Vec<SeasonReport> {
    let run_one = |season: usize| {
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(season as u64));
        run_season(data, config, &mut rng)
    };
    if count >= PARALLEL_THRESHOLD {
        (0..count).into_par_iter().map(run_one).collect()
    } else {
        (0..count).map(run_one).collect()
    }
}
