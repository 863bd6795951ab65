//! Round-robin league schedule.

use rand::Rng;
use tracing::info;

use super::series::run_series;
use crate::data::LeagueData;
use crate::models::{GameLog, TeamId};

/// Run the full round-robin for one league: every ordered pair of distinct
/// teams plays one series with the first as host, in the slice's order, so
/// a league of T teams produces T*(T-1) series. Returns the accumulated
/// game log.
///
/// Preconditions (validated when the snapshot is built, not here): at
/// least 2 teams, every id present in the snapshot.
pub fn run_league<R: Rng>(
    data: &LeagueData,
    teams: &[TeamId],
    series_len: u32,
    rng: &mut R,
) -> GameLog {
    let mut log = GameLog::new();
    for home in teams {
        for away in teams {
            if home != away {
                run_series(data, home, away, series_len, &mut log, rng);
            }
        }
    }
    info!(teams = teams.len(), games = log.len(), "league round-robin complete");
    log
}
