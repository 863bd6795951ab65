//! Championship playoff between the two league leaders.

use rand::Rng;
use tracing::info;

use super::series::run_series;
use crate::data::LeagueData;
use crate::models::{GameLog, StandingsRow};

/// Home games granted to the home-field-advantage holder.
pub const PLAYOFF_HOME_GAMES: u32 = 4;
/// Road games for the advantage holder, hosted by the challenger.
pub const PLAYOFF_AWAY_GAMES: u32 = 3;

/// Run the best-of-seven playoff between two league leaders.
///
/// Home-field advantage goes to whichever row ranks first under the same
/// (wins, home wins, away wins, team id) descending order the standings
/// use. The advantage holder hosts a 4-game block, then the challenger
/// hosts a 3-game block -- an asymmetric home/away split, not an
/// alternating best-of-seven. All seven games are played; the champion is
/// whoever tops the standings computed over the returned log.
pub fn run_playoff<R: Rng>(
    data: &LeagueData,
    a: &StandingsRow,
    b: &StandingsRow,
    rng: &mut R,
) -> GameLog {
    let (host, challenger) = if a.rank_key() >= b.rank_key() { (a, b) } else { (b, a) };
    info!(home_advantage = %host.team, challenger = %challenger.team, "playoff");
    let mut log = GameLog::new();
    run_series(data, &host.team, &challenger.team, PLAYOFF_HOME_GAMES, &mut log, rng);
    run_series(data, &challenger.team, &host.team, PLAYOFF_AWAY_GAMES, &mut log, rng);
    log
}
