//! Fixed-length series between one host and one visitor.

use rand::Rng;
use tracing::debug;

use super::game::run_game;
use crate::data::LeagueData;
use crate::models::{GameLog, GameRecord, TeamId};

/// Play `series_len` games with `home` hosting `away` for every game (home
/// field does not alternate within a series), appending one record per game
/// to the shared log. Pure recording; no aggregation happens here.
///
/// Both team ids must be present in the snapshot (validated when the
/// snapshot is built).
pub fn run_series<R: Rng>(
    data: &LeagueData,
    home: &TeamId,
    away: &TeamId,
    series_len: u32,
    log: &mut GameLog,
    rng: &mut R,
) {
    let home_roster = data.roster(home);
    let away_roster = data.roster(away);
    for game_no in 1..=series_len {
        debug!(%away, %home, game_no, "series game");
        let result = run_game(home_roster, away_roster, rng);
        debug!(home_score = result.home_score, away_score = result.away_score, "final");
        log.push(GameRecord {
            home_team: home.clone(),
            away_team: away.clone(),
            home_score: result.home_score,
            away_score: result.away_score,
            winner: result.winner,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::mixed_snapshot;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn series_records_one_game_per_slot_with_fixed_home_field() {
        let data = mixed_snapshot(&[("NL", &["SLN", "CHN"])]);
        let mut log = GameLog::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let host = TeamId::from("SLN");
        let visitor = TeamId::from("CHN");
        run_series(&data, &host, &visitor, 5, &mut log, &mut rng);
        assert_eq!(log.len(), 5);
        for game in log.iter() {
            assert_eq!(game.home_team, host);
            assert_eq!(game.away_team, visitor);
        }
    }
}
