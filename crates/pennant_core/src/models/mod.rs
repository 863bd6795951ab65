//! Core data model: rate rows, rosters, game logs, standings.

pub mod game_log;
pub mod rates;
pub mod roster;
pub mod standings;

pub use game_log::{GameLog, GameRecord, TeamSide};
pub use rates::{BatterRates, LeagueId, PitcherRates, TeamId};
pub use roster::{Roster, LINEUP_SIZE};
pub use standings::{Standings, StandingsRow};
