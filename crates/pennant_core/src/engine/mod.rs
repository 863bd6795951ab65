//! The stochastic game engine.
//!
//! Composition is strictly bottom-up: at-bat odds resolve onto the bases,
//! at-bats compose into half-innings, half-innings into games, games into
//! series, series into league round-robins, and the two league leaders meet
//! in the championship playoff. Every layer draws from one injected RNG, so
//! a season is fully reproducible from its seed.

pub mod at_bat;
pub mod bases;
pub mod game;
pub mod inning;
pub mod league;
pub mod playoff;
pub mod season;
pub mod series;
pub mod standings;

pub use at_bat::{run_at_bat, Outcome};
pub use bases::Bases;
pub use game::{run_game, GameResult};
pub use inning::{run_half_inning, HalfInning};
pub use league::run_league;
pub use playoff::run_playoff;
pub use season::{run_season, simulate_seasons, SeasonConfig, SeasonReport};
pub use series::run_series;
pub use standings::compute_standings;
