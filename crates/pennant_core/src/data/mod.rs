//! Rate-table preparation: Lahman-format CSV ingestion, roster selection,
//! and the immutable league snapshot the engine consumes.
//!
//! All malformed-data rejection happens in this module, before any game is
//! run; the engine core trusts its inputs (documented preconditions).

pub mod batting;
pub mod league_data;
pub mod pitching;

pub use batting::load_batting;
pub use league_data::LeagueData;
pub use pitching::load_pitching;

/// Per-file row accounting returned alongside a loaded rate table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Rows converted into rate rows.
    pub parsed: usize,
    /// Rows that failed to deserialize (counted, warned, skipped).
    pub parse_errors: usize,
    /// Rows for the right year whose rate denominator was zero.
    pub zero_denominator: usize,
}
