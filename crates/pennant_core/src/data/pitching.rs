//! Pitching table ingestion (Lahman `Pitching.csv`).

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use super::ParseStats;
use crate::error::DataError;
use crate::models::{LeagueId, PitcherRates, TeamId};

/// One `Pitching.csv` row; extra columns in the file are ignored.
#[derive(Debug, Deserialize)]
struct PitchingRow {
    #[serde(rename = "playerID")]
    player_id: String,
    #[serde(rename = "yearID")]
    year_id: u32,
    #[serde(rename = "teamID")]
    team_id: String,
    #[serde(rename = "lgID")]
    league_id: String,
    #[serde(rename = "H")]
    hits: u32,
    #[serde(rename = "HR")]
    home_runs: u32,
    #[serde(rename = "BB")]
    walks: u32,
    #[serde(rename = "SO")]
    strikeouts: u32,
    #[serde(rename = "BFP")]
    batters_faced: u32,
}

/// Load the pitching table for one season year.
///
/// Derived count: `O = BFP - (H + BB + SO)`. Rows with `BFP = 0` carry no
/// rate denominator and are skipped. Row-level parse failures are counted
/// and warned about; file-level failures are errors.
pub fn load_pitching(path: &Path, year: u32) -> Result<(Vec<PitcherRates>, ParseStats), DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rates = Vec::new();
    let mut stats = ParseStats::default();

    for row in reader.deserialize::<PitchingRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                stats.parse_errors += 1;
                warn!(%err, "skipping unparseable pitching row");
                continue;
            }
        };
        if row.year_id != year {
            continue;
        }
        if row.batters_faced == 0 {
            stats.zero_denominator += 1;
            continue;
        }

        let other_outs =
            row.batters_faced.saturating_sub(row.hits + row.walks + row.strikeouts);
        let bfp = f64::from(row.batters_faced);
        rates.push(PitcherRates {
            player_id: row.player_id,
            team_id: TeamId(row.team_id),
            league_id: LeagueId(row.league_id),
            batters_faced: row.batters_faced,
            hits: f64::from(row.hits) / bfp,
            home_run: f64::from(row.home_runs) / bfp,
            walk: f64::from(row.walks) / bfp,
            strikeout: f64::from(row.strikeouts) / bfp,
            other_out: f64::from(other_outs) / bfp,
        });
        stats.parsed += 1;
    }

    Ok((rates, stats))
}
