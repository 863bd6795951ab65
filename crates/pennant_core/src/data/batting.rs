//! Batting table ingestion (Lahman `Batting.csv`).

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use super::ParseStats;
use crate::error::DataError;
use crate::models::{BatterRates, LeagueId, TeamId};

/// One `Batting.csv` row; extra columns in the file are ignored.
///
/// Rows are one per player-stint, exactly as the source data stores them;
/// stints are never merged (roster selection picks whole rows).
#[derive(Debug, Deserialize)]
struct BattingRow {
    #[serde(rename = "playerID")]
    player_id: String,
    #[serde(rename = "yearID")]
    year_id: u32,
    #[serde(rename = "teamID")]
    team_id: String,
    #[serde(rename = "lgID")]
    league_id: String,
    #[serde(rename = "AB")]
    at_bats: u32,
    #[serde(rename = "H")]
    hits: u32,
    #[serde(rename = "2B")]
    doubles: u32,
    #[serde(rename = "3B")]
    triples: u32,
    #[serde(rename = "HR")]
    home_runs: u32,
    #[serde(rename = "BB")]
    walks: u32,
    #[serde(rename = "SO")]
    strikeouts: u32,
}

/// Load the batting table for one season year.
///
/// Derived counts: `1B = H - 2B - 3B - HR`, `O = AB - (H + SO)`,
/// `PA = AB + BB`. Rows with `PA = 0` carry no rate denominator and are
/// skipped. Individual rows that fail to parse are counted and warned
/// about; file-level failures are errors.
pub fn load_batting(path: &Path, year: u32) -> Result<(Vec<BatterRates>, ParseStats), DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rates = Vec::new();
    let mut stats = ParseStats::default();

    for row in reader.deserialize::<BattingRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                stats.parse_errors += 1;
                warn!(%err, "skipping unparseable batting row");
                continue;
            }
        };
        if row.year_id != year {
            continue;
        }
        let plate_appearances = row.at_bats + row.walks;
        if plate_appearances == 0 {
            stats.zero_denominator += 1;
            continue;
        }

        let singles = row.hits.saturating_sub(row.doubles + row.triples + row.home_runs);
        let other_outs = row.at_bats.saturating_sub(row.hits + row.strikeouts);
        let pa = f64::from(plate_appearances);
        rates.push(BatterRates {
            player_id: row.player_id,
            team_id: TeamId(row.team_id),
            league_id: LeagueId(row.league_id),
            plate_appearances,
            hits: f64::from(row.hits) / pa,
            single: f64::from(singles) / pa,
            double: f64::from(row.doubles) / pa,
            triple: f64::from(row.triples) / pa,
            home_run: f64::from(row.home_runs) / pa,
            walk: f64::from(row.walks) / pa,
            strikeout: f64::from(row.strikeouts) / pa,
            other_out: f64::from(other_outs) / pa,
        });
        stats.parsed += 1;
    }

    Ok((rates, stats))
}
