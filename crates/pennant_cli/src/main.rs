//! Pennant CLI
//!
//! Loads Lahman-format batting and pitching CSVs, builds the immutable
//! league snapshot, and simulates complete seasons -- reproducibly from a
//! base seed, in parallel across a rayon pool when more than a few are
//! requested.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use pennant_core::{load_batting, load_pitching, simulate_seasons, LeagueData, SeasonConfig, TeamId};

#[derive(Parser)]
#[command(name = "pennant")]
#[command(about = "Simulate baseball seasons from historical rate statistics", long_about = None)]
struct Cli {
    /// Lahman-format Batting.csv path
    #[arg(long)]
    batting: PathBuf,

    /// Lahman-format Pitching.csv path
    #[arg(long)]
    pitching: PathBuf,

    /// Season year to draw player rates from
    #[arg(long, default_value_t = 1968)]
    year: u32,

    /// Home games per opposing pair (total games per team =
    /// 2 * series-len * (teams - 1)); must be at least 1
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(1..))]
    series_len: u32,

    /// Independent seasons to simulate
    #[arg(long, default_value_t = 1)]
    seasons: usize,

    /// Worker threads for the season pool (default: one per core)
    #[arg(long)]
    workers: Option<usize>,

    /// Base RNG seed; season i runs on seed + i
    #[arg(long, default_value_t = 0xD1CE)]
    seed: u64,

    /// Print each season's full league standings tables
    #[arg(long)]
    standings: bool,

    /// Also write all season reports to this path as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let (batting, batting_stats) = load_batting(&cli.batting, cli.year)
        .with_context(|| format!("loading batting table {}", cli.batting.display()))?;
    info!(
        parsed = batting_stats.parsed,
        parse_errors = batting_stats.parse_errors,
        zero_denominator = batting_stats.zero_denominator,
        "batting table loaded"
    );
    let (pitching, pitching_stats) = load_pitching(&cli.pitching, cli.year)
        .with_context(|| format!("loading pitching table {}", cli.pitching.display()))?;
    info!(
        parsed = pitching_stats.parsed,
        parse_errors = pitching_stats.parse_errors,
        zero_denominator = pitching_stats.zero_denominator,
        "pitching table loaded"
    );

    let data = LeagueData::build(&batting, &pitching)
        .with_context(|| format!("building league snapshot for {}", cli.year))?;
    info!(teams = data.team_count(), year = cli.year, "snapshot ready");

    if let Some(workers) = cli.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .context("configuring worker pool")?;
    }

    let config = SeasonConfig { series_len: cli.series_len };
    let start = Instant::now();
    let reports = simulate_seasons(&data, &config, cli.seasons, cli.seed);
    let elapsed = start.elapsed();

    for (i, report) in reports.iter().enumerate() {
        if cli.standings {
            for outcome in &report.league_standings {
                println!("season {} - {} standings", i + 1, outcome.league);
                println!("{}", outcome.standings);
            }
        }
        println!("season {:>4}: champion {}", i + 1, report.champion);
    }

    let mut tally: HashMap<&TeamId, usize> = HashMap::new();
    for report in &reports {
        *tally.entry(&report.champion).or_default() += 1;
    }
    let mut tally: Vec<(&TeamId, usize)> = tally.into_iter().collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(a.0)));
    println!("\nchampions across {} seasons:", reports.len());
    for (team, count) in &tally {
        println!("{:>4}x {}", count, team);
    }
    println!("elapsed: {:.2?}", elapsed);

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&reports).context("serializing reports")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing reports to {}", path.display()))?;
        info!(path = %path.display(), "reports written");
    }

    Ok(())
}
