//! Roster selection and the immutable league snapshot.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::error::DataError;
use crate::models::{
    BatterRates, LeagueId, PitcherRates, Roster, TeamId, LINEUP_SIZE,
};

/// The process-wide snapshot every season worker reads from: one roster
/// per team, plus the per-league team lists in source encounter order so
/// schedules and standings iteration reproduce across runs.
///
/// Built once before worker dispatch; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LeagueData {
    rosters: FxHashMap<TeamId, Roster>,
    leagues: Vec<(LeagueId, Vec<TeamId>)>,
}

impl LeagueData {
    /// Build the snapshot from prepared rate tables.
    ///
    /// Per team (in batting-table encounter order): the starting pitcher
    /// is the pitching row with the most batters faced; the batting order
    /// is the 8 rows with the most plate appearances followed by the
    /// pitcher's own batting line in the ninth spot. Selection picks whole
    /// rows; stints are never merged.
    ///
    /// Rejected here, before any game is run: a team with no pitching
    /// rows, a pitcher with no batting line, fewer than 8 qualifying
    /// batters, any rate outside [0,1], a league with fewer than 2 teams,
    /// and anything but exactly 2 leagues.
    pub fn build(
        batting: &[BatterRates],
        pitching: &[PitcherRates],
    ) -> Result<Self, DataError> {
        let mut team_order: Vec<TeamId> = Vec::new();
        let mut team_league: FxHashMap<TeamId, LeagueId> = FxHashMap::default();
        for row in batting {
            if !team_order.contains(&row.team_id) {
                team_order.push(row.team_id.clone());
                team_league.insert(row.team_id.clone(), row.league_id.clone());
            }
        }

        let mut rosters = FxHashMap::default();
        let mut leagues: Vec<(LeagueId, Vec<TeamId>)> = Vec::new();
        for team in &team_order {
            let roster = select_roster(team, batting, pitching)?;
            validate_roster(&roster)?;
            debug!(%team, pitcher = %roster.pitcher.player_id, "roster selected");
            rosters.insert(team.clone(), roster);

            let league = &team_league[team];
            match leagues.iter_mut().find(|(id, _)| id == league) {
                Some((_, teams)) => teams.push(team.clone()),
                None => leagues.push((league.clone(), vec![team.clone()])),
            }
        }

        if leagues.len() != 2 {
            return Err(DataError::LeagueCount { found: leagues.len() });
        }
        for (league, teams) in &leagues {
            if teams.len() < 2 {
                return Err(DataError::NotEnoughTeams {
                    league: league.clone(),
                    found: teams.len(),
                });
            }
        }

        info!(teams = team_order.len(), "league snapshot built");
        Ok(LeagueData { rosters, leagues })
    }

    /// Build the snapshot from already-selected rosters (the JSON API
    /// path). Each roster must carry exactly 9 batters with in-range
    /// rates; each league at least 2 teams; no team id may appear twice,
    /// within or across leagues. The season runner additionally requires
    /// exactly two leagues, which the API checks at its seam.
    pub fn from_rosters(
        league_rosters: Vec<(LeagueId, Vec<Roster>)>,
    ) -> Result<Self, DataError> {
        let mut rosters = FxHashMap::default();
        let mut leagues = Vec::with_capacity(league_rosters.len());
        for (league, members) in league_rosters {
            if members.len() < 2 {
                return Err(DataError::NotEnoughTeams {
                    league,
                    found: members.len(),
                });
            }
            let mut teams = Vec::with_capacity(members.len());
            for roster in members {
                validate_roster(&roster)?;
                let team = roster.team_id.clone();
                if rosters.insert(team.clone(), roster).is_some() {
                    return Err(DataError::DuplicateTeam { team });
                }
                teams.push(team);
            }
            leagues.push((league, teams));
        }
        Ok(LeagueData { rosters, leagues })
    }

    /// Roster for a team id present in the snapshot. Team ids are
    /// validated at construction; looking up a foreign id is a caller bug.
    pub fn roster(&self, team: &TeamId) -> &Roster {
        &self.rosters[team]
    }

    /// Leagues and their team ids, in source encounter order.
    pub fn leagues(&self) -> &[(LeagueId, Vec<TeamId>)] {
        &self.leagues
    }

    pub fn team_count(&self) -> usize {
        self.rosters.len()
    }
}

fn select_roster(
    team: &TeamId,
    batting: &[BatterRates],
    pitching: &[PitcherRates],
) -> Result<Roster, DataError> {
    // most-used pitcher by batters faced; first row wins ties, matching
    // the source tables' order
    let mut pitcher: Option<&PitcherRates> = None;
    for row in pitching.iter().filter(|p| p.team_id == *team) {
        match pitcher {
            Some(best) if row.batters_faced <= best.batters_faced => {}
            _ => pitcher = Some(row),
        }
    }
    let pitcher = pitcher
        .ok_or_else(|| DataError::NoPitcher { team: team.clone() })?
        .clone();

    let mut team_batters: Vec<&BatterRates> =
        batting.iter().filter(|b| b.team_id == *team).collect();
    // stable sort keeps encounter order among equal plate-appearance counts
    team_batters.sort_by(|a, b| b.plate_appearances.cmp(&a.plate_appearances));

    let pitcher_line = team_batters
        .iter()
        .find(|b| b.player_id == pitcher.player_id)
        .copied()
        .ok_or_else(|| DataError::MissingPitcherBattingLine {
            team: team.clone(),
            player: pitcher.player_id.clone(),
        })?
        .clone();

    if team_batters.len() < LINEUP_SIZE - 1 {
        return Err(DataError::NotEnoughBatters {
            team: team.clone(),
            found: team_batters.len(),
            need: LINEUP_SIZE - 1,
        });
    }

    let mut batting_order: Vec<BatterRates> =
        team_batters[..LINEUP_SIZE - 1].iter().map(|b| (*b).clone()).collect();
    batting_order.push(pitcher_line);

    Ok(Roster { team_id: team.clone(), batting_order, pitcher })
}

/// Boundary validation: exactly 9 batters and every rate within [0,1].
pub(crate) fn validate_roster(roster: &Roster) -> Result<(), DataError> {
    if roster.batting_order.len() != LINEUP_SIZE {
        return Err(DataError::NotEnoughBatters {
            team: roster.team_id.clone(),
            found: roster.batting_order.len(),
            need: LINEUP_SIZE,
        });
    }
    for batter in &roster.batting_order {
        for (category, value) in batter.rate_categories() {
            if !(0.0..=1.0).contains(&value) {
                return Err(DataError::RateOutOfRange {
                    player: batter.player_id.clone(),
                    category,
                    value,
                });
            }
        }
    }
    for (category, value) in roster.pitcher.rate_categories() {
        if !(0.0..=1.0).contains(&value) {
            return Err(DataError::RateOutOfRange {
                player: roster.pitcher.player_id.clone(),
                category,
                value,
            });
        }
    }
    Ok(())
}
