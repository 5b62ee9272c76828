// Functions for ranking teams into a standings table.
use std::cmp::Ordering;

use ordinal::ToOrdinal;
use serde::Serialize;

use crate::logic::{competition::head_to_head::resolve_ties, error::Warning, game::Match, team::Team};

// What ranking criteria the standings use.
#[derive(Debug, Serialize)]
#[derive(Eq, Hash, PartialEq)]
#[derive(Clone, Copy)]
pub enum RankCriteria {
    Points,
    GoalDifference,
    GoalsScored,
    FairPlay,   // Lower is better.

    // Last resort, never gives Equal for two different teams.
    Name,
}

// The official order. Head-to-head is applied afterwards, see rank_teams.
pub const RANK_CRITERIA: [RankCriteria; 5] = [
    RankCriteria::Points,
    RankCriteria::GoalDifference,
    RankCriteria::GoalsScored,
    RankCriteria::FairPlay,
    RankCriteria::Name,
];

type CmpFunc = fn (&Team, &Team) -> Ordering;

// Compare functions here.

fn compare_points(a: &Team, b: &Team) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_goal_difference(a: &Team, b: &Team) -> Ordering {
    b.goal_difference.cmp(&a.goal_difference)
}

fn compare_goals_scored(a: &Team, b: &Team) -> Ordering {
    b.goals_for.cmp(&a.goals_for)
}

fn compare_fair_play(a: &Team, b: &Team) -> Ordering {
    a.fair_play_score().cmp(&b.fair_play_score())
}

// Case-insensitive. Identical names fall back to the id so the order stays total.
fn compare_name(a: &Team, b: &Team) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

impl RankCriteria {
    // Get the compare function of the criterium.
    fn sort_function(&self) -> CmpFunc {
        match self {
            RankCriteria::Points => compare_points,
            RankCriteria::GoalDifference => compare_goal_difference,
            RankCriteria::GoalsScored => compare_goals_scored,
            RankCriteria::FairPlay => compare_fair_play,
            RankCriteria::Name => compare_name,
        }
    }
}

// Sort teams by the given criteria, applied one after another until one tells them apart.
pub fn sort_teams(teams: &mut [Team], criteria: &[RankCriteria]) {
    teams.sort_by(|a, b| {
        let mut order = Ordering::Equal;
        for criterium in criteria.iter() {
            order = criterium.sort_function()(a, b);

            if order.is_ne() { break; }
        }
        order
    });
}

// A ranked table, best first, and the ties that could not be broken by head-to-head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub teams: Vec<Team>,
    pub warnings: Vec<Warning>,
}

/// Get the teams in the order of betterhood.
///
/// The base order comes from [`RANK_CRITERIA`]. With a match history, teams level on points are
/// then reordered by their direct result (two-team clusters only). The input is not modified.
pub fn rank_teams(teams: &[Team], history: Option<&[Match]>) -> Standings {
    let mut base = teams.to_vec();
    sort_teams(&mut base, &RANK_CRITERIA);

    let standings = match history {
        Some(matches) => {
            let (teams, warnings) = resolve_ties(base, matches);
            Standings { teams, warnings }
        },
        None => Standings { teams: base, warnings: Vec::new() },
    };

    tracing::debug!(teams = standings.teams.len(), unresolved = standings.warnings.len(), "ranked teams");
    return standings;
}

// Get a printable standings table.
pub fn render_standings(standings: &Standings) -> String {
    let mut s = format!("{:<6}{:<24}{:>5}{:>5}{:>5}{:>5}{:>5}", "Rank", "Team", "Pts", "GD", "GF", "GA", "FP");
    for (i, team) in standings.teams.iter().enumerate() {
        s += &format!("\n{:<6}{:<24}{:>5}{:>5}{:>5}{:>5}{:>5}",
            (i + 1).to_ordinal_string(),
            team.name,
            team.points,
            team.goal_difference,
            team.goals_for,
            team.goals_against,
            team.fair_play_score(),
        );
    }

    return s;
}
