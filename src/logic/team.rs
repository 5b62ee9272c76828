// Team data and the counters used by the standings.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::{competition::round_robin::PointsRules, game::Match, types::{GroupLabel, TeamId}};

#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq, Eq)]
#[derive(Default, Clone)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub short_name: String,

    // Assigned before scheduling, either by hand or by the draw.
    #[serde(default)]
    pub group: GroupLabel,

    // Standings counters. The engine reads these, it never changes the caller's copy.
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub blue_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
}

// Basics.
impl Team {
    pub fn build(id: &str, name: &str, group: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            group: group.to_string(),
            ..Default::default()
        }
    }

    // Builder-style setters, mostly for callers assembling counters by hand.
    pub fn with_record(mut self, points: u32, goals_for: u32, goals_against: u32) -> Self {
        self.points = points;
        self.goals_for = goals_for;
        self.goals_against = goals_against;
        self.goal_difference = goal_difference(goals_for, goals_against);
        return self;
    }

    pub fn with_cards(mut self, yellow: u32, blue: u32, red: u32) -> Self {
        self.yellow_cards = yellow;
        self.blue_cards = blue;
        self.red_cards = red;
        return self;
    }
}

// Functional
impl Team {
    // Disciplinary penalty. Lower is better.
    // Widened so that no card count read from a file can overflow it.
    pub fn fair_play_score(&self) -> u64 {
        u64::from(self.red_cards) * 3 + u64::from(self.blue_cards) * 2 + u64::from(self.yellow_cards)
    }

    // Add the outcome of one game to the counters.
    pub fn update(&mut self, tally: &TeamTally) {
        self.points = self.points.saturating_add(tally.points);
        self.goals_for = self.goals_for.saturating_add(tally.goals_for);
        self.goals_against = self.goals_against.saturating_add(tally.goals_against);
        self.goal_difference = goal_difference(self.goals_for, self.goals_against);
    }

    // Clear everything the tally recomputes. Cards stay, games do not carry them.
    fn reset_results(&mut self) {
        self.points = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.goal_difference = 0;
    }
}

// Goals for minus goals against, clamped to the i32 range.
fn goal_difference(goals_for: u32, goals_against: u32) -> i32 {
    let difference = i64::from(goals_for) - i64::from(goals_against);
    return difference.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
}

// What one finished game gives one team.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TeamTally {
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

// Recompute points and goals of every team from the finished matches.
// Returns new team records in the input order.
pub fn tally_results(teams: &[Team], matches: &[Match], rules: &PointsRules) -> Vec<Team> {
    let mut tallied: Vec<Team> = teams.to_vec();
    for team in tallied.iter_mut() {
        team.reset_results();
    }

    let index: HashMap<TeamId, usize> = tallied.iter()
        .enumerate()
        .map(|(i, team)| (team.id.clone(), i))
        .collect();

    let mut counted = 0;
    for game in matches {
        let Some((home_tally, away_tally)) = game.tallies(rules) else { continue };

        match (index.get(&game.home_id), index.get(&game.away_id)) {
            (Some(&home), Some(&away)) => {
                tallied[home].update(&home_tally);
                tallied[away].update(&away_tally);
                counted += 1;
            },
            _ => tracing::debug!(home = %game.home_id, away = %game.away_id, "skipping result of an unknown team"),
        }
    }

    tracing::debug!(teams = tallied.len(), games = counted, "tallied results");
    return tallied;
}
