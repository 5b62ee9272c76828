// A single match of the calendar, scheduled or played.
use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::logic::{competition::round_robin::PointsRules, team::TeamTally, time::{clock_time_format, iso_date_format}, types::{GroupLabel, Matchday, TeamId, TournamentId}};

// Where a match is in its life. Results only exist once the match is finished.
#[derive(Debug, Default, Clone, Copy)]
#[derive(PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finished { home_goals: u32, away_goals: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct Match {
    pub tournament_id: TournamentId,
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub group: GroupLabel,
    pub matchday: Matchday,
    #[serde(with = "iso_date_format")]
    pub date: Date,
    #[serde(with = "clock_time_format")]
    pub time: Time,
    #[serde(flatten)]
    pub status: MatchStatus,
}

// Basics.
impl Match {
    pub fn build(tournament_id: &str, home_id: &str, away_id: &str, group: &str, matchday: Matchday, date: Date, time: Time) -> Self {
        Self {
            tournament_id: tournament_id.to_string(),
            home_id: home_id.to_string(),
            away_id: away_id.to_string(),
            group: group.to_string(),
            matchday: matchday,
            date: date,
            time: time,
            status: MatchStatus::Scheduled,
        }
    }
}

// Functional
impl Match {
    pub fn is_finished(&self) -> bool {
        matches!(self.status, MatchStatus::Finished { .. })
    }

    // Check if the match is between these two teams, in either order.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.home_id == a && self.away_id == b) ||
        (self.home_id == b && self.away_id == a)
    }

    // Goals scored by the given team, if the match is finished and the team played in it.
    pub fn goals_of(&self, team_id: &str) -> Option<u32> {
        let MatchStatus::Finished { home_goals, away_goals } = self.status else { return None };

        if self.home_id == team_id { return Some(home_goals); }
        if self.away_id == team_id { return Some(away_goals); }
        return None;
    }

    // Get what the match gives to the home and the away team. None until finished.
    pub fn tallies(&self, rules: &PointsRules) -> Option<(TeamTally, TeamTally)> {
        let MatchStatus::Finished { home_goals, away_goals } = self.status else { return None };

        let mut home = TeamTally { goals_for: home_goals, goals_against: away_goals, ..Default::default() };
        let mut away = TeamTally { goals_for: away_goals, goals_against: home_goals, ..Default::default() };

        if home_goals > away_goals {
            home.points = rules.win;
            away.points = rules.loss;
        }
        else if away_goals > home_goals {
            away.points = rules.win;
            home.points = rules.loss;
        }
        else {
            home.points = rules.draw;
            away.points = rules.draw;
        }

        return Some((home, away));
    }
}
