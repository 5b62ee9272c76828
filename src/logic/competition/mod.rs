// A tournament: its groups, its setup and the pipelines that turn them into a calendar.
pub mod draw;
pub mod head_to_head;
pub mod ranking;
pub mod round_robin;
pub mod schedule_generator;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::logic::{
    competition::{
        draw::{draw_groups, DrawRules},
        ranking::{rank_teams, Standings},
        round_robin::PointsRules,
        schedule_generator::{assign_dates, Calendar, GroupPairings, SlotWindow},
    },
    error::{ConfigurationError, SetupError},
    game::Match,
    team::{tally_results, Team},
    time::{iso_date_format, string_to_clock_time, string_to_weekday},
    types::{GroupLabel, TeamId, TournamentId, MAX_GROUPS, MAX_TEAMS},
};

// The teams of one group, in scheduling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: GroupLabel,
    pub teams: Vec<Team>,
}

impl Group {
    pub fn build(label: &str, teams: Vec<Team>) -> Self {
        Self { label: label.to_string(), teams }
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id.clone()).collect()
    }
}

// Split teams into groups by their label. Groups come out in label order, teams in input order.
pub fn group_teams(teams: &[Team]) -> Vec<Group> {
    let mut groups: BTreeMap<&str, Vec<Team>> = BTreeMap::new();
    for team in teams {
        groups.entry(team.group.as_str()).or_default().push(team.clone());
    }

    return groups.into_iter()
        .map(|(label, teams)| Group::build(label, teams))
        .collect();
}

/// Generate the full calendar of a tournament: pairings per group, then dates for all of them.
pub fn generate_calendar(tournament_id: &str, groups: &[Group], window: &SlotWindow, today: Date) -> Result<Calendar, ConfigurationError> {
    let group_pairings: Vec<GroupPairings> = groups.iter()
        .map(|g| GroupPairings::build(&g.label, &g.team_ids()))
        .collect();

    let calendar = assign_dates(tournament_id, &group_pairings, window, today)?;
    match calendar.date_span() {
        Some((first, last)) => tracing::info!(tournament_id, matches = calendar.matches.len(), %first, %last, "generated calendar"),
        None => tracing::info!(tournament_id, "generated an empty calendar"),
    }

    return Ok(calendar);
}

// Everything the configuration step collects, as read from a setup file.
#[derive(Debug, Clone)]
#[derive(Serialize, Deserialize)]
pub struct TournamentSetup {
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub name: String,
    // Defaults to the day the calendar is generated.
    #[serde(default, with = "iso_date_format::option")]
    pub start_date: Option<Date>,
    pub weekdays: Vec<String>,
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub points: PointsRules,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub draw: Option<DrawRules>,
}

// A checked setup, ready for the engine.
#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: Option<Date>,
    pub window: SlotWindow,
    pub points: PointsRules,
    pub groups: Vec<Group>,
}

impl TournamentSetup {
    // Check the setup and turn it into typed engine input.
    pub fn validate(&self) -> Result<Tournament, SetupError> {
        if self.teams.len() > MAX_TEAMS {
            return Err(SetupError::TooManyTeams { count: self.teams.len(), max: MAX_TEAMS });
        }

        let mut seen = HashSet::new();
        for team in self.teams.iter() {
            if !seen.insert(team.id.as_str()) {
                return Err(SetupError::DuplicateTeam(team.id.clone()));
            }
        }

        let mut weekdays = Vec::new();
        for name in self.weekdays.iter() {
            weekdays.push(string_to_weekday(name).ok_or_else(|| SetupError::UnknownWeekday(name.clone()))?);
        }

        let mut time_slots = Vec::new();
        for slot in self.time_slots.iter() {
            time_slots.push(string_to_clock_time(slot).map_err(|_| SetupError::InvalidTimeSlot(slot.clone()))?);
        }

        let window = SlotWindow::build(&weekdays, &time_slots)?;

        let teams = match &self.draw {
            Some(rules) => draw_groups(&self.teams, rules)?,
            None => {
                if let Some(team) = self.teams.iter().find(|t| t.group.trim().is_empty()) {
                    return Err(SetupError::MissingGroup(team.id.clone()));
                }
                self.teams.clone()
            },
        };

        let groups = group_teams(&teams);
        if groups.len() > MAX_GROUPS {
            return Err(SetupError::TooManyGroups { count: groups.len(), max: MAX_GROUPS });
        }

        return Ok(Tournament {
            id: self.tournament_id.clone(),
            name: self.name.clone(),
            start_date: self.start_date,
            window: window,
            points: self.points,
            groups: groups,
        });
    }
}

impl Tournament {
    // All teams, group by group.
    pub fn teams(&self) -> Vec<Team> {
        self.groups.iter().flat_map(|g| g.teams.iter().cloned()).collect()
    }

    // Generate the calendar. The setup's start date wins over `today` when it is given.
    pub fn generate_calendar(&self, today: Date) -> Result<Calendar, ConfigurationError> {
        generate_calendar(&self.id, &self.groups, &self.window, self.start_date.unwrap_or(today))
    }

    // Standings of the whole tournament from its results, scored with the setup's points rules.
    pub fn standings(&self, history: &[Match]) -> Standings {
        let teams = tally_results(&self.teams(), history, &self.points);
        return rank_teams(&teams, Some(history));
    }
}
