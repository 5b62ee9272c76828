// Giving each pairing of the competition a date and a time of day.
use time::{Date, Time, Weekday};

use crate::logic::{
    competition::round_robin::{generate_pairings, Pairing},
    error::{ConfigurationError, Warning},
    game::Match,
    time::WeekdaySet,
    types::{GroupLabel, Matchday, TeamId},
};

// When matches can be played: enabled weekdays and times of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotWindow {
    weekdays: WeekdaySet,
    time_slots: Vec<Time>,  // Sorted and without duplicates.
}

impl SlotWindow {
    // Build the window. Both lists must have something in them.
    pub fn build(weekdays: &[Weekday], time_slots: &[Time]) -> Result<Self, ConfigurationError> {
        let weekdays = WeekdaySet::build(weekdays);
        if weekdays.is_empty() {
            return Err(ConfigurationError::NoWeekdays);
        }

        if time_slots.is_empty() {
            return Err(ConfigurationError::NoTimeSlots);
        }

        let mut time_slots = time_slots.to_vec();
        time_slots.sort();
        time_slots.dedup();

        return Ok(Self { weekdays, time_slots });
    }

    pub fn weekdays(&self) -> &WeekdaySet {
        &self.weekdays
    }

    pub fn time_slots(&self) -> &[Time] {
        &self.time_slots
    }
}

// The pairings of one group, ready for date assignment.
// Built from the team list only, so the team count and the pairings always agree.
#[derive(Debug, Clone)]
pub struct GroupPairings {
    group: GroupLabel,
    team_count: usize,
    pairings: Vec<Pairing>,
}

impl GroupPairings {
    pub fn build(group: &str, team_ids: &[TeamId]) -> Self {
        Self {
            group: group.to_string(),
            team_count: team_ids.len(),
            pairings: generate_pairings(group, team_ids),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }
}

// A dated calendar and whatever came up while making it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub matches: Vec<Match>,
    pub warnings: Vec<Warning>,
}

impl Calendar {
    // First and last match dates, if there are matches at all.
    pub fn date_span(&self) -> Option<(Date, Date)> {
        let first = self.matches.iter().map(|m| m.date).min()?;
        let last = self.matches.iter().map(|m| m.date).max()?;
        return Some((first, last));
    }
}

/// Give every pairing a date and a time of day.
///
/// Groups are handled in the given order. The first match date is the first enabled weekday on
/// or after `today`. Times of day are used in ascending order; once they run out the next
/// enabled weekday is taken and the times start over. The time cursor carries over from one
/// group to the next, so no two matches ever share a date and a time.
///
/// Each group gets one matchday label, counting up from 1. Groups with fewer than two teams are
/// skipped without using up a label.
pub fn assign_dates(tournament_id: &str, groups: &[GroupPairings], window: &SlotWindow, today: Date) -> Result<Calendar, ConfigurationError> {
    let mut cursor = window.weekdays.first_enabled_from(today)
        .ok_or(ConfigurationError::DateOutOfRange)?;

    let mut calendar = Calendar::default();
    let mut slot_index = 0;
    let mut matchday: Matchday = 1;

    for group in groups {
        if group.team_count < 2 {
            let warning = Warning::DegenerateGroup { group: group.group.clone(), team_count: group.team_count };
            tracing::warn!("{warning}");
            calendar.warnings.push(warning);
            continue;
        }

        for pairing in group.pairings.iter() {
            // Out of times for this day, move on to the next one.
            if slot_index == window.time_slots.len() {
                slot_index = 0;
                cursor = window.weekdays.next_enabled_after(cursor)
                    .ok_or(ConfigurationError::DateOutOfRange)?;
            }

            calendar.matches.push(Match::build(
                tournament_id,
                &pairing.home,
                &pairing.away,
                &pairing.group,
                matchday,
                cursor,
                window.time_slots[slot_index],
            ));
            slot_index += 1;
        }

        tracing::debug!(group = %group.group, matchday, games = group.pairings.len(), "assigned dates");
        matchday += 1;
    }

    return Ok(calendar);
}
