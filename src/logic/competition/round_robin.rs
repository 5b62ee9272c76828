// The round robin format: pairing generation and points per result.
use serde::{Deserialize, Serialize};

use crate::logic::types::{GroupLabel, TeamId};

// Points awarded per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct PointsRules {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsRules {
    fn default() -> Self {
        Self { win: 3, draw: 1, loss: 0 }
    }
}

impl PointsRules {
    pub fn build(win: u32, draw: u32, loss: u32) -> Self {
        Self { win, draw, loss }
    }
}

/// One not-yet-dated game of a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub group: GroupLabel,
    pub home: TeamId,
    pub away: TeamId,
    // Zero-based round of the group's own rotation.
    pub round: usize,
}

/// Generate every game of a single round robin with the circle method.
///
/// The output is fully determined by the order of `team_ids`: round-major, then slot-major.
/// Shuffling the input gives a different, equally valid schedule, so callers that want a
/// random-looking calendar should shuffle (with a seed) before calling this.
///
/// With an odd number of teams a bye is appended as the last, fixed team. Games against
/// the bye are never emitted. Fewer than two teams gives no games.
pub fn generate_pairings(group: &str, team_ids: &[TeamId]) -> Vec<Pairing> {
    let n = team_ids.len();
    if n < 2 { return Vec::new(); }

    // None is the bye.
    let mut slots: Vec<Option<&TeamId>> = team_ids.iter().map(Some).collect();
    if n % 2 != 0 {
        slots.push(None);
    }

    let m = slots.len();
    let rounds = m - 1;
    let matches_per_round = m / 2;

    let mut pairings = Vec::with_capacity(n * (n - 1) / 2);
    for round in 0..rounds {
        for slot in 0..matches_per_round {
            let home = (round + slot) % (m - 1);

            // The last team is the anchor and never rotates.
            let away = match slot {
                0 => m - 1,
                _ => (m - 1 - slot + round) % (m - 1),
            };

            if let (Some(home_id), Some(away_id)) = (slots[home], slots[away]) {
                pairings.push(Pairing {
                    group: group.to_string(),
                    home: home_id.clone(),
                    away: away_id.clone(),
                    round: round,
                });
            }
        }
    }

    tracing::debug!(group, teams = n, pairings = pairings.len(), "generated round robin");
    return pairings;
}

// Get how many games a single round robin of this many teams has.
pub fn game_count(team_count: usize) -> usize {
    team_count * team_count.saturating_sub(1) / 2
}
