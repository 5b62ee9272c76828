// Drawing teams into groups.
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::logic::{error::SetupError, team::Team, types::{convert, MAX_GROUPS}};

// How the teams should be drawn into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct DrawRules {
    pub groups: usize,
    // Same seed, same draw.
    pub seed: u64,
}

/// Shuffle the teams with the seed and deal them into groups A, B, C...
///
/// Teams are dealt one per group in turn, so group sizes differ by one at most. Within a group
/// the teams keep the shuffled order, which is also the order the pairings are generated in.
pub fn draw_groups(teams: &[Team], rules: &DrawRules) -> Result<Vec<Team>, SetupError> {
    if rules.groups == 0 || rules.groups > MAX_GROUPS {
        return Err(SetupError::InvalidGroupCount(rules.groups));
    }

    let mut rng = StdRng::seed_from_u64(rules.seed);
    let mut drawn = teams.to_vec();
    drawn.shuffle(&mut rng);

    for (i, team) in drawn.iter_mut().enumerate() {
        team.group = convert::group_label(i % rules.groups);
    }

    tracing::info!(teams = drawn.len(), groups = rules.groups, seed = rules.seed, "drew groups");
    return Ok(drawn);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(n: usize) -> Vec<Team> {
        (0..n).map(|i| Team::build(&format!("t{i}"), &format!("Team {i}"), "")).collect()
    }

    #[test]
    fn draw_is_reproducible() {
        let rules = DrawRules { groups: 3, seed: 42 };
        assert_eq!(draw_groups(&teams(10), &rules).unwrap(), draw_groups(&teams(10), &rules).unwrap());
    }

    #[test]
    fn groups_are_balanced() {
        let drawn = draw_groups(&teams(10), &DrawRules { groups: 3, seed: 7 }).unwrap();
        let sizes: Vec<usize> = ["A", "B", "C"].iter()
            .map(|g| drawn.iter().filter(|t| t.group == *g).count())
            .collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn draw_keeps_every_team() {
        let mut ids: Vec<String> = draw_groups(&teams(8), &DrawRules { groups: 2, seed: 1 }).unwrap()
            .into_iter().map(|t| t.id).collect();
        ids.sort();
        let mut expected: Vec<String> = teams(8).into_iter().map(|t| t.id).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn group_count_must_be_sensible() {
        assert!(matches!(draw_groups(&teams(4), &DrawRules { groups: 0, seed: 1 }), Err(SetupError::InvalidGroupCount(0))));
        assert!(matches!(draw_groups(&teams(4), &DrawRules { groups: 9, seed: 1 }), Err(SetupError::InvalidGroupCount(9))));
    }
}
