//! Standings from team counters and finished matches.

use std::io::Write;

use time::macros::{date, time};
use tournament_scheduler_lib::{
    logic::io, rank_teams, render_standings, resolve_cluster, tally_results, Match, MatchStatus, PointsRules, Team, TieReason, Warning,
};

fn finished(home: &str, away: &str, home_goals: u32, away_goals: u32) -> Match {
    let mut game = Match::build("cup", home, away, "A", 1, date!(2025 - 03 - 01), time!(10:00));
    game.status = MatchStatus::Finished { home_goals, away_goals };
    game
}

fn order(teams: &[Team]) -> Vec<&str> {
    teams.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_points_then_goal_difference_then_name() {
    let teams = vec![
        Team::build("c", "C", "A").with_record(6, 4, 2),
        Team::build("b", "B", "A").with_record(9, 7, 2),
        Team::build("a", "A", "A").with_record(9, 7, 2),
    ];

    let standings = rank_teams(&teams, None);
    assert_eq!(order(&standings.teams), vec!["A", "B", "C"]);
    assert!(standings.warnings.is_empty());
}

#[test]
fn test_head_to_head_override() {
    let teams = vec![
        Team::build("a", "A", "A").with_record(9, 6, 1),
        Team::build("b", "B", "A").with_record(9, 6, 1),
    ];

    // The direct result decides, whatever the name order says.
    let standings = rank_teams(&teams, Some(&[finished("a", "b", 2, 1)][..]));
    assert_eq!(order(&standings.teams), vec!["A", "B"]);

    let standings = rank_teams(&teams, Some(&[finished("a", "b", 1, 2)][..]));
    assert_eq!(order(&standings.teams), vec!["B", "A"]);
}

#[test]
fn test_three_way_tie_stays_alphabetical() {
    let teams = vec![
        Team::build("z", "Zulu", "A").with_record(4, 3, 3),
        Team::build("m", "Mike", "A").with_record(4, 3, 3),
        Team::build("a", "Alfa", "A").with_record(4, 3, 3),
    ];
    let history = vec![finished("z", "a", 5, 0), finished("m", "z", 2, 0), finished("a", "m", 1, 0)];

    let standings = rank_teams(&teams, Some(history.as_slice()));
    assert_eq!(order(&standings.teams), vec!["Alfa", "Mike", "Zulu"]);
    assert_eq!(standings.warnings, vec![Warning::UnresolvedTie {
        team_ids: vec!["a".to_string(), "m".to_string(), "z".to_string()],
        reason: TieReason::ClusterTooLarge,
    }]);

    let (cluster, _) = resolve_cluster(standings.teams.clone(), &history);
    assert_eq!(cluster, standings.teams);
}

#[test]
fn test_ranking_is_repeatable() {
    let teams = vec![
        Team::build("1", "One", "A").with_record(3, 2, 2).with_cards(1, 0, 0),
        Team::build("2", "Two", "A").with_record(3, 2, 2),
        Team::build("3", "Three", "A").with_record(1, 0, 0),
        Team::build("4", "Four", "A").with_record(1, 0, 0),
    ];
    let history = vec![finished("3", "4", 0, 0)];

    let first = rank_teams(&teams, Some(history.as_slice()));
    for _ in 0..5 {
        assert_eq!(rank_teams(&teams, Some(history.as_slice())), first);
    }
    assert_eq!(order(&first.teams), vec!["Two", "One", "Four", "Three"]);

    // One/Two never met, Three/Four drew.
    let reasons: Vec<TieReason> = first.warnings.iter()
        .map(|w| match w {
            Warning::UnresolvedTie { reason, .. } => *reason,
            other => panic!("unexpected warning {other}"),
        })
        .collect();
    assert_eq!(reasons, vec![TieReason::NoFinishedMatch, TieReason::Draw]);
}

#[test]
fn test_tally_then_rank() {
    let teams = vec![
        Team::build("a", "Ants", "A"),
        Team::build("b", "Bees", "A"),
        Team::build("c", "Cats", "A"),
    ];
    let mut unplayed = Match::build("cup", "b", "c", "A", 1, date!(2025 - 03 - 02), time!(10:00));
    unplayed.status = MatchStatus::Scheduled;
    let history = vec![finished("a", "b", 1, 0), finished("c", "a", 3, 3), unplayed];

    let tallied = tally_results(&teams, &history, &PointsRules::default());
    let standings = rank_teams(&tallied, Some(history.as_slice()));

    assert_eq!(order(&standings.teams), vec!["Ants", "Cats", "Bees"]);
    assert_eq!(standings.teams[0].points, 4);
    assert_eq!(standings.teams[1].points, 1);

    let table = render_standings(&standings);
    assert!(table.lines().nth(1).unwrap().starts_with("1st"));
}

#[test]
fn test_teams_and_matches_from_files() {
    let mut teams_file = tempfile::NamedTempFile::new().unwrap();
    write!(teams_file, r#"[
        {{ "id": "a", "name": "Ants", "group": "A", "points": 3, "goals_for": 2, "goals_against": 1, "goal_difference": 1 }},
        {{ "id": "b", "name": "Bees", "group": "A", "points": 3, "goals_for": 2, "goals_against": 1, "goal_difference": 1, "red_cards": 1 }}
    ]"#).unwrap();

    let mut matches_file = tempfile::NamedTempFile::new().unwrap();
    write!(matches_file, r#"[
        {{ "tournament_id": "cup", "home_id": "b", "away_id": "a", "group": "A", "matchday": 1,
           "date": "2025-03-01", "time": "10:00", "status": "finished", "home_goals": 2, "away_goals": 1 }},
        {{ "tournament_id": "cup", "home_id": "a", "away_id": "b", "group": "A", "matchday": 1,
           "date": "2025-03-08", "time": "10:00", "status": "scheduled" }}
    ]"#).unwrap();

    let teams = io::load_teams(teams_file.path()).unwrap();
    let matches = io::load_matches(matches_file.path()).unwrap();
    assert_eq!(matches[1].status, MatchStatus::Scheduled);

    // Fair play puts Ants ahead, the direct game puts Bees back on top.
    assert_eq!(order(&rank_teams(&teams, None).teams), vec!["Ants", "Bees"]);
    assert_eq!(order(&rank_teams(&teams, Some(matches.as_slice())).teams), vec!["Bees", "Ants"]);

    // The input records come out unchanged, only reordered.
    let ranked = rank_teams(&teams, Some(matches.as_slice()));
    assert_eq!(ranked.teams[1], teams[0]);
}
