// Scheduling and standings for amateur sports tournaments.
//
// Everything in here is a pure function of its input: teams and setup go in, a calendar or a
// standings table comes out. Reading files and the clock is left to the caller (see main.rs).
pub mod logic;

pub use logic::{
    competition::{
        draw::{draw_groups, DrawRules},
        generate_calendar,
        group_teams,
        head_to_head::{resolve_cluster, resolve_ties},
        ranking::{rank_teams, render_standings, RankCriteria, Standings, RANK_CRITERIA},
        round_robin::{generate_pairings, Pairing, PointsRules},
        schedule_generator::{assign_dates, Calendar, GroupPairings, SlotWindow},
        Group, Tournament, TournamentSetup,
    },
    error::{ConfigurationError, SetupError, TieReason, Warning},
    game::{Match, MatchStatus},
    team::{tally_results, Team},
    types::{GroupLabel, Matchday, TeamId, TournamentId},
};
