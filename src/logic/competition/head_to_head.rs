// Head-to-head tie-breaking between teams level on points.
use crate::logic::{error::{TieReason, Warning}, game::Match, team::Team};

// Reorder the teams of a base-sorted table cluster by cluster.
// A cluster is a run of consecutive teams with the same points. Teams never leave their cluster.
pub fn resolve_ties(base: Vec<Team>, history: &[Match]) -> (Vec<Team>, Vec<Warning>) {
    let mut resolved = Vec::with_capacity(base.len());
    let mut warnings = Vec::new();

    let mut cluster: Vec<Team> = Vec::new();
    for team in base {
        if cluster.last().is_some_and(|t| t.points != team.points) {
            flush_cluster(&mut cluster, history, &mut resolved, &mut warnings);
        }
        cluster.push(team);
    }
    flush_cluster(&mut cluster, history, &mut resolved, &mut warnings);

    return (resolved, warnings);
}

fn flush_cluster(cluster: &mut Vec<Team>, history: &[Match], resolved: &mut Vec<Team>, warnings: &mut Vec<Warning>) {
    if cluster.is_empty() { return; }

    let (mut ordered, warning) = resolve_cluster(std::mem::take(cluster), history);
    if let Some(w) = warning {
        tracing::warn!("{w}");
        warnings.push(w);
    }
    resolved.append(&mut ordered);
}

/// Order a cluster of teams level on points by their direct result.
///
/// Only two-team clusters are handled: the winner of the first finished match between them
/// goes first. A draw, a missing result or a bigger cluster keeps the base order and reports why.
pub fn resolve_cluster(mut cluster: Vec<Team>, history: &[Match]) -> (Vec<Team>, Option<Warning>) {
    let reason = match cluster.len() {
        0 | 1 => return (cluster, None),
        2 => {
            let a = &cluster[0].id;
            let b = &cluster[1].id;

            let direct = history.iter().find(|m| m.is_finished() && m.is_between(a, b));
            match direct.and_then(|m| Some((m.goals_of(a)?, m.goals_of(b)?))) {
                Some((a_goals, b_goals)) if b_goals > a_goals => {
                    cluster.swap(0, 1);
                    return (cluster, None);
                },
                Some((a_goals, b_goals)) if a_goals > b_goals => return (cluster, None),
                Some(_) => TieReason::Draw,
                None => TieReason::NoFinishedMatch,
            }
        },
        _ => TieReason::ClusterTooLarge,
    };

    let team_ids = cluster.iter().map(|t| t.id.clone()).collect();
    return (cluster, Some(Warning::UnresolvedTie { team_ids, reason }));
}
