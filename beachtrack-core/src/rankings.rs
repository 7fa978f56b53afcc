use std::collections::{BTreeMap, HashMap};

use crate::{MatchRecord, PlayerId, display_name};

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRanking {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub point_difference: i32,
    pub total_matches: u32,
    pub win_percentage: f64,
    pub rank: u32,
}

#[derive(Default)]
struct StatsAccumulator {
    wins: u32,
    losses: u32,
    point_difference: i32,
}

/// Ranks every player that appears in the match log, not merely the
/// configured roster. Both members of a recorded pair share the outcome.
///
/// `total_matches` is the grand total of match rows, identical for all
/// players, and `win_percentage` is taken against that grand total. This
/// reproduces the stored-system behavior on purpose; see DESIGN.md.
///
/// Sort order: wins descending, then point difference descending, then
/// ascending player id so that full ties stay deterministic. Ranks are
/// dense and 1-based.
pub fn compute_rankings(
    matches: &[MatchRecord],
    names: &HashMap<PlayerId, String>,
) -> Vec<PlayerRanking> {
    if matches.is_empty() {
        return Vec::new();
    }

    let mut stats: BTreeMap<PlayerId, StatsAccumulator> = BTreeMap::new();
    for record in matches {
        let won = record.is_win();
        for id in [record.player1, record.player2] {
            let acc = stats.entry(id).or_default();
            if won {
                acc.wins += 1;
                acc.point_difference += 1;
            } else {
                acc.losses += 1;
                acc.point_difference -= 1;
            }
        }
    }

    let total_matches = matches.len() as u32;
    let mut rankings: Vec<PlayerRanking> = stats
        .into_iter()
        .map(|(id, acc)| PlayerRanking {
            id,
            name: display_name(names, id),
            wins: acc.wins,
            losses: acc.losses,
            point_difference: acc.point_difference,
            total_matches,
            win_percentage: acc.wins as f64 / total_matches as f64 * 100.0,
            rank: 0,
        })
        .collect();

    // Stable sort; the BTreeMap already yielded ascending ids.
    rankings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.point_difference.cmp(&a.point_difference))
    });
    for (index, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = index as u32 + 1;
    }

    rankings
}
