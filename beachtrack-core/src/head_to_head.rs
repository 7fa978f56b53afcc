use std::collections::HashMap;

use crate::{MatchRecord, Player, PlayerId, TeamPair, display_name};

/// One way of dividing the four-player roster into two complementary
/// doubles teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairSplit {
    pub side_a: TeamPair,
    pub side_b: TeamPair,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeadToHeadEntry {
    pub label: String,
    pub side_a: TeamPair,
    pub side_b: TeamPair,
    pub side_a_wins: u32,
    pub side_b_wins: u32,
}

/// The three canonical splits of the first four roster players into
/// complementary pairs. Rosters with fewer than four players produce no
/// splits.
pub fn canonical_splits(roster: &[Player]) -> Vec<PairSplit> {
    if roster.len() < 4 {
        return Vec::new();
    }
    let (a, b, c, d) = (roster[0].id, roster[1].id, roster[2].id, roster[3].id);
    vec![
        PairSplit {
            side_a: TeamPair::new(a, b),
            side_b: TeamPair::new(c, d),
        },
        PairSplit {
            side_a: TeamPair::new(a, c),
            side_b: TeamPair::new(b, d),
        },
        PairSplit {
            side_a: TeamPair::new(a, d),
            side_b: TeamPair::new(b, c),
        },
    ]
}

/// Cumulative win counts between the two sides of each canonical split.
/// A match belongs to a split when its unordered pair equals either side;
/// the recorded outcome is credited to that side and the opposite outcome
/// to the complement. Splits with no matches are omitted.
pub fn head_to_head(matches: &[MatchRecord], roster: &[Player]) -> Vec<HeadToHeadEntry> {
    let names: HashMap<PlayerId, String> = roster
        .iter()
        .map(|player| (player.id, player.name.clone()))
        .collect();

    canonical_splits(roster)
        .into_iter()
        .filter_map(|split| {
            let mut side_a_wins = 0;
            let mut side_b_wins = 0;
            let mut match_count = 0;
            for record in matches {
                let pair = record.pair();
                let on_side_a = pair == split.side_a;
                if !on_side_a && pair != split.side_b {
                    continue;
                }
                match_count += 1;
                if on_side_a == record.is_win() {
                    side_a_wins += 1;
                } else {
                    side_b_wins += 1;
                }
            }
            if match_count == 0 {
                return None;
            }
            Some(HeadToHeadEntry {
                label: format!(
                    "{} vs {}",
                    pair_label(&names, split.side_a),
                    pair_label(&names, split.side_b)
                ),
                side_a: split.side_a,
                side_b: split.side_b,
                side_a_wins,
                side_b_wins,
            })
        })
        .collect()
}

fn pair_label(names: &HashMap<PlayerId, String>, pair: TeamPair) -> String {
    format!(
        "{} + {}",
        display_name(names, pair.low()),
        display_name(names, pair.high())
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn roster() -> Vec<Player> {
        [(1, "Ana"), (2, "Ben"), (3, "Cleo"), (4, "Dan")]
            .into_iter()
            .map(|(id, name)| Player {
                id,
                name: name.to_string(),
            })
            .collect()
    }

    fn record(player1: PlayerId, player2: PlayerId, score: &str, day: u32) -> MatchRecord {
        MatchRecord {
            player1,
            player2,
            score: score.to_string(),
            date: Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn four_players_produce_three_splits() {
        let splits = canonical_splits(&roster());
        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].side_a, TeamPair::new(1, 2));
        assert_eq!(splits[0].side_b, TeamPair::new(3, 4));
        assert_eq!(splits[1].side_a, TeamPair::new(1, 3));
        assert_eq!(splits[1].side_b, TeamPair::new(2, 4));
        assert_eq!(splits[2].side_a, TeamPair::new(1, 4));
        assert_eq!(splits[2].side_b, TeamPair::new(2, 3));
    }

    #[test]
    fn undersized_roster_produces_no_splits() {
        assert!(canonical_splits(&roster()[..3]).is_empty());
    }

    #[test]
    fn outcomes_are_attributed_to_the_recorded_side() {
        // One match won by (1,2), one won by (3,4).
        let matches = vec![record(1, 2, "Won", 1), record(3, 4, "Won", 2)];
        let entries = head_to_head(&matches, &roster());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].side_a_wins, 1);
        assert_eq!(entries[0].side_b_wins, 1);
    }

    #[test]
    fn a_recorded_loss_credits_the_complement() {
        let matches = vec![record(1, 2, "Lost", 1)];
        let entries = head_to_head(&matches, &roster());
        assert_eq!(entries[0].side_a_wins, 0);
        assert_eq!(entries[0].side_b_wins, 1);
    }

    #[test]
    fn pair_order_in_the_record_does_not_matter() {
        let matches = vec![record(2, 1, "Won", 1), record(4, 3, "Won", 2)];
        let entries = head_to_head(&matches, &roster());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].side_a_wins, 1);
        assert_eq!(entries[0].side_b_wins, 1);
    }

    #[test]
    fn splits_without_matches_are_omitted() {
        let matches = vec![record(1, 3, "Won", 1)];
        let entries = head_to_head(&matches, &roster());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].side_a, TeamPair::new(1, 3));
    }

    #[test]
    fn labels_use_roster_names() {
        let matches = vec![record(1, 2, "Won", 1)];
        let entries = head_to_head(&matches, &roster());
        assert_eq!(entries[0].label, "Ana + Ben vs Cleo + Dan");
    }
}
