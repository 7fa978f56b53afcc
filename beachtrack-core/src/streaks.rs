use crate::{MatchRecord, PlayerId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Computes the longest and current win streak for one player over the
/// full match log. Matches are ordered by date (stable sort) before
/// scanning, so the input may arrive in any order.
///
/// A streak is broken by a loss of the player's pair, and also by any
/// match the player did not appear in. The absence rule mirrors the
/// stored-system behavior; see DESIGN.md.
pub fn streaks_for_player(matches: &[MatchRecord], id: PlayerId) -> StreakSummary {
    let mut ordered: Vec<&MatchRecord> = matches.iter().collect();
    ordered.sort_by_key(|record| record.date);

    let mut longest_streak = 0;
    let mut run = 0;
    for record in &ordered {
        if record.involves(id) && record.is_win() {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 0;
        }
    }

    let mut current_streak = 0;
    for record in ordered.iter().rev() {
        if record.involves(id) && record.is_win() {
            current_streak += 1;
        } else {
            break;
        }
    }

    StreakSummary {
        current_streak,
        longest_streak,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn record(player1: PlayerId, player2: PlayerId, score: &str, day: u32) -> MatchRecord {
        MatchRecord {
            player1,
            player2,
            score: score.to_string(),
            date: Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn no_matches_means_no_streaks() {
        assert_eq!(streaks_for_player(&[], 1), StreakSummary::default());
    }

    #[test]
    fn consecutive_wins_accumulate() {
        let matches = vec![
            record(1, 2, "Won", 1),
            record(1, 2, "Won", 2),
            record(1, 3, "Won", 3),
        ];
        let streaks = streaks_for_player(&matches, 1);
        assert_eq!(streaks.longest_streak, 3);
        assert_eq!(streaks.current_streak, 3);
    }

    #[test]
    fn a_loss_resets_the_run() {
        let matches = vec![
            record(1, 2, "Won", 1),
            record(1, 2, "Won", 2),
            record(1, 2, "Lost", 3),
            record(1, 2, "Won", 4),
        ];
        let streaks = streaks_for_player(&matches, 1);
        assert_eq!(streaks.longest_streak, 2);
        assert_eq!(streaks.current_streak, 1);
    }

    #[test]
    fn an_absence_also_breaks_the_streak() {
        // The player 1 streak started on day 1 is broken by the day 3
        // match between players 3 and 4.
        let matches = vec![
            record(1, 2, "Won", 1),
            record(1, 2, "Lost", 2),
            record(3, 4, "Won", 3),
        ];
        let streaks = streaks_for_player(&matches, 1);
        assert_eq!(streaks.longest_streak, 1);
        assert_eq!(streaks.current_streak, 0);
    }

    #[test]
    fn absence_splits_an_otherwise_longer_run() {
        let matches = vec![
            record(1, 2, "Won", 1),
            record(1, 2, "Won", 2),
            record(3, 4, "Won", 3),
            record(1, 2, "Won", 4),
        ];
        let streaks = streaks_for_player(&matches, 1);
        assert_eq!(streaks.longest_streak, 2);
        assert_eq!(streaks.current_streak, 1);
    }

    #[test]
    fn input_order_does_not_matter() {
        let shuffled = vec![
            record(1, 2, "Won", 4),
            record(1, 2, "Lost", 1),
            record(1, 2, "Won", 3),
            record(1, 2, "Won", 2),
        ];
        let streaks = streaks_for_player(&shuffled, 1);
        assert_eq!(streaks.longest_streak, 3);
        assert_eq!(streaks.current_streak, 3);
    }

    #[test]
    fn longest_is_never_below_current() {
        let matches = vec![
            record(1, 2, "Lost", 1),
            record(1, 2, "Won", 2),
            record(1, 2, "Won", 3),
        ];
        let streaks = streaks_for_player(&matches, 1);
        assert!(streaks.longest_streak >= streaks.current_streak);
    }
}
