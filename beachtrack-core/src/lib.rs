mod head_to_head;
mod rankings;
mod streaks;

pub use head_to_head::{HeadToHeadEntry, PairSplit, canonical_splits, head_to_head};
pub use rankings::{PlayerRanking, compute_rankings};
pub use streaks::{StreakSummary, streaks_for_player};

use std::collections::HashMap;

use chrono::{DateTime, Utc};

pub type PlayerId = i64;

/// The literal value the store uses to mark a win for the recorded pair.
/// Any other score value counts as a loss.
pub const WIN_SCORE: &str = "Won";

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// One doubles match as persisted: the recorded pair and whether it won.
/// The opposing pair is implicit (the complement within the roster).
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub score: String,
    pub date: DateTime<Utc>,
}

impl MatchRecord {
    pub fn is_win(&self) -> bool {
        self.score == WIN_SCORE
    }

    pub fn pair(&self) -> TeamPair {
        TeamPair::new(self.player1, self.player2)
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == id
    }
}

/// Unordered pair of player ids, normalized so comparison ignores order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TeamPair(PlayerId, PlayerId);

impl TeamPair {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b { TeamPair(a, b) } else { TeamPair(b, a) }
    }

    pub fn low(&self) -> PlayerId {
        self.0
    }

    pub fn high(&self) -> PlayerId {
        self.1
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.0 == id || self.1 == id
    }
}

pub fn display_name(names: &HashMap<PlayerId, String>, id: PlayerId) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Player {}", id))
}
