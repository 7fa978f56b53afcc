use std::collections::HashMap;

use beachtrack_core::{
    HeadToHeadEntry, MatchRecord, PlayerId, PlayerRanking, StreakSummary, compute_rankings,
    head_to_head, streaks_for_player,
};

use crate::{ServiceResult, player::ArcPlayerRepository, r#match::ArcMatchRepository};

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStreaks {
    pub id: PlayerId,
    pub name: String,
    pub streaks: StreakSummary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsOverview {
    pub total_matches: u32,
    pub active_players: u32,
    pub longest_streak: u32,
}

/// Derived statistics over the full match log. Every call performs a full
/// fetch and recomputes from scratch; nothing is cached between calls.
pub struct StatsService {
    match_repository: ArcMatchRepository,
    player_repository: ArcPlayerRepository,
}

impl StatsService {
    pub fn new(match_repository: ArcMatchRepository, player_repository: ArcPlayerRepository) -> Self {
        Self {
            match_repository,
            player_repository,
        }
    }

    async fn fetch_records(&self) -> ServiceResult<Vec<MatchRecord>> {
        let matches = self.match_repository.get_matches().await?;
        Ok(matches.into_iter().map(|(_, record)| record).collect())
    }

    pub async fn rankings(&self) -> ServiceResult<Vec<PlayerRanking>> {
        let records = self.fetch_records().await?;
        let roster = self.player_repository.get_players().await?;
        let names: HashMap<PlayerId, String> = roster
            .into_iter()
            .map(|player| (player.id, player.name))
            .collect();
        Ok(compute_rankings(&records, &names))
    }

    /// Current and longest win streaks for every roster player.
    pub async fn streaks(&self) -> ServiceResult<Vec<PlayerStreaks>> {
        let records = self.fetch_records().await?;
        let roster = self.player_repository.get_players().await?;
        Ok(roster
            .into_iter()
            .map(|player| PlayerStreaks {
                streaks: streaks_for_player(&records, player.id),
                id: player.id,
                name: player.name,
            })
            .collect())
    }

    pub async fn head_to_head(&self) -> ServiceResult<Vec<HeadToHeadEntry>> {
        let records = self.fetch_records().await?;
        let roster = self.player_repository.get_players().await?;
        Ok(head_to_head(&records, &roster))
    }

    /// Dashboard summary: grand totals plus the longest streak anyone holds.
    pub async fn overview(&self) -> ServiceResult<StatsOverview> {
        let records = self.fetch_records().await?;
        let roster = self.player_repository.get_players().await?;
        let longest_streak = roster
            .iter()
            .map(|player| streaks_for_player(&records, player.id).longest_streak)
            .max()
            .unwrap_or(0);
        Ok(StatsOverview {
            total_matches: records.len() as u32,
            active_players: roster.len() as u32,
            longest_streak,
        })
    }
}
