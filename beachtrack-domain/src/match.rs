use std::{collections::HashMap, sync::Arc};

use beachtrack_core::{MatchRecord, PlayerId, TeamPair, canonical_splits, display_name};
use chrono::{DateTime, NaiveDate, Utc};
use log::info;

use crate::{ServiceError, ServiceResult, player::ArcPlayerRepository};

pub type MatchId = i64;

/// Partial update of a stored match; `None` fields keep their value.
#[derive(Clone, Debug, Default)]
pub struct MatchRecordUpdate {
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
    pub score: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpcomingMatch {
    pub id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub player1_name: String,
    pub player2_name: String,
    pub date: DateTime<Utc>,
}

pub type ArcMatchRepository = Arc<Box<dyn MatchRepository + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait MatchRepository {
    async fn get_matches(&self) -> ServiceResult<Vec<(MatchId, MatchRecord)>>;
    async fn get_matches_by_date(
        &self,
        day: NaiveDate,
    ) -> ServiceResult<Vec<(MatchId, MatchRecord)>>;
    async fn get_match(&self, id: MatchId) -> ServiceResult<Option<MatchRecord>>;
    async fn create_match(&self, record: &MatchRecord) -> ServiceResult<MatchId>;
    async fn update_match(&self, id: MatchId, update: &MatchRecordUpdate) -> ServiceResult<()>;
    async fn delete_match(&self, id: MatchId) -> ServiceResult<()>;
}

pub struct MatchService {
    match_repository: ArcMatchRepository,
    player_repository: ArcPlayerRepository,
}

impl MatchService {
    pub fn new(match_repository: ArcMatchRepository, player_repository: ArcPlayerRepository) -> Self {
        Self {
            match_repository,
            player_repository,
        }
    }

    /// The recorded pair must be two distinct roster players forming one
    /// side of a canonical split.
    async fn validate_pairing(&self, player1: PlayerId, player2: PlayerId) -> ServiceResult<()> {
        if player1 == player2 {
            return ServiceError::bad_request("A team needs two different players");
        }
        let roster = self.player_repository.get_players().await?;
        for id in [player1, player2] {
            if !roster.iter().any(|player| player.id == id) {
                return ServiceError::bad_request(format!("Unknown player id {}", id));
            }
        }
        let pair = TeamPair::new(player1, player2);
        let valid = canonical_splits(&roster)
            .iter()
            .any(|split| split.side_a == pair || split.side_b == pair);
        if !valid {
            return ServiceError::bad_request(format!(
                "({}, {}) is not a valid doubles pairing",
                player1, player2
            ));
        }
        Ok(())
    }

    pub async fn get_matches(&self) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        self.match_repository.get_matches().await
    }

    pub async fn get_matches_by_date(
        &self,
        day: NaiveDate,
    ) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        self.match_repository.get_matches_by_date(day).await
    }

    pub async fn get_match(&self, id: MatchId) -> ServiceResult<MatchRecord> {
        match self.match_repository.get_match(id).await? {
            Some(record) => Ok(record),
            None => ServiceError::not_found(format!("Match {} no longer exists", id)),
        }
    }

    pub async fn log_match(&self, record: MatchRecord) -> ServiceResult<MatchId> {
        self.validate_pairing(record.player1, record.player2).await?;
        let id = self.match_repository.create_match(&record).await?;
        info!(
            "Logged match {}: pair ({}, {}) {} on {}",
            id, record.player1, record.player2, record.score, record.date
        );
        Ok(id)
    }

    pub async fn update_match(&self, id: MatchId, update: MatchRecordUpdate) -> ServiceResult<()> {
        let Some(existing) = self.match_repository.get_match(id).await? else {
            return ServiceError::not_found(format!("Match {} no longer exists", id));
        };
        let player1 = update.player1.unwrap_or(existing.player1);
        let player2 = update.player2.unwrap_or(existing.player2);
        self.validate_pairing(player1, player2).await?;
        self.match_repository.update_match(id, &update).await?;
        info!("Updated match {}", id);
        Ok(())
    }

    pub async fn delete_match(&self, id: MatchId) -> ServiceResult<()> {
        if self.match_repository.get_match(id).await?.is_none() {
            return ServiceError::not_found(format!("Match {} no longer exists", id));
        }
        self.match_repository.delete_match(id).await?;
        info!("Deleted match {}", id);
        Ok(())
    }

    /// Matches dated in the future, ascending, with player names resolved
    /// from the roster where possible.
    pub async fn get_upcoming_matches(
        &self,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<UpcomingMatch>> {
        let matches = self.match_repository.get_matches().await?;
        let roster = self.player_repository.get_players().await?;
        let names: HashMap<PlayerId, String> = roster
            .into_iter()
            .map(|player| (player.id, player.name))
            .collect();

        let mut upcoming: Vec<UpcomingMatch> = matches
            .into_iter()
            .filter(|(_, record)| record.date >= now)
            .map(|(id, record)| UpcomingMatch {
                id,
                player1: record.player1,
                player2: record.player2,
                player1_name: display_name(&names, record.player1),
                player2_name: display_name(&names, record.player2),
                date: record.date,
            })
            .collect();
        upcoming.sort_by_key(|entry| entry.date);
        Ok(upcoming)
    }
}
