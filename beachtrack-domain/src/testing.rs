use std::sync::Mutex;

use beachtrack_core::{MatchRecord, Player, PlayerId};
use chrono::{NaiveDate, TimeZone, Utc};

use crate::{
    ServiceError, ServiceResult,
    player::PlayerRepository,
    r#match::{MatchId, MatchRecordUpdate, MatchRepository},
};

pub fn record(player1: PlayerId, player2: PlayerId, score: &str, day: u32) -> MatchRecord {
    MatchRecord {
        player1,
        player2,
        score: score.to_string(),
        date: Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0).unwrap(),
    }
}

pub struct MockPlayerRepository {
    roster: Vec<Player>,
}

impl Default for MockPlayerRepository {
    fn default() -> Self {
        Self::with_ids(&[1, 2, 3, 4])
    }
}

impl MockPlayerRepository {
    pub fn with_ids(ids: &[PlayerId]) -> Self {
        const NAMES: [&str; 5] = ["Ana", "Ben", "Cleo", "Dan", "Eve"];
        Self {
            roster: ids
                .iter()
                .map(|&id| Player {
                    id,
                    name: NAMES
                        .get(id as usize - 1)
                        .map(|name| name.to_string())
                        .unwrap_or_else(|| format!("Player {}", id)),
                })
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for MockPlayerRepository {
    async fn get_players(&self) -> ServiceResult<Vec<Player>> {
        Ok(self.roster.clone())
    }

    async fn get_player(&self, id: PlayerId) -> ServiceResult<Option<Player>> {
        Ok(self.roster.iter().find(|player| player.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryMatchRepository {
    matches: Mutex<Vec<(MatchId, MatchRecord)>>,
    next_id: Mutex<MatchId>,
}

impl InMemoryMatchRepository {
    pub fn with_records(records: Vec<MatchRecord>) -> Self {
        let count = records.len() as MatchId;
        Self {
            matches: Mutex::new(
                records
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| (index as MatchId + 1, record))
                    .collect(),
            ),
            next_id: Mutex::new(count),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(MatchId, MatchRecord)>> {
        self.matches.lock().expect("match store mutex poisoned")
    }
}

#[async_trait::async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn get_matches(&self) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        Ok(self.lock().clone())
    }

    async fn get_matches_by_date(
        &self,
        day: NaiveDate,
    ) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        Ok(self
            .lock()
            .iter()
            .filter(|(_, record)| record.date.date_naive() == day)
            .cloned()
            .collect())
    }

    async fn get_match(&self, id: MatchId) -> ServiceResult<Option<MatchRecord>> {
        Ok(self
            .lock()
            .iter()
            .find(|(match_id, _)| *match_id == id)
            .map(|(_, record)| record.clone()))
    }

    async fn create_match(&self, record: &MatchRecord) -> ServiceResult<MatchId> {
        let mut next_id = self.next_id.lock().expect("id mutex poisoned");
        *next_id += 1;
        self.lock().push((*next_id, record.clone()));
        Ok(*next_id)
    }

    async fn update_match(&self, id: MatchId, update: &MatchRecordUpdate) -> ServiceResult<()> {
        let mut matches = self.lock();
        let Some((_, record)) = matches.iter_mut().find(|(match_id, _)| *match_id == id) else {
            return ServiceError::not_found(format!("Match {} not found", id));
        };
        if let Some(player1) = update.player1 {
            record.player1 = player1;
        }
        if let Some(player2) = update.player2 {
            record.player2 = player2;
        }
        if let Some(score) = &update.score {
            record.score = score.clone();
        }
        if let Some(date) = update.date {
            record.date = date;
        }
        Ok(())
    }

    async fn delete_match(&self, id: MatchId) -> ServiceResult<()> {
        let mut matches = self.lock();
        let before = matches.len();
        matches.retain(|(match_id, _)| *match_id != id);
        if matches.len() == before {
            return ServiceError::not_found(format!("Match {} not found", id));
        }
        Ok(())
    }
}

/// Simulates a connectivity failure on every call.
pub struct FailingMatchRepository;

#[async_trait::async_trait]
impl MatchRepository for FailingMatchRepository {
    async fn get_matches(&self) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        ServiceError::internal("connection refused")
    }

    async fn get_matches_by_date(
        &self,
        _day: NaiveDate,
    ) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        ServiceError::internal("connection refused")
    }

    async fn get_match(&self, _id: MatchId) -> ServiceResult<Option<MatchRecord>> {
        ServiceError::internal("connection refused")
    }

    async fn create_match(&self, _record: &MatchRecord) -> ServiceResult<MatchId> {
        ServiceError::internal("connection refused")
    }

    async fn update_match(&self, _id: MatchId, _update: &MatchRecordUpdate) -> ServiceResult<()> {
        ServiceError::internal("connection refused")
    }

    async fn delete_match(&self, _id: MatchId) -> ServiceResult<()> {
        ServiceError::internal("connection refused")
    }
}
