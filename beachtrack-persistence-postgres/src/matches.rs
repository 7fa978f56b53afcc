use beachtrack_core::MatchRecord;
use beachtrack_domain::{
    ServiceError, ServiceResult,
    r#match::{MatchId, MatchRecordUpdate, MatchRepository},
};
use chrono::{Duration, NaiveDate, NaiveTime};
use sqlx::{Pool, Postgres, Row, postgres::PgRow};

use crate::{create_db_pool, map_db_err};

pub struct PostgresMatchRepository {
    pool: Pool<Postgres>,
}

impl PostgresMatchRepository {
    pub fn new() -> Self {
        Self {
            pool: create_db_pool(),
        }
    }

    fn match_from_row(row: &PgRow) -> sqlx::Result<(MatchId, MatchRecord)> {
        let id = row.try_get("id")?;
        Ok((
            id,
            MatchRecord {
                player1: row.try_get("player1_id")?,
                player2: row.try_get("player2_id")?,
                score: row.try_get("score")?,
                date: row.try_get("date")?,
            },
        ))
    }

    fn rows_to_matches(rows: Vec<PgRow>) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        rows.iter()
            .map(|row| Self::match_from_row(row).map_err(|e| ServiceError::Internal(e.to_string())))
            .collect()
    }
}

#[async_trait::async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn get_matches(&self) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        let rows = sqlx::query("SELECT * FROM matches ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        Self::rows_to_matches(rows)
    }

    async fn get_matches_by_date(
        &self,
        day: NaiveDate,
    ) -> ServiceResult<Vec<(MatchId, MatchRecord)>> {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1);
        let rows =
            sqlx::query("SELECT * FROM matches WHERE date >= $1 AND date < $2 ORDER BY date ASC")
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_err)?;
        Self::rows_to_matches(rows)
    }

    async fn get_match(&self, id: MatchId) -> ServiceResult<Option<MatchRecord>> {
        let row = sqlx::query("SELECT * FROM matches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;
        match row {
            Some(row) => {
                let (_, record) = Self::match_from_row(&row)
                    .map_err(|e| ServiceError::Internal(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn create_match(&self, record: &MatchRecord) -> ServiceResult<MatchId> {
        // Id is auto-incremented
        let id = sqlx::query_scalar::<_, MatchId>(
            "INSERT INTO matches (player1_id, player2_id, score, date) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(record.player1)
        .bind(record.player2)
        .bind(&record.score)
        .bind(record.date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(id)
    }

    async fn update_match(&self, id: MatchId, update: &MatchRecordUpdate) -> ServiceResult<()> {
        let mut sets = Vec::new();
        let mut placeholder = 1;
        for (field, present) in [
            ("player1_id", update.player1.is_some()),
            ("player2_id", update.player2.is_some()),
            ("score", update.score.is_some()),
            ("date", update.date.is_some()),
        ] {
            if present {
                sets.push(format!("{} = ${}", field, placeholder));
                placeholder += 1;
            }
        }
        if sets.is_empty() {
            return Ok(());
        }

        let query_str = format!(
            "UPDATE matches SET {} WHERE id = ${}",
            sets.join(", "),
            placeholder
        );
        let mut query = sqlx::query(&query_str);
        if let Some(player1) = update.player1 {
            query = query.bind(player1);
        }
        if let Some(player2) = update.player2 {
            query = query.bind(player2);
        }
        if let Some(score) = &update.score {
            query = query.bind(score);
        }
        if let Some(date) = update.date {
            query = query.bind(date);
        }
        let result = query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected() == 0 {
            return ServiceError::not_found(format!("Match {} not found", id));
        }
        Ok(())
    }

    async fn delete_match(&self, id: MatchId) -> ServiceResult<()> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected() == 0 {
            return ServiceError::not_found(format!("Match {} not found", id));
        }
        Ok(())
    }
}
