use beachtrack_core::{Player, PlayerId};
use beachtrack_domain::{ServiceError, ServiceResult, player::PlayerRepository};
use sqlx::{Pool, Postgres, Row, postgres::PgRow};

use crate::{create_db_pool, map_db_err};

pub struct PostgresPlayerRepository {
    pool: Pool<Postgres>,
}

impl PostgresPlayerRepository {
    pub fn new() -> Self {
        Self {
            pool: create_db_pool(),
        }
    }

    fn player_from_row(row: &PgRow) -> sqlx::Result<Player> {
        Ok(Player {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

#[async_trait::async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn get_players(&self) -> ServiceResult<Vec<Player>> {
        let rows = sqlx::query("SELECT id, name FROM players ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        rows.iter()
            .map(|row| {
                Self::player_from_row(row).map_err(|e| ServiceError::Internal(e.to_string()))
            })
            .collect()
    }

    async fn get_player(&self, id: PlayerId) -> ServiceResult<Option<Player>> {
        let row = sqlx::query("SELECT id, name FROM players WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;
        match row {
            Some(row) => Ok(Some(
                Self::player_from_row(&row).map_err(|e| ServiceError::Internal(e.to_string()))?,
            )),
            None => Ok(None),
        }
    }
}
