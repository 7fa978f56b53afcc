use std::sync::Arc;

pub use beachtrack_core::{Player, PlayerId};

use crate::ServiceResult;

pub type ArcPlayerRepository = Arc<Box<dyn PlayerRepository + Send + Sync + 'static>>;

/// Read access to the externally managed roster.
#[async_trait::async_trait]
pub trait PlayerRepository {
    async fn get_players(&self) -> ServiceResult<Vec<Player>>;
    async fn get_player(&self, id: PlayerId) -> ServiceResult<Option<Player>>;
}
