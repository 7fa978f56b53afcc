use axum::{Json, extract::State};

use crate::{app::ApiServiceError, http::AppState};

#[derive(serde::Serialize)]
pub struct JsonPlayer {
    id: i64,
    name: String,
}

pub async fn get_all(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ApiServiceError> {
    let players = app_state.players.get_players().await?;
    Ok(Json(
        players
            .into_iter()
            .map(|player| JsonPlayer {
                id: player.id,
                name: player.name,
            })
            .collect(),
    ))
}
