use axum::{Json, extract::State};

use crate::{app::ApiServiceError, http::AppState};

#[derive(serde::Serialize)]
pub struct JsonPlayerRanking {
    id: i64,
    name: String,
    wins: u32,
    losses: u32,
    point_difference: i32,
    total_matches: u32,
    win_percentage: f64,
    rank: u32,
}

pub async fn get_rankings(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayerRanking>>, ApiServiceError> {
    let rankings = app_state.stats_service.rankings().await?;
    Ok(Json(
        rankings
            .into_iter()
            .map(|ranking| JsonPlayerRanking {
                id: ranking.id,
                name: ranking.name,
                wins: ranking.wins,
                losses: ranking.losses,
                point_difference: ranking.point_difference,
                total_matches: ranking.total_matches,
                win_percentage: ranking.win_percentage,
                rank: ranking.rank,
            })
            .collect(),
    ))
}
