use axum::{Json, extract::State};

use crate::{app::ApiServiceError, http::AppState};

#[derive(serde::Serialize)]
pub struct JsonStatsOverview {
    total_matches: u32,
    active_players: u32,
    longest_streak: u32,
}

#[derive(serde::Serialize)]
pub struct JsonPlayerStreaks {
    id: i64,
    name: String,
    current_streak: u32,
    longest_streak: u32,
}

#[derive(serde::Serialize)]
pub struct JsonHeadToHead {
    label: String,
    side_a: [i64; 2],
    side_b: [i64; 2],
    side_a_wins: u32,
    side_b_wins: u32,
}

pub async fn get_overview(
    State(app_state): State<AppState>,
) -> Result<Json<JsonStatsOverview>, ApiServiceError> {
    let overview = app_state.stats_service.overview().await?;
    Ok(Json(JsonStatsOverview {
        total_matches: overview.total_matches,
        active_players: overview.active_players,
        longest_streak: overview.longest_streak,
    }))
}

pub async fn get_streaks(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayerStreaks>>, ApiServiceError> {
    let streaks = app_state.stats_service.streaks().await?;
    Ok(Json(
        streaks
            .into_iter()
            .map(|entry| JsonPlayerStreaks {
                id: entry.id,
                name: entry.name,
                current_streak: entry.streaks.current_streak,
                longest_streak: entry.streaks.longest_streak,
            })
            .collect(),
    ))
}

pub async fn get_head_to_head(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonHeadToHead>>, ApiServiceError> {
    let entries = app_state.stats_service.head_to_head().await?;
    Ok(Json(
        entries
            .into_iter()
            .map(|entry| JsonHeadToHead {
                label: entry.label,
                side_a: [entry.side_a.low(), entry.side_a.high()],
                side_b: [entry.side_b.low(), entry.side_b.high()],
                side_a_wins: entry.side_a_wins,
                side_b_wins: entry.side_b_wins,
            })
            .collect(),
    ))
}
