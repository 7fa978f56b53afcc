use axum::{
    Json,
    extract::{Path, Query, State},
};
use beachtrack_core::MatchRecord;
use beachtrack_domain::{
    ServiceError,
    r#match::{MatchId, MatchRecordUpdate},
};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{app::ApiServiceError, http::AppState};

#[derive(serde::Serialize)]
pub struct JsonMatch {
    id: MatchId,
    player1_id: i64,
    player2_id: i64,
    score: String,
    date: DateTime<Utc>,
}

impl JsonMatch {
    fn from_record(id: MatchId, record: MatchRecord) -> Self {
        Self {
            id,
            player1_id: record.player1,
            player2_id: record.player2,
            score: record.score,
            date: record.date,
        }
    }
}

#[derive(serde::Deserialize)]
pub struct JsonMatchData {
    player1_id: i64,
    player2_id: i64,
    score: String,
    date: DateTime<Utc>,
}

#[derive(serde::Deserialize)]
pub struct JsonMatchUpdate {
    player1_id: Option<i64>,
    player2_id: Option<i64>,
    score: Option<String>,
    date: Option<DateTime<Utc>>,
}

#[derive(serde::Deserialize)]
pub struct JsonMatchFilter {
    date: Option<String>,
}

#[derive(serde::Serialize)]
pub struct JsonUpcomingMatch {
    id: MatchId,
    player1_id: i64,
    player2_id: i64,
    player1_name: String,
    player2_name: String,
    date: DateTime<Utc>,
}

pub async fn get_all(
    State(app_state): State<AppState>,
    Query(filter): Query<JsonMatchFilter>,
) -> Result<Json<Vec<JsonMatch>>, ApiServiceError> {
    let day = filter
        .date
        .as_ref()
        .map(|date_str| {
            NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
                ServiceError::BadRequest("Invalid date filter, expected YYYY-MM-DD".to_string())
            })
        })
        .transpose()?;

    let matches = match day {
        Some(day) => app_state.match_service.get_matches_by_date(day).await?,
        None => app_state.match_service.get_matches().await?,
    };
    Ok(Json(
        matches
            .into_iter()
            .map(|(id, record)| JsonMatch::from_record(id, record))
            .collect(),
    ))
}

pub async fn get_by_id(
    Path(id): Path<MatchId>,
    State(app_state): State<AppState>,
) -> Result<Json<JsonMatch>, ApiServiceError> {
    let record = app_state.match_service.get_match(id).await?;
    Ok(Json(JsonMatch::from_record(id, record)))
}

pub async fn create(
    State(app_state): State<AppState>,
    Json(data): Json<JsonMatchData>,
) -> Result<Json<JsonMatch>, ApiServiceError> {
    let record = MatchRecord {
        player1: data.player1_id,
        player2: data.player2_id,
        score: data.score,
        date: data.date,
    };
    let id = app_state.match_service.log_match(record.clone()).await?;
    Ok(Json(JsonMatch::from_record(id, record)))
}

pub async fn update(
    Path(id): Path<MatchId>,
    State(app_state): State<AppState>,
    Json(data): Json<JsonMatchUpdate>,
) -> Result<Json<JsonMatch>, ApiServiceError> {
    let update = MatchRecordUpdate {
        player1: data.player1_id,
        player2: data.player2_id,
        score: data.score,
        date: data.date,
    };
    app_state.match_service.update_match(id, update).await?;
    let record = app_state.match_service.get_match(id).await?;
    Ok(Json(JsonMatch::from_record(id, record)))
}

pub async fn delete(
    Path(id): Path<MatchId>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiServiceError> {
    app_state.match_service.delete_match(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn get_upcoming(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonUpcomingMatch>>, ApiServiceError> {
    let upcoming = app_state
        .match_service
        .get_upcoming_matches(Utc::now())
        .await?;
    Ok(Json(
        upcoming
            .into_iter()
            .map(|entry| JsonUpcomingMatch {
                id: entry.id,
                player1_id: entry.player1,
                player2_id: entry.player2,
                player1_name: entry.player1_name,
                player2_name: entry.player2_name,
                date: entry.date,
            })
            .collect(),
    ))
}
