use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use beachtrack_domain::{
    player::ArcPlayerRepository,
    r#match::MatchService,
    stats::StatsService,
};
use log::info;

mod matches;
mod players;
mod rankings;
mod stats;

#[derive(Clone)]
pub struct AppState {
    pub match_service: Arc<MatchService>,
    pub stats_service: Arc<StatsService>,
    pub players: ArcPlayerRepository,
}

pub async fn run(
    match_service: Arc<MatchService>,
    stats_service: Arc<StatsService>,
    players: ArcPlayerRepository,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) {
    let router: Router<AppState> = Router::new().nest(
        "/v1",
        Router::new()
            .route("/matches", post(matches::create).get(matches::get_all))
            .route("/matches/upcoming", get(matches::get_upcoming))
            .route(
                "/matches/{id}",
                get(matches::get_by_id)
                    .put(matches::update)
                    .delete(matches::delete),
            )
            .route("/players", get(players::get_all))
            .route("/rankings", get(rankings::get_rankings))
            .route("/stats", get(stats::get_overview))
            .route("/stats/streaks", get(stats::get_streaks))
            .route("/stats/head-to-head", get(stats::get_head_to_head)),
    );

    let port = std::env::var("BEACHTRACK_HTTP_PORT")
        .expect("BEACHTRACK_HTTP_PORT must be set")
        .parse::<u16>()
        .expect("BEACHTRACK_HTTP_PORT must be a valid u16");

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .unwrap();

    info!("API server listening on port {}", port);
    axum::serve(
        listener,
        router.with_state(AppState {
            match_service,
            stats_service,
            players,
        }),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await
    .unwrap();

    info!("HTTP API shut down gracefully");
}
