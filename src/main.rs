mod logs;

use std::sync::Arc;

use beachtrack_domain::{
    player::ArcPlayerRepository,
    r#match::{ArcMatchRepository, MatchService},
    stats::StatsService,
};
use beachtrack_persistence_postgres::{
    matches::PostgresMatchRepository, players::PostgresPlayerRepository,
};
use log::info;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().expect("Failed to load .env file");

    logs::init_logger();

    let match_repo: ArcMatchRepository = Arc::new(Box::new(PostgresMatchRepository::new()));
    let player_repo: ArcPlayerRepository = Arc::new(Box::new(PostgresPlayerRepository::new()));

    let match_service = Arc::new(MatchService::new(match_repo.clone(), player_repo.clone()));
    let stats_service = Arc::new(StatsService::new(match_repo, player_repo.clone()));

    info!("Starting application");

    beachtrack_server_api::http::run(match_service, stats_service, player_repo, shutdown_signal())
        .await;
}
