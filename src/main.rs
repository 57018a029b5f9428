use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, info, warn};

use mergington::config::AppConfig;
use mergington::database::ActivityStore;
use mergington::logging::init_logging;
use mergington::web::{self, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = ActivityStore::seeded();
    info!(
        activities = store.snapshot().len(),
        capacity = ?config.capacity,
        "activity registry seeded"
    );

    let app = web::router(AppState::new(store, config.capacity), &config.static_dir);

    let addr = match config.listen_addr() {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Bind, with a fallback to the next port
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = match config.fallback_addr() {
                Ok(a) => a,
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("Could not bind fallback {}: {}", fallback, e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("Serving activities on http://{}", bound),
        Err(e) => warn!("Bound listener has no local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
