mod api;
mod dto;
mod fetch;
mod state;
mod tick;

use std::{sync::Arc, time::Instant};

use axum::routing::get;
use metroscope::{feed::Feed, repository::Repository};
use tracing::{error, info};

use crate::{state::AppState, tick::TickLoop};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing feed archive (path or url)");
        std::process::exit(1);
    }
    let path = if args[1].starts_with("http://") || args[1].starts_with("https://") {
        fetch::download_feed(&args[1])
            .await
            .expect("Failed to download feed")
    } else {
        std::path::Path::new(&args[1]).canonicalize().unwrap()
    };

    info!("Loading timetable...");
    let now = Instant::now();
    let feed = Feed::new().from_zip(path);
    let repository = Repository::new().load_feed(feed).unwrap();
    info!(
        "Loaded {} stations, {} lines, {} trains in {:?}",
        repository.stations.len(),
        repository.lines.len(),
        repository.trains.len(),
        now.elapsed()
    );

    let state = Arc::new(AppState::new(repository));
    let ticker = TickLoop::start(
        state.clone(),
        std::time::Duration::from_secs(tick::FLEET_TICK_SECS),
    );

    let app = axum::Router::new()
        .route("/fleet", get(api::fleet))
        .route("/eta", get(api::eta))
        .route("/stations", get(api::stations))
        .route("/lines", get(api::lines))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await
        .unwrap();
    ticker.stop();
}
