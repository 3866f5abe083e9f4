//! Finsight Web Server
//!
//! Axum-based server rendering the learning gallery and the credit score
//! workflow as server-side HTML, with HTMX-driven fragment swaps.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use finsight_client::{ScoringClient, VideoSearchClient};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home::index))
        .route("/videos", get(routes::gallery::load_videos))
        .route("/player/close", get(routes::gallery::close_player))
        .route("/player/{video_id}", get(routes::gallery::open_player))
        .route("/score", post(routes::score::submit))
        .route("/score/sample", post(routes::score::submit_sample))
        .route("/score/reset", post(routes::score::reset))
        .route("/loan", post(routes::loan::request_loan))
        .route("/handoff/{feature}", post(routes::handoff::handoff))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    videos: VideoSearchClient,
    scoring: ScoringClient,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(videos, scoring);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
