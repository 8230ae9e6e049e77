//! Serve command - read-only HTTP endpoint for the grouped openings.
//!
//! Every request to the JSON route re-runs the full discovery pipeline, so
//! responses are always fresh; nothing is cached or shared between requests
//! beyond the read-only client configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use clap::Args;
use tracing::{info, warn};

use openings_core::{OpeningGroup, build_payload};
use openings_fetch::{LichessApi, LichessClient};
use openings_sources::{SourceMode, collect_games, resolve};

use crate::Cli;

/// Default listen port.
const DEFAULT_PORT: u16 = 8000;

/// Embedded HTML viewer; refreshes itself against `/api/openings`.
const VIEWER_HTML: &str = include_str!("../../assets/viewer.html");

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on.
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Shared, read-only request context.
#[derive(Clone)]
struct AppState {
    api: Arc<dyn LichessApi>,
    mode: SourceMode,
    limit: Option<usize>,
}

/// Runs the serve command.
pub async fn run(args: &ServeArgs, cli: &Cli) -> Result<()> {
    let state = AppState {
        api: Arc::new(LichessClient::new()),
        mode: cli.source.into(),
        limit: cli.limit,
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!(port = args.port, "serving");
    println!("Serving on http://localhost:{}", args.port);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(viewer))
        .route("/api/openings", get(api_openings))
        .fallback(not_found)
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /` - the HTML viewer.
///
/// The pipeline runs here too, so an unreachable upstream surfaces as the
/// same 502 as the JSON route instead of an empty-looking page.
async fn viewer(State(state): State<AppState>) -> Result<Html<&'static str>, (StatusCode, String)> {
    run_pipeline(&state).await.map_err(bad_gateway)?;
    Ok(Html(VIEWER_HTML))
}

/// `GET /api/openings` - fresh pipeline run, grouped payload as JSON.
///
/// Upstream failures map to 502 with a plain-text explanation naming the
/// failing URL.
async fn api_openings(
    State(state): State<AppState>,
) -> Result<Json<Vec<OpeningGroup>>, (StatusCode, String)> {
    let payload = run_pipeline(&state).await.map_err(bad_gateway)?;
    Ok(Json(payload))
}

fn bad_gateway(error: openings_fetch::FetchError) -> (StatusCode, String) {
    warn!(%error, "upstream fetch failed");
    (
        StatusCode::BAD_GATEWAY,
        format!(
            "Unable to reach the Lichess API. Check your internet \
             connection or firewall settings.\n\nDetails: {error}\n"
        ),
    )
}

/// Any other route.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn run_pipeline(state: &AppState) -> Result<Vec<OpeningGroup>, openings_fetch::FetchError> {
    let resolved = resolve(state.api.as_ref(), state.mode, state.limit).await?;
    let games = collect_games(state.api.as_ref(), &resolved).await?;
    Ok(build_payload(&games))
}
