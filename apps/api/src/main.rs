mod advisor;
mod config;
mod emphasis;
mod errors;
mod layout;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{ArrangementAdvisor, RemoteAdvisor};
use crate::config::Config;
use crate::layout::default_canvas_config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placard API v{}", env!("CARGO_PKG_VERSION"));

    // Canvas constants — the contract shared with the rendering layer.
    let canvas = default_canvas_config();
    info!(
        "Canvas config: {}x{}, margin {}, clearance {}",
        canvas.width, canvas.height, canvas.margin, canvas.clearance
    );

    // LLM client and remote advisor are optional; the deterministic fitter
    // carries every request when they are absent.
    let advisor_deadline = Duration::from_secs(config.advisor_timeout_secs);
    let llm = config
        .anthropic_api_key
        .clone()
        .map(|key| LlmClient::new(key, advisor_deadline));

    let advisor: Option<Arc<dyn ArrangementAdvisor>> = llm.clone().map(|client| {
        Arc::new(RemoteAdvisor::new(client, canvas.clone(), advisor_deadline))
            as Arc<dyn ArrangementAdvisor>
    });
    match &advisor {
        Some(_) => info!(
            "Remote arrangement advisor enabled (model: {})",
            llm_client::MODEL
        ),
        None => info!("No ANTHROPIC_API_KEY set — deterministic fitter only"),
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        canvas,
        llm,
        advisor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
