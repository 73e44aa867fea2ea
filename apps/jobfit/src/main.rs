use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobfit::config::Config;
use jobfit::matching::vocabulary::SkillVocabulary;
use jobfit::pdf::PdfTextExtractor;
use jobfit::routes::build_router;
use jobfit::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = Arc::new(SkillVocabulary::builtin());
    info!("Skill vocabulary loaded ({} terms)", vocabulary.term_count());

    let state = AppState {
        vocabulary,
        extractor: Arc::new(PdfTextExtractor),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
