use folio_service::{build_router, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting folio service...");

    let config = Config::load()?;
    tracing::info!(
        "Configuration loaded: {:?} page, {} concurrent conversion(s)",
        config.converter.page.size,
        config.concurrency.max_concurrent_conversions
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("folio service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST /generate-pdf");
    tracing::info!("  - GET  /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio_service=debug,folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
