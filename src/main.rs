use std::net::SocketAddr;
use stressboard::bootstrap;
use stressboard::config::Config;
use stressboard::infrastructure::http::router::build_router;
use stressboard::infrastructure::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    let _observability = observability::init(&config)?;
    tracing::info!("Configuration loaded: backend={:?}", config.store_backend);

    let store = bootstrap::build_member_store(&config).await?;
    let state = bootstrap::build_app_state(store);

    // Build router
    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
