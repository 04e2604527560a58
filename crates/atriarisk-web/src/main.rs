//! atriarisk Web Server
//!
//! Run with: cargo run -p atriarisk-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting atriarisk web server...");

    // Create app state
    let state = atriarisk_web::state::AppState::new("static", "uploads")?;

    // Build router
    let app = atriarisk_web::router::build_router(state);

    // Bind to port
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
