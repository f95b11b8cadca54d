/**
 * Trip Wizards Chat Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app until
 * Ctrl-C.
 */

use tripwizards::backend::server::init::create_app;
use tripwizards::shared::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("[Startup] Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let app = create_app(&config).await?;

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[Startup] Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("[Shutdown] Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[Shutdown] Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("[Shutdown] Ctrl-C received, draining connections");
}
