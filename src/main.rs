use std::sync::Arc;

use tracing::info;

use sharebin::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = sharebin::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        sharebin::logging::init_console_only(&config.logging.level);
    }

    info!("sharebin - file and text sharing service");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let server = WebServer::new(&config.server, &config.upload, Arc::new(db));
    info!(
        "Server configured on {}:{} (max upload {}MB)",
        config.server.host, config.server.port, config.upload.max_file_size_mb
    );

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
