use cc_config::Config;
use cc_server::logger::{self, LogSink};
use cc_server::{AppState, AuthService, build_router};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let sink = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            LogSink::File(log_dir.join(filename))
        }
        None => LogSink::Stdout {
            colored: config.logging.colored,
        },
    };

    // Before anything else logs
    logger::initialize(config.logging.level, sink)?;

    info!("Starting cc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cc_db::open_pool(&database_path, config.database.max_connections).await?;
    info!("Migrations complete");

    let auth_service = Arc::new(AuthService::from_config(pool.clone(), &config)?);
    let app_state = AppState::new(pool.clone(), auth_service);

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will only stop when the process is killed");
            std::future::pending::<()>().await;
        }
    }
}
