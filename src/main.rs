use gluco_track::{router, AppState, Config, ReadingRepository};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let repo = ReadingRepository::load(config.data_path.clone()).await;
    info!(
        path = %config.data_path.display(),
        readings = repo.len(),
        "loaded readings"
    );

    let generator = match config.text_generator() {
        Ok(generator) => {
            info!(backend = generator.name(), "insights enabled");
            Some(generator)
        }
        Err(err) => {
            warn!("insights disabled: {err}");
            None
        }
    };

    let app = router(AppState::new(repo, generator));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
