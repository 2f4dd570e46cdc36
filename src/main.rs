#![recursion_limit = "256"]

mod config;
mod routes;

/// Failures that stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    // A missing .env is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::HostConfig::from_env()?;
    tracing::info!(api_base_url = %config.api_base_url, "prime service configured");

    let app = routes::app(&config).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "primes-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}
