use anyhow::Result;
use marketdesk::config::ServerConfig;
use marketdesk::seed;
use marketdesk::server::build_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("MARKETDESK_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    };

    let state = seed::build_state(&config)?;
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(%addr, "marketdesk listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
