use tracing::info;
use tracing_subscriber::EnvFilter;
use vidlens_api::{build_router, state::AppState};
use vidlens_config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let state = AppState::from_settings(&settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "vidlens API listening");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
