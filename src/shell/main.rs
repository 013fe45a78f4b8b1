use tracing_subscriber::{EnvFilter, fmt};

use crawl_fixtures::shell::config::FixtureConfig;
use crawl_fixtures::shell::http::router;
use crawl_fixtures::shell::server::bind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FixtureConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    fmt().with_env_filter(filter).init();

    let server = bind(config).await?;
    tracing::info!(
        addr = %server.listener.local_addr()?,
        seed_pages = server.state.config.seed_pages,
        "fixture sites listening"
    );

    axum::serve(server.listener, router(server.state)).await?;
    Ok(())
}
