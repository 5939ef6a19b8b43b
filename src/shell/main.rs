use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use rate_copy::modules::rate_copy::adapters::outbound::upstream_http::HttpUpstream;
use rate_copy::shell::config::Config;
use rate_copy::shell::http::router;
use rate_copy::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let upstream = Arc::new(HttpUpstream::new(config.upstream_base_url.clone()));
    let app = router(AppState::new(upstream));

    tracing::info!(addr = %config.bind_addr, upstream = %config.upstream_base_url, "listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
