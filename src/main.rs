use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use orbs_proxy::app;
use orbs_proxy::config::Config;
use orbs_proxy::external::parqet::ParqetClient;
use orbs_proxy::external::weatherflow::WeatherFlowClient;
use orbs_proxy::logging::{init_logging, LoggingConfig};
use orbs_proxy::services::rate_limiter::FixedWindowLimiter;
use orbs_proxy::state::AppState;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(&LoggingConfig::from_env());

    let config = Config::from_env();

    // One shared client; both upstreams get the same fail-fast timeout.
    let client = reqwest::Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;

    let state = AppState {
        forecasts: Arc::new(WeatherFlowClient::new(
            client.clone(),
            config.weather_api_base.clone(),
        )),
        portfolios: Arc::new(ParqetClient::new(client, config.parqet_api_base.clone())),
        rate_limiter: Arc::new(FixedWindowLimiter::new(
            config.rate_limit_per_minute,
            RATE_LIMIT_WINDOW,
        )),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 orbs-proxy running at http://{}/", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
