use std::sync::Arc;

use crate::external::{ForecastProvider, PortfolioProvider};
use crate::services::rate_limiter::ClientRateLimit;

#[derive(Clone)]
pub struct AppState {
    pub forecasts: Arc<dyn ForecastProvider>,
    pub portfolios: Arc<dyn PortfolioProvider>,
    pub rate_limiter: Arc<dyn ClientRateLimit>,
}
