pub mod parqet;
pub mod provider;
pub mod weatherflow;

pub use provider::{ForecastProvider, PortfolioProvider, UpstreamError};
