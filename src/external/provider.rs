use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{AssembleRequest, WeatherQuery};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Weather upstream. Returns the raw forecast payload untouched; shaping the
/// response is the transformer's job.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<Value, UpstreamError>;
}

/// Portfolio-assembly upstream.
#[async_trait]
pub trait PortfolioProvider: Send + Sync {
    async fn assemble(&self, request: &AssembleRequest) -> Result<Value, UpstreamError>;
}
