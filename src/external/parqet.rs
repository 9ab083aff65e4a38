use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::external::provider::{PortfolioProvider, UpstreamError};
use crate::models::AssembleRequest;

/// Client for the Parqet portfolio-assembly endpoint. Assembly is always a
/// POST; the include set and chart resolution are pinned in the base URL.
pub struct ParqetClient {
    client: reqwest::Client,
    base_url: String,
}

impl ParqetClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl PortfolioProvider for ParqetClient {
    async fn assemble(&self, request: &AssembleRequest) -> Result<Value, UpstreamError> {
        info!(
            "Forwarding assemble request for portfolios {:?} to {}",
            request.portfolio_ids, self.base_url
        );

        let response = self
            .client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                detail: format!("Parqet API error: {body}"),
            });
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}
