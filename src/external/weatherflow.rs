use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::external::provider::{ForecastProvider, UpstreamError};
use crate::models::WeatherQuery;

/// Client for the WeatherFlow better_forecast endpoint. The validated query
/// descriptor is forwarded as-is; station parameters and the API key travel
/// as query parameters.
pub struct WeatherFlowClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherFlowClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ForecastProvider for WeatherFlowClient {
    async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<Value, UpstreamError> {
        info!(
            "Forwarding forecast request for station {} to {}",
            query.station_id, self.base_url
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                detail: format!("Weather API error: {body}"),
            });
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}
