use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{WeatherForecastFiltered, WeatherQuery};
use crate::routes::{check_rate_limit, parse_params, query_object, unsupported_method};
use crate::state::AppState;
use crate::transform::transform_weather;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(proxy_tempest_get)
            .post(proxy_tempest_post)
            .fallback(unsupported_method),
    )
}

async fn proxy_tempest_get(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<WeatherForecastFiltered>, AppError> {
    info!("GET /proxy/tempest - Proxying forecast request from {}", client);
    check_rate_limit(&state, client)?;
    let query = parse_params(query_object(params))?;
    proxy_tempest(state, query).await
}

#[axum::debug_handler]
async fn proxy_tempest_post(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    Json(body): Json<Value>,
) -> Result<Json<WeatherForecastFiltered>, AppError> {
    info!("POST /proxy/tempest - Proxying forecast request from {}", client);
    check_rate_limit(&state, client)?;
    let query = parse_params(body)?;
    proxy_tempest(state, query).await
}

async fn proxy_tempest(
    state: AppState,
    query: WeatherQuery,
) -> Result<Json<WeatherForecastFiltered>, AppError> {
    let raw = state.forecasts.fetch_forecast(&query).await.map_err(|e| {
        error!("Weather upstream failed: {}", e);
        AppError::from(e)
    })?;
    Ok(Json(transform_weather(&raw)))
}
