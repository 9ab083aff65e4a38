use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AssembleRequest, PortfolioFiltered, PortfolioQuery};
use crate::routes::{check_rate_limit, parse_params, query_object, unsupported_method};
use crate::state::AppState;
use crate::transform::transform_portfolio;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(proxy_parquet_get)
            .post(proxy_parquet_post)
            .fallback(unsupported_method),
    )
}

async fn proxy_parquet_get(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PortfolioFiltered>, AppError> {
    info!("GET /proxy/parquet - Proxying portfolio request from {}", client);
    check_rate_limit(&state, client)?;
    let query = parse_params(query_object(params))?;
    proxy_parquet(state, query).await
}

#[axum::debug_handler]
async fn proxy_parquet_post(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    Json(body): Json<Value>,
) -> Result<Json<PortfolioFiltered>, AppError> {
    info!("POST /proxy/parquet - Proxying portfolio request from {}", client);
    check_rate_limit(&state, client)?;
    let query = parse_params(body)?;
    proxy_parquet(state, query).await
}

async fn proxy_parquet(
    state: AppState,
    query: PortfolioQuery,
) -> Result<Json<PortfolioFiltered>, AppError> {
    let request = AssembleRequest::for_portfolio(query.id.clone(), query.timeframe);
    let raw: Value = state.portfolios.assemble(&request).await.map_err(|e| {
        error!("Parqet upstream failed: {}", e);
        AppError::from(e)
    })?;
    Ok(Json(transform_portfolio(
        &raw,
        query.perf.as_str(),
        query.perf_chart.as_str(),
    )))
}
