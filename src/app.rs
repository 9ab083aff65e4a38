use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{health, parquet, tempest};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/proxy/tempest", tempest::router())
        .nest("/proxy/parquet", parquet::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
