pub(crate) mod health;
pub(crate) mod parquet;
pub(crate) mod tempest;

use std::collections::HashMap;
use std::net::SocketAddr;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::errors::AppError;
use crate::state::AppState;

/// Decodes client parameters (query map or JSON body) into a typed request
/// descriptor. Any missing field or out-of-range value is a 400.
pub(crate) fn parse_params<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid request parameters: {e}")))
}

/// Lifts GET query parameters into the same JSON shape a POST body carries,
/// so both methods share one validation path.
pub(crate) fn query_object(params: HashMap<String, String>) -> Value {
    Value::Object(
        params
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}

pub(crate) fn check_rate_limit(state: &AppState, client: SocketAddr) -> Result<(), AppError> {
    if state.rate_limiter.check(client.ip()) {
        Ok(())
    } else {
        error!("Rate limit exceeded for {}", client);
        Err(AppError::RateLimited)
    }
}

/// Fallback for the proxy routes: anything but GET or POST is a 400, not
/// the default 405.
pub(crate) async fn unsupported_method() -> AppError {
    AppError::Validation("Unsupported request method".to_string())
}
