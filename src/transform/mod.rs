mod portfolio;
mod weather;

pub use portfolio::{get_perf, get_perf_chart, transform_portfolio};
pub use weather::transform_weather;

use serde_json::Value;

/// Get-or-default accessor shared by both transformers: a missing key maps
/// to JSON null, a present-but-null value stays null.
pub(crate) fn field(source: &Value, key: &str) -> Value {
    source.get(key).cloned().unwrap_or(Value::Null)
}

/// Two-level variant of [`field`] for paths like `position.shares`.
pub(crate) fn nested_field(source: &Value, outer: &str, inner: &str) -> Value {
    source
        .get(outer)
        .and_then(|v| v.get(inner))
        .cloned()
        .unwrap_or(Value::Null)
}

/// JSON truthiness: null, false, 0, "", [] and {} are falsy, everything
/// else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(entries) => !entries.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
