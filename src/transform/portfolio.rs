use serde_json::{json, Value};

use super::{field, is_truthy, nested_field};
use crate::models::{HoldingSummary, PerformanceSummary, PortfolioFiltered};

/// Selects a performance metric from a `performance` mapping, defaulting to
/// the literal integer 0 when the key is missing.
///
/// An absent key and an explicit zero are indistinguishable in the output.
/// Clients depend on that shape, so the default stays a plain 0.
pub fn get_perf(performance: &Value, key: &str) -> Value {
    performance.get(key).cloned().unwrap_or_else(|| json!(0))
}

/// Selects one series value out of a chart record's `values` mapping,
/// defaulting to 0 when the mapping or the key is missing.
pub fn get_perf_chart(record: &Value, key: &str) -> Value {
    record
        .get("values")
        .and_then(|values| values.get(key))
        .cloned()
        .unwrap_or_else(|| json!(0))
}

/// Projects a raw assemble payload onto the reduced schema.
///
/// Total over arbitrary JSON; holdings that do not qualify are dropped, the
/// rest keep their upstream order.
pub fn transform_portfolio(raw: &Value, perf: &str, perf_chart: &str) -> PortfolioFiltered {
    let holdings = raw
        .get("holdings")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|holding| project_holding(holding, perf))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let performance_source = field(raw, "performance");
    let performance = PerformanceSummary {
        value_start: field(&performance_source, "purchaseValueForInterval"),
        value_now: field(&performance_source, "value"),
        perf: get_perf(&performance_source, perf),
    };

    let chart = raw
        .get("charts")
        .and_then(Value::as_array)
        .map(|records| {
            // The first chart record is the interval baseline; clients never
            // see it, even when it is the only record.
            records
                .iter()
                .skip(1)
                .map(|record| get_perf_chart(record, perf_chart))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    PortfolioFiltered {
        holdings,
        performance,
        chart,
    }
}

fn project_holding(holding: &Value, perf: &str) -> Option<HoldingSummary> {
    let asset_type = holding
        .get("assetType")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_lowercase();
    if asset_type != "security" && asset_type != "crypto" {
        return None;
    }

    let is_sold = nested_field(holding, "position", "isSold");
    let shares = nested_field(holding, "position", "shares");
    // Exactly zero shares marks an emptied position; negative or null
    // shares pass through.
    if is_truthy(&is_sold) || shares.as_f64() == Some(0.0) {
        return None;
    }

    let performance = field(holding, "performance");
    Some(HoldingSummary {
        asset_type,
        currency: field(holding, "currency"),
        id: nested_field(holding, "asset", "identifier"),
        name: nested_field(holding, "sharedAsset", "name"),
        price_start: field(&performance, "priceAtIntervalStart"),
        value_start: field(&performance, "purchaseValueForInterval"),
        price_now: nested_field(holding, "position", "currentPrice"),
        value_now: nested_field(holding, "position", "currentValue"),
        shares,
        perf: get_perf(&performance, perf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn holding(asset_type: &str, shares: Value, is_sold: Value) -> Value {
        json!({
            "assetType": asset_type,
            "currency": "EUR",
            "position": {"shares": shares, "isSold": is_sold}
        })
    }

    #[test]
    fn test_zero_shares_excluded_negative_included() {
        let raw = json!({
            "holdings": [
                holding("SECURITY", json!(0), json!(false)),
                holding("security", json!(-5), json!(false)),
            ]
        });
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");

        assert_eq!(filtered.holdings.len(), 1);
        assert_eq!(filtered.holdings[0].shares, json!(-5));
    }

    #[test]
    fn test_null_shares_pass_through() {
        let raw = json!({"holdings": [holding("crypto", Value::Null, json!(false))]});
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");
        assert_eq!(filtered.holdings.len(), 1);
        assert_eq!(filtered.holdings[0].shares, Value::Null);
    }

    #[test]
    fn test_foreign_asset_types_excluded() {
        let raw = json!({
            "holdings": [
                holding("bond", json!(10), json!(false)),
                holding("realEstate", json!(10), json!(false)),
                {"currency": "EUR", "position": {"shares": 10}},
            ]
        });
        assert!(transform_portfolio(&raw, "ttwror", "drawdown").holdings.is_empty());
    }

    #[test]
    fn test_sold_holdings_excluded() {
        let raw = json!({
            "holdings": [
                holding("security", json!(10), json!(true)),
                holding("crypto", json!(2), json!(false)),
            ]
        });
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");
        assert_eq!(filtered.holdings.len(), 1);
        assert_eq!(filtered.holdings[0].asset_type, "crypto");
    }

    #[test]
    fn test_asset_type_is_lowercased_in_output() {
        let raw = json!({"holdings": [holding("SECURITY", json!(3), json!(false))]});
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");
        assert_eq!(filtered.holdings[0].asset_type, "security");
    }

    #[test]
    fn test_holding_projection_paths() {
        let raw = json!({
            "holdings": [{
                "assetType": "security",
                "currency": "USD",
                "asset": {"identifier": "US0378331005"},
                "sharedAsset": {"name": "Apple Inc."},
                "performance": {
                    "priceAtIntervalStart": 150.0,
                    "purchaseValueForInterval": 1500.0,
                    "ttwror": 0.12
                },
                "position": {
                    "shares": 10,
                    "isSold": false,
                    "currentPrice": 170.0,
                    "currentValue": 1700.0
                }
            }]
        });
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");
        let h = &filtered.holdings[0];

        assert_eq!(h.id, json!("US0378331005"));
        assert_eq!(h.name, json!("Apple Inc."));
        assert_eq!(h.price_start, json!(150.0));
        assert_eq!(h.value_start, json!(1500.0));
        assert_eq!(h.price_now, json!(170.0));
        assert_eq!(h.value_now, json!(1700.0));
        assert_eq!(h.perf, json!(0.12));
    }

    #[test]
    fn test_performance_projection_defaults() {
        let filtered = transform_portfolio(&json!({}), "ttwror", "drawdown");
        assert_eq!(filtered.performance.value_start, Value::Null);
        assert_eq!(filtered.performance.value_now, Value::Null);
        assert_eq!(filtered.performance.perf, json!(0));
        assert!(filtered.holdings.is_empty());
        assert!(filtered.chart.is_empty());
    }

    #[test]
    fn test_chart_skips_first_record_unconditionally() {
        let raw = json!({
            "charts": [
                {"values": {"drawdown": -0.01}},
                {"values": {"drawdown": -0.02}},
                {"values": {"drawdown": -0.03}}
            ]
        });
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");
        assert_eq!(filtered.chart, vec![json!(-0.02), json!(-0.03)]);
    }

    #[test]
    fn test_single_chart_record_yields_empty_chart() {
        let raw = json!({"charts": [{"values": {"drawdown": -0.01}}]});
        assert!(transform_portfolio(&raw, "ttwror", "drawdown").chart.is_empty());
    }

    #[test]
    fn test_empty_chart_list_yields_empty_chart() {
        let raw = json!({"charts": []});
        assert!(transform_portfolio(&raw, "ttwror", "drawdown").chart.is_empty());
    }

    #[test]
    fn test_chart_record_without_selected_series_maps_to_zero() {
        let raw = json!({"charts": [{}, {"values": {"ttwror": 0.04}}]});
        let filtered = transform_portfolio(&raw, "ttwror", "drawdown");
        assert_eq!(filtered.chart, vec![json!(0)]);
    }

    #[test]
    fn test_get_perf_default_and_explicit_zero() {
        assert_eq!(get_perf(&json!({}), "ttwror"), json!(0));
        assert_eq!(get_perf(&json!({"ttwror": 0.05}), "ttwror"), json!(0.05));
        // Explicit zero is indistinguishable from the absent-key default.
        assert_eq!(get_perf(&json!({"ttwror": 0}), "ttwror"), json!(0));
    }

    #[test]
    fn test_get_perf_chart_defaults() {
        assert_eq!(get_perf_chart(&json!({}), "drawdown"), json!(0));
        assert_eq!(
            get_perf_chart(&json!({"values": {"drawdown": -0.07}}), "drawdown"),
            json!(-0.07)
        );
    }
}
