use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated parameters for a portfolio-assembly request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioQuery {
    pub id: String,
    pub timeframe: Timeframe,
    pub perf: PerfMetric,
    #[serde(rename = "perfChart")]
    pub perf_chart: PerfChartSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Today,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    Mtd,
    Ytd,
    Max,
}

/// Performance metric pulled out of upstream `performance` mappings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerfMetric {
    ReturnGross,
    ReturnNet,
    TotalReturnGross,
    TotalReturnNet,
    Ttwror,
    Izf,
}

impl PerfMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerfMetric::ReturnGross => "returnGross",
            PerfMetric::ReturnNet => "returnNet",
            PerfMetric::TotalReturnGross => "totalReturnGross",
            PerfMetric::TotalReturnNet => "totalReturnNet",
            PerfMetric::Ttwror => "ttwror",
            PerfMetric::Izf => "izf",
        }
    }
}

/// Chart series selected out of each chart record's `values` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerfChartSeries {
    PerfHistory,
    PerfHistoryUnrealized,
    Ttwror,
    Drawdown,
}

impl PerfChartSeries {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerfChartSeries::PerfHistory => "perfHistory",
            PerfChartSeries::PerfHistoryUnrealized => "perfHistoryUnrealized",
            PerfChartSeries::Ttwror => "ttwror",
            PerfChartSeries::Drawdown => "drawdown",
        }
    }
}

/// Body forwarded verbatim to the Parqet assemble endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembleRequest {
    pub portfolio_ids: Vec<String>,
    pub holding_ids: Vec<String>,
    pub asset_types: Vec<String>,
    pub timeframe: Timeframe,
}

impl AssembleRequest {
    pub fn for_portfolio(id: String, timeframe: Timeframe) -> Self {
        Self {
            portfolio_ids: vec![id],
            holding_ids: Vec::new(),
            asset_types: Vec::new(),
            timeframe,
        }
    }
}

/// Reduced portfolio returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioFiltered {
    pub holdings: Vec<HoldingSummary>,
    pub performance: PerformanceSummary,
    pub chart: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    /// Lower-cased upstream asset type, "security" or "crypto".
    pub asset_type: String,
    pub currency: Value,
    pub id: Value,
    pub name: Value,
    pub price_start: Value,
    pub value_start: Value,
    pub price_now: Value,
    pub value_now: Value,
    pub shares: Value,
    pub perf: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub value_start: Value,
    pub value_now: Value,
    pub perf: Value,
}
