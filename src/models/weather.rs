use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validated parameters for a better_forecast request.
///
/// Serializes back to the exact query-parameter names the upstream expects,
/// so a provider can forward the descriptor as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub station_id: String,
    pub units_temp: TemperatureUnit,
    pub units_wind: WindUnit,
    pub units_pressure: PressureUnit,
    pub units_precip: PrecipUnit,
    pub units_distance: DistanceUnit,
    pub api_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    C,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    Mph,
    Kph,
    #[serde(rename = "m/s")]
    Mps,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "mb")]
    Mb,
    #[serde(rename = "inHg")]
    InHg,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipUnit {
    In,
    Mm,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Mi,
    Km,
}

/// Reduced forecast returned to the client. The key set is fixed; values are
/// copied verbatim from the upstream payload, null where missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherForecastFiltered {
    /// Empty when the upstream payload has no `current_conditions` object,
    /// otherwise exactly the eight selected fields.
    pub current_conditions: Map<String, Value>,
    pub forecast: ForecastSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSection {
    pub daily: Vec<DailyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub day_start_local: Value,
    pub air_temp_high: Value,
    pub air_temp_low: Value,
    pub conditions: Value,
    pub day_num: Value,
    pub month_num: Value,
    pub precip_probability: Value,
    pub precip_type: Value,
    pub icon: Value,
    pub precip_icon: Value,
}
