use serde_json::{Map, Value};

use super::field;
use crate::models::{DailyForecast, ForecastSection, WeatherForecastFiltered};

const CURRENT_CONDITION_FIELDS: [&str; 8] = [
    "air_temperature",
    "icon",
    "conditions",
    "feels_like",
    "relative_humidity",
    "station_pressure",
    "precip_probability",
    "wind_gust",
];

const DAILY_FORECAST_LIMIT: usize = 4;

/// Projects a raw better_forecast payload onto the reduced schema.
///
/// Total over arbitrary JSON: a missing `current_conditions` object becomes
/// an empty one, a missing `forecast.daily` list becomes an empty list, and
/// missing fields inside either become null. The daily list is truncated to
/// the first four entries in upstream order.
pub fn transform_weather(raw: &Value) -> WeatherForecastFiltered {
    let mut current_conditions = Map::new();
    if let Some(source) = raw.get("current_conditions") {
        for key in CURRENT_CONDITION_FIELDS {
            current_conditions.insert(key.to_string(), field(source, key));
        }
    }

    let daily = raw
        .get("forecast")
        .and_then(|forecast| forecast.get("daily"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .take(DAILY_FORECAST_LIMIT)
                .map(project_daily)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    WeatherForecastFiltered {
        current_conditions,
        forecast: ForecastSection { daily },
    }
}

fn project_daily(entry: &Value) -> DailyForecast {
    DailyForecast {
        day_start_local: field(entry, "day_start_local"),
        air_temp_high: field(entry, "air_temp_high"),
        air_temp_low: field(entry, "air_temp_low"),
        conditions: field(entry, "conditions"),
        day_num: field(entry, "day_num"),
        month_num: field(entry, "month_num"),
        precip_probability: field(entry, "precip_probability"),
        precip_type: field(entry, "precip_type"),
        icon: field(entry, "icon"),
        precip_icon: field(entry, "precip_icon"),
    }
}
