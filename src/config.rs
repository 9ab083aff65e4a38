/// Default base URL for the WeatherFlow better_forecast endpoint.
pub const WEATHER_API_BASE: &str = "https://swd.weatherflow.com/swd/rest/better_forecast";

/// Default base URL for the Parqet assemble endpoint. The query string pins
/// the include set and chart resolution the transformers expect.
pub const PARQET_API_BASE: &str = "https://api.parqet.com/v1/portfolios/assemble?useInclude=true&include=ttwror&include=performance_charts&resolution=200";

/// Runtime configuration resolved from the environment, with defaults
/// pointing at the real upstreams.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub weather_api_base: String,
    pub parqet_api_base: String,
    pub rate_limit_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            weather_api_base: std::env::var("WEATHER_API_BASE")
                .unwrap_or_else(|_| WEATHER_API_BASE.to_string()),
            parqet_api_base: std::env::var("PARQET_API_BASE")
                .unwrap_or_else(|_| PARQET_API_BASE.to_string()),
            rate_limit_per_minute: std::env::var("RATE_LIMIT_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
