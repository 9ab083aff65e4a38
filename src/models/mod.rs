mod portfolio;
mod weather;

pub use portfolio::{
    AssembleRequest, HoldingSummary, PerfChartSeries, PerfMetric, PerformanceSummary,
    PortfolioFiltered, PortfolioQuery, Timeframe,
};
pub use weather::{
    DailyForecast, DistanceUnit, ForecastSection, PrecipUnit, PressureUnit, TemperatureUnit,
    WeatherForecastFiltered, WeatherQuery, WindUnit,
};
