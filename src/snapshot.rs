//! Weather payload returned by the backend

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::overview::{self, OverviewFacts};

/// One complete weather response: current conditions plus the forecast.
///
/// Never mutated after it is received; a new search replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub lat: f64,
    pub lon: f64,
    pub tz: String,
    /// ISO-8601 observation timestamp, kept verbatim
    pub date: String,
    pub units: String,
    /// Free-text sentence; structured facts are recovered by [`overview::parse_overview`]
    pub weather_overview: String,
    /// Chronological; the first entry is today
    pub forecast_5_days: Vec<ForecastDay>,
}

/// One day of the forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub weather: String,
    pub icon: String,
}

impl WeatherSnapshot {
    pub fn facts(&self) -> OverviewFacts {
        overview::parse_overview(&self.weather_overview)
    }
}
