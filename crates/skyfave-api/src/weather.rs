//! Weather forecast lookups by resolved geographic coordinate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Provider, RestClient};
use crate::error::ApiError;
use crate::geocoding::Location;

const FORECAST_TEMPLATE: &str = "forecast/{key}/{lat},{lng}";

/// Conditions at one point in time. Timestamps arrive as Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    pub summary: Option<String>,
    pub icon: Option<String>,
    pub precip_probability: Option<f64>,
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}

/// A block of forecast conditions (hourly, daily, or minutely).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastData {
    pub summary: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub data: Vec<Condition>,
}

/// Full forecast payload. The weather provider returns this directly, with
/// no results envelope to unwrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub offset: Option<f64>,
    pub currently: Condition,
    pub minutely: Option<ForecastData>,
    pub hourly: Option<ForecastData>,
    pub daily: Option<ForecastData>,
}

/// Client for the weather provider.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    provider: Provider,
    rest: RestClient,
}

impl WeatherClient {
    pub fn new(provider: Provider, rest: RestClient) -> Self {
        Self { provider, rest }
    }

    /// Fetch the forecast for a resolved coordinate.
    ///
    /// Takes latitude/longitude only, never a free-text search term;
    /// resolving text to a coordinate is the geocoding client's job and
    /// must happen first.
    pub async fn find_by_location(&self, location: &Location) -> Result<Weather, ApiError> {
        tracing::debug!(
            "Weather lookup: {},{}",
            location.latitude,
            location.longitude
        );

        self.rest
            .get(&self.provider, FORECAST_TEMPLATE)
            .param("lat", location.latitude)?
            .param("lng", location.longitude)?
            .execute()
            .await
    }
}
