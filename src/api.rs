//! Weather backend client

use serde::Deserialize;

use crate::error::FetchError;
use crate::snapshot::WeatherSnapshot;

/// Local backend serving `GET /weather?location=...`
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/weather";

/// Failure body. `message` is a string, or a list of strings for
/// validation errors; anything else is ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: serde_json::Value,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        let message = match self.message {
            serde_json::Value::String(text) => text,
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => return None,
        };
        (!message.is_empty()).then_some(message)
    }
}

/// Client for the weather backend. No timeout, no retries: a request runs
/// until the backend answers or the connection fails.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn request_url(&self, location: &str) -> String {
        format!(
            "{}?location={}",
            self.endpoint,
            urlencoding::encode(location)
        )
    }

    /// Fetch the snapshot for a place name, zip code or `"<lat>,<lon>"`.
    pub async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = self.request_url(location);
        tracing::debug!(%url, "requesting weather");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message);
            tracing::warn!(status = status.as_u16(), ?message, "weather backend error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let snapshot: WeatherSnapshot = serde_json::from_str(&body)?;
        tracing::info!(
            location,
            tz = %snapshot.tz,
            days = snapshot.forecast_5_days.len(),
            "weather loaded"
        );
        Ok(snapshot)
    }
}
