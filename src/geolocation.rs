//! Current-position lookup

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::GeolocationError;
use crate::location::Coordinates;

/// IP based position service (approximate, no permission prompt).
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

/// Resolves the device's position once per call.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, GeolocationError>;
}

/// Position lookup over HTTP
#[derive(Clone, Debug)]
pub struct IpGeolocator {
    url: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpGeolocator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new(DEFAULT_GEOLOCATION_URL)
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let response = self.http.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let data: IpLookupResponse = response.json().await?;

        if data.status == "success" {
            if let (Some(lat), Some(lon)) = (data.lat, data.lon) {
                return Ok(Coordinates::new(lat, lon));
            }
        }
        Err(GeolocationError::Unavailable(
            data.message.unwrap_or(data.status),
        ))
    }
}

/// Used when position lookup is turned off; always reports "unsupported".
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledGeolocator;

#[async_trait]
impl Geolocator for DisabledGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}
