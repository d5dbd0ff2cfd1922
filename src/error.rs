//! Error types for the weather and position lookups

/// Shown when the backend failure carries no message of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported on this system.";
pub const GEOLOCATION_FAILED_MESSAGE: &str =
    "Unable to get your current location. Please enter a location manually.";

/// A failed weather request. Transport errors, error statuses and bad
/// bodies are all reported the same way to the user.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// The backend's own message when it sent one, the generic prompt otherwise.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FETCH_FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GeolocationError {
    #[error("geolocation is disabled")]
    Unsupported,
    #[error("position lookup failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

impl GeolocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::Unsupported => GEOLOCATION_UNSUPPORTED_MESSAGE,
            _ => GEOLOCATION_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_backend_message() {
        let err = FetchError::Status {
            status: 404,
            message: Some("location not found".into()),
        };
        assert_eq!(err.user_message(), "location not found");
    }

    #[test]
    fn status_error_without_message_falls_back() {
        let err = FetchError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), FETCH_FALLBACK_MESSAGE);
        assert_eq!(err.to_string(), "backend returned 500");
    }

    #[test]
    fn geolocation_messages() {
        assert_eq!(
            GeolocationError::Unsupported.user_message(),
            GEOLOCATION_UNSUPPORTED_MESSAGE
        );
        assert_eq!(
            GeolocationError::Unavailable("denied".into()).user_message(),
            GEOLOCATION_FAILED_MESSAGE
        );
    }
}
