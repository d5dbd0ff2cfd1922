//! Location queries
//!
//! Typed text and resolved positions both end up as one query string; the
//! backend decides whether it is a place name, a zip code or coordinates.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trim raw input; blank input is not a query.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A resolved position in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `"<lat>,<lon>"`, the same shape a user could type.
    pub fn to_query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_query() {
        assert_eq!(normalize_query("  New York \t"), Some("New York".into()));
        assert_eq!(normalize_query("10001"), Some("10001".into()));
    }

    #[test]
    fn blank_is_not_a_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \n\t"), None);
    }

    #[test]
    fn coordinates_query_form() {
        assert_eq!(
            Coordinates::new(40.7128, -74.006).to_query(),
            "40.7128,-74.006"
        );
        assert_eq!(Coordinates::new(51.0, 0.5).to_query(), "51,0.5");
    }
}
