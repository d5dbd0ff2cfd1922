//! Display derivation: theme buckets, degree rounding, date labels

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown in place of a missing current temperature.
pub const TEMP_PLACEHOLDER: &str = "--°";

/// Label of the first forecast entry.
pub const TODAY_LABEL: &str = "Today";

/// Card color theme, one per temperature bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Theme {
    /// below 0°
    Freezing,
    /// [0, 10), also used when the temperature is unknown
    Cold,
    /// [10, 20)
    Mild,
    /// [20, 30)
    Warm,
    /// 30° and above
    Hot,
}

impl Theme {
    pub fn for_temperature(celsius: Option<f64>) -> Self {
        match celsius {
            None => Theme::Cold,
            Some(t) if t < 0.0 => Theme::Freezing,
            Some(t) if t < 10.0 => Theme::Cold,
            Some(t) if t < 20.0 => Theme::Mild,
            Some(t) if t < 30.0 => Theme::Warm,
            Some(_) => Theme::Hot,
        }
    }

    /// Gradient stops as RGB, start then end.
    pub fn gradient(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            Theme::Freezing => ((37, 99, 235), (126, 34, 206)), // Blue to purple
            Theme::Cold => ((96, 165, 250), (37, 99, 235)),     // Light to deep blue
            Theme::Mild => ((74, 222, 128), (59, 130, 246)),    // Green to blue
            Theme::Warm => ((250, 204, 21), (249, 115, 22)),    // Yellow to orange
            Theme::Hot => ((249, 115, 22), (220, 38, 38)),      // Orange to red
        }
    }

    /// Border and label color for the card.
    pub fn accent(self) -> Color {
        let (r, g, b) = self.gradient().0;
        Color::Rgb(r, g, b)
    }
}

/// Round half up, the way degree values are shown everywhere on the card.
pub fn round_temp(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn format_temp(value: Option<f64>) -> String {
    match value {
        Some(t) => format!("{}°", round_temp(t)),
        None => TEMP_PLACEHOLDER.to_string(),
    }
}

/// `Mon, Jan 15`. Unparseable input is returned verbatim.
pub fn format_day(date: &str) -> String {
    parse_day(date)
        .map(|d| d.format("%a, %b %-d").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Header label of a forecast entry; the first one is always "Today".
pub fn forecast_label(index: usize, date: &str) -> String {
    if index == 0 {
        TODAY_LABEL.to_string()
    } else {
        format_day(date)
    }
}

/// Observation time, e.g. `Mon, Jan 15 2024 14:30`, in the offset the
/// backend reported. Unparseable input is returned verbatim.
pub fn format_observed(date: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.format("%a, %b %-d %Y %H:%M").to_string();
    }
    if let Some(dt) = parse_naive_datetime(date) {
        return dt.format("%a, %b %-d %Y %H:%M").to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%a, %b %-d %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// `light rain` -> `Light Rain`
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_coords(lat: f64, lon: f64) -> String {
    format!("{:.2}°, {:.2}°", lat, lon)
}

fn parse_day(date: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.date_naive());
    }
    parse_naive_datetime(date).map(|dt| dt.date())
}

fn parse_naive_datetime(date: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
}
