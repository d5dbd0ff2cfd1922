//! Field extraction from the free-text weather overview sentence
//!
//! The backend only describes current conditions in prose, e.g.
//! `"... temperature of 21.5°C, feels like 20.0°C. Wind speed is 3.2 m/s,
//! humidity is 55% and pressure is 1013 hPa. The weather is light rain, ..."`.
//! Each fact is matched by its own anchor and is independently optional, so
//! a sentence missing a clause still yields every other field.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label shown when the sentence carries no condition clause.
pub const UNKNOWN_CONDITION: &str = "Unknown";

static CURRENT_TEMP: LazyLock<Regex> = LazyLock::new(|| pattern(r"temperature of (-?[\d.]+)°C"));
static FEELS_LIKE: LazyLock<Regex> = LazyLock::new(|| pattern(r"feels like (-?[\d.]+)°C"));
static WIND_SPEED: LazyLock<Regex> = LazyLock::new(|| pattern(r"Wind speed is (-?[\d.]+) m/s"));
static HUMIDITY: LazyLock<Regex> = LazyLock::new(|| pattern(r"humidity is (\d+)%"));
static PRESSURE: LazyLock<Regex> = LazyLock::new(|| pattern(r"pressure is (\d+) hPa"));
static CONDITION: LazyLock<Regex> = LazyLock::new(|| pattern(r"weather is ([^,]+)"));

#[allow(clippy::expect_used)]
fn pattern(source: &str) -> Regex {
    // Patterns are compile-time literals covered by the unit tests below.
    Regex::new(source).expect("overview pattern is valid")
}

/// Facts recovered from one overview sentence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OverviewFacts {
    /// °C
    pub current_temp: Option<f64>,
    /// °C
    pub feels_like: Option<f64>,
    /// m/s
    pub wind_speed: Option<f64>,
    /// percent
    pub humidity: Option<u64>,
    /// hPa
    pub pressure: Option<u64>,
    pub condition: Option<String>,
}

impl OverviewFacts {
    pub fn condition_label(&self) -> &str {
        self.condition.as_deref().unwrap_or(UNKNOWN_CONDITION)
    }
}

/// Extract every known fact from `sentence`.
///
/// Values are passed through as parsed: no range checks, no clamping.
pub fn parse_overview(sentence: &str) -> OverviewFacts {
    OverviewFacts {
        current_temp: capture(&CURRENT_TEMP, sentence).and_then(leading_decimal),
        feels_like: capture(&FEELS_LIKE, sentence).and_then(leading_decimal),
        wind_speed: capture(&WIND_SPEED, sentence).and_then(leading_decimal),
        humidity: capture(&HUMIDITY, sentence).map(whole_number),
        pressure: capture(&PRESSURE, sentence).map(whole_number),
        condition: capture(&CONDITION, sentence).map(str::to_string),
    }
}

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Digits only; values past `u64::MAX` saturate instead of vanishing.
fn whole_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Parse the longest numeric prefix: `"1.2.3"` reads as `1.2`, `"."` as nothing.
fn leading_decimal(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        match c {
            '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL: &str = "Currently the temperature of 21.5°C, it feels like 20.0°C. \
        Wind speed is 3.2 m/s, humidity is 55% and pressure is 1013 hPa. \
        The weather is light rain, with clouds later.";

    #[test]
    fn extracts_all_six_fields() {
        let facts = parse_overview(FULL);

        assert_eq!(
            facts,
            OverviewFacts {
                current_temp: Some(21.5),
                feels_like: Some(20.0),
                wind_speed: Some(3.2),
                humidity: Some(55),
                pressure: Some(1013),
                condition: Some("light rain".into()),
            }
        );
        assert_eq!(facts.condition_label(), "light rain");
    }

    #[test]
    fn missing_wind_clause_leaves_other_fields() {
        let sentence = "The temperature of 8°C feels like 6.5°C, humidity is 80% and \
            pressure is 998 hPa. The weather is mist, calm.";

        let facts = parse_overview(sentence);

        assert_eq!(facts.wind_speed, None);
        assert_eq!(facts.current_temp, Some(8.0));
        assert_eq!(facts.feels_like, Some(6.5));
        assert_eq!(facts.humidity, Some(80));
        assert_eq!(facts.pressure, Some(998));
        assert_eq!(facts.condition_label(), "mist");
    }

    #[test]
    fn oversized_integers_pass_through() {
        let facts = parse_overview("humidity is 5000000000% and pressure is 4294967296 hPa");

        assert_eq!(facts.humidity, Some(5_000_000_000));
        assert_eq!(facts.pressure, Some(4_294_967_296));

        let facts = parse_overview("pressure is 99999999999999999999999 hPa");
        assert_eq!(facts.pressure, Some(u64::MAX));
    }

    #[test]
    fn empty_sentence_yields_nothing() {
        let facts = parse_overview("");

        assert_eq!(facts, OverviewFacts::default());
        assert_eq!(facts.condition_label(), UNKNOWN_CONDITION);
    }

    #[test]
    fn condition_runs_to_end_without_comma() {
        let facts = parse_overview("Today the weather is clear sky");
        assert_eq!(facts.condition.as_deref(), Some("clear sky"));
    }

    #[test]
    fn negative_temperatures_parse() {
        let facts = parse_overview("a temperature of -4.5°C that feels like -9°C");
        assert_eq!(facts.current_temp, Some(-4.5));
        assert_eq!(facts.feels_like, Some(-9.0));
    }

    #[test]
    fn malformed_numbers_pass_through_as_parsed() {
        let facts = parse_overview("temperature of 1.2.3°C, Wind speed is . m/s, humidity is 140%");
        assert_eq!(facts.current_temp, Some(1.2));
        assert_eq!(facts.wind_speed, None);
        assert_eq!(facts.humidity, Some(140));
    }

    #[test]
    fn anchors_are_case_sensitive() {
        let facts = parse_overview("wind speed is 4 m/s, Humidity is 40%");
        assert_eq!(facts.wind_speed, None);
        assert_eq!(facts.humidity, None);
    }

    #[test]
    fn leading_decimal_prefixes() {
        assert_eq!(leading_decimal("12"), Some(12.0));
        assert_eq!(leading_decimal("-0.5"), Some(-0.5));
        assert_eq!(leading_decimal(".75"), Some(0.75));
        assert_eq!(leading_decimal("-"), None);
        assert_eq!(leading_decimal(""), None);
    }
}
