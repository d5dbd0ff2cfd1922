//! Provider icon codes: remote image URLs and terminal glyphs
//!
//! Icon codes follow the OpenWeather scheme, a two-digit family plus a
//! day/night suffix (`10d`, `01n`). The terminal cannot show the remote
//! image, so the card draws a glyph for the family and exposes the URL in
//! the forecast detail line.

/// Remote image for an icon code. No validation: a bad code yields a URL
/// that simply fails to resolve.
pub fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{code}@2x.png")
}

/// Condition family encoded by an icon code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconFamily {
    ClearSky,
    FewClouds,
    Clouds,
    Showers,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl IconFamily {
    pub fn from_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => IconFamily::ClearSky,
            Some("02") => IconFamily::FewClouds,
            Some("03") | Some("04") => IconFamily::Clouds,
            Some("09") => IconFamily::Showers,
            Some("10") => IconFamily::Rain,
            Some("11") => IconFamily::Thunderstorm,
            Some("13") => IconFamily::Snow,
            Some("50") => IconFamily::Mist,
            _ => IconFamily::Unknown,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            IconFamily::ClearSky => "\u{2600}\u{fe0f}",
            IconFamily::FewClouds => "\u{26c5}",
            IconFamily::Clouds => "\u{2601}\u{fe0f}",
            IconFamily::Showers => "\u{1f326}\u{fe0f}",
            IconFamily::Rain => "\u{1f327}\u{fe0f}",
            IconFamily::Thunderstorm => "\u{26c8}\u{fe0f}",
            IconFamily::Snow => "\u{2744}\u{fe0f}",
            IconFamily::Mist => "\u{1f32b}\u{fe0f}",
            IconFamily::Unknown => "\u{00b7}",
        }
    }
}

pub fn icon_glyph(code: &str) -> &'static str {
    IconFamily::from_code(code).glyph()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_template() {
        assert_eq!(
            icon_url("10d"),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
    }

    #[test]
    fn families_ignore_day_night_suffix() {
        assert_eq!(IconFamily::from_code("01d"), IconFamily::ClearSky);
        assert_eq!(IconFamily::from_code("01n"), IconFamily::ClearSky);
        assert_eq!(IconFamily::from_code("04n"), IconFamily::Clouds);
        assert_eq!(IconFamily::from_code("50d"), IconFamily::Mist);
    }

    #[test]
    fn unknown_codes_get_neutral_glyph() {
        assert_eq!(IconFamily::from_code(""), IconFamily::Unknown);
        assert_eq!(IconFamily::from_code("7"), IconFamily::Unknown);
        assert_eq!(icon_glyph("99x"), IconFamily::Unknown.glyph());
    }
}
