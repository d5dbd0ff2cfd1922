//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::overview::OverviewFacts;
use crate::snapshot::{ForecastDay, WeatherSnapshot};

/// Busy indicator timing.
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text currently in the location box
    #[debug(section = "Search", label = "Input")]
    pub input: String,

    /// Query of the most recent search
    #[debug(section = "Search", label = "Last query", debug_fmt)]
    pub last_query: Option<String>,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherSnapshot>,

    /// A new search is running while the previous snapshot stays on screen
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Highlighted forecast entry
    #[debug(section = "Weather", label = "Forecast day")]
    pub forecast_selected: usize,

    /// Blocking notice (position lookup failures)
    #[debug(section = "Notice", label = "Message", debug_fmt)]
    pub notice: Option<String>,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            last_query: None,
            weather: DataResource::Empty,
            is_refreshing: false,
            forecast_selected: 0,
            notice: None,
            tick_count: 0,
        }
    }

    /// A search is in flight; input and actions are disabled.
    pub fn is_loading(&self) -> bool {
        self.weather.is_loading() || self.is_refreshing
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.weather.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.weather.error()
    }

    pub fn facts(&self) -> Option<OverviewFacts> {
        self.snapshot().map(WeatherSnapshot::facts)
    }

    pub fn forecast(&self) -> &[ForecastDay] {
        self.snapshot()
            .map(|s| s.forecast_5_days.as_slice())
            .unwrap_or_default()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
