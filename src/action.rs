//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::location::Coordinates;
use crate::snapshot::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Input category =====
    /// Location box text changed
    InputChange(String),

    // ===== Weather category =====
    /// Intent: search a location (trimmed upstream; blank is ignored)
    WeatherSearch(String),

    /// Result: snapshot received
    WeatherDidLoad(WeatherSnapshot),

    /// Result: request failed, carries the user-facing message
    WeatherDidError(String),

    // ===== Geolocate category =====
    /// Intent: search at the current position (triggers async lookup)
    GeolocateRequest,

    /// Result: position resolved
    GeolocateDidResolve(Coordinates),

    /// Result: lookup unavailable or failed, carries the notice text
    GeolocateDidFail(String),

    // ===== Forecast category =====
    /// Highlight the next forecast day (wraps)
    ForecastNext,

    /// Highlight the previous forecast day (wraps)
    ForecastPrev,

    // ===== UI =====
    /// Close the notice modal
    UiDismissNotice,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the busy spinner
    Tick,

    /// Exit the application
    Quit,
}
