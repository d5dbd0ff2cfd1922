//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::location::normalize_query;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Input actions =====
        Action::InputChange(text) => {
            if state.is_loading() || state.input == text {
                return DispatchResult::unchanged();
            }
            state.input = text;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherSearch(query) => start_search(state, &query),

        // Results are applied in arrival order; there is no request id.
        Action::WeatherDidLoad(snapshot) => {
            state.weather = DataResource::Loaded(snapshot);
            state.is_refreshing = false;
            state.forecast_selected = 0;
            DispatchResult::changed()
        }

        Action::WeatherDidError(msg) => {
            state.weather = DataResource::Failed(msg);
            state.is_refreshing = false;
            state.forecast_selected = 0;
            DispatchResult::changed()
        }

        // ===== Geolocation actions =====
        Action::GeolocateRequest => {
            if state.is_loading() {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed_with(Effect::Geolocate)
        }

        // A typed search may have started while the lookup ran; it wins.
        Action::GeolocateDidResolve(coords) => {
            if state.is_loading() {
                tracing::info!(%coords, "position resolved during a search, ignoring");
                return DispatchResult::unchanged();
            }
            start_search(state, &coords.to_query())
        }

        Action::GeolocateDidFail(msg) => {
            state.notice = Some(msg);
            DispatchResult::changed()
        }

        // ===== Forecast actions =====
        Action::ForecastNext => step_forecast(state, 1),
        Action::ForecastPrev => step_forecast(state, -1),

        // ===== UI actions =====
        Action::UiDismissNotice => {
            if state.notice.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Shared entry point for typed queries and resolved positions.
fn start_search(state: &mut AppState, raw: &str) -> DispatchResult<Effect> {
    let Some(location) = normalize_query(raw) else {
        return DispatchResult::unchanged();
    };
    if state.is_loading() {
        return DispatchResult::unchanged();
    }

    // Keep the current card on screen until the new result arrives; an
    // error or an empty screen switches to the loading view.
    if state.weather.is_loaded() {
        state.is_refreshing = true;
    } else {
        state.weather = DataResource::Loading;
    }
    state.last_query = Some(location.clone());
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather { location })
}

fn step_forecast(state: &mut AppState, delta: isize) -> DispatchResult<Effect> {
    let len = state.forecast().len();
    if len < 2 {
        return DispatchResult::unchanged();
    }
    let current = state.forecast_selected.min(len - 1) as isize;
    state.forecast_selected = (current + delta).rem_euclid(len as isize) as usize;
    DispatchResult::changed()
}
