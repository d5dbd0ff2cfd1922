//! Tests using EffectStoreTestHarness
//!
//! Store, component and render checks combined: dispatch, inspect the
//! declared effects, then feed the async result back in.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{DataResource, EventKind};
use weather_card::{
    action::Action,
    components::{AppView, AppViewProps, Component},
    effect::Effect,
    error::{FETCH_FALLBACK_MESSAGE, GEOLOCATION_UNSUPPORTED_MESSAGE},
    reducer::reducer,
    snapshot::{ForecastDay, WeatherSnapshot},
    state::AppState,
};

fn mock_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        lat: 51.5074,
        lon: -0.1278,
        tz: "Europe/London".into(),
        date: "2024-01-15T12:00:00Z".into(),
        units: "metric".into(),
        weather_overview: "Right now a temperature of 7.6°C, \
                           feels like 4.9°C. Wind speed is 5.1 m/s, humidity is 81%, \
                           pressure is 1009 hPa. The weather is overcast clouds, no rain."
            .into(),
        forecast_5_days: ["2024-01-15", "2024-01-16", "2024-01-17"]
            .iter()
            .map(|date| ForecastDay {
                date: date.to_string(),
                temp_min: 3.2,
                temp_max: 8.5,
                weather: "overcast clouds".into(),
                icon: "04d".into(),
            })
            .collect(),
    }
}

fn state_with_weather() -> AppState {
    AppState {
        last_query: Some("London".into()),
        weather: DataResource::Loaded(mock_snapshot()),
        ..Default::default()
    }
}

// ============================================================================
// EffectStoreTestHarness Tests
// ============================================================================

#[test]
fn test_weather_search_flow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherSearch("London".into()));
    harness.assert_state(|s| s.weather.is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { location } if location == "London"),
    );

    // Simulate async completion
    harness.complete_action(Action::WeatherDidLoad(mock_snapshot()));
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");

    harness.assert_state(|s| s.weather.is_loaded());
    harness.assert_state(|s| s.facts().and_then(|f| f.humidity) == Some(81));
}

#[test]
fn test_weather_error_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherSearch("Atlantis".into()));
    harness.assert_state(|s| s.weather.is_loading());

    harness.complete_action(Action::WeatherDidError("location not found".into()));
    harness.process_emitted();

    harness.assert_state(|s| s.weather.is_failed());
    harness.assert_state(|s| s.error() == Some("location not found"));
    harness.assert_state(|s| s.snapshot().is_none());
    harness.assert_state(|s| !s.is_loading());
}

#[test]
fn test_error_replaces_previous_snapshot() {
    let mut harness = EffectStoreTestHarness::new(state_with_weather(), reducer);

    harness.dispatch_collect(Action::WeatherSearch("Nowhere".into()));
    harness.assert_state(|s| s.is_refreshing && s.snapshot().is_some());

    harness.complete_action(Action::WeatherDidError(FETCH_FALLBACK_MESSAGE.into()));
    harness.process_emitted();

    harness.assert_state(|s| s.snapshot().is_none());
    harness.assert_state(|s| s.error() == Some(FETCH_FALLBACK_MESSAGE));
}

#[test]
fn test_second_search_ignored_while_loading() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherSearch("London".into()));
    harness.drain_effects().effects_count(1);

    harness.dispatch_collect(Action::WeatherSearch("Paris".into()));
    harness.drain_effects().effects_count(0);
    harness.assert_state(|s| s.last_query.as_deref() == Some("London"));
}

#[test]
fn test_geolocation_unsupported_shows_notice() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::GeolocateRequest);
    harness
        .drain_effects()
        .effects_first_matches(|e| matches!(e, Effect::Geolocate));

    harness.complete_action(Action::GeolocateDidFail(
        GEOLOCATION_UNSUPPORTED_MESSAGE.into(),
    ));
    harness.process_emitted();

    harness.assert_state(|s| s.notice.as_deref() == Some(GEOLOCATION_UNSUPPORTED_MESSAGE));
    harness.assert_state(|s| s.weather.is_empty());

    harness.dispatch_collect(Action::UiDismissNotice);
    harness.assert_state(|s| s.notice.is_none());
}

#[test]
fn test_dispatch_all_cycles_forecast() {
    let mut harness = EffectStoreTestHarness::new(state_with_weather(), reducer);

    let results = harness.dispatch_all([
        Action::ForecastNext,
        Action::ForecastNext,
        Action::ForecastNext,
    ]);

    assert_eq!(results, vec![true, true, true]);
    // Three entries: wrapped back to the first
    harness.assert_state(|s| s.forecast_selected == 0);

    harness.dispatch_collect(Action::ForecastPrev);
    harness.assert_state(|s| s.forecast_selected == 2);
}

// ============================================================================
// Component + Store Integration Tests
// ============================================================================

#[test]
fn test_keyboard_triggers_search() {
    let initial = AppState {
        input: "London".into(),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(initial.clone(), reducer);
    let mut component = AppView::new();

    let event = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let props = AppViewProps {
        state: &initial,
        is_focused: true,
    };
    let actions: Vec<_> = component.handle_event(&event, props).into_iter().collect();

    actions.assert_count(1);
    actions.assert_first(Action::WeatherSearch("London".into()));

    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.weather.is_loading());

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::FetchWeather { .. }));
}

// ============================================================================
// Render Tests with Harness
// ============================================================================

#[test]
fn test_render_loading_state() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = AppView::new();

    harness.dispatch_collect(Action::WeatherSearch("London".into()));

    let output = harness.render_plain(100, 40, |frame, area, state| {
        let props = AppViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("Fetching weather for London"),
        "Loading message should be visible in output:\n{}",
        output
    );
}

#[test]
fn test_render_weather_data() {
    let mut harness = EffectStoreTestHarness::new(state_with_weather(), reducer);
    let mut component = AppView::new();

    let output = harness.render_plain(100, 40, |frame, area, state| {
        let props = AppViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("Overcast Clouds"),
        "Condition should be visible in output:\n{}",
        output
    );
    assert!(output.contains("Today"));
    assert!(output.contains("81%"));
}

#[test]
fn test_render_keeps_card_while_refreshing() {
    let mut harness = EffectStoreTestHarness::new(state_with_weather(), reducer);
    let mut component = AppView::new();

    harness.dispatch_collect(Action::WeatherSearch("Paris".into()));

    let output = harness.render_plain(100, 40, |frame, area, state| {
        let props = AppViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(output.contains("Searching..."));
    assert!(output.contains("1009 hPa"), "Previous card stays:\n{}", output);
}
