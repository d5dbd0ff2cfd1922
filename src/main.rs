//! Weather card - look up current conditions and a 5-day forecast

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_card::action::Action;
use weather_card::api::{WeatherClient, DEFAULT_ENDPOINT};
use weather_card::components::{AppView, AppViewProps, Component, Notice, NoticeProps};
use weather_card::effect::Effect;
use weather_card::geolocation::{
    DisabledGeolocator, Geolocator, IpGeolocator, DEFAULT_GEOLOCATION_URL,
};
use weather_card::location::normalize_query;
use weather_card::logging;
use weather_card::reducer::reducer;
use weather_card::state::{AppState, SPINNER_TICK_MS};

/// Terminal weather lookup
#[derive(Parser, Debug)]
#[command(name = "weather-card")]
#[command(about = "Current conditions and a 5-day forecast for any location")]
struct Args {
    /// Location to search on startup (city, zip code, "lat,lon" or landmark)
    #[arg(long, short)]
    location: Option<String>,

    /// Weather backend endpoint, queried as `<endpoint>?location=...`
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Disable current-position lookup
    #[arg(long)]
    no_geolocation: bool,

    /// Position lookup service
    #[arg(long, default_value = DEFAULT_GEOLOCATION_URL)]
    geolocation_url: String,

    /// Append logs to this file (RUST_LOG sets the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

struct RuntimeConfig {
    client: WeatherClient,
    geolocator: Arc<dyn Geolocator>,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Main,
    Notice,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Notice,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        if self.notice.is_some() {
            Some(WeatherComponentId::Notice)
        } else {
            Some(WeatherComponentId::Main)
        }
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        self.notice.as_ref().map(|_| WeatherComponentId::Notice)
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Main => WeatherContext::Main,
            WeatherComponentId::Notice => WeatherContext::Notice,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        location,
        endpoint,
        no_geolocation,
        geolocation_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let geolocator: Arc<dyn Geolocator> = if no_geolocation {
        Arc::new(DisabledGeolocator)
    } else {
        Arc::new(IpGeolocator::new(geolocation_url))
    };
    let config = RuntimeConfig {
        client: WeatherClient::new(endpoint),
        geolocator,
    };
    tracing::info!(
        endpoint = config.client.endpoint(),
        geolocation = !no_geolocation,
        "starting"
    );

    let initial_query = location.as_deref().and_then(normalize_query);
    let initial_input = initial_query.clone().unwrap_or_default();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState {
                input: initial_input,
                ..AppState::new()
            })
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        replay_actions,
        initial_query.map(Action::WeatherSearch),
        config,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct WeatherUi {
    main: AppView,
    notice: Notice,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            main: AppView::new(),
            notice: Notice::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Main, area);

        let props = AppViewProps {
            state,
            is_focused: render_ctx.is_focused() && state.notice.is_none(),
        };
        self.main.render(frame, area, props);

        if let Some(message) = state.notice.as_deref() {
            event_ctx.set_component_area(WeatherComponentId::Notice, centered_rect(50, 7, area));
            let props = NoticeProps {
                message,
                is_focused: render_ctx.is_focused(),
                on_dismiss: || Action::UiDismissNotice,
            };
            self.notice.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&WeatherComponentId::Notice);
        }
    }

    fn handle_main_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = AppViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.main.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_notice_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let Some(message) = state.notice.as_deref() else {
            return HandlerResponse::ignored();
        };
        let props = NoticeProps {
            message,
            is_focused: true,
            on_dismiss: || Action::UiDismissNotice,
        };
        let actions: Vec<_> = self.notice.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    initial_action: Option<Action>,
    config: RuntimeConfig,
) -> io::Result<DebugRunOutput<AppState>> {
    let config = Arc::new(config);
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_main = Rc::clone(&ui);
    bus.register(WeatherComponentId::Main, move |event, state| {
        ui_main.borrow_mut().handle_main_event(&event.kind, state)
    });

    let ui_notice = Rc::clone(&ui);
    bus.register(WeatherComponentId::Notice, move |event, state| {
        ui_notice
            .borrow_mut()
            .handle_notice_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, config.clone()),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, config: Arc<RuntimeConfig>) {
    match effect {
        Effect::FetchWeather { location } => {
            let client = config.client.clone();
            ctx.tasks().spawn("weather", async move {
                match client.fetch_weather(&location).await {
                    Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                    Err(e) => {
                        tracing::warn!(%location, error = %e, "weather request failed");
                        Action::WeatherDidError(e.user_message())
                    }
                }
            });
        }
        Effect::Geolocate => {
            let geolocator = Arc::clone(&config.geolocator);
            ctx.tasks().spawn("geolocate", async move {
                match geolocator.locate().await {
                    Ok(coords) => {
                        tracing::info!(lat = coords.lat, lon = coords.lon, "position resolved");
                        Action::GeolocateDidResolve(coords)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "position lookup failed");
                        Action::GeolocateDidFail(e.user_message().to_string())
                    }
                }
            });
        }
    }
}
