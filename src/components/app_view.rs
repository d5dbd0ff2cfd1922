use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::forecast_list::FORECAST_HEIGHT;
use super::location_input::PANEL_HEIGHT;
use super::weather_card::CARD_HEIGHT;
use super::{
    Component, ForecastList, ForecastListProps, LocationInput, LocationInputProps, WeatherCard,
    WeatherCardProps,
};
use crate::action::Action;
use crate::presentation::Theme;
use crate::snapshot::WeatherSnapshot;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for AppView - read-only view of state
pub struct AppViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main screen: location box, then error / weather card / welcome
pub struct AppView {
    input: LocationInput,
}

impl Default for AppView {
    fn default() -> Self {
        Self {
            input: LocationInput::new(),
        }
    }
}

impl AppView {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props<'a>(state: &'a AppState, is_focused: bool) -> LocationInputProps<'a> {
        LocationInputProps {
            value: &state.input,
            loading: state.is_loading(),
            spinner: state.spinner_frame(),
            is_focused,
            on_change: Action::InputChange,
            on_search: Action::WeatherSearch,
            on_locate: || Action::GeolocateRequest,
        }
    }
}

impl Component<Action> for AppView {
    type Props<'a> = AppViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Esc => return vec![Action::Quit],
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return vec![Action::Quit];
                }
                KeyCode::Tab => return vec![Action::ForecastNext],
                KeyCode::BackTab => return vec![Action::ForecastPrev],
                _ => {}
            }
        }

        self.input
            .handle_event(event, Self::input_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: AppViewProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(PANEL_HEIGHT), // Location box
            Constraint::Min(1),               // Body
            Constraint::Length(1),            // Help bar
        ])
        .split(area);

        self.input.render(
            frame,
            chunks[0],
            Self::input_props(props.state, props.is_focused),
        );

        match BodyView::from_state(props.state) {
            BodyView::Error(error) => render_error(frame, chunks[1], error),
            BodyView::Ready(snapshot) => render_ready(frame, chunks[1], props.state, snapshot),
            BodyView::Loading => render_loading(frame, chunks[1], props.state),
            BodyView::Empty => render_welcome(frame, chunks[1]),
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("ctrl+g", "locate"),
                    StatusBarHint::new("tab", "forecast"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

enum BodyView<'a> {
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Loading,
    Empty,
}

impl<'a> BodyView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(error) => BodyView::Error(error),
            DataResource::Loaded(snapshot) => BodyView::Ready(snapshot),
            DataResource::Loading => BodyView::Loading,
            DataResource::Empty => BodyView::Empty,
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &WeatherSnapshot) {
    let facts = snapshot.facts();
    let theme = Theme::for_temperature(facts.current_temp);

    let chunks = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(FORECAST_HEIGHT),
    ])
    .split(area);

    let mut card = WeatherCard;
    card.render(
        frame,
        chunks[0],
        WeatherCardProps {
            snapshot,
            facts: &facts,
        },
    );

    let mut forecast = ForecastList;
    forecast.render(
        frame,
        chunks[1],
        ForecastListProps {
            days: &snapshot.forecast_5_days,
            selected: state.forecast_selected,
            accent: theme.accent(),
        },
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let [slot] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let query = state.last_query.as_deref().unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", state.spinner_frame()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("Fetching weather for ", Style::default().fg(Color::DarkGray)),
        Span::styled(query.to_string(), Style::default().fg(Color::Gray).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), slot);
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // blank
        Constraint::Length(1), // title
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from("\u{1f324}\u{fe0f}").centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Welcome to Weather Forecast",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Enter a location above to get started with current weather and 5-day forecast",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        chunks[4],
    );
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}
