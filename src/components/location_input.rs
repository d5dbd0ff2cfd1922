use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::location::normalize_query;

pub const PLACEHOLDER: &str = "Enter city, zip code, coordinates, or landmark...";
pub const EXAMPLES_HINT: &str =
    "Try: \"New York\", \"10001\", \"40.7128,-74.0060\", or \"Eiffel Tower\"";

/// Border + input + actions + examples
pub const PANEL_HEIGHT: u16 = 7;

/// Location box with "search" and "use current position" actions.
///
/// Holds only the text widget's cursor state; the text itself lives in the
/// store and arrives through props.
pub struct LocationInput {
    input: TextInput,
}

pub struct LocationInputProps<'a> {
    pub value: &'a str,
    /// A search is in flight: everything is disabled
    pub loading: bool,
    pub spinner: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_search: fn(String) -> Action,
    pub on_locate: fn() -> Action,
}

impl Default for LocationInput {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl LocationInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_style(loading: bool, padding: Padding) -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding,
                bg: Some(Color::Rgb(50, 50, 60)),
                fg: loading.then_some(Color::DarkGray),
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }
}

impl Component<Action> for LocationInput {
    type Props<'a> = LocationInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.loading {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Enter => {
                return normalize_query(props.value)
                    .map(props.on_search)
                    .into_iter()
                    .collect();
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![(props.on_locate)()];
            }
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(false, Padding::new(1, 0, 1, 0)),
            on_change: props.on_change,
            on_submit: props.on_search,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(Line::from(" Weather Forecast ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Actions
            Constraint::Length(1), // Examples
        ])
        .split(inner);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused && !props.loading,
            style: Self::input_style(props.loading, Padding::all(1)),
            on_change: props.on_change,
            on_submit: props.on_search,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        frame.render_widget(Paragraph::new(action_line(&props)), chunks[1]);

        let hint = Line::from(Span::styled(
            EXAMPLES_HINT,
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}

fn action_line(props: &LocationInputProps<'_>) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);
    let disabled = Style::default().fg(Color::DarkGray);

    if props.loading {
        return Line::from(vec![
            Span::styled(format!("{} ", props.spinner), key),
            Span::styled("Searching...", label),
            Span::styled("    ctrl+g use current location", disabled),
        ])
        .centered();
    }

    let submit_label = if normalize_query(props.value).is_some() {
        label
    } else {
        disabled
    };
    Line::from(vec![
        Span::styled("enter ", key),
        Span::styled("Get Weather", submit_label),
        Span::raw("    "),
        Span::styled("ctrl+g ", key),
        Span::styled("use current location", label),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn props(value: &str, loading: bool) -> LocationInputProps<'_> {
        LocationInputProps {
            value,
            loading,
            spinner: "⠋",
            is_focused: true,
            on_change: Action::InputChange,
            on_search: Action::WeatherSearch,
            on_locate: || Action::GeolocateRequest,
        }
    }

    fn enter() -> EventKind {
        EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_searches_trimmed_text_once() {
        let mut component = LocationInput::new();

        let actions: Vec<_> = component
            .handle_event(&enter(), props("  Eiffel Tower  ", false))
            .into_iter()
            .collect();

        actions.assert_count(1);
        actions.assert_first(Action::WeatherSearch("Eiffel Tower".into()));
    }

    #[test]
    fn test_enter_on_blank_does_nothing() {
        let mut component = LocationInput::new();

        for value in ["", "   ", "\t \t"] {
            let actions: Vec<_> = component
                .handle_event(&enter(), props(value, false))
                .into_iter()
                .collect();
            actions.assert_empty();
        }
    }

    #[test]
    fn test_ctrl_g_requests_position() {
        let mut component = LocationInput::new();
        let event = EventKind::Key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL));

        let actions: Vec<_> = component
            .handle_event(&event, props("", false))
            .into_iter()
            .collect();

        actions.assert_first(Action::GeolocateRequest);
    }

    #[test]
    fn test_disabled_while_loading() {
        let mut component = LocationInput::new();
        let locate = EventKind::Key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL));

        for event in [enter(), locate, EventKind::Key(key("a"))] {
            let actions: Vec<_> = component
                .handle_event(&event, props("Paris", true))
                .into_iter()
                .collect();
            actions.assert_empty();
        }
    }

    #[test]
    fn test_render_busy_indicator() {
        let mut render = RenderHarness::new(80, PANEL_HEIGHT);
        let mut component = LocationInput::new();

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props("Paris", true));
        });

        assert!(output.contains("Searching..."));
        assert!(!output.contains("Get Weather"));
    }

    #[test]
    fn test_render_idle_actions() {
        let mut render = RenderHarness::new(80, PANEL_HEIGHT);
        let mut component = LocationInput::new();

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props("", false));
        });

        assert!(output.contains("Get Weather"));
        assert!(output.contains("use current location"));
        assert!(output.contains("Weather Forecast"));
    }
}
