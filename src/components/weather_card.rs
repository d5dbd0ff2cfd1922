use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::overview::OverviewFacts;
use crate::presentation::{self, Theme};
use crate::snapshot::WeatherSnapshot;

/// Border + location line + temperature row + spacer + detail row +
/// spacer + overview title + overview text
pub const CARD_HEIGHT: u16 = 17;

/// Overview text rows; longer sentences are cut off
const OVERVIEW_LINES: u16 = 3;

/// Current conditions: location line, themed temperature, condition,
/// whichever of wind, humidity and pressure the overview mentioned, the
/// unit system and the overview sentence itself.
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub facts: &'a OverviewFacts,
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = Theme::for_temperature(props.facts.current_temp);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Coordinates / timezone / observed
            Constraint::Length(6), // Temperature + condition
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Details
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Overview title
            Constraint::Length(OVERVIEW_LINES), // Overview text
        ])
        .split(inner);

        render_location_line(frame, chunks[0], props.snapshot);

        let row = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        render_temperature(frame, row[0], props.facts.current_temp, theme);
        render_condition(frame, row[1], props.facts);

        render_details(frame, chunks[3], props.facts, &props.snapshot.units);
        render_overview(frame, chunks[5], chunks[6], &props.snapshot.weather_overview);
    }
}

fn render_location_line(frame: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    let dim = Style::default().fg(Color::Gray);
    let coords = Line::from(vec![
        Span::styled("\u{1f4cd} ", dim),
        Span::styled(
            presentation::format_coords(snapshot.lat, snapshot.lon),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(coords), left);

    let when = Line::from(vec![
        Span::styled(snapshot.tz.clone(), dim),
        Span::raw("  "),
        Span::styled(presentation::format_observed(&snapshot.date), dim),
    ]);
    frame.render_widget(Paragraph::new(when).alignment(Alignment::Right), right);
}

fn render_temperature(frame: &mut Frame, area: Rect, temp: Option<f64>, theme: Theme) {
    let text = presentation::format_temp(temp);
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(theme_fill(theme));
    frame.render_widget(ArtBox::new(&renderer, &text), area);
}

fn theme_fill(theme: Theme) -> Fill {
    let ((r1, g1, b1), (r2, g2, b2)) = theme.gradient();
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(r1, g1, b1),
        ArtColor::rgb(r2, g2, b2),
    ))
}

fn render_condition(frame: &mut Frame, area: Rect, facts: &OverviewFacts) {
    let mut lines = vec![Line::from(Span::styled(
        presentation::capitalize_words(facts.condition_label()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(feels_like) = facts.feels_like {
        lines.push(Line::from(Span::styled(
            format!("Feels like {}°", presentation::round_temp(feels_like)),
            Style::default().fg(Color::Gray),
        )));
    }

    let height = lines.len() as u16;
    let [slot] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines), slot);
}

fn render_details(frame: &mut Frame, area: Rect, facts: &OverviewFacts, units: &str) {
    let mut items: Vec<(&str, String)> = Vec::new();
    if let Some(wind) = facts.wind_speed {
        items.push(("\u{1f4a8} Wind", format!("{wind} m/s")));
    }
    if let Some(humidity) = facts.humidity {
        items.push(("\u{1f4a7} Humidity", format!("{humidity}%")));
    }
    if let Some(pressure) = facts.pressure {
        items.push(("\u{23f2} Pressure", format!("{pressure} hPa")));
    }
    items.push(("\u{1f4cf} Units", presentation::capitalize_words(units)));

    let columns = Layout::horizontal(vec![Constraint::Ratio(1, items.len() as u32); items.len()])
        .split(area);
    for ((label, value), column) in items.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *column);
    }
}

fn render_overview(frame: &mut Frame, title_area: Rect, text_area: Rect, overview: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Weather Overview",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(overview.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        text_area,
    );
}
