use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::icons;
use crate::presentation;
use crate::snapshot::ForecastDay;

/// Border + day cells + detail line
pub const FORECAST_HEIGHT: u16 = 10;

/// Forecast entries side by side, in the order received.
pub struct ForecastList;

pub struct ForecastListProps<'a> {
    pub days: &'a [ForecastDay],
    pub selected: usize,
    pub accent: Color,
}

impl Component<Action> for ForecastList {
    type Props<'a> = ForecastListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(Line::from(" \u{1f4c5} Forecast "));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.days.is_empty() {
            let empty = Line::from(Span::styled(
                "No forecast available",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(empty), inner);
            return;
        }

        let [cells_area, detail_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let count = props.days.len();
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
            .split(cells_area);
        for (index, (day, cell)) in props.days.iter().zip(cells.iter()).enumerate() {
            render_day(frame, *cell, index, day, index == props.selected, props.accent);
        }

        if let Some(day) = props.days.get(props.selected) {
            render_detail(frame, detail_area, props.selected, day);
        }
    }
}

fn render_day(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    day: &ForecastDay,
    is_selected: bool,
    accent: Color,
) {
    let (border, label_style) = if is_selected {
        (
            Style::default().fg(accent),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::Rgb(60, 60, 70)),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);

    let lines = vec![
        Line::from(Span::styled(
            presentation::forecast_label(index, &day.date),
            label_style,
        )),
        Line::from(icons::icon_glyph(&day.icon)),
        Line::from(Span::styled(
            presentation::capitalize_words(&day.weather),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("High ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}°", presentation::round_temp(day.temp_max)),
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Low ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}°", presentation::round_temp(day.temp_min)),
                Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_detail(frame: &mut Frame, area: Rect, index: usize, day: &ForecastDay) {
    let dim = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(
            presentation::forecast_label(index, &day.date),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" \u{b7} ", dim),
        Span::styled(presentation::capitalize_words(&day.weather), dim),
        Span::styled(" \u{b7} icon ", dim),
        Span::styled(icons::icon_url(&day.icon), dim),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}
