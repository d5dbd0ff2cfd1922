use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    centered_rect, BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::Component;
use crate::action::Action;

/// Blocking message box; nothing else takes input until it is dismissed.
pub struct Notice {
    modal: Modal,
}

pub struct NoticeProps<'a> {
    pub message: &'a str,
    pub is_focused: bool,
    pub on_dismiss: fn() -> Action,
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl Notice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for Notice {
    type Props<'a> = NoticeProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some((props.on_dismiss)()),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 7 {
            return;
        }

        let modal_area = centered_rect(50, 7, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Hint
            ])
            .split(content_area);

            frame.render_widget(
                Paragraph::new(
                    Line::from(Span::styled(
                        "Notice",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .centered(),
                ),
                chunks[0],
            );
            frame.render_widget(
                Paragraph::new(Line::from(props.message).centered()).wrap(Wrap { trim: true }),
                chunks[1],
            );
            frame.render_widget(
                Paragraph::new(
                    Line::from(vec![
                        Span::styled("enter", Style::default().fg(Color::Cyan)),
                        Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
                    ])
                    .centered(),
                ),
                chunks[2],
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::UiDismissNotice,
                render_content: &mut render_content,
            },
        );
    }
}
