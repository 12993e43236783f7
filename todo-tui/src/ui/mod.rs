use crate::app::{App, FocusedBox, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod delete_dialog;
mod engine_panel;
mod header;
mod input;
mod todo_list;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Clock + quote
            Constraint::Length(5), // Engine
            Constraint::Min(3),    // To-do list
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    header::render_header(frame, rows[0], app);
    engine_panel::render_engine_panel(frame, rows[1], app);
    todo_list::render_todo_list(frame, rows[2], app);
    input::render_input(frame, rows[3], app);
    render_status(frame, rows[4], app);
    render_controls(frame, rows[5], app);

    if app.current_view == View::ConfirmDelete {
        delete_dialog::render_delete_confirm_dialog(frame, app);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let hints: &[(&str, &str)] = match (app.current_view, app.focused_box) {
        (View::ConfirmDelete, _) => &[("y", "Delete"), ("n/Esc", "Cancel")],
        (View::Main, FocusedBox::Input) => &[
            ("Enter", "Add"),
            ("Tab/Esc", "Back to list"),
            ("Ctrl+C", "Quit"),
        ],
        (View::Main, FocusedBox::List) => &[
            ("Enter", "Track"),
            ("x", "Untrack"),
            ("d", "Delete"),
            ("Space", "Start/Stop"),
            ("r", "Reset"),
            ("m", "Mode"),
            ("←/→", "Start value"),
            ("Tab", "Input"),
            ("q", "Quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (k, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*k, key));
        spans.push(Span::raw(format!(": {}", label)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
