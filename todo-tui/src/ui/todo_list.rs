use super::*;
use crate::time_utils::format_time;
use ratatui::widgets::{List, ListItem, ListState};

pub fn render_todo_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_box == FocusedBox::List && app.current_view == View::Main;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(format!(" To-do ({}) ", app.todos.len()));

    if app.todos.is_empty() {
        let hint = match (app.is_loading(), app.load_error()) {
            (true, Some(e)) => format!("Could not load items: {}", e),
            (true, None) => "Loading...".to_string(),
            (false, _) => "Nothing here yet. Press Tab to add an item.".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let time_width = 12;
    let content_width = (area.width as usize).saturating_sub(time_width + 8);

    let items: Vec<ListItem> = app
        .todos
        .iter()
        .map(|record| {
            let active = app.is_active(&record.id);
            let (marker, style) = if active {
                (
                    "▶ ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate(&record.content, content_width),
                        width = content_width
                    ),
                    style,
                ),
                Span::styled(
                    format!(" {:>width$}", format_time(record.time), width = time_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
        .highlight_symbol(if focused { "> " } else { "  " });

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
