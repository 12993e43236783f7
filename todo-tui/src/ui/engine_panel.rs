use super::*;
use crate::engine::{Mode, TIMER_MAX_SECS, TIMER_MIN_SECS};
use crate::time_utils::format_time;

pub fn render_engine_panel(frame: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let running = engine.is_running();

    let (state_label, state_style) = if running {
        ("ON", Style::default().fg(Color::Green))
    } else {
        ("OFF", Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .title(Span::styled(
            format!(" {} ", engine.mode().label()),
            Style::default().fg(Color::Yellow),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let tracking = match app.active_record() {
        Some(record) => Span::styled(
            format!("  tracking \"{}\"", record.content),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled("  no item tracked", Style::default().fg(Color::DarkGray)),
    };
    let counter_line = Line::from(vec![
        Span::styled(
            format_time(engine.display_seconds()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(state_label, state_style),
        tracking,
    ]);
    frame.render_widget(Paragraph::new(counter_line), rows[0]);

    if engine.mode() == Mode::Timer {
        render_start_slider(frame, rows[2], engine.start_value());
    }
}

/// Timer start value as a line gauge over the 30 s to 1 h range.
fn render_start_slider(frame: &mut Frame, area: Rect, start_value: u64) {
    let label = format!("Start {} ", format_time(start_value));
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label.len() as u16), Constraint::Min(5)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(Color::DarkGray))),
        cols[0],
    );

    let gauge = ratatui::widgets::LineGauge::default()
        .ratio(slider_ratio(start_value))
        .label("")
        .filled_symbol(ratatui::symbols::line::THICK_HORIZONTAL)
        .unfilled_symbol("╌")
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, cols[1]);
}

fn slider_ratio(start_value: u64) -> f64 {
    let span = (TIMER_MAX_SECS - TIMER_MIN_SECS) as f64;
    (start_value.saturating_sub(TIMER_MIN_SECS) as f64 / span).clamp(0.0, 1.0)
}
