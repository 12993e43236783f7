use super::*;

pub fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_box == FocusedBox::Input && app.current_view == View::Main;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" New item ");

    let (before, after) = app.input.split_at_cursor();
    let line = if app.input.value.is_empty() && !focused {
        Line::from(Span::styled(
            "Press Tab to type",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![Span::raw(before), Span::raw(after)])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let x = area.x + 1 + Span::raw(before).width() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), area.y + 1));
    }
}
