use super::*;

const LABEL: &str = " Todo Timer";

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_title_bar(frame, rows[0], app);
    render_quote(frame, rows[1], app);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let clock = app.clock.display();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(clock.len() as u16 + 1),
        ])
        .split(area);

    // Spins while the initial list load is outstanding
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, cols[0], &mut app.throbber_state);

    frame.render_widget(
        Paragraph::new(Span::styled(
            LABEL,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(clock, Style::default().fg(Color::White)))
            .alignment(Alignment::Right),
        cols[2],
    );
}

fn render_quote(frame: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(Color::DarkGray);

    let Some(fetch) = app.quote.as_ref() else {
        return;
    };

    let lines = match fetch.data() {
        Some(quote) => vec![
            Line::from(Span::styled(
                format!("\"{}\"", quote.message),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(format!("- {}", quote.author), muted)),
        ],
        None => match fetch.error() {
            Some(e) => vec![Line::from(Span::styled(
                format!("Quote unavailable: {}", e),
                muted,
            ))],
            None => vec![Line::from(Span::styled("Loading...", muted))],
        },
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}
