use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{ActionRx, ActionTx};
use super::actions::run_action;
use super::views::handle_view_key;

const INPUT_POLL: Duration = Duration::from_millis(100);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
    action_tx: ActionTx,
    mut action_rx: ActionRx,
) -> Result<()> {
    loop {
        app.poll_fetches();
        app.clock.refresh();
        if app.is_loading() {
            app.throbber_state.calc_next();
        }

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client, &action_tx);
        }

        if !app.running {
            break;
        }
    }

    // Drop the tick source before the queue goes away.
    app.engine.stop();
    Ok(())
}
