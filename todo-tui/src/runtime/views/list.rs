use crate::app::{App, PendingWrite};
use crate::engine::Mode;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('x') => app.clear_active(),
        KeyCode::Char('d') | KeyCode::Delete => app.enter_delete_confirm(),

        // Engine
        KeyCode::Char(' ') => sync_time(action_tx, app.toggle_engine()),
        KeyCode::Char('r') => sync_time(action_tx, app.reset_engine()),
        KeyCode::Char('m') => sync_time(action_tx, app.switch_mode()),
        KeyCode::Right | KeyCode::Char('l') => adjust_start_value(app, true),
        KeyCode::Left | KeyCode::Char('h') => adjust_start_value(app, false),
        _ => {}
    }
}

fn sync_time(action_tx: &ActionTx, write: Option<PendingWrite>) {
    if let Some(write) = write {
        enqueue_action(action_tx, Action::SyncTime(write));
    }
}

fn adjust_start_value(app: &mut App, increase: bool) {
    if app.engine.mode() != Mode::Timer {
        app.set_status("Switch to timer mode (m) to set the start value");
        return;
    }
    if increase {
        app.engine.increase_start_value();
    } else {
        app.engine.decrease_start_value();
    }
}
