use crate::app::{App, FocusedBox, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod input;
mod list;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.current_view {
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
        View::Main => match app.focused_box {
            FocusedBox::List => list::handle_list_key(key, app, action_tx),
            FocusedBox::Input => input::handle_input_key(key, app, action_tx),
        },
    }
}
