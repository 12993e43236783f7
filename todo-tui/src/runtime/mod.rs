mod action_queue;
mod actions;
mod event_loop;
mod views;

pub use action_queue::{channel, tick_sink, Action, ActionRx, ActionTx};
pub use actions::run_action;
pub use event_loop::run_app;
pub use views::handle_view_key;
