use crate::api::ApiResult;
use crate::app::PendingWrite;
use crate::engine::{Generation, TickSink};
use crate::types::{TodoId, TodoRecord};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub enum Action {
    AddTodo {
        content: String,
    },
    TodoCreated(ApiResult<TodoRecord>),
    DeleteTodo {
        id: TodoId,
    },
    TodoDeleted {
        id: TodoId,
        result: ApiResult<()>,
    },
    Tick {
        generation: Generation,
    },
    /// Counter moved outside a tick (reset, mode switch, timer start).
    SyncTime(PendingWrite),
    TimeSynced {
        id: TodoId,
        seq: u64,
        result: ApiResult<TodoRecord>,
    },
}

pub type ActionTx = UnboundedSender<Action>;
pub type ActionRx = UnboundedReceiver<Action>;

pub fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

/// Tick sink that feeds the engine's ticks back through the action queue.
/// Stops the source once the queue is gone.
pub fn tick_sink(action_tx: ActionTx) -> TickSink {
    Arc::new(move |generation| action_tx.send(Action::Tick { generation }).is_ok())
}
