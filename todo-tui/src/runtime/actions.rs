use crate::api::ApiClient;
use crate::app::{App, PendingWrite};
use crate::types::TodoId;

use super::action_queue::{Action, ActionTx};

/// Apply one queued action. Network calls run on their own tasks and report
/// back through `action_tx`, so nothing here waits on the store.
pub fn run_action(action: Action, app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    match action {
        Action::AddTodo { content } => spawn_create(content, client, action_tx),
        Action::TodoCreated(Ok(record)) => {
            tracing::info!("created todo {}", record.id);
            app.apply_created(record);
        }
        Action::TodoCreated(Err(e)) => {
            tracing::warn!("create failed: {}", e);
            app.set_status(format!("Could not add item: {}", e));
        }
        Action::DeleteTodo { id } => spawn_delete(id, client, action_tx),
        Action::TodoDeleted { id, result: Ok(()) } => {
            tracing::info!("deleted todo {}", id);
            app.apply_deleted(&id);
        }
        Action::TodoDeleted { id, result: Err(e) } => {
            tracing::warn!("delete of {} failed: {}", id, e);
            app.set_status(format!("Could not delete item: {}", e));
        }
        Action::Tick { generation } => {
            if let Some(write) = app.on_tick(generation) {
                spawn_update(write, client, action_tx);
            }
        }
        Action::SyncTime(write) => spawn_update(write, client, action_tx),
        Action::TimeSynced {
            id,
            seq,
            result: Ok(record),
        } => {
            app.apply_synced(&id, seq, record);
        }
        Action::TimeSynced {
            id,
            seq,
            result: Err(e),
        } => {
            tracing::warn!("time update {} for {} failed: {}", seq, id, e);
            app.sync_failed(&id, seq);
        }
    }
}

fn spawn_create(content: String, client: &ApiClient, action_tx: &ActionTx) {
    let client = client.clone();
    let action_tx = action_tx.clone();
    tokio::spawn(async move {
        let result = client.create_todo(&content).await;
        let _ = action_tx.send(Action::TodoCreated(result));
    });
}

fn spawn_delete(id: TodoId, client: &ApiClient, action_tx: &ActionTx) {
    let client = client.clone();
    let action_tx = action_tx.clone();
    tokio::spawn(async move {
        let result = client.delete_todo(&id).await;
        let _ = action_tx.send(Action::TodoDeleted { id, result });
    });
}

fn spawn_update(write: PendingWrite, client: &ApiClient, action_tx: &ActionTx) {
    let client = client.clone();
    let action_tx = action_tx.clone();
    tokio::spawn(async move {
        let PendingWrite { id, time, seq } = write;
        let result = client.update_time(&id, time).await;
        let _ = action_tx.send(Action::TimeSynced { id, seq, result });
    });
}
