mod common;

use common::Harness;
use std::time::Duration;
use todo_tui::bootstrap;
use todo_tui::config::TodoConfig;
use todo_tui::runtime::{self, Action};
use todo_tui::types::TodoId;
use todo_store::Store;

#[tokio::test]
async fn add_track_and_mirror_three_ticks() {
    let store = Store::new();
    let addr = todo_store::spawn(store.clone()).await.unwrap();
    let mut h = Harness::new(&format!("http://{}", addr));

    let records = h.client.list_todos().await.unwrap();
    h.app.apply_initial_load(records);
    assert!(h.app.todos.is_empty());

    h.dispatch(Action::AddTodo {
        content: "Test".to_string(),
    });
    h.settle(1).await;

    assert_eq!(h.app.todos.len(), 1);
    let record = h.app.todos.get_index(0).unwrap().clone();
    assert_eq!(record.content, "Test");
    assert_eq!(record.time, 0);

    h.app.activate_selected();
    let generation = h.start_engine();
    for _ in 0..3 {
        h.dispatch(Action::Tick { generation });
        h.settle(1).await;
    }

    assert_eq!(h.app.engine.counter(), 3);
    assert_eq!(h.app.todos.get(&record.id).unwrap().time, 3);
    let stored = store.get(&record.id.to_string()).await.unwrap();
    assert_eq!(stored.time, 3);
}

#[tokio::test]
async fn delete_removes_record_locally_and_remotely() {
    let store = Store::with_todos([("keep", 0), ("drop", 42)]);
    let addr = todo_store::spawn(store.clone()).await.unwrap();
    let mut h = Harness::new(&format!("http://{}", addr));
    let records = h.client.list_todos().await.unwrap();
    h.app.apply_initial_load(records);

    h.app.select_next();
    h.app.activate_selected();
    h.app.enter_delete_confirm();
    let id = h.app.take_delete_target().unwrap();
    h.dispatch(Action::DeleteTodo { id: id.clone() });
    h.settle(1).await;

    assert_eq!(h.app.todos.len(), 1);
    assert!(h.app.todos.get(&id).is_none());
    assert!(h.app.active.is_none());
    assert_eq!(store.todos().await.len(), 1);
}

#[tokio::test]
async fn deleting_unknown_id_keeps_list() {
    let store = Store::with_todos([("only", 0)]);
    let addr = todo_store::spawn(store).await.unwrap();
    let mut h = Harness::new(&format!("http://{}", addr));
    let records = h.client.list_todos().await.unwrap();
    h.app.apply_initial_load(records);

    h.dispatch(Action::DeleteTodo {
        id: TodoId::from("404"),
    });
    h.settle(1).await;

    assert_eq!(h.app.todos.len(), 1);
    assert!(h.app.status_message.as_deref().unwrap().contains("Could not delete"));
}

#[tokio::test]
async fn bootstrap_loads_seeded_store() {
    let addr = todo_store::spawn(Store::seeded()).await.unwrap();
    let config = TodoConfig {
        api_url: format!("http://{}", addr),
        quote_url: format!("http://{}/advice", addr),
        timer_start_secs: 90,
    };
    let (tx, _rx) = runtime::channel();

    let (mut app, _client) =
        bootstrap::initialize_app(&config, time::UtcOffset::UTC, tx).unwrap();
    assert!(app.is_loading());

    tokio::time::timeout(Duration::from_secs(5), async {
        while app.is_loading() {
            app.poll_fetches();
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    let expected = Store::seeded().todos().await.len();
    assert_eq!(app.todos.len(), expected);
    assert_eq!(app.engine.start_value(), 90);
    // No quote service behind this URL, so the quote never resolves.
    assert!(app.quote.as_ref().unwrap().is_loading());
}
