//! In-memory implementation of the `/todo` REST resource.
//!
//! Mirrors the json-server surface the terminal client talks to: records keep
//! insertion order, ids are increasing decimal strings assigned on create,
//! and `PATCH` merges only the fields present in the body.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::instrument;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub content: String,
    pub time: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub content: String,
    #[serde(default)]
    pub time: u64,
}

#[derive(Debug, Deserialize)]
pub struct PatchTodo {
    pub content: Option<String>,
    pub time: Option<u64>,
}

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    last_id: u64,
}

impl Inner {
    fn insert(&mut self, content: String, time: u64) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id.to_string(),
            content,
            time,
        };
        self.todos.push(todo.clone());
        todo
    }
}

/// Shared handle to the record set. Cloning is cheap; all clones see the same data.
#[derive(Clone, Debug, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `(content, time)` records, ids assigned in order.
    pub fn with_todos<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut inner = Inner::default();
        for (content, time) in items {
            inner.insert(content.into(), time);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// A handful of sample records for local development.
    pub fn seeded() -> Self {
        Self::with_todos([
            ("Write weekly report", 1_520),
            ("Review open pull requests", 3_725),
            ("Plan next sprint", 0),
        ])
    }

    pub async fn todos(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Todo> {
        self.inner
            .read()
            .await
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }
}

pub fn app(store: Store) -> Router {
    Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/:id",
            get(get_todo).patch(patch_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new()))
        .with_state(store)
}

pub async fn serve(listener: TcpListener, store: Store) -> std::io::Result<()> {
    axum::serve(listener, app(store)).await
}

/// Bind an ephemeral port on localhost and serve `store` from a background task.
pub async fn spawn(store: Store) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = serve(listener, store).await {
            tracing::error!("todo store stopped: {}", e);
        }
    });
    Ok(addr)
}

#[instrument(name = "list_todos", skip(store))]
async fn list_todos(State(store): State<Store>) -> Json<Vec<Todo>> {
    Json(store.todos().await)
}

#[instrument(name = "create_todo", skip(store))]
async fn create_todo(
    State(store): State<Store>,
    Json(body): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = store.inner.write().await.insert(body.content, body.time);
    tracing::debug!("created todo {}", todo.id);
    (StatusCode::CREATED, Json(todo))
}

#[instrument(name = "get_todo", skip(store))]
async fn get_todo(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    store.get(&id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[instrument(name = "patch_todo", skip(store))]
async fn patch_todo(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(body): Json<PatchTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut inner = store.inner.write().await;
    let todo = inner
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    if let Some(content) = body.content {
        todo.content = content;
    }
    if let Some(time) = body.time {
        todo.time = time;
    }

    Ok(Json(todo.clone()))
}

#[instrument(name = "delete_todo", skip(store))]
async fn delete_todo(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    let mut inner = store.inner.write().await;
    let index = inner
        .todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(inner.todos.remove(index)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_todo_defaults_time_to_zero() {
        let input: CreateTodo = serde_json::from_str(r#"{"content":"Test"}"#).unwrap();
        assert_eq!(input.content, "Test");
        assert_eq!(input.time, 0);
    }

    #[test]
    fn create_todo_rejects_missing_content() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"time":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_todo_fields_are_optional() {
        let input: PatchTodo = serde_json::from_str(r#"{"time":12}"#).unwrap();
        assert!(input.content.is_none());
        assert_eq!(input.time, Some(12));
    }

    #[tokio::test]
    async fn seeded_store_assigns_sequential_ids() {
        let store = Store::with_todos([("a", 0), ("b", 5)]);
        let todos = store.todos().await;
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, "1");
        assert_eq!(todos[1].id, "2");
        assert_eq!(todos[1].time, 5);
    }
}
