use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the remote store.
///
/// json-server hands out numbers or strings depending on its version, so both
/// are accepted. Only ever compared for equality and rendered into URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        TodoId::Text(value.to_string())
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        TodoId::Number(value)
    }
}

/// A to-do item as stored by the remote `/todo` resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub content: String,
    /// Accumulated seconds.
    #[serde(default)]
    pub time: u64,
}

/// A quote from the advice service, `{message, author}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub message: String,
    pub author: String,
}
