use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::dto::{CreateTodoRequest, UpdateTimeRequest};
use crate::types::{TodoId, TodoRecord};

const TODO_PATH: &str = "todo";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to call {call}: {source}")]
    Request {
        call: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{call} returned {status}")]
    Status { call: String, status: StatusCode },
    #[error("Failed to parse {call} response: {source}")]
    Decode {
        call: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the `/todo` resource of the remote store.
///
/// Cheap to clone; clones share the underlying connection pool, so callers can
/// move a copy into a spawned task per request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        // Trailing slash so relative joins keep any path prefix of the base.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .build()
            .map_err(|source| ApiError::Request {
                call: "client builder".to_string(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    /// URL of the collection, `GET`-able for the initial load.
    pub fn todos_url(&self) -> ApiResult<Url> {
        self.endpoint(TODO_PATH)
    }

    fn todo_url(&self, id: &TodoId) -> ApiResult<Url> {
        let id = id.to_string();
        self.endpoint(&format!("{}/{}", TODO_PATH, urlencoding::encode(&id)))
    }

    pub async fn list_todos(&self) -> ApiResult<Vec<TodoRecord>> {
        get_json(&self.client, self.todos_url()?, "GET /todo").await
    }

    pub async fn create_todo(&self, content: &str) -> ApiResult<TodoRecord> {
        let request = self
            .client
            .post(self.todos_url()?)
            .json(&CreateTodoRequest { content, time: 0 });
        let response = send(request, "POST /todo").await?;
        decode(response, "POST /todo").await
    }

    pub async fn update_time(&self, id: &TodoId, time: u64) -> ApiResult<TodoRecord> {
        let request = self
            .client
            .patch(self.todo_url(id)?)
            .json(&UpdateTimeRequest { time });
        let response = send(request, "PATCH /todo/:id").await?;
        decode(response, "PATCH /todo/:id").await
    }

    /// Succeeds only on a 2xx status; any body is discarded.
    pub async fn delete_todo(&self, id: &TodoId) -> ApiResult<()> {
        let request = self.client.delete(self.todo_url(id)?);
        let response = send(request, "DELETE /todo/:id").await?;
        let _ = response.bytes().await;
        Ok(())
    }
}

/// One-shot `GET` decoding a JSON body. Shared with the fetch helper.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    call: &str,
) -> ApiResult<T> {
    let response = send(client.get(url), call).await?;
    decode(response, call).await
}

async fn send(request: RequestBuilder, call: &str) -> ApiResult<Response> {
    tracing::debug!("calling {}", call);

    let response = request.send().await.map_err(|source| ApiError::Request {
        call: call.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            call: call.to_string(),
            status,
        });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, call: &str) -> ApiResult<T> {
    response.json::<T>().await.map_err(|source| ApiError::Decode {
        call: call.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_path_prefix() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(
            client.todos_url().unwrap().as_str(),
            "http://localhost:3000/api/todo"
        );
    }

    #[test]
    fn todo_url_encodes_opaque_ids() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        let url = client.todo_url(&TodoId::from("a b/c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/todo/a%20b%2Fc");
    }

    #[test]
    fn numeric_ids_render_plainly() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        let url = client.todo_url(&TodoId::Number(12)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/todo/12");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }
}
