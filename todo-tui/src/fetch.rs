//! One-shot `GET` that the render loop can poll.
//!
//! A [`Fetch`] is `loading` until its response arrives and then holds the
//! decoded value. There is no retry: a failed request is logged and the
//! helper stays loading, which is what the widgets show.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tokio::sync::oneshot;

use crate::api::{get_json, ApiResult};

pub struct Fetch<T> {
    client: Client,
    url: Url,
    loading: bool,
    data: Option<T>,
    error: Option<String>,
    pending: Option<oneshot::Receiver<ApiResult<T>>>,
}

impl<T> Fetch<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Issue the request immediately. Must be called inside a tokio runtime.
    pub fn start(client: Client, url: Url) -> Self {
        let mut fetch = Self {
            client,
            url,
            loading: true,
            data: None,
            error: None,
            pending: None,
        };
        fetch.issue();
        fetch
    }

    fn issue(&mut self) {
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let url = self.url.clone();

        tokio::spawn(async move {
            let call = format!("GET {}", url);
            let result = get_json::<T>(&client, url, &call).await;
            // Receiver is gone when the URL changed meanwhile.
            let _ = tx.send(result);
        });

        // Dropping the previous receiver discards a response for the old URL.
        self.pending = Some(rx);
        self.loading = true;
    }

    /// Point at a new URL. Re-issues only when it differs from the current one.
    pub fn set_url(&mut self, url: Url) {
        if url == self.url {
            return;
        }
        self.url = url;
        self.error = None;
        self.issue();
    }

    /// Move a finished response into place. Returns `true` when new data arrived.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(Ok(data)) => {
                self.pending = None;
                self.data = Some(data);
                self.loading = false;
                true
            }
            Ok(Err(e)) => {
                self.pending = None;
                tracing::warn!("fetch of {} failed: {}", self.url, e);
                self.error = Some(e.to_string());
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                tracing::warn!("fetch of {} was dropped before completing", self.url);
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
