use crate::api::ApiClient;
use crate::app::{App, Clock};
use crate::config::TodoConfig;
use crate::engine::Engine;
use crate::fetch::Fetch;
use crate::runtime::{tick_sink, ActionTx};
use anyhow::{Context, Result};
use reqwest::Url;
use time::UtcOffset;

/// Build the app and kick off the list load and the quote fetch. Must run
/// inside a tokio runtime.
pub fn initialize_app(
    config: &TodoConfig,
    offset: UtcOffset,
    action_tx: ActionTx,
) -> Result<(App, ApiClient)> {
    let client = ApiClient::new(&config.api_url).context("Invalid api_url")?;

    let engine = Engine::new(tick_sink(action_tx), config.timer_start_secs);
    let mut app = App::new(engine, Clock::new(offset));

    app.todo_fetch = Some(Fetch::start(client.http().clone(), client.todos_url()?));

    match Url::parse(&config.quote_url) {
        Ok(url) => app.quote = Some(Fetch::start(client.http().clone(), url)),
        Err(e) => tracing::warn!("not fetching quote from {}: {}", config.quote_url, e),
    }

    tracing::info!("using store at {}", client.base_url());
    Ok((app, client))
}
