use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use todo_tui::api::ApiClient;
use todo_tui::app::{App, Clock};
use todo_tui::engine::{Engine, TickSink};
use todo_tui::runtime::{self, Action, ActionRx, ActionTx};

pub struct Harness {
    pub app: App,
    pub client: ApiClient,
    pub tx: ActionTx,
    pub rx: ActionRx,
}

impl Harness {
    /// App whose engine ticks go nowhere; tests inject `Action::Tick` by hand.
    pub fn new(base_url: &str) -> Self {
        let sink: TickSink = Arc::new(|_| true);
        let app = App::new(
            Engine::new(sink, 30),
            Clock::new(time::UtcOffset::UTC),
        );
        let (tx, rx) = runtime::channel();
        Self {
            app,
            client: ApiClient::new(base_url).unwrap(),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        runtime::run_action(action, &mut self.app, &self.client, &self.tx);
    }

    pub fn press(&mut self, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        runtime::handle_view_key(key, &mut self.app, &self.tx);
    }

    /// Wait for `n` completions from spawned requests and apply them.
    pub async fn settle(&mut self, n: usize) {
        for _ in 0..n {
            let action = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("timed out waiting for a response")
                .expect("action channel closed");
            self.dispatch(action);
        }
    }

    /// Start the engine and return the generation ticks must carry.
    pub fn start_engine(&mut self) -> u64 {
        self.app.engine.start();
        self.app.engine.current_generation().unwrap()
    }
}
