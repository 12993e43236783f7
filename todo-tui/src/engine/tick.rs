use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Identifies which tick source produced a tick.
pub type Generation = u64;

/// Where ticks are delivered. Returns `false` once nobody is listening.
pub type TickSink = Arc<dyn Fn(Generation) -> bool + Send + Sync>;

/// A running repeating timer. Dropping the handle aborts the task, so every
/// path that discards it (stop, reset, mode switch, teardown) cancels it.
#[derive(Debug)]
pub struct TickSource {
    generation: Generation,
    handle: JoinHandle<()>,
}

impl TickSource {
    /// First tick fires one `period` after spawning.
    pub fn spawn(generation: Generation, period: Duration, sink: TickSink) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if !sink(generation) {
                    tracing::debug!("tick sink closed, stopping source {}", generation);
                    break;
                }
            }
        });

        Self { generation, handle }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
