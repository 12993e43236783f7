use std::time::{Duration, Instant};
use time::{OffsetDateTime, UtcOffset};

use crate::time_utils::{format_clock, now_local};

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Wall-clock display, re-read at most once per second.
#[derive(Debug, Clone)]
pub struct Clock {
    offset: UtcOffset,
    now: OffsetDateTime,
    last_refresh: Instant,
}

impl Clock {
    pub fn new(offset: UtcOffset) -> Self {
        Self {
            offset,
            now: now_local(offset),
            last_refresh: Instant::now(),
        }
    }

    pub fn refresh(&mut self) {
        if self.last_refresh.elapsed() >= REFRESH_INTERVAL {
            self.now = now_local(self.offset);
            self.last_refresh = Instant::now();
        }
    }

    pub fn display(&self) -> String {
        format_clock(self.now)
    }
}
