//! Elapsed-time engine: one shared counter driven by a stopwatch or a timer.
//!
//! The engine owns the only tick source. Installing a new one always drops the
//! previous one first, and ticks are matched against the generation of the
//! installed source, so a tick that was already queued when its source was
//! cancelled is ignored.

mod sync;
mod tick;

use std::time::Duration;

pub use sync::SyncLedger;
pub use tick::{Generation, TickSink, TickSource};

pub const TIMER_MIN_SECS: u64 = 30;
pub const TIMER_MAX_SECS: u64 = 3600;
pub const TIMER_STEP_SECS: u64 = 30;

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stopwatch,
    Timer,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Stopwatch => "Stopwatch",
            Mode::Timer => "Timer",
        }
    }

    fn other(self) -> Self {
        match self {
            Mode::Stopwatch => Mode::Timer,
            Mode::Timer => Mode::Stopwatch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
}

/// Result of a tick that changed the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticked {
    pub counter: u64,
    /// Timer reached zero and stopped itself.
    pub finished: bool,
}

/// Snap a start value onto the 30–3600 s slider, rounding to the nearest step.
pub fn clamp_start_value(secs: u64) -> u64 {
    let snapped = (secs + TIMER_STEP_SECS / 2) / TIMER_STEP_SECS * TIMER_STEP_SECS;
    snapped.clamp(TIMER_MIN_SECS, TIMER_MAX_SECS)
}

pub struct Engine {
    mode: Mode,
    counter: u64,
    start_value: u64,
    source: Option<TickSource>,
    last_generation: Generation,
    sink: TickSink,
    period: Duration,
}

impl Engine {
    pub fn new(sink: TickSink, start_value: u64) -> Self {
        Self {
            mode: Mode::Stopwatch,
            counter: 0,
            start_value: clamp_start_value(start_value),
            source: None,
            last_generation: 0,
            sink,
            period: TICK_PERIOD,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn start_value(&self) -> u64 {
        self.start_value
    }

    pub fn state(&self) -> EngineState {
        if self.source.is_some() {
            EngineState::Running
        } else {
            EngineState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == EngineState::Running
    }

    /// Generation of the installed tick source, if any.
    pub fn current_generation(&self) -> Option<Generation> {
        self.source.as_ref().map(TickSource::generation)
    }

    /// Seconds shown on the display. An idle timer at zero previews its start value.
    pub fn display_seconds(&self) -> u64 {
        match self.mode {
            Mode::Timer if self.counter == 0 && !self.is_running() => self.start_value,
            _ => self.counter,
        }
    }

    /// Flip between stopwatch and timer. Always stops and zeroes the counter.
    pub fn switch_mode(&mut self) {
        self.set_mode(self.mode.other());
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.cancel_source();
        self.mode = mode;
        self.counter = 0;
        tracing::debug!("engine mode set to {}", mode.label());
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Start ticking. A timer loads its start value unless it is resuming from
    /// a nonzero counter.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        if self.mode == Mode::Timer {
            if self.counter == 0 {
                self.counter = self.start_value;
            }
            if self.counter == 0 {
                return;
            }
        }

        self.install_source();
    }

    /// Stop ticking, keeping the counter.
    pub fn stop(&mut self) {
        self.cancel_source();
    }

    /// Stop ticking and zero the counter.
    pub fn reset(&mut self) {
        self.cancel_source();
        self.counter = 0;
    }

    pub fn increase_start_value(&mut self) {
        self.set_start_value(self.start_value.saturating_add(TIMER_STEP_SECS));
    }

    pub fn decrease_start_value(&mut self) {
        self.set_start_value(self.start_value.saturating_sub(TIMER_STEP_SECS));
    }

    pub fn set_start_value(&mut self, secs: u64) {
        self.start_value = clamp_start_value(secs);
    }

    /// Apply a tick. Returns `None` for stale ticks and for ticks that leave the
    /// counter unchanged.
    pub fn on_tick(&mut self, generation: Generation) -> Option<Ticked> {
        if self.current_generation() != Some(generation) {
            tracing::trace!("ignoring stale tick from source {}", generation);
            return None;
        }

        match self.mode {
            Mode::Stopwatch => {
                self.counter += 1;
                Some(Ticked {
                    counter: self.counter,
                    finished: false,
                })
            }
            Mode::Timer => {
                if self.counter == 0 {
                    self.cancel_source();
                    return None;
                }
                self.counter -= 1;
                let finished = self.counter == 0;
                if finished {
                    self.cancel_source();
                }
                Some(Ticked {
                    counter: self.counter,
                    finished,
                })
            }
        }
    }

    fn install_source(&mut self) {
        self.cancel_source();
        self.last_generation += 1;
        self.source = Some(TickSource::spawn(
            self.last_generation,
            self.period,
            self.sink.clone(),
        ));
        tracing::debug!(
            "started {} tick source {}",
            self.mode.label(),
            self.last_generation
        );
    }

    fn cancel_source(&mut self) {
        if let Some(source) = self.source.take() {
            tracing::debug!("cancelled tick source {}", source.generation());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn engine() -> (Engine, mpsc::UnboundedReceiver<Generation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink: TickSink = Arc::new(move |generation| tx.send(generation).is_ok());
        (Engine::new(sink, 30), rx)
    }

    /// Feed every queued tick back into the engine, like the event loop does.
    fn drain(engine: &mut Engine, rx: &mut mpsc::UnboundedReceiver<Generation>) -> Vec<Ticked> {
        let mut out = Vec::new();
        while let Ok(generation) = rx.try_recv() {
            if let Some(ticked) = engine.on_tick(generation) {
                out.push(ticked);
            }
        }
        out
    }

    /// Let `secs` seconds (plus half a tick of slack) pass, then apply the ticks.
    async fn run_for(
        engine: &mut Engine,
        rx: &mut mpsc::UnboundedReceiver<Generation>,
        secs: u64,
    ) -> Vec<Ticked> {
        tokio::time::sleep(Duration::from_millis(secs * 1_000 + 500)).await;
        drain(engine, rx)
    }

    #[test]
    fn start_value_snaps_and_clamps() {
        assert_eq!(clamp_start_value(0), 30);
        assert_eq!(clamp_start_value(44), 30);
        assert_eq!(clamp_start_value(45), 60);
        assert_eq!(clamp_start_value(3600), 3600);
        assert_eq!(clamp_start_value(10_000), 3600);
    }

    #[tokio::test(start_paused = true)]
    async fn stopwatch_counts_up_each_second() {
        let (mut engine, mut rx) = engine();
        engine.start();
        assert_eq!(engine.state(), EngineState::Running);

        let ticks = run_for(&mut engine, &mut rx, 5).await;

        assert_eq!(ticks.len(), 5);
        assert_eq!(engine.counter(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn stopwatch_stop_keeps_counter() {
        let (mut engine, mut rx) = engine();
        engine.toggle();
        run_for(&mut engine, &mut rx, 3).await;
        engine.toggle();

        run_for(&mut engine, &mut rx, 3).await;

        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.counter(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stopwatch_reset_zeroes_and_stops() {
        let (mut engine, mut rx) = engine();
        engine.start();
        run_for(&mut engine, &mut rx, 4).await;

        engine.reset();
        run_for(&mut engine, &mut rx, 2).await;

        assert_eq!(engine.counter(), 0);
        assert!(!engine.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_counts_down_from_start_value() {
        let (mut engine, mut rx) = engine();
        engine.set_mode(Mode::Timer);
        engine.set_start_value(60);
        engine.start();
        assert_eq!(engine.counter(), 60);

        run_for(&mut engine, &mut rx, 10).await;

        assert_eq!(engine.counter(), 50);
        assert_eq!(engine.start_value(), 60);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_stops_at_zero_and_never_goes_negative() {
        let (mut engine, mut rx) = engine();
        engine.set_mode(Mode::Timer);
        engine.start();

        let ticks = run_for(&mut engine, &mut rx, 45).await;

        assert_eq!(engine.counter(), 0);
        assert!(!engine.is_running());
        assert_eq!(ticks.len(), 30);
        assert!(ticks.last().unwrap().finished);
        assert!(ticks[..29].iter().all(|t| !t.finished));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_resumes_from_paused_counter() {
        let (mut engine, mut rx) = engine();
        engine.set_mode(Mode::Timer);
        engine.start();
        run_for(&mut engine, &mut rx, 5).await;
        engine.stop();
        engine.set_start_value(600);

        engine.start();

        assert_eq!(engine.counter(), 25);
    }

    #[tokio::test(start_paused = true)]
    async fn switching_mode_zeroes_counter_and_cancels_source() {
        let (mut engine, mut rx) = engine();
        engine.start();
        run_for(&mut engine, &mut rx, 3).await;

        engine.switch_mode();

        assert_eq!(engine.mode(), Mode::Timer);
        assert_eq!(engine.counter(), 0);
        assert!(!engine.is_running());

        run_for(&mut engine, &mut rx, 3).await;
        assert_eq!(engine.counter(), 0);
    }

    #[tokio::test]
    async fn switching_mode_while_idle_zeroes_counter() {
        let (mut engine, _rx) = engine();
        engine.set_mode(Mode::Timer);
        engine.set_start_value(90);
        engine.start();
        engine.stop();
        assert_eq!(engine.counter(), 90);

        engine.switch_mode();
        assert_eq!(engine.counter(), 0);
        assert_eq!(engine.mode(), Mode::Stopwatch);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_from_cancelled_source_is_ignored() {
        let (mut engine, _rx) = engine();
        engine.start();
        let stale = engine.current_generation().unwrap();
        engine.stop();
        engine.start();

        assert!(engine.on_tick(stale).is_none());
        assert_eq!(engine.counter(), 0);

        let current = engine.current_generation().unwrap();
        assert_ne!(current, stale);
        assert!(engine.on_tick(current).is_some());
    }

    #[test]
    fn idle_timer_previews_start_value() {
        let (mut engine, _rx) = engine();
        assert_eq!(engine.display_seconds(), 0);
        engine.set_mode(Mode::Timer);
        engine.set_start_value(120);
        assert_eq!(engine.display_seconds(), 120);
        engine.increase_start_value();
        assert_eq!(engine.display_seconds(), 150);
        for _ in 0..10 {
            engine.decrease_start_value();
        }
        assert_eq!(engine.start_value(), 30);
    }
}
