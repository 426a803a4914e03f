//! Frame timing and the clock collaborator
//!
//! The sim never reads the OS clock itself. A [`Clock`] supplies millisecond
//! ticks and a blocking delay; [`FrameClock`] turns successive tick samples
//! into a frame delta and a frame-rate-cap delay.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic millisecond tick source with a blocking delay
pub trait Clock {
    /// Milliseconds since the clock started
    fn ticks_ms(&self) -> u64;
    /// Block the caller for `ms` milliseconds
    fn delay_ms(&self, ms: u64);
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn delay_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Deterministic clock for tests and replays.
///
/// Time only moves when advanced explicitly or when `delay_ms` is called.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    /// Total time spent in `delay_ms`
    slept: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
            slept: Cell::new(0),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn slept_ms(&self) -> u64 {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn ticks_ms(&self) -> u64 {
        self.now.get()
    }

    fn delay_ms(&self, ms: u64) {
        self.advance(ms);
        self.slept.set(self.slept.get() + ms);
    }
}

/// Timing of a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Tick the frame started at
    pub now_ms: u64,
    /// Milliseconds since the previous frame
    pub frame_time_ms: u64,
    /// Seconds since the previous frame
    pub delta: f32,
    /// How long to sleep to honour the frame-rate cap (0 on overrun)
    pub delay_ms: u64,
}

/// Tracks the previous frame tick and the target frame interval
#[derive(Debug, Clone)]
pub struct FrameClock {
    previous_ms: u64,
    target_interval_ms: u64,
}

impl FrameClock {
    pub fn new(start_ms: u64, target_fps: u32) -> Self {
        Self {
            previous_ms: start_ms,
            target_interval_ms: 1000 / u64::from(target_fps.max(1)),
        }
    }

    pub fn target_interval_ms(&self) -> u64 {
        self.target_interval_ms
    }

    /// Sample the frame at tick `now_ms`.
    ///
    /// A tick earlier than the previous one (clock rollback) yields a zero
    /// frame time. Overruns get no delay and no catch-up.
    pub fn begin_frame(&mut self, now_ms: u64) -> FrameTiming {
        let frame_time_ms = now_ms.saturating_sub(self.previous_ms);
        self.previous_ms = now_ms;

        let delay_ms = self.target_interval_ms.saturating_sub(frame_time_ms);

        FrameTiming {
            now_ms,
            frame_time_ms,
            delta: frame_time_ms as f32 / 1000.0,
            delay_ms,
        }
    }
}
