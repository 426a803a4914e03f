//! Game session: the control loop around the frame update
//!
//! Each frame: sample the clock (and sleep for the frame-rate cap), drain
//! input, tick the sim, forward events, then hand the frame to the renderer.
//! Quit and game over are returned to the caller, who decides what happens
//! next (exit, restart, show a screen).

use glam::IVec2;

use crate::renderer::{FrameView, RenderSink};
use crate::settings::Settings;
use crate::sim::{Clock, FrameClock, FrameInput, GameEvent, GameState, InputEvent, tick};

/// Source of per-frame input
pub trait InputSource {
    /// Drain the events received since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Sample the current pointer position, if available
    fn pointer(&mut self) -> Option<IVec2> {
        None
    }
}

/// Consumer of game events (audio, stats, ...)
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Player asked to quit
    Quit { score_secs: u64 },
    /// Ship destroyed
    GameOver { score_secs: u64 },
}

/// One play session owning the clock and the game state
pub struct Session<C: Clock> {
    clock: C,
    frame_clock: FrameClock,
    state: GameState,
}

impl<C: Clock> Session<C> {
    pub fn new(settings: Settings, seed: u64, clock: C) -> Self {
        let frame_clock = FrameClock::new(clock.ticks_ms(), settings.target_fps);
        log::info!(
            "Session started with seed {} ({}x{} @ {} fps)",
            seed,
            settings.screen_width,
            settings.screen_height,
            settings.target_fps
        );
        Self {
            clock,
            frame_clock,
            state: GameState::new(settings, seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start over with a fresh state and the same settings
    pub fn restart(&mut self, seed: u64) {
        let settings = self.state.settings.clone();
        self.frame_clock = FrameClock::new(self.clock.ticks_ms(), settings.target_fps);
        self.state = GameState::new(settings, seed);
        log::info!("Session restarted with seed {}", seed);
    }

    /// Run a single frame. Returns the outcome once the session has ended.
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        render: &mut impl RenderSink,
        events: &mut impl EventSink,
    ) -> Option<SessionOutcome> {
        let timing = self.frame_clock.begin_frame(self.clock.ticks_ms());
        if timing.delay_ms > 0 {
            self.clock.delay_ms(timing.delay_ms);
        }

        let frame = FrameInput {
            events: input.poll_events(),
            pointer: input.pointer(),
        };
        let report = tick(&mut self.state, &frame, timing.now_ms, timing.delta);

        for event in &report.events {
            events.on_event(event);
        }
        render.present(&FrameView::new(&self.state));

        let score_secs = self.state.score_secs();
        if self.state.is_over() {
            Some(SessionOutcome::GameOver { score_secs })
        } else if report.quit {
            log::info!("Quit after {}s", score_secs);
            Some(SessionOutcome::Quit { score_secs })
        } else {
            None
        }
    }

    /// Run frames until quit or game over
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        render: &mut impl RenderSink,
        events: &mut impl EventSink,
    ) -> SessionOutcome {
        loop {
            if let Some(outcome) = self.step(input, render, events) {
                return outcome;
            }
        }
    }
}
