//! Idle/demo mode input
//!
//! The autopilot sweeps the ship back and forth along the lower part of the
//! screen, holds the trigger, and quits after a frame budget.

use glam::IVec2;

use crate::session::InputSource;
use crate::settings::Settings;
use crate::sim::InputEvent;

/// Scripted input for headless runs
#[derive(Debug, Clone)]
pub struct Autopilot {
    frame: u64,
    max_frames: u64,
    width: i32,
    row: i32,
}

impl Autopilot {
    pub fn new(settings: &Settings) -> Self {
        Self {
            frame: 0,
            max_frames: settings.demo_frames,
            width: settings.screen_width,
            row: settings.screen_height * 3 / 4,
        }
    }

    /// Pointer for the current frame: two overlapping sines so the sweep
    /// does not repeat too obviously
    fn sweep(&self) -> IVec2 {
        let t = self.frame as f32 * 0.01;
        let s = t.sin() * 0.7 + (t * 0.37).sin() * 0.3;
        let half = self.width as f32 / 2.0;
        IVec2::new((half + s * half * 0.9) as i32, self.row)
    }
}

impl InputSource for Autopilot {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        if self.frame >= self.max_frames {
            return vec![InputEvent::Quit];
        }
        let pos = self.sweep();
        vec![InputEvent::PointerMoved(pos.x, pos.y), InputEvent::Fire]
    }
}
