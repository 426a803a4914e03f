//! Meteor Shooter - a falling-meteor arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic frame update (movement, spawning, firing, collisions)
//! - `session`: Control loop wiring the sim to clock, input, render and audio
//! - `renderer`: Render sink interface and a headless HUD logger
//! - `audio`: Game event to sound effect mapping
//! - `demo`: Scripted autopilot input for idle/demo runs
//! - `settings`: Data-driven tunables loaded from JSON

pub mod audio;
pub mod demo;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, SessionOutcome};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Frame-rate cap
    pub const TARGET_FPS: u32 = 120;

    /// Laser travel speed, upward (pixels/s)
    pub const LASER_SPEED: f32 = 300.0;
    /// Meteor fall speed (pixels/s)
    pub const METEOR_SPEED: f32 = 300.0;
    /// One meteor is expected every this many frames
    pub const METEOR_FREQUENCY: u32 = 50;

    /// Minimum time between two shots (ms)
    pub const FIRE_COOLDOWN_MS: u64 = 500;
    /// Horizontal offset from ship origin to laser origin
    pub const LASER_OFFSET_X: i32 = 43;
    /// Ship origin = pointer - pivot
    pub const SHIP_PIVOT_X: i32 = 50;
    pub const SHIP_PIVOT_Y: i32 = 30;
    /// Ship starts this far left of screen center, vertically centered
    pub const SHIP_START_OFFSET_X: i32 = 40;

    /// Sprite dimensions (pixels)
    pub const SHIP_SIZE: (i32, i32) = (99, 75);
    pub const LASER_SIZE: (i32, i32) = (9, 54);
    pub const METEOR_SIZE: (i32, i32) = (101, 84);

    /// Meteor spawn band: x in [-margin, width + margin], y in [top, bottom]
    pub const METEOR_SPAWN_MARGIN_X: f32 = 100.0;
    pub const METEOR_SPAWN_TOP: f32 = -100.0;
    pub const METEOR_SPAWN_BOTTOM: f32 = -50.0;
    /// Horizontal spawn jitter amplitude, scaled by frame delta
    pub const METEOR_JITTER: f32 = 0.5;
}
