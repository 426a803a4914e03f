//! Deterministic frame update module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as tick values, never read from the OS
//! - Seeded RNG only
//! - Stable iteration order (list order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod gate;
pub mod movement;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timing;

pub use collision::{resolve_laser_hits, ship_hit};
pub use gate::FireGate;
pub use movement::{advance_lasers, advance_meteors, follow_pointer};
pub use rect::Rect;
pub use spawn::{roll_meteor, spawn_laser};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameInput, InputEvent, TickReport, tick};
pub use timing::{Clock, FrameClock, FrameTiming, ManualClock, SystemClock};
