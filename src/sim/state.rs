//! Game state and core simulation types
//!
//! Everything the frame update mutates lives in [`GameState`]; the session
//! owns exactly one and passes it into `tick` each frame.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::gate::FireGate;
use super::rect::Rect;
use crate::consts::SHIP_START_OFFSET_X;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A meteor reached the ship; the state no longer advances
    GameOver,
}

/// Discrete outputs of a frame, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A laser left the ship
    LaserFired(Rect),
    /// A meteor entered the spawn band
    MeteorSpawned(Rect),
    /// A meteor and a laser destroyed each other (meteor rect given)
    MeteorDestroyed(Rect),
    /// The ship was hit
    GameOver,
}

/// Complete frame-update state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Tunables the state was created with
    pub settings: Settings,
    /// Meteor roll / position source
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player ship
    pub ship: Rect,
    /// Last known pointer position
    pub pointer: IVec2,
    /// Active lasers (render order)
    pub lasers: Vec<Rect>,
    /// Active meteors (render order)
    pub meteors: Vec<Rect>,
    /// Fire-rate gate
    pub gate: FireGate,
    /// Time survived while playing (ms)
    pub elapsed_ms: u64,
    /// Frames advanced while playing
    pub frame_count: u64,
    /// Meteors shot down
    pub meteors_destroyed: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let start = IVec2::new(
            settings.screen_width / 2 - SHIP_START_OFFSET_X,
            settings.screen_height / 2,
        );
        let ship = Rect::from_size(start, settings.ship_size);
        let pointer = start + settings.ship_pivot;

        Self {
            seed,
            settings,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            ship,
            pointer,
            lasers: Vec::new(),
            meteors: Vec::new(),
            gate: FireGate::Ready,
            elapsed_ms: 0,
            frame_count: 0,
            meteors_destroyed: 0,
        }
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score shown on the HUD: whole seconds survived
    pub fn score_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }
}
