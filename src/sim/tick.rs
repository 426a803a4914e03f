//! Per-frame simulation tick
//!
//! Core update that advances the game state by one frame.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{resolve_laser_hits, ship_hit};
use super::movement::{advance_lasers, advance_meteors, follow_pointer};
use super::spawn::{roll_meteor, spawn_laser};
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete input event, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    /// Fire button pressed
    Fire,
    /// Pointer moved to (x, y)
    PointerMoved(i32, i32),
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Events received since the previous frame
    pub events: Vec<InputEvent>,
    /// Directly sampled pointer position, overrides move events
    pub pointer: Option<IVec2>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// A quit event was seen this frame
    pub quit: bool,
    /// Output events in order
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one frame at tick `now_ms`, `delta` seconds
/// after the previous one
pub fn tick(state: &mut GameState, input: &FrameInput, now_ms: u64, delta: f32) -> TickReport {
    let mut report = TickReport {
        quit: input.events.contains(&InputEvent::Quit),
        events: Vec::new(),
    };

    // Nothing moves once the ship is gone
    if state.phase == GamePhase::GameOver {
        return report;
    }

    // Clock rollback or garbage deltas must not move entities backward
    let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

    state.frame_count += 1;
    state.elapsed_ms = state
        .elapsed_ms
        .saturating_add((delta * 1000.0).round() as u64);

    let cooldown = state.settings.fire_cooldown_ms;
    for event in &input.events {
        match *event {
            InputEvent::Fire => {
                if state.gate.try_fire(now_ms, cooldown) {
                    let laser = spawn_laser(
                        &state.ship,
                        state.settings.laser_offset_x,
                        state.settings.laser_size,
                    );
                    state.lasers.push(laser);
                    log::debug!("Laser fired at ({}, {})", laser.x, laser.y);
                    report.events.push(GameEvent::LaserFired(laser));
                }
            }
            InputEvent::PointerMoved(x, y) => state.pointer = IVec2::new(x, y),
            InputEvent::Quit => {}
        }
    }
    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }

    // Meteor shower trial
    let frequency = state.settings.meteor_frequency;
    let width = state.settings.screen_width;
    let size = state.settings.meteor_size;
    if let Some(meteor) = roll_meteor(state.rng_mut(), frequency, width, size, delta) {
        log::trace!("Meteor spawned at ({}, {})", meteor.x, meteor.y);
        state.meteors.push(meteor);
        report.events.push(GameEvent::MeteorSpawned(meteor));
    }

    // Movement
    let settings = &state.settings;
    follow_pointer(&mut state.ship, state.pointer, settings.ship_pivot);
    advance_lasers(&mut state.lasers, settings.laser_speed, delta);
    advance_meteors(
        &mut state.meteors,
        settings.meteor_speed,
        delta,
        settings.screen_height,
    );
    state.gate.poll(now_ms, cooldown);

    // Collisions
    for meteor in resolve_laser_hits(&mut state.meteors, &mut state.lasers) {
        log::debug!("Meteor destroyed at ({}, {})", meteor.x, meteor.y);
        state.meteors_destroyed += 1;
        report.events.push(GameEvent::MeteorDestroyed(meteor));
    }

    if let Some(meteor) = ship_hit(&state.meteors, &state.ship) {
        log::info!(
            "Ship hit by meteor at ({}, {}) after {}s",
            meteor.x,
            meteor.y,
            state.score_secs()
        );
        state.phase = GamePhase::GameOver;
        report.events.push(GameEvent::GameOver);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::gate::FireGate;
    use crate::sim::rect::Rect;

    /// Settings with no random meteors so scenarios stay controlled
    fn quiet_settings() -> Settings {
        Settings {
            meteor_frequency: u32::MAX,
            ..Settings::default()
        }
    }

    fn fire() -> FrameInput {
        FrameInput {
            events: vec![InputEvent::Fire],
            pointer: None,
        }
    }

    #[test]
    fn test_fire_spawns_laser_on_ship() {
        let mut state = GameState::new(quiet_settings(), 1);
        state.ship = Rect::new(600, 300, 99, 75);
        state.pointer = IVec2::new(650, 330);

        let report = tick(&mut state, &fire(), 1000, 0.0);

        assert_eq!(state.lasers, vec![Rect::new(643, 300, 9, 54)]);
        assert_eq!(state.gate, FireGate::Cooling { fired_at: 1000 });
        assert_eq!(
            report.events,
            vec![GameEvent::LaserFired(Rect::new(643, 300, 9, 54))]
        );
    }

    #[test]
    fn test_fire_rate_gated() {
        let mut state = GameState::new(quiet_settings(), 1);

        tick(&mut state, &fire(), 1000, 0.0);
        tick(&mut state, &fire(), 1500, 0.0);
        assert_eq!(state.lasers.len(), 1);

        tick(&mut state, &fire(), 1501, 0.0);
        assert_eq!(state.lasers.len(), 2);
    }

    #[test]
    fn test_pointer_move_event_moves_ship() {
        let mut state = GameState::new(quiet_settings(), 1);
        let input = FrameInput {
            events: vec![InputEvent::PointerMoved(300, 200)],
            pointer: None,
        };
        tick(&mut state, &input, 10, 0.01);
        assert_eq!(state.ship.origin(), IVec2::new(250, 170));

        // Sampled pointer wins over queued moves
        let input = FrameInput {
            events: vec![InputEvent::PointerMoved(1, 1)],
            pointer: Some(IVec2::new(100, 100)),
        };
        tick(&mut state, &input, 20, 0.01);
        assert_eq!(state.ship.origin(), IVec2::new(50, 70));
    }

    #[test]
    fn test_laser_hit_emits_destroyed() {
        let mut state = GameState::new(quiet_settings(), 1);
        state.meteors.push(Rect::new(100, 100, 50, 50));
        state.lasers.push(Rect::new(110, 110, 10, 10));

        let report = tick(&mut state, &FrameInput::default(), 0, 0.0);

        assert!(state.meteors.is_empty());
        assert!(state.lasers.is_empty());
        assert_eq!(state.meteors_destroyed, 1);
        assert_eq!(
            report.events,
            vec![GameEvent::MeteorDestroyed(Rect::new(100, 100, 50, 50))]
        );
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(quiet_settings(), 1);
        let ship = state.ship;
        state.meteors.push(Rect::new(ship.x + 10, ship.y + 10, 101, 84));
        state.meteors.push(Rect::new(ship.x - 10, ship.y - 10, 101, 84));

        let report = tick(&mut state, &FrameInput::default(), 0, 0.0);
        let game_overs = report
            .events
            .iter()
            .filter(|e| **e == GameEvent::GameOver)
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Further frames change nothing and emit nothing
        let frozen = (state.meteors.clone(), state.ship, state.frame_count);
        let report = tick(&mut state, &fire(), 5000, 0.5);
        assert!(report.events.is_empty());
        assert!(state.lasers.is_empty());
        assert_eq!((state.meteors.clone(), state.ship, state.frame_count), frozen);
    }

    #[test]
    fn test_quit_reported_and_frame_completes() {
        let mut state = GameState::new(quiet_settings(), 1);
        state.lasers.push(Rect::new(0, 400, 9, 54));
        let input = FrameInput {
            events: vec![InputEvent::Quit],
            pointer: None,
        };

        let report = tick(&mut state, &input, 0, 0.1);
        assert!(report.quit);
        assert_eq!(state.lasers[0].y, 370);
    }

    #[test]
    fn test_negative_delta_clamped() {
        let mut state = GameState::new(quiet_settings(), 1);
        state.meteors.push(Rect::new(0, 0, 101, 84));
        tick(&mut state, &FrameInput::default(), 0, -1.0);
        assert_eq!(state.meteors[0].y, 0);
        assert_eq!(state.elapsed_ms, 0);

        tick(&mut state, &FrameInput::default(), 0, f32::NAN);
        assert_eq!(state.meteors[0].y, 0);
    }

    #[test]
    fn test_huge_delta_prunes_meteor() {
        let mut state = GameState::new(quiet_settings(), 1);
        state.meteors.push(Rect::new(0, 300, 101, 84));
        state.lasers.push(Rect::new(0, 300, 9, 54));

        tick(&mut state, &FrameInput::default(), 0, 1.0e7);
        assert!(state.meteors.is_empty());
        assert!(state.lasers.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_extreme_pointer_positions() {
        for (x, y) in [(i32::MIN, i32::MIN), (i32::MAX, i32::MAX)] {
            let mut state = GameState::new(quiet_settings(), 1);
            state.meteors.push(Rect::new(0, 0, 101, 84));
            let input = FrameInput {
                events: vec![InputEvent::PointerMoved(x, y), InputEvent::Fire],
                pointer: None,
            };

            tick(&mut state, &input, 0, 0.0);
            tick(&mut state, &input, 1000, 0.0);
            assert_eq!(state.phase, GamePhase::Playing);
            assert_eq!(state.meteors.len(), 1);
        }
    }

    #[test]
    fn test_meteor_spawns_are_reproducible() {
        fn run(seed: u64) -> Vec<Rect> {
            let settings = Settings {
                meteor_frequency: 50,
                ..Settings::default()
            };
            let mut state = GameState::new(settings, seed);
            // Keep the ship out of the meteor field
            let input = FrameInput {
                events: Vec::new(),
                pointer: Some(IVec2::new(-10_000, 10_000)),
            };
            let mut spawned = Vec::new();
            for frame in 0..1000u64 {
                let report = tick(&mut state, &input, frame * 8, 0.008);
                spawned.extend(report.events.iter().filter_map(|e| match e {
                    GameEvent::MeteorSpawned(r) => Some(*r),
                    _ => None,
                }));
            }
            spawned
        }

        let first = run(42);
        let second = run(42);
        assert_eq!(first, second);
        // Expected 20 over 1000 frames
        assert!((5..=45).contains(&first.len()), "spawned {}", first.len());
        assert_ne!(first, run(43));
    }
}
