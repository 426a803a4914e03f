//! Headless renderer: writes a HUD line through `log` instead of drawing

use super::{FrameView, RenderSink, Sprite};

/// Logs a status line every `every` frames and once on game over
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
    reported_game_over: bool,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            reported_game_over: false,
        }
    }

    /// Count the frame and build the line to log for it, if any
    fn status_line(&mut self, frame: &FrameView<'_>) -> Option<String> {
        self.frames += 1;

        if frame.game_over {
            if self.reported_game_over {
                return None;
            }
            self.reported_game_over = true;
            let (score, _, _) = frame.hud_label();
            return Some(format!("GAME OVER - survived {}s", score));
        }

        if self.frames % self.every != 0 {
            return None;
        }

        let sprites = frame.draw_list();
        let count = |kind: Sprite| sprites.iter().filter(|(s, _)| *s == kind).count();
        let (score, _, _) = frame.hud_label();
        Some(format!(
            "score {}s | ship ({}, {}) | lasers {} | meteors {} | {} sprites",
            score,
            frame.ship.x,
            frame.ship.y,
            count(Sprite::Laser),
            count(Sprite::Meteor),
            sprites.len()
        ))
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(120)
    }
}

impl RenderSink for LogRenderer {
    fn present(&mut self, frame: &FrameView<'_>) {
        if let Some(line) = self.status_line(frame) {
            log::info!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{GamePhase, GameState, Rect};

    #[test]
    fn test_status_every_n_frames() {
        let mut state = GameState::new(Settings::default(), 5);
        state.lasers.push(Rect::new(10, 10, 9, 54));
        state.elapsed_ms = 4200;
        let mut renderer = LogRenderer::new(3);

        let lines: Vec<Option<String>> = (0..6)
            .map(|_| renderer.status_line(&FrameView::new(&state)))
            .collect();

        let logged: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|_| i))
            .collect();
        assert_eq!(logged, vec![2, 5]);
        assert_eq!(
            lines[2].as_deref(),
            Some("score 4s | ship (600, 360) | lasers 1 | meteors 0 | 3 sprites")
        );
    }

    #[test]
    fn test_game_over_reported_once() {
        let mut state = GameState::new(Settings::default(), 5);
        state.phase = GamePhase::GameOver;
        state.elapsed_ms = 7000;
        let mut renderer = LogRenderer::new(1);

        assert_eq!(
            renderer.status_line(&FrameView::new(&state)).as_deref(),
            Some("GAME OVER - survived 7s")
        );
        for _ in 0..5 {
            assert!(renderer.status_line(&FrameView::new(&state)).is_none());
        }
    }

    #[test]
    fn test_zero_cadence_logs_every_frame() {
        let state = GameState::new(Settings::default(), 5);
        let mut renderer = LogRenderer::new(0);
        assert!(renderer.status_line(&FrameView::new(&state)).is_some());
        assert!(renderer.status_line(&FrameView::new(&state)).is_some());
    }
}
