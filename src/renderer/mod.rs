//! Rendering interface
//!
//! The sim never draws. Once per frame the session hands a [`FrameView`] to
//! a [`RenderSink`]; the sink owns textures, fonts and the window.

pub mod log_renderer;

pub use log_renderer::LogRenderer;

use crate::sim::{GameState, Rect};

/// Sprite kinds, in back-to-front draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sprite {
    Background,
    Laser,
    Meteor,
    Ship,
}

/// Borrowed snapshot of everything drawable this frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub screen_width: i32,
    pub screen_height: i32,
    pub ship: Rect,
    pub lasers: &'a [Rect],
    pub meteors: &'a [Rect],
    /// Whole seconds survived
    pub score_secs: u64,
    pub game_over: bool,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            screen_width: state.settings.screen_width,
            screen_height: state.settings.screen_height,
            ship: state.ship,
            lasers: &state.lasers,
            meteors: &state.meteors,
            score_secs: state.score_secs(),
            game_over: state.is_over(),
        }
    }

    /// Sprites back to front: background, lasers, meteors, ship on top
    pub fn draw_list(&self) -> Vec<(Sprite, Rect)> {
        let screen = Rect::new(0, 0, self.screen_width, self.screen_height);
        let mut list = Vec::with_capacity(self.lasers.len() + self.meteors.len() + 2);
        list.push((Sprite::Background, screen));
        list.extend(self.lasers.iter().map(|r| (Sprite::Laser, *r)));
        list.extend(self.meteors.iter().map(|r| (Sprite::Meteor, *r)));
        list.push((Sprite::Ship, self.ship));
        list
    }

    /// Score text and where to put it (bottom center)
    pub fn hud_label(&self) -> (String, i32, i32) {
        (
            self.score_secs.to_string(),
            self.screen_width / 2 - 80,
            self.screen_height - 80,
        )
    }
}

/// Draws frames
pub trait RenderSink {
    fn present(&mut self, frame: &FrameView<'_>);
}
