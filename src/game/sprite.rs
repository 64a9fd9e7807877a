//! Animated sprite model
//!
//! One value type shared by the player and every obstacle. The sheet is a
//! grid of equally sized frames; only the first row is ever played.

use macroquad::math::Vec2;
use super::rect::Rect;

/// Sprite state: where it is drawn and which sheet cell is showing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSprite {
    /// Source cell within the sheet. `x` tracks `frame * w`.
    pub frame_rect: Rect,
    /// World-space top-left draw position
    pub position: Vec2,
    /// Current frame, always within `0..=max_frame` of the caller
    pub frame: usize,
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
    /// Time accumulated since the last frame change
    pub running_time: f32,
}

impl AnimatedSprite {
    /// Build a sprite showing frame 0 of a `columns x rows` sheet
    pub fn from_sheet(
        sheet_width: f32,
        sheet_height: f32,
        columns: u32,
        rows: u32,
        position: Vec2,
        frames_per_second: f32,
    ) -> Self {
        Self {
            frame_rect: Rect::new(
                0.0,
                0.0,
                sheet_width / columns as f32,
                sheet_height / rows as f32,
            ),
            position,
            frame: 0,
            frame_duration: 1.0 / frames_per_second,
            running_time: 0.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.frame_rect.w
    }

    pub fn height(&self) -> f32 {
        self.frame_rect.h
    }

    /// Screen-space rectangle covered by the sprite
    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, self.frame_rect.w, self.frame_rect.h)
    }

    /// Advance the animation by `delta_time`.
    ///
    /// At most one frame step per call; the accumulator resets to zero on a
    /// step rather than carrying the remainder.
    #[must_use]
    pub fn animate(mut self, delta_time: f32, max_frame: usize) -> Self {
        self.running_time += delta_time;

        if self.running_time >= self.frame_duration {
            self.running_time = 0.0;
            self.frame = if self.frame >= max_frame { 0 } else { self.frame + 1 };
            self.frame_rect.x = self.frame as f32 * self.frame_rect.w;
        }

        self
    }
}
