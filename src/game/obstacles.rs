//! Obstacle field
//!
//! A fixed row of animated obstacles spawned off the right edge of the
//! window. They never wrap or respawn: once past the player they keep
//! scrolling left for the rest of the run.

use macroquad::math::Vec2;
use crate::settings::ObstacleSettings;
use super::sprite::AnimatedSprite;

/// Number of obstacles in a run
pub const OBSTACLE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleField {
    pub obstacles: [AnimatedSprite; OBSTACLE_COUNT],
    /// Where the last obstacle would be if it were still moving
    pub finish_line_x: f32,
    /// Horizontal velocity shared by every obstacle (negative is leftward)
    pub velocity: f32,
    /// Highest frame index of the obstacle animation
    pub max_frame: usize,
}

impl ObstacleField {
    /// Spawn the row for a sheet of the given pixel size.
    /// Obstacle `i` starts at `window_width + spacing * i`, resting on the
    /// bottom edge of the window.
    pub fn spawn(
        settings: &ObstacleSettings,
        sheet_width: f32,
        sheet_height: f32,
        window_width: f32,
        window_height: f32,
    ) -> Self {
        let sprite = &settings.sprite;
        let obstacles: [AnimatedSprite; OBSTACLE_COUNT] = std::array::from_fn(|i| {
            let mut obstacle = AnimatedSprite::from_sheet(
                sheet_width,
                sheet_height,
                sprite.columns,
                sprite.rows,
                Vec2::ZERO,
                sprite.frames_per_second,
            );
            obstacle.position = Vec2::new(
                window_width + settings.spacing * i as f32,
                window_height - obstacle.height(),
            );
            obstacle
        });

        Self {
            finish_line_x: obstacles[OBSTACLE_COUNT - 1].position.x,
            obstacles,
            velocity: settings.velocity,
            max_frame: sprite.max_frame,
        }
    }

    /// Move the finish line. Runs every frame, even after the run has ended.
    pub fn advance_finish_line(&mut self, delta_time: f32) {
        self.finish_line_x += self.velocity * delta_time;
    }

    /// Animate, then move, every obstacle
    pub fn advance(&mut self, delta_time: f32) {
        for obstacle in &mut self.obstacles {
            *obstacle = obstacle.animate(delta_time, self.max_frame);
            obstacle.position.x += self.velocity * delta_time;
        }
    }
}
