//! World state and the per-frame tick
//!
//! Owns everything the main loop mutates: background offsets, the player
//! and its jump state, the obstacle field and the run outcome. `tick` is
//! pure simulation; drawing reads the world afterwards.

use macroquad::math::Vec2;
use crate::settings::{GameSettings, PhysicsSettings, RuleSettings};
use super::obstacles::ObstacleField;
use super::parallax::{Parallax, ParallaxLayer};
use super::physics::Jumper;
use super::rect::Rect;
use super::sprite::AnimatedSprite;

/// How the run stands. Leaves `Playing` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Collided,
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Playing
    }

    /// Text shown once the run is over
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Collided => Some("Game Over"),
            Outcome::Won => Some("You win!"),
        }
    }
}

/// Pixel sizes of the loaded sheets, needed to lay out the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSizes {
    pub player: Vec2,
    pub obstacle: Vec2,
    /// Unscaled width of each background layer, back to front
    pub layer_widths: [f32; 3],
}

/// Do two sprites collide once both hitboxes are shrunk by `padding`?
pub fn hitboxes_overlap(a: Rect, b: Rect, padding: f32) -> bool {
    a.pad(padding).overlaps(&b.pad(padding))
}

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub window_width: f32,
    pub window_height: f32,
    pub physics: PhysicsSettings,
    pub rules: RuleSettings,
    pub parallax: Parallax,
    pub player: AnimatedSprite,
    pub player_max_frame: usize,
    pub jumper: Jumper,
    pub obstacles: ObstacleField,
    pub outcome: Outcome,
}

impl World {
    pub fn new(settings: &GameSettings, sizes: SheetSizes) -> Self {
        let window_width = settings.window.width as f32;
        let window_height = settings.window.height as f32;

        let mut player = AnimatedSprite::from_sheet(
            sizes.player.x,
            sizes.player.y,
            settings.player.columns,
            settings.player.rows,
            Vec2::ZERO,
            settings.player.frames_per_second,
        );
        player.position = Vec2::new(
            window_width / 2.0 - player.width() / 2.0,
            window_height - player.height(),
        );

        let layers: [ParallaxLayer; 3] = std::array::from_fn(|i| {
            let layer = &settings.layers[i];
            ParallaxLayer::new(sizes.layer_widths[i], layer.speed, layer.scale)
        });

        Self {
            window_width,
            window_height,
            physics: settings.physics,
            rules: settings.rules,
            parallax: Parallax::new(layers),
            player,
            player_max_frame: settings.player.max_frame,
            jumper: Jumper::new(),
            obstacles: ObstacleField::spawn(
                &settings.obstacles,
                sizes.obstacle.x,
                sizes.obstacle.y,
                window_width,
                window_height,
            ),
            outcome: Outcome::Playing,
        }
    }

    /// Run one frame. Returns the outcome if this frame ended the run.
    pub fn tick(&mut self, delta_time: f32, jump_pressed: bool) -> Option<Outcome> {
        self.parallax.scroll(delta_time);

        self.jumper.step(
            &mut self.player,
            self.window_height,
            delta_time,
            jump_pressed,
            &self.physics,
        );
        self.obstacles.advance_finish_line(delta_time);

        if self.outcome.is_terminal() {
            return None;
        }

        // No mid-air animation: the pose freezes at takeoff
        if !self.jumper.airborne {
            self.player = self.player.animate(delta_time, self.player_max_frame);
        }

        let outcome = self.evaluate();
        if outcome.is_terminal() {
            self.outcome = outcome;
            return Some(outcome);
        }

        self.obstacles.advance(delta_time);
        None
    }

    /// Decide the outcome from the current positions. Collision wins ties.
    pub fn evaluate(&self) -> Outcome {
        let player = self.player.bounds();
        let hit = self
            .obstacles
            .obstacles
            .iter()
            .any(|o| hitboxes_overlap(o.bounds(), player, self.rules.hit_padding));

        if hit {
            Outcome::Collided
        } else if self.obstacles.finish_line_x < self.player.position.x - self.rules.win_margin {
            Outcome::Won
        } else {
            Outcome::Playing
        }
    }
}
