//! Jump physics for the player
//!
//! Two states: grounded (feet on the bottom of the window) and airborne.
//! Position is integrated with the velocity from the previous step, then
//! gravity and the jump impulse update the velocity for the next one.

use crate::settings::PhysicsSettings;
use super::sprite::AnimatedSprite;

/// Is the sprite standing on (or below) the ground line?
pub fn is_on_ground(sprite: &AnimatedSprite, window_height: f32) -> bool {
    sprite.position.y >= window_height - sprite.height()
}

/// Vertical motion state of the player
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Jumper {
    /// Vertical velocity in pixels per second (negative is up)
    pub velocity: f32,
    pub airborne: bool,
}

impl Jumper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one physics step on `sprite`
    pub fn step(
        &mut self,
        sprite: &mut AnimatedSprite,
        window_height: f32,
        delta_time: f32,
        jump_pressed: bool,
        physics: &PhysicsSettings,
    ) {
        sprite.position.y += self.velocity * delta_time;

        if is_on_ground(sprite, window_height) {
            sprite.position.y = window_height - sprite.height();
            self.velocity = 0.0;
            self.airborne = false;
        } else {
            self.velocity += physics.gravity * delta_time;
            self.airborne = true;
        }

        // Airborne flips on the next step, once the impulse has moved us up
        if !self.airborne && jump_pressed {
            self.velocity = physics.jump_velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;

    const DT: f32 = 1.0 / 64.0;
    const WINDOW_HEIGHT: f32 = 380.0;

    fn physics() -> PhysicsSettings {
        PhysicsSettings { gravity: 1000.0, jump_velocity: -600.0 }
    }

    fn grounded_player() -> AnimatedSprite {
        AnimatedSprite::from_sheet(768.0, 128.0, 6, 1, Vec2::new(192.0, 252.0), 12.0)
    }

    #[test]
    fn test_starts_on_ground() {
        assert!(is_on_ground(&grounded_player(), WINDOW_HEIGHT));
    }

    #[test]
    fn test_grounded_without_jump_keeps_zero_velocity() {
        let mut sprite = grounded_player();
        let mut jumper = Jumper::new();
        for _ in 0..600 {
            jumper.step(&mut sprite, WINDOW_HEIGHT, DT, false, &physics());
            assert_eq!(jumper.velocity, 0.0);
            assert!(!jumper.airborne);
            assert_eq!(sprite.position.y, 252.0);
        }
    }

    #[test]
    fn test_jump_sets_exact_impulse_and_rises_next_step() {
        let mut sprite = grounded_player();
        let mut jumper = Jumper::new();

        jumper.step(&mut sprite, WINDOW_HEIGHT, DT, true, &physics());
        assert_eq!(jumper.velocity, -600.0);
        assert_eq!(sprite.position.y, 252.0);

        jumper.step(&mut sprite, WINDOW_HEIGHT, DT, false, &physics());
        assert!(sprite.position.y < 252.0);
        assert!(jumper.airborne);
    }

    #[test]
    fn test_jump_follows_integration_scheme_until_landing() {
        let mut sprite = grounded_player();
        let mut jumper = Jumper::new();
        let y0 = sprite.position.y;

        jumper.step(&mut sprite, WINDOW_HEIGHT, DT, true, &physics());

        // After n airborne steps: v = -600 + 1000*n*dt, and y accumulates
        // the velocity held at the start of each step.
        let mut n = 0u32;
        loop {
            jumper.step(&mut sprite, WINDOW_HEIGHT, DT, false, &physics());
            n += 1;
            if !jumper.airborne {
                break;
            }
            let nf = n as f32;
            let expected_v = -600.0 + 1000.0 * nf * DT;
            let expected_y = y0 + DT * (-600.0 * nf + 1000.0 * DT * nf * (nf - 1.0) / 2.0);
            assert!((jumper.velocity - expected_v).abs() < 1e-3, "v at step {}", n);
            assert!((sprite.position.y - expected_y).abs() < 1e-3, "y at step {}", n);
        }

        // Lands after roughly 1.2s and is clamped to the ground line
        assert!((70..=80).contains(&n), "landed after {} steps", n);
        assert_eq!(sprite.position.y, y0);
        assert_eq!(jumper.velocity, 0.0);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut sprite = grounded_player();
        let mut jumper = Jumper::new();
        jumper.step(&mut sprite, WINDOW_HEIGHT, DT, true, &physics());
        jumper.step(&mut sprite, WINDOW_HEIGHT, DT, false, &physics());
        let v = jumper.velocity;
        jumper.step(&mut sprite, WINDOW_HEIGHT, DT, true, &physics());
        assert!((jumper.velocity - (v + 1000.0 * DT)).abs() < 1e-4);
    }
}
