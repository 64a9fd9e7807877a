//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad (gilrs) input once per frame,
//! combining them into an action-based API.

use macroquad::prelude::*;
use super::Action;
use super::gamepad::{Gamepad, button};

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    /// Takes over the window close button so the main loop can shut down
    /// in order instead of the process exiting mid-frame.
    pub fn new() -> Self {
        prevent_quit();
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Check if action was just pressed this frame. Held keys fire once.
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Quit => is_key_pressed(KeyCode::Escape) || is_quit_requested(),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.gamepad.is_button_pressed(button::A),
            Action::Quit => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
