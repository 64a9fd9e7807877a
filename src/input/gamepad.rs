//! Gamepad polling with press-edge detection
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No backend; reports no gamepad

// Standard gamepad button indices (Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
}

/// Was `button` up in `last` and down in `current`?
pub fn pressed_edge(current: u32, last: u32, button: u32) -> bool {
    let bit = 1 << button;
    (current & bit) != 0 && (last & bit) == 0
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Gilrs, Button as GilrsButton};

    pub struct Gamepad {
        /// None when the platform has no gamepad backend
        gilrs: Option<Gilrs>,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    println!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs, buttons: 0, last_buttons: 0 }
        }

        /// Call once per frame; edges are relative to the previous poll
        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            while let Some(event) = gilrs.next_event() {
                match event.event {
                    gilrs::EventType::Connected => println!("Gamepad connected: {}", gilrs.gamepad(event.id).name()),
                    gilrs::EventType::Disconnected => println!("Gamepad disconnected"),
                    _ => {}
                }
            }
            self.last_buttons = self.buttons;
            self.buttons = self.button_mask();
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs.as_ref().is_some_and(|g| g.gamepads().next().is_some())
        }

        fn button_mask(&self) -> u32 {
            let Some(gilrs) = self.gilrs.as_ref() else { return 0 };
            let Some((_, gp)) = gilrs.gamepads().next() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }

            mask
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            super::pressed_edge(self.buttons, self.last_buttons, button)
        }
    }
}

// ============================================================================
// WASM Implementation (keyboard only)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

pub use platform::Gamepad;
