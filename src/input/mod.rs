//! Input handling with gamepad support
//!
//! Keyboard and gamepad collapse into two actions: jump and quit.
//!
//! Native: Uses gilrs crate for gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::Action;
pub use state::InputState;
