//! Game simulation
//!
//! Plain value types and the per-frame update, with no rendering or input
//! calls so every rule can be exercised headless.
//!
//! - `sprite`: animated sprite value and its pure frame update
//! - `physics`: grounded/airborne jump resolver
//! - `obstacles`: the fixed row of scrolling obstacles and the finish line
//! - `parallax`: looping background offsets
//! - `world`: the whole game state, outcome rules and `tick`

pub mod rect;
pub mod sprite;
pub mod parallax;
pub mod physics;
pub mod obstacles;
pub mod world;

// Re-export main types
pub use sprite::AnimatedSprite;
pub use parallax::Parallax;
pub use world::{Outcome, SheetSizes, World};
