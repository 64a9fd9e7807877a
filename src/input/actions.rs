//! Game action definitions

/// Everything the player can ask for
///
/// Bindings:
/// - Jump: Space / gamepad South (A on Xbox, Cross on PlayStation)
/// - Quit: Escape / window close button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Quit,
}
