//! Fatal startup errors
//!
//! Nothing here is recoverable: `main` reports the error and exits.

use crate::settings::SettingsError;

#[derive(Debug)]
pub enum GameError {
    Settings(SettingsError),
    Texture {
        path: String,
        source: macroquad::Error,
    },
}

impl From<SettingsError> for GameError {
    fn from(e: SettingsError) -> Self {
        GameError::Settings(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Settings(e) => write!(f, "Settings: {}", e),
            GameError::Texture { path, source } => {
                write!(f, "Failed to load texture {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for GameError {}
