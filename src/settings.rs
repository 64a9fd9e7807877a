//! Gameplay settings
//!
//! Every tunable constant of the game in one RON document. The canonical
//! copy lives in `assets/settings.ron` and is compiled into the binary, so
//! nothing is read from disk at startup except textures.

use serde::{Deserialize, Serialize};

/// The embedded settings document
pub const DEFAULT_SETTINGS_RON: &str = include_str!("../assets/settings.ron");

/// Error type for settings parsing
#[derive(Debug)]
pub enum SettingsError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub window: WindowSettings,
    pub physics: PhysicsSettings,
    pub player: SpriteSettings,
    pub obstacles: ObstacleSettings,
    /// Background layers, back to front
    pub layers: Vec<LayerSettings>,
    pub rules: RuleSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Advisory frame rate cap; simulation always uses measured frame time
    pub target_fps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSettings {
    /// Downward acceleration (pixels per second squared)
    pub gravity: f32,
    /// Velocity set on a jump (negative is up)
    pub jump_velocity: f32,
}

/// A sprite sheet and how to play its first row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSettings {
    pub texture: String,
    pub columns: u32,
    pub rows: u32,
    pub max_frame: usize,
    pub frames_per_second: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSettings {
    pub sprite: SpriteSettings,
    /// Horizontal gap between consecutive spawns
    pub spacing: f32,
    /// Horizontal velocity (negative is leftward)
    pub velocity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSettings {
    pub texture: String,
    /// Leftward scroll speed (pixels per second)
    pub speed: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Shrink applied to every side of both hitboxes before overlap tests
    pub hit_padding: f32,
    /// The run is won once the finish line is this far behind the player
    pub win_margin: f32,
}

impl GameSettings {
    /// Parse and validate a RON settings document
    pub fn from_ron(s: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = ron::from_str(s)?;
        settings.validate().map_err(SettingsError::ValidationError)?;
        Ok(settings)
    }

    /// Serialize back to pretty RON
    #[cfg(test)]
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("    ".to_string());
        ron::ser::to_string_pretty(self, config)
    }

    fn validate(&self) -> Result<(), String> {
        let w = &self.window;
        if w.width <= 0 || w.height <= 0 {
            return Err(format!("window size must be positive ({}x{})", w.width, w.height));
        }
        if !(w.target_fps > 0.0) {
            return Err(format!("target_fps must be positive ({})", w.target_fps));
        }

        validate_sprite(&self.player, "player")?;
        validate_sprite(&self.obstacles.sprite, "obstacles.sprite")?;

        if self.layers.len() != 3 {
            return Err(format!("expected 3 background layers, found {}", self.layers.len()));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if !(layer.scale > 0.0) {
                return Err(format!("layers[{}]: scale must be positive ({})", i, layer.scale));
            }
        }

        if self.rules.hit_padding < 0.0 {
            return Err(format!("hit_padding must not be negative ({})", self.rules.hit_padding));
        }
        Ok(())
    }
}

fn validate_sprite(sprite: &SpriteSettings, context: &str) -> Result<(), String> {
    if sprite.columns == 0 || sprite.rows == 0 {
        return Err(format!("{}: sheet grid must be non-empty ({}x{})",
            context, sprite.columns, sprite.rows));
    }
    if sprite.max_frame >= sprite.columns as usize {
        return Err(format!("{}: max_frame {} is past the last column ({})",
            context, sprite.max_frame, sprite.columns - 1));
    }
    if !(sprite.frames_per_second > 0.0) {
        return Err(format!("{}: frames_per_second must be positive ({})",
            context, sprite.frames_per_second));
    }
    Ok(())
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                title: "Dapper Dasher".to_string(),
                width: 512,
                height: 380,
                target_fps: 60.0,
            },
            physics: PhysicsSettings {
                gravity: 1000.0,
                jump_velocity: -600.0,
            },
            player: SpriteSettings {
                texture: "assets/textures/scarfy.png".to_string(),
                columns: 6,
                rows: 1,
                max_frame: 5,
                frames_per_second: 12.0,
            },
            obstacles: ObstacleSettings {
                sprite: SpriteSettings {
                    texture: "assets/textures/12_nebula_spritesheet.png".to_string(),
                    columns: 8,
                    rows: 8,
                    max_frame: 7,
                    frames_per_second: 50.0,
                },
                spacing: 400.0,
                velocity: -200.0,
            },
            layers: vec![
                LayerSettings { texture: "assets/textures/far-buildings.png".to_string(), speed: 20.0, scale: 2.0 },
                LayerSettings { texture: "assets/textures/back-buildings.png".to_string(), speed: 40.0, scale: 2.0 },
                LayerSettings { texture: "assets/textures/foreground.png".to_string(), speed: 80.0, scale: 2.0 },
            ],
            rules: RuleSettings {
                hit_padding: 50.0,
                win_margin: 250.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_document_matches_default() {
        let parsed = GameSettings::from_ron(DEFAULT_SETTINGS_RON).unwrap();
        assert_eq!(parsed, GameSettings::default());
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let settings = GameSettings::default();
        let text = settings.to_ron().unwrap();
        assert_eq!(GameSettings::from_ron(&text).unwrap(), settings);
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = GameSettings::from_ron("(window: (").unwrap_err();
        assert!(matches!(err, SettingsError::ParseError(_)));
    }

    #[test]
    fn test_max_frame_past_sheet_rejected() {
        let mut settings = GameSettings::default();
        settings.player.max_frame = 6;
        let text = settings.to_ron().unwrap();
        match GameSettings::from_ron(&text) {
            Err(SettingsError::ValidationError(msg)) => assert!(msg.contains("player")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_layer_count_enforced() {
        let mut settings = GameSettings::default();
        settings.layers.pop();
        let text = settings.to_ron().unwrap();
        assert!(matches!(
            GameSettings::from_ron(&text),
            Err(SettingsError::ValidationError(_))
        ));
    }
}
