//! Texture loading and drawing
//!
//! The only module that touches macroquad's texture and text APIs. Draw
//! order per frame: background layers back to front, then either the end
//! message or the player and obstacles.

use macroquad::prelude::*;
use crate::error::GameError;
use crate::game::{AnimatedSprite, Parallax, SheetSizes, World};
use crate::settings::GameSettings;

const MESSAGE_FONT_SIZE: u16 = 40;

/// Every texture the game draws, loaded once before the main loop
pub struct Assets {
    pub player: Texture2D,
    pub obstacle: Texture2D,
    /// Back, mid and foreground
    pub layers: [Texture2D; 3],
}

async fn load(path: &str) -> Result<Texture2D, GameError> {
    let texture = load_texture(path).await.map_err(|source| GameError::Texture {
        path: path.to_string(),
        source,
    })?;
    texture.set_filter(FilterMode::Nearest);
    println!("Loaded texture {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}

impl Assets {
    pub async fn load(settings: &GameSettings) -> Result<Self, GameError> {
        let player = load(&settings.player.texture).await?;
        let obstacle = load(&settings.obstacles.sprite.texture).await?;
        let back = load(&settings.layers[0].texture).await?;
        let mid = load(&settings.layers[1].texture).await?;
        let fore = load(&settings.layers[2].texture).await?;

        Ok(Self {
            player,
            obstacle,
            layers: [back, mid, fore],
        })
    }

    pub fn sizes(&self) -> SheetSizes {
        SheetSizes {
            player: self.player.size(),
            obstacle: self.obstacle.size(),
            layer_widths: [
                self.layers[0].width(),
                self.layers[1].width(),
                self.layers[2].width(),
            ],
        }
    }

    /// Release GPU textures. Consumes the assets so nothing can draw after.
    pub fn unload(self) {
        println!("Unloading textures");
        drop(self);
    }
}

pub fn draw_world(world: &World, assets: &Assets) {
    draw_background(&world.parallax, &assets.layers);

    match world.outcome.message() {
        Some(message) => draw_centered_message(message, world.window_width, world.window_height),
        None => {
            draw_sprite(&assets.player, &world.player);
            for obstacle in &world.obstacles.obstacles {
                draw_sprite(&assets.obstacle, obstacle);
            }
        }
    }
}

/// Each layer twice, side by side, scaled up
fn draw_background(parallax: &Parallax, textures: &[Texture2D; 3]) {
    for (layer, texture) in parallax.layers.iter().zip(textures) {
        let size = texture.size() * layer.scale;
        for pos in layer.draw_positions() {
            draw_texture_ex(
                texture,
                pos.x,
                pos.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(size),
                    ..Default::default()
                },
            );
        }
    }
}

fn draw_sprite(sheet: &Texture2D, sprite: &AnimatedSprite) {
    draw_texture_ex(
        sheet,
        sprite.position.x,
        sprite.position.y,
        WHITE,
        DrawTextureParams {
            source: Some(sprite.frame_rect.to_macroquad()),
            ..Default::default()
        },
    );
}

fn draw_centered_message(message: &str, window_width: f32, window_height: f32) {
    let dims = measure_text(message, None, MESSAGE_FONT_SIZE, 1.0);
    // draw_text positions the baseline, so shift down by half the cap height
    let x = (window_width - dims.width) / 2.0;
    let y = (window_height + dims.offset_y) / 2.0;
    draw_text(message, x, y, MESSAGE_FONT_SIZE as f32, WHITE);
}
