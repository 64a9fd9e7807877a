//! Dapper Dasher: a side-scrolling jumper
//!
//! Hop over a row of nebulae while three background layers scroll past.
//! Touch one and it's "Game Over"; let the last one pass and "You win!".

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
mod game;
mod input;
mod pacing;
mod render;
mod settings;

use macroquad::prelude::*;
use error::GameError;
use game::World;
use input::{Action, InputState};
use pacing::FramePacer;
use render::Assets;
use settings::{GameSettings, DEFAULT_SETTINGS_RON};

/// Parse the compiled-in settings, or exit
fn load_settings() -> GameSettings {
    match GameSettings::from_ron(DEFAULT_SETTINGS_RON) {
        Ok(settings) => settings,
        Err(e) => fatal(e.into()),
    }
}

fn fatal(err: GameError) -> ! {
    eprintln!("Fatal: {}", err);
    std::process::exit(1);
}

fn window_conf() -> Conf {
    let settings = load_settings();
    Conf {
        window_title: settings.window.title,
        window_width: settings.window.width,
        window_height: settings.window.height,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings = load_settings();
    println!("=== {} v{} ===", settings.window.title.to_uppercase(), VERSION);

    let assets = match Assets::load(&settings).await {
        Ok(assets) => assets,
        Err(e) => fatal(e),
    };

    let mut world = World::new(&settings, assets.sizes());
    let mut input = InputState::new();
    let pacer = FramePacer::new(settings.window.target_fps);
    match pacer.target_frame_time() {
        Some(t) => println!("Frame cap: {:.2} ms", t * 1000.0),
        None => println!("Frame cap: unlocked"),
    }

    if input.has_gamepad() {
        println!("Gamepad detected: South button jumps");
    }

    loop {
        let frame_start = get_time();

        input.poll();
        if input.action_pressed(Action::Quit) {
            break;
        }

        let delta = get_frame_time();
        if let Some(outcome) = world.tick(delta, input.action_pressed(Action::Jump)) {
            println!("Outcome: Playing -> {:?}", outcome);
        }

        clear_background(WHITE);
        render::draw_world(&world, &assets);

        pacer.wait(frame_start);
        next_frame().await;
    }

    assets.unload();
    println!("Goodbye");
}
