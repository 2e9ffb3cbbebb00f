//! Jump King: an endless vertical platformer
//!
//! Bounce from platform to platform as the world scrolls past. Every
//! landing and every platform left behind scores a point. Fall off the
//! bottom of the screen and the run is over.

use macroquad::prelude::{next_frame, Conf};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use jump_king::asset::GameAssets;
use jump_king::game::{renderer, FrameClock, GameState, RenderContext, TickOutcome};
use jump_king::input::{Action, InputState};
use jump_king::settings::{Settings, SETTINGS_FILE};
use jump_king::VERSION;

fn window_conf() -> Conf {
    // Runs before logging is up, so a bad settings file is only reported
    // once main loads it again
    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));
    Conf {
        window_title: "Jump King".to_string(),
        window_width: settings.screen_width.round() as i32,
        window_height: settings.screen_height.round() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// How the main loop ended
enum Exit {
    Quit,
    GameOver { final_score: u32 },
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Jump King v{} starting", VERSION);

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));

    let assets = match GameAssets::load(&settings) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Failed to load assets: {}", e);
            eprintln!("Jump King can't start: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match settings.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::seed_from_u64(macroquad::miniquad::date::now().to_bits()),
    };

    let ctx = RenderContext::new(assets, &settings);
    let mut clock = FrameClock::new(settings.fps_limit);
    let mut input = InputState::new();
    let mut state = GameState::new(settings, &mut rng);

    log::info!("FPS limit: {}", clock.limit().label());
    log::debug!(
        "Actions: {}",
        Action::ALL.iter().map(Action::label).collect::<Vec<_>>().join(", ")
    );
    if input.has_gamepad() {
        log::info!("Gamepad connected");
    }

    let exit = loop {
        clock.begin();

        renderer::draw_background(&ctx);

        let frame_input = input.poll();
        if frame_input.quit {
            break Exit::Quit;
        }

        let outcome = state.tick(frame_input.movement(), &mut rng);

        for e in state.events.landed.iter() {
            log::debug!("Landed on platform {} (score {})", e.slot, e.score);
        }
        for e in state.events.recycled.iter() {
            log::debug!("Recycled platform {} to x={} (score {})", e.slot, e.x, e.score);
        }
        for e in state.events.game_over.iter() {
            log::info!("Game over after {} frames", e.frames);
        }

        if let TickOutcome::GameOver { final_score } = outcome {
            break Exit::GameOver { final_score };
        }

        renderer::draw_world(&ctx, &state);

        clock.wait();
        next_frame().await;
    };

    match exit {
        Exit::Quit => log::info!("Quit requested (score {})", state.score),
        Exit::GameOver { final_score } => println!("Game Over! Your score: {}", final_score),
    }
}
