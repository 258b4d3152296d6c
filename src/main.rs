//! Coin Dash entry point
//!
//! Wires the macroquad display driver to the simulation: one frame loop
//! polling input, ticking the sim, drawing, and pacing to 60 FPS.

use macroquad::prelude::*;

use coin_dash::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use coin_dash::render;
use coin_dash::sim::{GamePhase, GameState, TickInput, tick};
use coin_dash::{ScoreStore, Settings};

/// Set up the fixed 800x600 logical surface before the app runs
fn window_conf() -> Conf {
    Conf {
        window_title: "Coin Dash".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Snapshot of the movement keys currently held (WASD or arrows)
fn poll_input() -> TickInput {
    TickInput {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
    }
}

/// Bounded sleep toward the target frame rate; vsync alone is not
/// guaranteed to cap the loop.
fn pace_frame() {
    let min_frame_time = 1.0 / TARGET_FPS;
    let frame_time = get_frame_time();
    if frame_time < min_frame_time {
        let sleep_ms = (min_frame_time - frame_time) * 1000.0;
        std::thread::sleep(std::time::Duration::from_millis(sleep_ms as u64));
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Coin Dash starting...");

    let settings = Settings::load();
    let store = ScoreStore::open(&settings.score_file).expect("failed to open score store");

    let seed = macroquad::miniquad::date::now() as u64;
    let mut state = GameState::new(seed, &settings);
    log::info!("spawned {} coins (seed {})", state.coins.len(), seed);

    // Observe window close as a per-frame quit signal instead of an
    // immediate teardown, so the in-flight frame always completes.
    prevent_quit();

    while state.phase == GamePhase::Running {
        if is_quit_requested() {
            state.phase = GamePhase::Stopped;
            continue;
        }

        let input = poll_input();
        let consumed = tick(&mut state, &input, &store).expect("score store update failed");
        for coin in &consumed {
            log::debug!(
                "collected coin at ({:.0}, {:.0}), session score {}",
                coin.center.x,
                coin.center.y,
                state.player.score
            );
        }

        render::draw_frame(&state);

        pace_frame();
        next_frame().await;
    }

    log::info!(
        "session over: {} points this run, lifetime total {}",
        state.player.score,
        store.read_total().unwrap_or(0)
    );
}
