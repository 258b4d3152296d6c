//! Coin Dash - a top-down coin collecting arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collision, movement, scoring)
//! - `render`: Immediate-mode drawing via macroquad
//! - `persistence`: Lifetime score counter on disk
//! - `settings`: Data-driven game tuning

pub mod persistence;
pub mod render;
pub mod settings;
pub mod sim;

pub use persistence::ScoreStore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Frame pacing target
    pub const TARGET_FPS: f32 = 60.0;

    /// Coin defaults - every coin shares one radius and point value
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_VALUE: u32 = 10;
    /// Coins placed at game start
    pub const COIN_COUNT: usize = 8;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Movement step per held direction, in pixels per frame
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Default backing file for the lifetime score counter
    pub const SCORE_FILE: &str = "scores.txt";
}
