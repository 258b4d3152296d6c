//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and windowing dependencies:
//! - Fixed per-frame steps only (movement is pixels per frame)
//! - Seeded RNG only
//! - Stable iteration order (coins keep insertion order)
//! - No macroquad or platform code

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::circle_rect_collision;
pub use rect::Rect;
pub use state::{Coin, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
