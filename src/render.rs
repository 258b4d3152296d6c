//! Immediate-mode frame drawing
//!
//! The display half of the loop. Macroquad supplies the drawable surface,
//! the shape primitives, and text blitting; the simulation never touches
//! any of it.

use macroquad::prelude::*;

use crate::sim::GameState;

/// Coin fill, the classic gold (255, 215, 0)
const COIN_GOLD: Color = Color::new(1.0, 0.843, 0.0, 1.0);

/// Score label position and size
const SCORE_POS: (f32, f32) = (10.0, 24.0);
const SCORE_FONT_SIZE: f32 = 24.0;

/// Draw one complete frame: background, active coins, player, score text.
pub fn draw_frame(state: &GameState) {
    clear_background(WHITE);

    for coin in &state.coins {
        draw_circle(coin.center.x, coin.center.y, coin.radius, COIN_GOLD);
    }

    let rect = &state.player.rect;
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BLACK);

    draw_text(
        &format!("Score: {}", state.player.score),
        SCORE_POS.0,
        SCORE_POS.1,
        SCORE_FONT_SIZE,
        BLACK,
    );
}
