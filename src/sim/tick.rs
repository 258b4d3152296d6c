//! Per-frame simulation step
//!
//! One `tick` per rendered frame, in a fixed order: consume coins under
//! the player, bank their value, then apply movement from the held keys.

use std::io;

use glam::Vec2;

use super::state::{Coin, GameState};
use crate::persistence::ScoreStore;

/// Snapshot of the movement keys held this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Movement delta for this frame at the given per-axis speed.
    ///
    /// Each flag contributes independently, so holding two perpendicular
    /// directions moves `speed` on both axes at once (diagonal travel is
    /// ~1.41x faster than axis-aligned - inherited arcade behavior, kept
    /// deliberately unnormalized).
    pub fn delta(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        delta
    }
}

/// Advance the game by one frame: remove every coin overlapping the player,
/// accrue each one's value (session score plus the store's read-modify-write),
/// then move the player. Returns the consumed coins so the shell can log them.
///
/// Store I/O errors are fatal to the frame and propagate to the caller.
pub fn tick(state: &mut GameState, input: &TickInput, store: &ScoreStore) -> io::Result<Vec<Coin>> {
    let consumed = state.collect_coins();
    for coin in &consumed {
        state.player.accrue(coin.value, store)?;
    }

    let delta = input.delta(state.player.speed);
    state.player.move_by(delta);

    Ok(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;

    fn state_with_coins(coins: Vec<Coin>) -> GameState {
        let mut state = GameState::new(12345, &Settings::default());
        state.coins = coins;
        state
    }

    fn temp_store() -> (tempfile::TempDir, ScoreStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::open(dir.path().join("scores.txt")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_tick_consumes_and_banks_overlapping_coins() {
        let (_dir, store) = temp_store();
        let mut state = state_with_coins(vec![
            Coin {
                center: Vec2::new(405.0, 300.0),
                radius: 10.0,
                value: 10,
            },
            Coin {
                center: Vec2::new(100.0, 100.0),
                radius: 10.0,
                value: 10,
            },
        ]);

        let consumed = tick(&mut state, &TickInput::default(), &store).unwrap();
        assert_eq!(consumed.len(), 1);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.player.score, 10);
        assert_eq!(store.read_total().unwrap(), 10);

        // The surviving coin is untouched on the next frame
        let consumed = tick(&mut state, &TickInput::default(), &store).unwrap();
        assert!(consumed.is_empty());
        assert_eq!(state.player.score, 10);
    }

    #[test]
    fn test_tick_moves_player_by_held_flags() {
        let (_dir, store) = temp_store();
        let mut state = state_with_coins(vec![]);

        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, &store).unwrap();
        assert_eq!(state.player.rect.x, PLAYER_START_X + PLAYER_SPEED);
        assert_eq!(state.player.rect.y, PLAYER_START_Y);
    }

    #[test]
    fn test_diagonal_movement_unnormalized() {
        let (_dir, store) = temp_store();
        let mut state = state_with_coins(vec![]);

        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, &store).unwrap();
        // Full speed on both axes, no 1/sqrt(2) scaling
        assert_eq!(state.player.rect.x, PLAYER_START_X - PLAYER_SPEED);
        assert_eq!(state.player.rect.y, PLAYER_START_Y - PLAYER_SPEED);
    }

    #[test]
    fn test_opposing_flags_cancel() {
        let input = TickInput {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(input.delta(4.0), Vec2::ZERO);
    }

    #[test]
    fn test_pressing_left_at_edge_keeps_player_on_screen() {
        let (_dir, store) = temp_store();
        let mut state = state_with_coins(vec![]);
        state.player.rect.x = 0.0;
        state.player.rect.y = 300.0;

        let input = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..50 {
            tick(&mut state, &input, &store).unwrap();
        }
        assert_eq!(state.player.rect.x, 0.0);
    }
}
