//! Game state and core simulation types
//!
//! The loop in `main` owns a single `GameState`; every component operation
//! borrows it explicitly rather than reaching for process-wide globals.

use std::io;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::circle_rect_collision;
use super::rect::Rect;
use crate::consts::*;
use crate::persistence::ScoreStore;
use crate::settings::Settings;

/// Current phase of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frame loop is live
    Running,
    /// Quit signal observed; the loop exits after the in-flight frame
    Stopped,
}

/// A stationary collectible. Immutable once spawned; collecting one removes
/// it from the collection rather than mutating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub center: Vec2,
    pub radius: f32,
    pub value: u32,
}

impl Coin {
    /// Spawn a coin at a uniformly random center, constrained so the full
    /// circle lies on screen: both coordinates are drawn from
    /// `[radius, screen_extent - radius]` inclusive.
    pub fn spawn(rng: &mut Pcg32, radius: f32, value: u32) -> Self {
        let center = Vec2::new(
            rng.random_range(radius..=SCREEN_WIDTH - radius),
            rng.random_range(radius..=SCREEN_HEIGHT - radius),
        );
        Self {
            center,
            radius,
            value,
        }
    }

    /// Collision test against the player's rectangle
    pub fn overlaps(&self, rect: &Rect) -> bool {
        circle_rect_collision(self.center, self.radius, rect)
    }
}

/// The player-controlled rectangle
#[derive(Debug, Clone)]
pub struct Player {
    /// Current bounds; only the position moves, the size is fixed
    pub rect: Rect,
    /// Pixels moved per frame per held direction
    pub speed: f32,
    /// Session score, starts at zero each run
    pub score: u32,
}

impl Player {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            speed,
            score: 0,
        }
    }

    /// Apply a movement delta, then clamp per axis so the rectangle stays
    /// fully inside the screen.
    pub fn move_by(&mut self, delta: Vec2) {
        self.rect.x = (self.rect.x + delta.x).clamp(0.0, SCREEN_WIDTH - self.rect.w);
        self.rect.y = (self.rect.y + delta.y).clamp(0.0, SCREEN_HEIGHT - self.rect.h);
    }

    /// Bank a collected coin: bump the session score, then fold the value
    /// into the lifetime total on disk (read, add, write back). The two
    /// counters are independent: the session score resets every run while
    /// the stored total accumulates across sessions.
    ///
    /// Returns the new lifetime total.
    pub fn accrue(&mut self, value: u32, store: &ScoreStore) -> io::Result<u64> {
        self.score += value;
        let total = store.read_total()? + u64::from(value);
        store.write_total(total)?;
        Ok(total)
    }
}

/// Complete game state, owned by the loop controller
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducible coin layouts
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Active coins in insertion order
    pub coins: Vec<Coin>,
}

impl GameState {
    /// Create a new game state with the given seed, spawning the starting
    /// coin field.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            player: Player::new(PLAYER_START_X, PLAYER_START_Y, settings.player_speed),
            coins: Vec::with_capacity(settings.coin_count),
        };

        for _ in 0..settings.coin_count {
            state.spawn_coin(settings.coin_radius, settings.coin_value);
        }

        state
    }

    /// Spawn one coin at a random on-screen position
    pub fn spawn_coin(&mut self, radius: f32, value: u32) {
        let coin = Coin::spawn(&mut self.rng, radius, value);
        self.coins.push(coin);
    }

    /// Test every coin against the player's current rectangle and remove
    /// the colliding ones, returning them in insertion order.
    ///
    /// One pass over the collection: each coin is visited exactly once, and
    /// removal happens inside `retain` rather than while hand-iterating, so
    /// no entry is skipped or double-processed.
    pub fn collect_coins(&mut self) -> Vec<Coin> {
        let player_rect = self.player.rect;
        let mut consumed = Vec::new();
        self.coins.retain(|coin| {
            if coin.overlaps(&player_rect) {
                consumed.push(*coin);
                false
            } else {
                true
            }
        });
        consumed
    }
}
