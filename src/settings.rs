//! Game settings and tuning
//!
//! Persisted as JSON next to the executable. Everything here has a compiled
//! default matching the classic layout; the file only needs to exist when a
//! value is being overridden.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Coins placed at game start
    pub coin_count: usize,
    /// Coin radius in pixels
    pub coin_radius: f32,
    /// Points per collected coin
    pub coin_value: u32,
    /// Player movement in pixels per frame per held direction
    pub player_speed: f32,
    /// Backing file for the lifetime score counter
    pub score_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coin_count: COIN_COUNT,
            coin_radius: COIN_RADIUS,
            coin_value: COIN_VALUE,
            player_speed: PLAYER_SPEED,
            score_file: SCORE_FILE.to_string(),
        }
    }
}

impl Settings {
    /// Settings file name
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Load settings from disk, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::SETTINGS_FILE);
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", Self::SETTINGS_FILE, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk (best effort).
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::SETTINGS_FILE, json) {
                    log::warn!("failed to save settings: {}", e);
                }
            }
            Err(e) => log::warn!("failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let settings = Settings::default();
        assert_eq!(settings.coin_count, 8);
        assert_eq!(settings.coin_radius, 10.0);
        assert_eq!(settings.coin_value, 10);
        assert_eq!(settings.player_speed, 4.0);
        assert_eq!(settings.score_file, "scores.txt");
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"coin_count": 12}"#).unwrap();
        assert_eq!(settings.coin_count, 12);
        assert_eq!(settings.coin_value, COIN_VALUE);
        assert_eq!(settings.score_file, SCORE_FILE);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            coin_count: 3,
            coin_radius: 12.5,
            coin_value: 25,
            player_speed: 6.0,
            score_file: "alt.txt".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.coin_count, 3);
        assert_eq!(back.coin_radius, 12.5);
        assert_eq!(back.score_file, "alt.txt");
    }
}
