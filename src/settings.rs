//! Game settings and tuning constants
//!
//! Persisted as JSON next to the binary. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Largest x a sprite's top-left corner may take
    pub bound_x: f32,
    /// Largest y a sprite's top-left corner may take
    pub bound_y: f32,
    /// Ticks per second while playing
    pub tick_rate: u32,

    // === Collectibles ===
    pub num_of_apples: usize,

    // === Growth ===
    pub growth_big_threshold: i64,
    pub growth_very_big_threshold: i64,
    pub base_velocity: f32,
    pub base_collision_radius: f32,
    pub big_radius_bonus: f32,
    pub very_big_radius_bonus: f32,

    // === Predators ===
    /// A new predator joins whenever score >= ratio * predator count
    pub predator_spawn_ratio: i64,
    pub predator_step: f32,
    pub predator_vertical_step: f32,

    // === Ranking ===
    pub ranking_size: usize,
    pub scores_path: String,

    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bound_x: BOUND_X,
            bound_y: BOUND_Y,
            tick_rate: TICK_RATE,

            num_of_apples: NUM_OF_APPLES,

            growth_big_threshold: BIG_THRESHOLD,
            growth_very_big_threshold: VERY_BIG_THRESHOLD,
            base_velocity: BASE_VELOCITY,
            base_collision_radius: BASE_COLLISION_RADIUS,
            big_radius_bonus: BIG_RADIUS_BONUS,
            very_big_radius_bonus: VERY_BIG_RADIUS_BONUS,

            predator_spawn_ratio: PREDATOR_SPAWN_RATIO,
            predator_step: PREDATOR_STEP,
            predator_vertical_step: PREDATOR_VERTICAL_STEP,

            ranking_size: RANKING_SIZE,
            scores_path: "database/scores.csv".to_string(),

            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    /// Clamp bounds as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.bound_x, self.bound_y)
    }

    /// Effective sound-effect volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| Error::Settings(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_playfield() {
        let settings = Settings::default();
        assert_eq!(settings.screen_width, 998);
        assert_eq!(settings.screen_height, 590);
        assert_eq!(settings.bounds(), Vec2::new(930.0, 530.0));
        assert_eq!(settings.num_of_apples, 5);
        assert_eq!(settings.ranking_size, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"num_of_apples": 8, "seed": 7}"#)
            .expect("partial settings parse");
        assert_eq!(settings.num_of_apples, 8);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.predator_spawn_ratio, 10);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = std::env::temp_dir().join(format!("piglet-settings-{}.json", std::process::id()));
        let settings = Settings {
            num_of_apples: 9,
            seed: Some(31),
            scores_path: "elsewhere/scores.csv".to_string(),
            muted: true,
            ..Default::default()
        };

        settings.save(&path).expect("save settings");
        let loaded = Settings::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = Path::new("/nonexistent/dir/settings.json");
        let err = Settings::default().save(path).expect_err("no such directory");
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_mute_silences_everything() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert_eq!(settings.effective_music_volume(), 0.0);
    }
}
