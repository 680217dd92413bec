//! Piglet vs Apples - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Simulation (growth, predator motion, collectibles, collisions)
//! - `flow`: Game flow state machine (menu → naming → char select → play → over)
//! - `highscores`: Top-5 ranking table
//! - `persistence`: Score file storage
//! - `renderer`: Frame descriptions handed to a presentation adapter
//! - `platform`: Input events, held keys, frame pacing and the terminal adapter
//! - `audio`: Sound cue sink

pub mod audio;
pub mod error;
pub mod flow;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{Error, Result};
pub use flow::{Control, Game, Screen};
pub use highscores::{RankingEntry, RankingTable};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: u32 = 998;
    pub const SCREEN_HEIGHT: u32 = 590;

    /// Largest top-left coordinate a 64px sprite may occupy
    pub const BOUND_X: f32 = 930.0;
    pub const BOUND_Y: f32 = 530.0;

    /// Simulation ticks per second (only enforced in play)
    pub const TICK_RATE: u32 = 60;

    /// Collectibles alive during play
    pub const NUM_OF_APPLES: usize = 5;

    /// Growth thresholds
    pub const BIG_THRESHOLD: i64 = 50;
    pub const VERY_BIG_THRESHOLD: i64 = 100;

    /// Character defaults
    pub const BASE_VELOCITY: f32 = 4.0;
    pub const BASE_COLLISION_RADIUS: f32 = 40.0;
    pub const BIG_RADIUS_BONUS: f32 = 15.0;
    pub const VERY_BIG_RADIUS_BONUS: f32 = 10.0;
    pub const SPAWN_X: f32 = 400.0;
    pub const SPAWN_Y: f32 = 350.0;

    /// One more predator per this many points
    pub const PREDATOR_SPAWN_RATIO: i64 = 10;
    /// Predator motion defaults
    pub const PREDATOR_STEP: f32 = 3.0;
    pub const PREDATOR_VERTICAL_STEP: f32 = 40.0;

    /// Ranking table length
    pub const RANKING_SIZE: usize = 5;
}

/// Clamp a top-left position into `[0, max]` on both axes
#[inline]
pub fn clamp_to_bounds(pos: Vec2, max: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, max)
}
