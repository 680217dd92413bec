//! Simulation module
//!
//! All gameplay rules live here. This module must stay free of rendering and
//! platform dependencies:
//! - Seeded RNG only
//! - Stable iteration order (insertion order of entities)
//! - One call to `tick` per rendered play frame

pub mod collision;
pub mod growth;
pub mod pickups;
pub mod predator;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use growth::apply_growth;
pub use predator::Predator;
pub use state::{
    Apple, Character, GameEvent, GameState, Score, SizeTier, Species, Sprite,
};
pub use tick::{TickInput, tick};
