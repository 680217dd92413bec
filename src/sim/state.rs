//! Game state and core simulation types
//!
//! A single `GameState` owns the roster, the predators, the apples, the score
//! and the RNG. Nothing in here is shared or global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::predator::Predator;
use crate::audio::SoundCue;
use crate::consts::{SPAWN_X, SPAWN_Y};
use crate::settings::Settings;

/// Selectable animal species, in avatar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Pig,
    Elephant,
    Cow,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Pig, Species::Elephant, Species::Cow];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Pig => "Pig",
            Species::Elephant => "Elephant",
            Species::Cow => "Cow",
        }
    }

    /// Roster slot of this species
    pub fn index(&self) -> usize {
        match self {
            Species::Pig => 0,
            Species::Elephant => 1,
            Species::Cow => 2,
        }
    }

    /// Superpower sound of this species
    pub fn cue(&self) -> SoundCue {
        SoundCue::Call(*self)
    }
}

/// Size class of the player character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeTier {
    Small,
    Big,
    VeryBig,
}

/// Opaque display-asset handle, resolved by the presentation adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Character(Species, SizeTier),
    Avatar(Species),
    Apple,
    Wolf,
    Background,
}

/// The player-controlled animal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub species: Species,
    /// Top-left corner
    pub pos: Vec2,
    /// Where the character returns after being caught
    pub spawn: Vec2,
    /// Pixels per tick on each held axis
    pub velocity: f32,
    pub tier: SizeTier,
    pub collision_radius: f32,
    pub sprite: Sprite,
    pub cue: SoundCue,
}

impl Character {
    pub fn new(species: Species, spawn: Vec2, settings: &Settings) -> Self {
        Self {
            species,
            pos: spawn,
            spawn,
            velocity: settings.base_velocity,
            tier: SizeTier::Small,
            collision_radius: settings.base_collision_radius,
            sprite: Sprite::Character(species, SizeTier::Small),
            cue: species.cue(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.species.name()
    }

    /// Whether another entity's position is inside this character's hitbox
    pub fn touches(&self, other: Vec2) -> bool {
        super::collides(self.pos, other, self.collision_radius)
    }

    pub fn reset_position(&mut self) {
        self.pos = self.spawn;
    }
}

/// A consumable apple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apple {
    pub id: u32,
    pub pos: Vec2,
    pub cue: SoundCue,
}

/// Run score
///
/// The ledger may dip below zero after a superpower; it is floored the next
/// time the frame is settled, and every read goes through the floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    value: i64,
}

impl Score {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// Floored score, never negative
    pub fn get(&self) -> i64 {
        self.value.max(0)
    }

    /// Unfloored ledger value
    pub fn raw(&self) -> i64 {
        self.value
    }

    pub fn add(&mut self, points: i64) {
        self.value += points;
    }

    pub fn sub(&mut self, points: i64) {
        self.value -= points;
    }

    /// Floor the ledger at zero (done once per rendered frame)
    pub fn settle(&mut self) -> i64 {
        if self.value < 0 {
            self.value = 0;
        }
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An apple was eaten and replaced
    AppleEaten { id: u32, cue: SoundCue },
    /// Predator directions were inverted
    Superpower { cue: SoundCue },
    /// A predator joined because the score grew
    PredatorSpawned { id: u32, count: usize },
    /// The character touched a predator
    Caught { predator: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// One character per species, in `Species::ALL` order
    pub roster: Vec<Character>,
    /// Index into `roster` of the character being played
    pub active: usize,
    pub predators: Vec<Predator>,
    pub apples: Vec<Apple>,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let spawn = Vec2::new(SPAWN_X, SPAWN_Y);
        let roster = Species::ALL
            .iter()
            .map(|&species| Character::new(species, spawn, &settings))
            .collect();

        let mut state = Self {
            settings,
            roster,
            active: Species::Cow.index(),
            predators: Vec::new(),
            apples: Vec::new(),
            score: Score::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        state.spawn_predator();
        state.fill_apples();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn character(&self) -> &Character {
        &self.roster[self.active]
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.roster[self.active]
    }

    /// Make `species` the active character without touching its position
    pub fn select(&mut self, species: Species) {
        self.active = species.index();
    }

    /// After being caught: one fresh predator, character back at spawn
    pub fn reset_after_death(&mut self) {
        self.predators.clear();
        self.spawn_predator();
        self.character_mut().reset_position();
    }
}
