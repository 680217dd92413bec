//! Wolf motion
//!
//! Wolves sweep horizontally and drop (or climb) one vertical step each time
//! they hit a side wall, which gives a zig-zag bounce rather than a billiard
//! reflection.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Sprite};
use crate::settings::Settings;

/// Spawn range of a fresh wolf (top-left corner)
pub const SPAWN_X_RANGE: std::ops::RangeInclusive<i32> = 150..=900;
pub const SPAWN_Y_RANGE: std::ops::RangeInclusive<i32> = 10..=100;

/// A roaming wolf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predator {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Signed horizontal step per tick
    pub step_x: f32,
    /// Vertical displacement applied on each side-wall hit
    pub vertical_step: f32,
    /// +1 moves down on the next side-wall hit, -1 moves up
    pub direction_y: f32,
    pub sprite: Sprite,
}

impl Predator {
    pub fn new(id: u32, pos: Vec2, settings: &Settings) -> Self {
        Self {
            id,
            pos,
            step_x: settings.predator_step,
            vertical_step: settings.predator_vertical_step,
            direction_y: 1.0,
            sprite: Sprite::Wolf,
        }
    }

    /// Advance one tick inside `[0, bounds]`
    ///
    /// The step is applied first, then the walls are checked in the fixed
    /// order left, right, top, bottom. A side-wall hit clamps x, forces the
    /// step to point back inside and shifts y by one vertical step in the
    /// current direction; the top/bottom checks then clamp y and pick the
    /// direction for the next side-wall hit. Both axes may fire in one tick.
    pub fn advance(&mut self, bounds: Vec2, step: f32) {
        self.pos.x += self.step_x;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.step_x = step;
            self.pos.y += self.direction_y * self.vertical_step;
        }
        if self.pos.x >= bounds.x {
            self.pos.x = bounds.x;
            self.step_x = -step;
            self.pos.y += self.direction_y * self.vertical_step;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.direction_y = 1.0;
        }
        if self.pos.y >= bounds.y {
            self.pos.y = bounds.y;
            self.direction_y = -1.0;
        }
    }

    /// Superpower: turn around on both axes
    pub fn reverse(&mut self) {
        self.direction_y = -self.direction_y;
        self.step_x = -self.step_x;
    }
}

impl GameState {
    /// Add one wolf at a random position with default motion
    pub fn spawn_predator(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = Vec2::new(
            self.rng.random_range(SPAWN_X_RANGE) as f32,
            self.rng.random_range(SPAWN_Y_RANGE) as f32,
        );
        self.predators.push(Predator::new(id, pos, &self.settings));
        id
    }

    /// Move every wolf one tick
    pub fn advance_predators(&mut self) {
        let bounds = self.settings.bounds();
        let step = self.settings.predator_step;
        for predator in &mut self.predators {
            predator.advance(bounds, step);
        }
    }

    /// Spawn one extra wolf when the score has caught up with the pack size
    pub fn reinforce_predators(&mut self) -> Option<GameEvent> {
        let threshold = self.settings.predator_spawn_ratio * self.predators.len() as i64;
        if self.score.get() < threshold {
            return None;
        }
        let id = self.spawn_predator();
        let count = self.predators.len();
        log::debug!("Wolf {id} joined (pack of {count})");
        Some(GameEvent::PredatorSpawned { id, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(930.0, 530.0);

    fn wolf_at(x: f32, y: f32, step_x: f32) -> Predator {
        let mut wolf = Predator::new(1, Vec2::new(x, y), &Settings::default());
        wolf.step_x = step_x;
        wolf
    }

    #[test]
    fn test_left_wall_forces_rightward_step() {
        let mut wolf = wolf_at(0.0, 100.0, -3.0);
        wolf.advance(BOUNDS, 3.0);
        assert_eq!(wolf.step_x, 3.0);
        assert_eq!(wolf.pos, Vec2::new(0.0, 140.0));

        for _ in 0..50 {
            wolf.advance(BOUNDS, 3.0);
            assert_eq!(wolf.step_x, 3.0);
        }
    }

    #[test]
    fn test_right_wall_forces_leftward_step() {
        let mut wolf = wolf_at(929.0, 100.0, 3.0);
        wolf.advance(BOUNDS, 3.0);
        assert_eq!(wolf.pos.x, 930.0);
        assert_eq!(wolf.step_x, -3.0);
        assert_eq!(wolf.pos.y, 140.0);

        wolf.advance(BOUNDS, 3.0);
        assert_eq!(wolf.pos, Vec2::new(927.0, 140.0));
    }

    #[test]
    fn test_bottom_flips_vertical_direction() {
        let mut wolf = wolf_at(929.0, 520.0, 3.0);
        wolf.advance(BOUNDS, 3.0);
        assert_eq!(wolf.pos, Vec2::new(930.0, 530.0));
        assert_eq!(wolf.direction_y, -1.0);
    }

    #[test]
    fn test_corner_hits_both_axes() {
        let mut wolf = wolf_at(1.0, 20.0, -3.0);
        wolf.direction_y = -1.0;
        wolf.advance(BOUNDS, 3.0);
        assert_eq!(wolf.pos, Vec2::ZERO);
        assert_eq!(wolf.step_x, 3.0);
        assert_eq!(wolf.direction_y, 1.0);
    }

    #[test]
    fn test_open_field_moves_horizontally_only() {
        let mut wolf = wolf_at(300.0, 200.0, 3.0);
        wolf.advance(BOUNDS, 3.0);
        assert_eq!(wolf.pos, Vec2::new(303.0, 200.0));
    }

    #[test]
    fn test_reverse() {
        let mut wolf = wolf_at(300.0, 200.0, 3.0);
        wolf.reverse();
        assert_eq!(wolf.step_x, -3.0);
        assert_eq!(wolf.direction_y, -1.0);
    }

    #[test]
    fn test_reinforcement_ratio() {
        let mut state = GameState::new(Settings::default(), 3);
        assert!(state.reinforce_predators().is_none());

        state.score.add(10);
        assert!(matches!(
            state.reinforce_predators(),
            Some(GameEvent::PredatorSpawned { count: 2, .. })
        ));
        assert!(state.reinforce_predators().is_none());
    }

    #[test]
    fn test_spawned_wolves_use_spawn_range() {
        let mut state = GameState::new(Settings::default(), 42);
        for _ in 0..100 {
            state.spawn_predator();
        }
        for wolf in &state.predators {
            assert!((150.0..=900.0).contains(&wolf.pos.x));
            assert!((10.0..=100.0).contains(&wolf.pos.y));
            assert_eq!(wolf.step_x, 3.0);
            assert_eq!(wolf.vertical_step, 40.0);
            assert_eq!(wolf.direction_y, 1.0);
        }
    }

    proptest! {
        #[test]
        fn wolves_stay_inside_bounds(
            x in 0i32..=930,
            y in 0i32..=530,
            rightward in any::<bool>(),
            reversals in proptest::collection::vec(0usize..2000, 0..5),
            ticks in 1usize..2000,
        ) {
            let step = if rightward { 3.0 } else { -3.0 };
            let mut wolf = wolf_at(x as f32, y as f32, step);
            for t in 0..ticks {
                if reversals.contains(&t) {
                    wolf.reverse();
                }
                wolf.advance(BOUNDS, 3.0);
                prop_assert!((0.0..=930.0).contains(&wolf.pos.x));
                prop_assert!((0.0..=530.0).contains(&wolf.pos.y));
                prop_assert_eq!(wolf.step_x.abs(), 3.0);
            }
        }
    }
}
