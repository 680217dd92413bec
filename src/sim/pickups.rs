//! Apple pool
//!
//! The pool always holds `num_of_apples` apples while playing: an eaten apple
//! is removed and a replacement appears somewhere else straight away.

use glam::Vec2;
use rand::Rng;

use super::state::{Apple, GameEvent, GameState};
use crate::audio::SoundCue;

/// Spawn range of an apple (top-left corner), a sprite-sized margin in
/// from every wall
pub const APPLE_X_RANGE: std::ops::RangeInclusive<i32> = 50..=900;
pub const APPLE_Y_RANGE: std::ops::RangeInclusive<i32> = 50..=520;

impl GameState {
    /// Add one apple at a random position
    pub fn spawn_apple(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = Vec2::new(
            self.rng.random_range(APPLE_X_RANGE) as f32,
            self.rng.random_range(APPLE_Y_RANGE) as f32,
        );
        self.apples.push(Apple {
            id,
            pos,
            cue: SoundCue::Chew,
        });
        id
    }

    /// Top the pool up to the configured size
    pub fn fill_apples(&mut self) {
        while self.apples.len() < self.settings.num_of_apples {
            self.spawn_apple();
        }
    }

    /// Eat every apple the character touches, replacing each one
    pub fn consume_apples(&mut self) -> Vec<GameEvent> {
        let character = self.character().clone();
        let (eaten, kept): (Vec<Apple>, Vec<Apple>) = std::mem::take(&mut self.apples)
            .into_iter()
            .partition(|apple| character.touches(apple.pos));
        self.apples = kept;

        let mut events = Vec::with_capacity(eaten.len());
        for apple in eaten {
            self.score.add(1);
            self.spawn_apple();
            log::debug!("Apple {} eaten, score {}", apple.id, self.score.get());
            events.push(GameEvent::AppleEaten {
                id: apple.id,
                cue: apple.cue,
            });
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_pool_size_invariant_after_eating() {
        let mut state = GameState::new(Settings::default(), 7);
        let target = state.apples[2].pos;
        let eaten_id = state.apples[2].id;
        state.character_mut().pos = target;

        let events = state.consume_apples();

        assert!(events.contains(&GameEvent::AppleEaten {
            id: eaten_id,
            cue: SoundCue::Chew
        }));
        assert_eq!(state.apples.len(), 5);
        assert!(state.apples.iter().all(|a| a.id != eaten_id));
        assert_eq!(state.score.get(), events.len() as i64);
    }

    #[test]
    fn test_replacements_land_inside_margin() {
        let mut state = GameState::new(Settings::default(), 2024);
        for _ in 0..200 {
            let target = state.apples[0].pos;
            state.character_mut().pos = target;
            state.consume_apples();
            assert_eq!(state.apples.len(), 5);
            for apple in &state.apples {
                assert!(apple.pos.x > 0.0 && apple.pos.x < 930.0);
                assert!(apple.pos.y > 0.0 && apple.pos.y < 530.0);
                assert!((50.0..=900.0).contains(&apple.pos.x));
                assert!((50.0..=520.0).contains(&apple.pos.y));
            }
        }
    }

    #[test]
    fn test_nothing_eaten_far_away() {
        let mut state = GameState::new(Settings::default(), 5);
        for apple in &mut state.apples {
            apple.pos = Vec2::new(900.0, 520.0);
        }
        state.character_mut().pos = Vec2::ZERO;
        assert!(state.consume_apples().is_empty());
        assert_eq!(state.score.get(), 0);
    }
}
