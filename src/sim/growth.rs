//! Character growth
//!
//! Applied once per frame from the current score. Below the first threshold
//! the character is always forced back to the small build; the two upgrades
//! only fire from the tier directly beneath them, so each happens once.

use super::state::{Character, SizeTier, Sprite};
use crate::settings::Settings;

/// Update tier, velocity, hitbox and sprite for `score`
pub fn apply_growth(character: &mut Character, score: i64, settings: &Settings) {
    if score < settings.growth_big_threshold {
        character.tier = SizeTier::Small;
        character.velocity = settings.base_velocity;
        character.collision_radius = settings.base_collision_radius;
    }

    if score >= settings.growth_big_threshold && character.tier == SizeTier::Small {
        character.tier = SizeTier::Big;
        character.velocity -= 1.0;
        character.collision_radius += settings.big_radius_bonus;
    } else if score >= settings.growth_very_big_threshold && character.tier == SizeTier::Big {
        character.tier = SizeTier::VeryBig;
        character.velocity -= 1.0;
        character.collision_radius += settings.very_big_radius_bonus;
    }

    character.sprite = Sprite::Character(character.species, character.tier);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Species;
    use glam::Vec2;
    use proptest::prelude::*;

    fn pig() -> (Character, Settings) {
        let settings = Settings::default();
        let pig = Character::new(Species::Pig, Vec2::new(400.0, 350.0), &settings);
        (pig, settings)
    }

    #[test]
    fn test_small_below_fifty() {
        let (mut pig, settings) = pig();
        apply_growth(&mut pig, 49, &settings);
        assert_eq!(pig.tier, SizeTier::Small);
        assert_eq!(pig.velocity, 4.0);
        assert_eq!(pig.collision_radius, 40.0);
        assert_eq!(pig.sprite, Sprite::Character(Species::Pig, SizeTier::Small));
    }

    #[test]
    fn test_big_fires_once() {
        let (mut pig, settings) = pig();
        for _ in 0..10 {
            apply_growth(&mut pig, 75, &settings);
        }
        assert_eq!(pig.tier, SizeTier::Big);
        assert_eq!(pig.velocity, 3.0);
        assert_eq!(pig.collision_radius, 55.0);
        assert_eq!(pig.sprite, Sprite::Character(Species::Pig, SizeTier::Big));
    }

    #[test]
    fn test_very_big_needs_two_frames() {
        let (mut pig, settings) = pig();
        apply_growth(&mut pig, 120, &settings);
        assert_eq!(pig.tier, SizeTier::Big);

        apply_growth(&mut pig, 120, &settings);
        assert_eq!(pig.tier, SizeTier::VeryBig);
        assert_eq!(pig.velocity, 2.0);
        assert_eq!(pig.collision_radius, 65.0);

        for _ in 0..10 {
            apply_growth(&mut pig, 500, &settings);
        }
        assert_eq!(pig.tier, SizeTier::VeryBig);
        assert_eq!(pig.velocity, 2.0);
        assert_eq!(pig.collision_radius, 65.0);
    }

    #[test]
    fn test_drop_below_fifty_resets() {
        let (mut pig, settings) = pig();
        apply_growth(&mut pig, 60, &settings);
        apply_growth(&mut pig, 0, &settings);
        assert_eq!(pig.tier, SizeTier::Small);
        assert_eq!(pig.velocity, 4.0);
        assert_eq!(pig.collision_radius, 40.0);
    }

    proptest! {
        #[test]
        fn tier_never_shrinks_while_score_climbs(mut scores in proptest::collection::vec(0i64..200, 1..100)) {
            scores.sort_unstable();
            let (mut pig, settings) = pig();
            let mut previous = SizeTier::Small;
            for score in scores {
                apply_growth(&mut pig, score, &settings);
                prop_assert!(pig.tier >= previous);
                if score < 50 {
                    prop_assert_eq!(pig.tier, SizeTier::Small);
                } else {
                    prop_assert!(pig.tier >= SizeTier::Big);
                }
                previous = pig.tier;
            }
        }
    }
}
