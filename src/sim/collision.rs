//! Distance-based collision test
//!
//! Only the character carries a hitbox: the other entity is treated as a
//! point at its top-left corner, and the test radius is the character's
//! current collision radius.

use glam::Vec2;

/// True when `a` and `b` are at most `radius` apart
#[inline]
pub fn collides(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) <= radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_at_exact_radius() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 40.0);
        assert!(collides(a, b, 50.0));
        assert!(!collides(a, b, 49.9));
    }

    #[test]
    fn test_far_apart() {
        assert!(!collides(Vec2::new(400.0, 350.0), Vec2::new(900.0, 50.0), 65.0));
    }

    proptest! {
        #[test]
        fn same_point_always_collides(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, r in 0.0f32..200.0) {
            let p = Vec2::new(x, y);
            prop_assert!(collides(p, p, r));
        }

        #[test]
        fn collision_is_symmetric(
            ax in 0.0f32..998.0, ay in 0.0f32..590.0,
            bx in 0.0f32..998.0, by in 0.0f32..590.0,
            r in 0.0f32..200.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(collides(a, b, r), collides(b, a, r));
        }
    }
}
