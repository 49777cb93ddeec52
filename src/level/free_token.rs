//! Free token levels: tap a circular target, no rails

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::LevelParams;

/// A circular tap target fixed at level construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenTarget {
    pub center: Vec2,
    pub radius: f32,
}

impl TokenTarget {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Place a target inside `±half_extents`.
    ///
    /// Each axis draws its magnitude uniformly from `[0, half_extent]` and its
    /// sign from a fair coin, independently.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, half_extents: Vec2, radius: f32) -> Self {
        let x = random_axis(rng, half_extents.x);
        let y = random_axis(rng, half_extents.y);
        Self::new(Vec2::new(x, y), radius)
    }

    /// Inclusive point-in-circle test
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

fn random_axis<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> f32 {
    let magnitude = if half_extent.is_finite() && half_extent > 0.0 {
        rng.random_range(0.0..=half_extent)
    } else {
        0.0
    };
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Area a target of `radius` can occupy without leaving the visible level
pub fn visible_half_extents(params: &LevelParams, radius: f32) -> Vec2 {
    Vec2::new(
        (params.width / 2.0 - radius).max(0.0),
        (params.height / 2.0 - radius).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_same_seed_same_target() {
        let bounds = visible_half_extents(&LevelParams::default(), 80.0);
        let a = TokenTarget::random(&mut Pcg32::seed_from_u64(42), bounds, 80.0);
        let b = TokenTarget::random(&mut Pcg32::seed_from_u64(42), bounds, 80.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_visible_half_extents() {
        let bounds = visible_half_extents(&LevelParams::default(), 80.0);
        assert_eq!(bounds, Vec2::new(180.0, 380.0));

        let tiny = LevelParams::new(100.0, 100.0, 20.0);
        assert_eq!(visible_half_extents(&tiny, 80.0), Vec2::ZERO);
    }

    #[test]
    fn test_zero_extent_places_on_axis() {
        let mut rng = Pcg32::seed_from_u64(3);
        let target = TokenTarget::random(&mut rng, Vec2::new(0.0, 50.0), 10.0);
        assert_eq!(target.center.x.abs(), 0.0);
    }

    #[test]
    fn test_signs_vary() {
        let mut rng = Pcg32::seed_from_u64(11);
        let bounds = Vec2::new(100.0, 100.0);
        let targets: Vec<_> = (0..64)
            .map(|_| TokenTarget::random(&mut rng, bounds, 5.0))
            .collect();
        assert!(targets.iter().any(|t| t.center.x < 0.0));
        assert!(targets.iter().any(|t| t.center.x > 0.0));
        assert!(targets.iter().any(|t| t.center.y < 0.0));
        assert!(targets.iter().any(|t| t.center.y > 0.0));
    }

    #[test]
    fn test_contains() {
        let target = TokenTarget::new(Vec2::new(10.0, 10.0), 5.0);
        assert!(target.contains(Vec2::new(10.0, 15.0)));
        assert!(!target.contains(Vec2::new(10.0, 15.1)));
    }

    proptest! {
        #[test]
        fn prop_target_within_bounds(seed in any::<u64>(), hx in 0.0f32..500.0, hy in 0.0f32..500.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let target = TokenTarget::random(&mut rng, Vec2::new(hx, hy), 80.0);
            prop_assert!(target.center.x.abs() <= hx);
            prop_assert!(target.center.y.abs() <= hy);
        }
    }
}
