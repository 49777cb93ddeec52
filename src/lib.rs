//! Button Trace - a drag-along-the-shape motor exercise
//!
//! Core modules:
//! - `geom`: Segment and arc projection, rects, polygons
//! - `level`: Shape archetypes, tap targets and per-level contact queries
//! - `sim`: Touch resolution, course progression and input dispatch
//! - `renderer`: Triangle lists for levels and the token
//! - `settings`: Data-driven course composition and style

pub mod geom;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use level::{Level, LevelKind, LevelParams, ShapeKind};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Level dimensions
    pub const LEVEL_WIDTH: f32 = 520.0;
    pub const LEVEL_HEIGHT: f32 = 920.0;
    /// Width of every shape's band
    pub const LEVEL_BAND_WIDTH: f32 = 200.0;

    /// Rails stop short of the band ends by these distances
    pub const START_RAIL_INSET: f32 = 50.0;
    pub const END_RAIL_INSET: f32 = 50.0;
    /// Zig-zag turn inset as a fraction of the band width
    pub const CORNER_INSET_RATIO: f32 = 0.75;

    /// Token pick-up radius, also the tap target radius
    pub const TOKEN_RADIUS: f32 = 80.0;

    /// Course composition
    pub const SHAPE_LEVELS_MAX: usize = 3;
    pub const FREE_TOKEN_LEVELS: usize = 11;

    /// Rail stroke width
    pub const LINE_WIDTH: f32 = 23.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_polar_round_trip() {
        let (r, theta) = cartesian_to_polar(polar_to_cartesian(5.0, 1.0));
        assert!((r - 5.0).abs() < 1e-5);
        assert!((theta - 1.0).abs() < 1e-5);
    }
}
