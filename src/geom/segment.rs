//! Straight-edge primitives: rail segments, hitbox rectangles, polygons
//!
//! Level coordinates are bottom-up (y grows toward the top of the screen).
//! Hitbox rectangles are authored top-down, see [`Rect`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Clamp `value` into the range spanned by `lo` and `hi`, in either order
#[inline]
pub fn clamp_range(value: f32, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// A directed rail edge from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl LineSegment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        (self.b - self.a).length()
    }

    /// Unit travel direction, zero for a degenerate segment
    pub fn direction(&self) -> Vec2 {
        (self.b - self.a).normalize_or_zero()
    }

    /// Project `point` onto the segment.
    ///
    /// The projection factor is computed against the infinite line, then the
    /// X and Y coordinates are clamped independently to the segment's bounding
    /// box instead of clamping the line parameter. Win thresholds are tuned
    /// against this output, diagonal rails included.
    ///
    /// Returns the projected point and its squared distance to `point`.
    pub fn project(&self, point: Vec2) -> (Vec2, f32) {
        project_point_onto_segment(point, self)
    }
}

/// See [`LineSegment::project`]
pub fn project_point_onto_segment(point: Vec2, segment: &LineSegment) -> (Vec2, f32) {
    let LineSegment { a, b } = *segment;
    let edge = b - a;
    let len_sq = edge.length_squared();

    if len_sq == 0.0 {
        return (a, point.distance_squared(a));
    }

    let u = (point - a).dot(edge) / len_sq;
    let raw = a + edge * u;
    let projected = Vec2::new(clamp_range(raw.x, a.x, b.x), clamp_range(raw.y, a.y, b.y));

    (projected, point.distance_squared(projected))
}

/// Axis-aligned box in top-down coordinates.
///
/// `width` and `height` may be negative (a box authored from its far corner);
/// all queries normalize the sign first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x.min(self.x + self.width), self.y.min(self.y + self.height))
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x.max(self.x + self.width), self.y.max(self.y + self.height))
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// Even-odd ray cast; works for any simple polygon regardless of winding
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let cross_x = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Axis-aligned rectangle polygon, counter-clockwise from the bottom-left corner
pub fn rect_polygon(min: Vec2, max: Vec2) -> Vec<Vec2> {
    vec![
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_range_either_order() {
        assert_eq!(clamp_range(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_range(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_range(11.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp_range(-3.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_project_horizontal_segment() {
        let rail = LineSegment::new(Vec2::new(-210.0, 0.0), Vec2::new(210.0, 0.0));

        let (p, d2) = rail.project(Vec2::new(30.0, 40.0));
        assert!((p - Vec2::new(30.0, 0.0)).length() < 0.001);
        assert!((d2 - 1600.0).abs() < 0.001);

        // Past the end clamps to the endpoint
        let (p, _) = rail.project(Vec2::new(400.0, -10.0));
        assert_eq!(p, Vec2::new(210.0, 0.0));
    }

    #[test]
    fn test_project_degenerate_segment() {
        let a = Vec2::new(3.0, 4.0);
        let rail = LineSegment::new(a, a);
        let (p, d2) = rail.project(Vec2::ZERO);
        assert_eq!(p, a);
        assert!((d2 - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_project_diagonal_uses_box_clamp() {
        // Raw projection of (-5, 5) onto the x == y diagonal lands at the origin,
        // then each axis is clamped into the segment box [1, 10] independently.
        let rail = LineSegment::new(Vec2::new(1.0, 1.0), Vec2::new(10.0, 10.0));
        let (p, _) = rail.project(Vec2::new(-5.0, 5.0));
        assert_eq!(p, Vec2::new(1.0, 1.0));

        let rail = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, -2.0));
        let (p, _) = rail.project(Vec2::new(30.0, 0.0));
        assert_eq!(p, Vec2::new(10.0, -2.0));
    }

    #[test]
    fn test_rect_negative_height() {
        let r = Rect::new(0.0, 0.0, 10.0, -20.0);
        assert!(r.contains(Vec2::new(5.0, -10.0)));
        assert!(r.contains(Vec2::new(10.0, -20.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
        assert_eq!(r.min(), Vec2::new(0.0, -20.0));
        assert_eq!(r.max(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = rect_polygon(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(point_in_polygon(Vec2::ZERO, &square));
        assert!(!point_in_polygon(Vec2::new(2.0, 0.0), &square));

        // Parallelogram, clockwise
        let slant = vec![
            Vec2::new(2.0, 2.0),
            Vec2::new(-2.0, -2.0),
            Vec2::new(-1.0, -2.0),
            Vec2::new(3.0, 2.0),
        ];
        assert!(point_in_polygon(Vec2::new(0.5, 0.0), &slant));
        assert!(!point_in_polygon(Vec2::new(-1.0, 1.0), &slant));
        assert!(!point_in_polygon(Vec2::ZERO, &slant[..2]));
    }
}
