//! Annular sector geometry for the arc band level
//!
//! In polar coordinates around `center`, an arc band is defined by:
//! - radius: midline distance from center
//! - thickness: radial extent (inner = radius - thickness/2, outer = radius + thickness/2)
//! - theta_start, theta_end: angular extent, traversed counter-clockwise

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{cartesian_to_polar, normalize_angle, polar_to_cartesian};

/// A thickened arc band (the contour of an arc level)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcBand {
    pub center: Vec2,
    /// Midline radius
    pub radius: f32,
    /// Radial thickness (extends radius ± thickness/2)
    pub thickness: f32,
    /// Start angle (radians, normalized to [-π, π))
    pub theta_start: f32,
    /// End angle (radians, normalized to [-π, π))
    pub theta_end: f32,
}

impl ArcBand {
    pub fn new(center: Vec2, radius: f32, thickness: f32, theta_start: f32, theta_end: f32) -> Self {
        Self {
            center,
            radius,
            thickness,
            theta_start: normalize_angle(theta_start),
            theta_end: normalize_angle(theta_end),
        }
    }

    /// Band between `outer_radius - band_width` and `outer_radius`
    pub fn from_outer(
        center: Vec2,
        outer_radius: f32,
        band_width: f32,
        theta_start: f32,
        theta_end: f32,
    ) -> Self {
        Self::new(
            center,
            outer_radius - band_width / 2.0,
            band_width,
            theta_start,
            theta_end,
        )
    }

    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness / 2.0
    }

    /// Angular span of the band (handles wraparound)
    pub fn angular_span(&self) -> f32 {
        angular_span(self.theta_start, self.theta_end)
    }

    pub fn contains_angle(&self, theta: f32) -> bool {
        contains_angle(self.theta_start, self.theta_end, theta)
    }

    /// Check if a point (level coordinates) is inside the band
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (r, theta) = cartesian_to_polar(point - self.center);
        r >= self.inner_radius() && r <= self.outer_radius() && self.contains_angle(theta)
    }

    /// Sample points along the outer edge, start to end
    pub fn sample_outer_edge(&self, num_points: usize) -> Vec<Vec2> {
        self.sample_edge(self.outer_radius(), num_points)
    }

    /// Sample points along the inner edge, start to end
    pub fn sample_inner_edge(&self, num_points: usize) -> Vec<Vec2> {
        self.sample_edge(self.inner_radius(), num_points)
    }

    fn sample_edge(&self, r: f32, num_points: usize) -> Vec<Vec2> {
        let span = self.angular_span();
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                self.center + polar_to_cartesian(r, self.theta_start + t * span)
            })
            .collect()
    }
}

/// The midline rail of an arc band, inset angularly at both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcRail {
    pub center: Vec2,
    pub radius: f32,
    pub theta_start: f32,
    pub theta_end: f32,
}

impl ArcRail {
    /// Midline of `band`, shortened by arc lengths `start_inset` and `end_inset`
    pub fn along(band: &ArcBand, start_inset: f32, end_inset: f32) -> Self {
        let span = band.angular_span();
        let (start_angle, end_angle) = if band.radius > 0.0 {
            (start_inset / band.radius, end_inset / band.radius)
        } else {
            (0.0, 0.0)
        };
        // Never let the insets cross over
        let start_angle = start_angle.min(span);
        let end_angle = end_angle.min(span - start_angle);

        Self {
            center: band.center,
            radius: band.radius,
            theta_start: normalize_angle(band.theta_start + start_angle),
            theta_end: normalize_angle(band.theta_end - end_angle),
        }
    }

    pub fn angular_span(&self) -> f32 {
        angular_span(self.theta_start, self.theta_end)
    }

    pub fn point_at(&self, theta: f32) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, theta)
    }

    pub fn start(&self) -> Vec2 {
        self.point_at(self.theta_start)
    }

    pub fn end(&self) -> Vec2 {
        self.point_at(self.theta_end)
    }

    /// Travel direction (counter-clockwise tangent) at the end of the rail
    pub fn end_direction(&self) -> Vec2 {
        Vec2::new(-self.theta_end.sin(), self.theta_end.cos())
    }

    /// Place `point` on the midline at its own angle, clamped to the rail's span.
    ///
    /// Angles outside the span snap to whichever end is angularly closer.
    /// Returns the projected point and its squared distance to `point`.
    pub fn project(&self, point: Vec2) -> (Vec2, f32) {
        let (_, theta) = cartesian_to_polar(point - self.center);
        let theta = normalize_angle(theta);

        let theta = if contains_angle(self.theta_start, self.theta_end, theta) {
            theta
        } else {
            let past_end = angular_span(self.theta_end, theta);
            let before_start = angular_span(theta, self.theta_start);
            if past_end <= before_start {
                self.theta_end
            } else {
                self.theta_start
            }
        };

        let projected = self.point_at(theta);
        (projected, point.distance_squared(projected))
    }
}

fn angular_span(start: f32, end: f32) -> f32 {
    let mut span = end - start;
    if span < 0.0 {
        span += std::f32::consts::TAU;
    }
    span
}

fn contains_angle(start: f32, end: f32, theta: f32) -> bool {
    let theta = normalize_angle(theta);
    if start <= end {
        theta >= start && theta <= end
    } else {
        // Wraparound case (e.g., start=170°, end=-170°)
        theta >= start || theta <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn quarter() -> ArcBand {
        ArcBand::from_outer(Vec2::ZERO, 260.0, 200.0, 0.0, FRAC_PI_2)
    }

    #[test]
    fn test_band_radii() {
        let band = quarter();
        assert!((band.inner_radius() - 60.0).abs() < 0.001);
        assert!((band.outer_radius() - 260.0).abs() < 0.001);
        assert!((band.radius - 160.0).abs() < 0.001);
    }

    #[test]
    fn test_contains_point() {
        let band = quarter();
        assert!(band.contains_point(polar_to_cartesian(100.0, FRAC_PI_4)));
        assert!(!band.contains_point(polar_to_cartesian(30.0, FRAC_PI_4)));
        assert!(!band.contains_point(polar_to_cartesian(300.0, FRAC_PI_4)));
        assert!(!band.contains_point(polar_to_cartesian(160.0, PI)));

        let shifted = ArcBand::from_outer(Vec2::new(100.0, -50.0), 260.0, 200.0, 0.0, FRAC_PI_2);
        assert!(shifted.contains_point(Vec2::new(100.0, -50.0) + polar_to_cartesian(100.0, 0.5)));
        assert!(!shifted.contains_point(polar_to_cartesian(100.0, 0.5)));
    }

    #[test]
    fn test_contains_angle_wraparound() {
        let band = ArcBand::new(
            Vec2::ZERO,
            100.0,
            10.0,
            170.0_f32.to_radians(),
            -170.0_f32.to_radians(),
        );
        assert!(band.contains_angle(PI));
        assert!(band.contains_angle(-PI + 0.01));
        assert!(!band.contains_angle(0.0));
        assert!((band.angular_span() - 20.0_f32.to_radians()).abs() < 0.001);
    }

    #[test]
    fn test_rail_insets() {
        let band = quarter();
        let rail = ArcRail::along(&band, 50.0, 50.0);
        assert!((rail.theta_start - 50.0 / 160.0).abs() < 0.0001);
        assert!((rail.theta_end - (FRAC_PI_2 - 50.0 / 160.0)).abs() < 0.0001);
        assert!((rail.start().length() - 160.0).abs() < 0.001);
    }

    #[test]
    fn test_rail_project_keeps_angle() {
        let rail = ArcRail::along(&quarter(), 50.0, 50.0);
        let touch = polar_to_cartesian(230.0, FRAC_PI_4);
        let (p, d2) = rail.project(touch);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 160.0).abs() < 0.01);
        assert!((theta - FRAC_PI_4).abs() < 0.0001);
        assert!((d2 - 70.0 * 70.0).abs() < 0.5);
    }

    #[test]
    fn test_rail_project_clamps_to_ends() {
        let rail = ArcRail::along(&quarter(), 50.0, 50.0);
        let (p, _) = rail.project(polar_to_cartesian(160.0, 0.01));
        assert_eq!(p, rail.start());
        let (p, _) = rail.project(polar_to_cartesian(160.0, FRAC_PI_2 - 0.01));
        assert_eq!(p, rail.end());
    }

    #[test]
    fn test_sample_edges() {
        let band = quarter();
        let outer = band.sample_outer_edge(5);
        assert_eq!(outer.len(), 5);
        assert!((outer[0] - Vec2::new(260.0, 0.0)).length() < 0.001);
        assert!((outer[4] - Vec2::new(0.0, 260.0)).length() < 0.01);
        let inner = band.sample_inner_edge(3);
        assert!((inner[1].length() - 60.0).abs() < 0.001);
    }
}
