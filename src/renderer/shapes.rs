//! Triangle lists for level contours, rails and tokens

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::geom::{ArcBand, ArcRail, LineSegment};

/// Fan-triangulate a convex polygon
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let origin = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(origin.x, origin.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an arc band (thick arc)
pub fn arc_band(band: &ArcBand, color: [f32; 4], segments_per_radian: f32) -> Vec<Vertex> {
    let num_segments = ((band.angular_span() * segments_per_radian) as usize).max(4);
    let inner = band.sample_inner_edge(num_segments + 1);
    let outer = band.sample_outer_edge(num_segments + 1);

    let mut vertices = Vec::with_capacity(num_segments * 6);
    for i in 0..num_segments {
        let (inner1, inner2) = (inner[i], inner[i + 1]);
        let (outer1, outer2) = (outer[i], outer[i + 1]);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Stroke a rail segment as a quad `width` wide
pub fn segment_stroke(segment: &LineSegment, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = segment.direction();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(segment.a + perp, segment.a - perp, segment.b + perp, segment.b - perp, color)
}

/// Stroke an arc rail as a chain of quads
pub fn arc_stroke(
    rail: &ArcRail,
    width: f32,
    color: [f32; 4],
    segments_per_radian: f32,
) -> Vec<Vertex> {
    let span = rail.angular_span();
    let num_segments = ((span * segments_per_radian) as u32).max(4);
    let half = width / 2.0;

    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);
    for i in 0..num_segments {
        let theta1 = rail.theta_start + span * i as f32 / num_segments as f32;
        let theta2 = rail.theta_start + span * (i + 1) as f32 / num_segments as f32;
        let n1 = Vec2::new(theta1.cos(), theta1.sin()) * half;
        let n2 = Vec2::new(theta2.cos(), theta2.sin()) * half;
        let p1 = rail.point_at(theta1);
        let p2 = rail.point_at(theta2);
        vertices.extend(quad(p1 + n1, p1 - n1, p2 + n2, p2 - n2, color));
    }
    vertices
}

fn quad(v1a: Vec2, v1b: Vec2, v2a: Vec2, v2b: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}
