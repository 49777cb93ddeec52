//! Render boundary
//!
//! Turns levels and the token into coloured triangle lists. Colours and
//! stroke widths come from [`Style`]; nothing here feeds back into play.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::level::{Contour, Level, Rail};
use crate::settings::Style;

/// Contours, then rails, then the tap target (if any), back to front
pub fn level_vertices(level: &Level, style: &Style) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for contour in level.contours() {
        match contour {
            Contour::Polygon(points) => {
                vertices.extend(shapes::convex_polygon(points, style.shape_fill))
            }
            Contour::Arc(band) => vertices.extend(shapes::arc_band(
                band,
                style.shape_fill,
                style.segments_per_radian,
            )),
        }
    }

    for rail in level.rails() {
        match rail {
            Rail::Segment(seg) => {
                vertices.extend(shapes::segment_stroke(seg, style.line_width, style.rail))
            }
            Rail::Arc(arc) => vertices.extend(shapes::arc_stroke(
                arc,
                style.line_width,
                style.rail,
                style.segments_per_radian,
            )),
        }
    }

    if let Some(target) = level.target() {
        vertices.extend(shapes::circle(
            target.center,
            target.radius,
            style.target,
            style.circle_segments,
        ));
    }

    vertices
}

/// The draggable token
pub fn token_vertices(position: Vec2, radius: f32, style: &Style) -> Vec<Vertex> {
    shapes::circle(position, radius, style.token, style.circle_segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{LevelParams, ShapeKind, TokenTarget};

    #[test]
    fn test_level_vertices_cover_every_shape() {
        let style = Style::default();
        for shape in ShapeKind::ALL {
            let level = Level::from_shape(shape, LevelParams::default());
            let verts = level_vertices(&level, &style);
            assert!(!verts.is_empty(), "{}", shape.as_str());
            assert_eq!(verts.len() % 3, 0);
        }
    }

    #[test]
    fn test_free_token_draws_target_only() {
        let style = Style::default();
        let level = Level::free_token(
            LevelParams::default(),
            TokenTarget::new(Vec2::new(5.0, 5.0), 80.0),
        );
        let verts = level_vertices(&level, &style);
        assert_eq!(verts.len(), style.circle_segments as usize * 3);
        assert!(verts.iter().all(|v| v.color == style.target));
    }

    #[test]
    fn test_token_vertices_use_style() {
        let style = Style::default();
        let verts = token_vertices(Vec2::ZERO, 80.0, &style);
        assert!(verts.iter().all(|v| v.color == style.token));
    }
}
