//! Per-archetype geometry
//!
//! Every archetype is a [`Generator`]: three pure functions of [`LevelParams`].
//! All shapes are centered on the origin in bottom-up coordinates, and
//! `contours[i]` always covers the band `rails[i]` runs through.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, SQRT_2};

use super::{Contour, LevelParams, Rail, ShapeKind};
use crate::geom::{ArcBand, ArcRail, LineSegment, Rect, rect_polygon};

/// Geometry functions for one archetype
pub struct Generator {
    pub contours: fn(&LevelParams) -> Vec<Contour>,
    pub rails: fn(&LevelParams) -> Vec<Rail>,
    pub terminal_hitbox: fn(&LevelParams) -> Rect,
}

const HORIZONTAL_BAR: Generator = Generator {
    contours: horizontal_contours,
    rails: horizontal_rails,
    terminal_hitbox: horizontal_hitbox,
};

const VERTICAL_BAR: Generator = Generator {
    contours: vertical_contours,
    rails: vertical_rails,
    terminal_hitbox: vertical_hitbox,
};

const REVERSED_L: Generator = Generator {
    contours: reversed_l_contours,
    rails: reversed_l_rails,
    terminal_hitbox: reversed_l_hitbox,
};

const ZIG_ZAG: Generator = Generator {
    contours: zigzag_contours,
    rails: zigzag_rails,
    terminal_hitbox: zigzag_hitbox,
};

const ARC_BAND: Generator = Generator {
    contours: arc_contours,
    rails: arc_rails,
    terminal_hitbox: arc_hitbox,
};

pub fn generator(kind: ShapeKind) -> &'static Generator {
    match kind {
        ShapeKind::HorizontalBar => &HORIZONTAL_BAR,
        ShapeKind::VerticalBar => &VERTICAL_BAR,
        ShapeKind::ReversedL => &REVERSED_L,
        ShapeKind::ZigZag => &ZIG_ZAG,
        ShapeKind::ArcBand => &ARC_BAND,
    }
}

/// Win region past the end of a rail, in top-down coordinates.
///
/// The box starts exactly at `end` and reaches `band + end_inset` further along
/// the dominant axis of `direction`, `band` wide across it. A token clamped to
/// the rail end therefore always lands on the box edge.
pub fn end_zone(end: Vec2, direction: Vec2, band: f32, end_inset: f32) -> Rect {
    let along = band + end_inset;
    if direction.x.abs() >= direction.y.abs() {
        let width = if direction.x < 0.0 { -along } else { along };
        Rect::new(end.x, -end.y - band / 2.0, width, band)
    } else {
        // Upward travel in level space is downward in hitbox space
        let height = if direction.y > 0.0 { -along } else { along };
        Rect::new(end.x - band / 2.0, -end.y, band, height)
    }
}

fn last_rail_zone(rails: &[Rail], p: &LevelParams) -> Rect {
    match rails.last() {
        Some(rail) => end_zone(rail.end(), rail.end_direction(), p.band_width, p.end_rail_inset),
        None => Rect::ZERO,
    }
}

// --- Horizontal bar ---

fn horizontal_contours(p: &LevelParams) -> Vec<Contour> {
    let half = Vec2::new(p.width / 2.0, p.band_width / 2.0);
    vec![Contour::Polygon(rect_polygon(-half, half))]
}

fn horizontal_rails(p: &LevelParams) -> Vec<Rail> {
    let half_w = p.width / 2.0;
    vec![Rail::Segment(LineSegment::new(
        Vec2::new(-half_w + p.start_rail_inset, 0.0),
        Vec2::new(half_w - p.end_rail_inset, 0.0),
    ))]
}

fn horizontal_hitbox(p: &LevelParams) -> Rect {
    last_rail_zone(&horizontal_rails(p), p)
}

// --- Vertical bar (traced bottom to top) ---

fn vertical_contours(p: &LevelParams) -> Vec<Contour> {
    let half = Vec2::new(p.band_width / 2.0, p.height / 2.0);
    vec![Contour::Polygon(rect_polygon(-half, half))]
}

fn vertical_rails(p: &LevelParams) -> Vec<Rail> {
    let half_h = p.height / 2.0;
    vec![Rail::Segment(LineSegment::new(
        Vec2::new(0.0, -half_h + p.start_rail_inset),
        Vec2::new(0.0, half_h - p.end_rail_inset),
    ))]
}

fn vertical_hitbox(p: &LevelParams) -> Rect {
    last_rail_zone(&vertical_rails(p), p)
}

// --- Reversed L: down the right side, then left along the bottom ---

fn reversed_l_contours(p: &LevelParams) -> Vec<Contour> {
    let (half_w, half_h, band) = (p.width / 2.0, p.height / 2.0, p.band_width);
    vec![
        // upright
        Contour::Polygon(rect_polygon(
            Vec2::new(half_w - band, -half_h),
            Vec2::new(half_w, half_h),
        )),
        // foot
        Contour::Polygon(rect_polygon(
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h + band),
        )),
    ]
}

fn reversed_l_rails(p: &LevelParams) -> Vec<Rail> {
    let (half_w, half_h, band) = (p.width / 2.0, p.height / 2.0, p.band_width);
    let elbow = Vec2::new(half_w - band / 2.0, -half_h + band / 2.0);
    vec![
        Rail::Segment(LineSegment::new(
            Vec2::new(elbow.x, half_h - p.start_rail_inset),
            elbow,
        )),
        Rail::Segment(LineSegment::new(
            elbow,
            Vec2::new(-half_w + p.end_rail_inset, elbow.y),
        )),
    ]
}

fn reversed_l_hitbox(p: &LevelParams) -> Rect {
    last_rail_zone(&reversed_l_rails(p), p)
}

// --- Zigzag: top bar left to right, diagonal back, bottom bar left to right ---

/// Zigzag levels are square, sized by the smaller dimension
fn zigzag_side(p: &LevelParams) -> f32 {
    p.width.min(p.height)
}

fn zigzag_contours(p: &LevelParams) -> Vec<Contour> {
    let half = zigzag_side(p) / 2.0;
    let band = p.band_width;
    // Horizontal run of the diagonal band
    let corner = band * SQRT_2;

    vec![
        // top
        Contour::Polygon(vec![
            Vec2::new(-half, half),
            Vec2::new(half, half),
            Vec2::new(half - corner, half - band),
            Vec2::new(-half, half - band),
        ]),
        // diagonal
        Contour::Polygon(vec![
            Vec2::new(half - corner, half),
            Vec2::new(-half, -half),
            Vec2::new(-half + corner, -half),
            Vec2::new(half, half),
        ]),
        // bottom
        Contour::Polygon(vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, -half + band),
            Vec2::new(-half + corner, -half + band),
        ]),
    ]
}

fn zigzag_rails(p: &LevelParams) -> Vec<Rail> {
    let side = zigzag_side(p);
    let half = side / 2.0;
    let band = p.band_width;
    let top_y = (side - band) / 2.0;
    let bottom_y = (-side + band) / 2.0;

    let top_turn = Vec2::new(half - p.corner_inset, top_y);
    let bottom_turn = Vec2::new(-half + p.corner_inset, bottom_y);

    vec![
        Rail::Segment(LineSegment::new(
            Vec2::new(-half + p.start_rail_inset, top_y),
            top_turn,
        )),
        Rail::Segment(LineSegment::new(top_turn, bottom_turn)),
        Rail::Segment(LineSegment::new(
            bottom_turn,
            Vec2::new(half - p.end_rail_inset - band / 2.0, bottom_y),
        )),
    ]
}

fn zigzag_hitbox(p: &LevelParams) -> Rect {
    last_rail_zone(&zigzag_rails(p), p)
}

// --- Arc band: counter-clockwise quarter ring around the origin ---

fn arc_band(p: &LevelParams) -> ArcBand {
    let outer = p.width.min(p.height) / 2.0;
    ArcBand::from_outer(Vec2::ZERO, outer, p.band_width, 0.0, FRAC_PI_2)
}

fn arc_contours(p: &LevelParams) -> Vec<Contour> {
    vec![Contour::Arc(arc_band(p))]
}

fn arc_rails(p: &LevelParams) -> Vec<Rail> {
    vec![Rail::Arc(ArcRail::along(
        &arc_band(p),
        p.start_rail_inset,
        p.end_rail_inset,
    ))]
}

fn arc_hitbox(p: &LevelParams) -> Rect {
    last_rail_zone(&arc_rails(p), p)
}
