//! Levels: derived contours, rails and terminal hitbox
//!
//! A level is built once from an archetype tag and a small parameter set and
//! never mutated afterwards. Resizing builds a new level.

pub mod free_token;
pub mod shapes;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::geom::{ArcBand, ArcRail, LineSegment, Rect, point_in_polygon};
use crate::sim::contact::{TouchInfo, resolve_touch};

pub use free_token::TokenTarget;
pub use shapes::{Generator, end_zone};

/// Rail-following level archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    HorizontalBar,
    VerticalBar,
    ReversedL,
    ZigZag,
    ArcBand,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::HorizontalBar,
        ShapeKind::VerticalBar,
        ShapeKind::ReversedL,
        ShapeKind::ZigZag,
        ShapeKind::ArcBand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::HorizontalBar => "HorizontalBar",
            ShapeKind::VerticalBar => "VerticalBar",
            ShapeKind::ReversedL => "ReversedL",
            ShapeKind::ZigZag => "ZigZag",
            ShapeKind::ArcBand => "ArcBand",
        }
    }

    /// Geometry functions for this archetype
    pub fn generator(&self) -> &'static Generator {
        shapes::generator(*self)
    }
}

/// What a level asks the player to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelKind {
    /// Drag the token along the rails into the terminal hitbox
    Shape(ShapeKind),
    /// Tap a circular target; no rails
    FreeToken,
}

/// Size parameters every archetype derives its geometry from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    pub width: f32,
    pub height: f32,
    /// Perpendicular thickness of the traceable band
    pub band_width: f32,
    /// Gap between the shape edge and the start of the first rail
    pub start_rail_inset: f32,
    /// Gap between the end of the last rail and the shape edge
    pub end_rail_inset: f32,
    /// Distance from the outer edge at which zigzag rails turn
    pub corner_inset: f32,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self::new(LEVEL_WIDTH, LEVEL_HEIGHT, LEVEL_BAND_WIDTH)
    }
}

impl LevelParams {
    /// Parameters with the default rail insets and a corner inset of 3/4 band
    pub fn new(width: f32, height: f32, band_width: f32) -> Self {
        Self {
            width,
            height,
            band_width,
            start_rail_inset: START_RAIL_INSET,
            end_rail_inset: END_RAIL_INSET,
            corner_inset: band_width * CORNER_INSET_RATIO,
        }
    }

    pub fn with_insets(mut self, start: f32, end: f32) -> Self {
        self.start_rail_inset = start;
        self.end_rail_inset = end;
        self
    }

    /// Same shape with a different band; the corner inset keeps its ratio
    pub fn with_band_width(mut self, band_width: f32) -> Self {
        let ratio = if self.band_width > 0.0 {
            self.corner_inset / self.band_width
        } else {
            CORNER_INSET_RATIO
        };
        self.band_width = band_width;
        self.corner_inset = band_width * ratio;
        self
    }

    /// Replace values no archetype can build from.
    ///
    /// Sizes must be finite and positive, the band must fit inside half the
    /// smaller dimension (the arc band's outer radius), insets must not be
    /// negative and must leave every rail a positive length.
    pub fn sanitized(self) -> Self {
        let defaults = LevelParams::default();
        let mut p = self;

        if !(p.width.is_finite() && p.width > 0.0) {
            log::warn!("Level width {} invalid, using {}", p.width, defaults.width);
            p.width = defaults.width;
        }
        if !(p.height.is_finite() && p.height > 0.0) {
            log::warn!("Level height {} invalid, using {}", p.height, defaults.height);
            p.height = defaults.height;
        }

        let max_band = p.width.min(p.height) / 2.0;
        if !(p.band_width.is_finite() && p.band_width > 0.0) {
            let band = defaults.band_width.min(max_band);
            log::warn!("Band width {} invalid, using {}", p.band_width, band);
            p = p.with_band_width(band);
        } else if p.band_width > max_band {
            log::warn!("Band width {} exceeds {}, clamping", p.band_width, max_band);
            p = p.with_band_width(max_band);
        }

        for inset in [
            &mut p.start_rail_inset,
            &mut p.end_rail_inset,
            &mut p.corner_inset,
        ] {
            if !inset.is_finite() || *inset < 0.0 {
                log::warn!("Inset {} invalid, using 0", inset);
                *inset = 0.0;
            }
        }

        // Both insets must fit in the shortest run any archetype has, which
        // is the zig-zag's last leg after its corner turn
        let run = (p.width.min(p.height) - 1.5 * p.band_width).max(0.0);
        let total = p.start_rail_inset + p.end_rail_inset;
        if total > run {
            let scale = run / total;
            log::warn!("Rail insets {total} exceed {run}, scaling down");
            p.start_rail_inset *= scale;
            p.end_rail_inset *= scale;
        }

        p
    }
}

/// A touchable region tied by index to one rail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Contour {
    /// Closed polygon, at least three points
    Polygon(Vec<Vec2>),
    /// Annular sector
    Arc(ArcBand),
}

impl Contour {
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Contour::Polygon(points) => point_in_polygon(point, points),
            Contour::Arc(band) => band.contains_point(point),
        }
    }
}

/// One piece of the valid path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rail {
    Segment(LineSegment),
    Arc(ArcRail),
}

impl Rail {
    pub fn start(&self) -> Vec2 {
        match self {
            Rail::Segment(seg) => seg.a,
            Rail::Arc(arc) => arc.start(),
        }
    }

    pub fn end(&self) -> Vec2 {
        match self {
            Rail::Segment(seg) => seg.b,
            Rail::Arc(arc) => arc.end(),
        }
    }

    /// Direction of travel where the rail ends
    pub fn end_direction(&self) -> Vec2 {
        match self {
            Rail::Segment(seg) => seg.direction(),
            Rail::Arc(arc) => arc.end_direction(),
        }
    }

    /// Nearest rail point for `point` and its squared distance
    pub fn project(&self, point: Vec2) -> (Vec2, f32) {
        match self {
            Rail::Segment(seg) => seg.project(point),
            Rail::Arc(arc) => arc.project(point),
        }
    }
}

/// A playable level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    kind: LevelKind,
    params: LevelParams,
    contours: Vec<Contour>,
    rails: Vec<Rail>,
    terminal_hitbox: Rect,
    target: Option<TokenTarget>,
}

impl Level {
    /// Derive a rail level's geometry from its archetype
    pub fn from_shape(shape: ShapeKind, params: LevelParams) -> Self {
        let params = params.sanitized();
        let generator = shape.generator();
        let contours = (generator.contours)(&params);
        let rails = (generator.rails)(&params);
        let terminal_hitbox = (generator.terminal_hitbox)(&params);
        debug_assert_eq!(contours.len(), rails.len());

        Self {
            kind: LevelKind::Shape(shape),
            params,
            contours,
            rails,
            terminal_hitbox,
            target: None,
        }
    }

    /// A tap level around a fixed target
    pub fn free_token(params: LevelParams, target: TokenTarget) -> Self {
        Self {
            kind: LevelKind::FreeToken,
            params: params.sanitized(),
            contours: Vec::new(),
            rails: Vec::new(),
            terminal_hitbox: Rect::ZERO,
            target: Some(target),
        }
    }

    /// A tap level with its target placed at random inside the visible area
    pub fn random_free_token<R: Rng + ?Sized>(
        params: LevelParams,
        radius: f32,
        rng: &mut R,
    ) -> Self {
        let params = params.sanitized();
        let bounds = free_token::visible_half_extents(&params, radius);
        Self::free_token(params, TokenTarget::random(rng, bounds, radius))
    }

    pub fn kind(&self) -> LevelKind {
        self.kind
    }

    pub fn params(&self) -> &LevelParams {
        &self.params
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn rails(&self) -> &[Rail] {
        &self.rails
    }

    /// Win region, top-down coordinates
    pub fn terminal_hitbox(&self) -> Rect {
        self.terminal_hitbox
    }

    pub fn target(&self) -> Option<&TokenTarget> {
        self.target.as_ref()
    }

    /// Where the token rests before a drag (zero point if nothing is built)
    pub fn initial_position(&self) -> Vec2 {
        if let Some(target) = &self.target {
            return target.center;
        }
        self.rails.first().map(Rail::start).unwrap_or(Vec2::ZERO)
    }

    /// End of the last rail (zero point if there are no rails)
    pub fn final_position(&self) -> Vec2 {
        if let Some(target) = &self.target {
            return target.center;
        }
        self.rails.last().map(Rail::end).unwrap_or(Vec2::ZERO)
    }

    /// Rebuild with a different band width. Tap levels are returned unchanged.
    pub fn with_band_width(&self, band_width: f32) -> Self {
        match self.kind {
            LevelKind::Shape(shape) => {
                Self::from_shape(shape, self.params.with_band_width(band_width))
            }
            LevelKind::FreeToken => self.clone(),
        }
    }

    /// Evaluate one drag sample against this level
    pub fn touch_info(&self, point: Vec2) -> TouchInfo {
        resolve_touch(point, self)
    }
}
