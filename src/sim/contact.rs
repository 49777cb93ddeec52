//! Contact detection and rail projection
//!
//! Decides, for one drag sample, whether the finger is still on the shape and
//! where the token should be drawn. The token never leaves the rails: every
//! touch inside a contour is snapped onto that contour's rail.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::{Level, LevelKind};

/// Result of testing a point against a level's contours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Whether any contour contains the point
    pub touching: bool,
    /// Point snapped onto the winning rail (the input point when not touching)
    pub projected: Vec2,
    /// Index of the contour/rail pair that won
    pub rail_index: Option<usize>,
    /// Squared distance from the input point to `projected`
    pub distance_sq: f32,
}

impl Contact {
    pub fn miss(point: Vec2) -> Self {
        Self {
            touching: false,
            projected: point,
            rail_index: None,
            distance_sq: 0.0,
        }
    }
}

/// Per-sample answer handed back to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchInfo {
    pub touching: bool,
    pub won: bool,
    pub lost: bool,
    /// Where the token should be drawn
    pub redirected: Vec2,
}

/// Project `point` onto the rail of every contour that contains it and keep
/// the closest projection.
///
/// Contours overlap at seams (the elbow of a reversed L, the turns of a
/// zigzag), so several rails can claim the same point. The smallest squared
/// distance wins; on a tie the lower index wins.
pub fn evaluate_touch(point: Vec2, level: &Level) -> Contact {
    let mut best = Contact::miss(point);

    for (i, (contour, rail)) in level.contours().iter().zip(level.rails()).enumerate() {
        if !contour.contains(point) {
            continue;
        }
        let (projected, distance_sq) = rail.project(point);
        if !best.touching || distance_sq < best.distance_sq {
            best = Contact {
                touching: true,
                projected,
                rail_index: Some(i),
                distance_sq,
            };
        }
    }

    best
}

/// Full win/lose evaluation of one sample.
///
/// Rail levels win when the projected token lands in the terminal hitbox.
/// The hitbox is top-down while rails are bottom-up, hence the Y flip. Tap
/// levels win inside the target circle. Anything not touching is a loss;
/// callers only act on it while a drag is in progress.
pub fn resolve_touch(point: Vec2, level: &Level) -> TouchInfo {
    if level.kind() == LevelKind::FreeToken {
        let hit = level.target().is_some_and(|t| t.contains(point));
        return TouchInfo {
            touching: hit,
            won: hit,
            lost: !hit,
            redirected: if hit { level.initial_position() } else { point },
        };
    }

    let contact = evaluate_touch(point, level);
    if !contact.touching {
        return TouchInfo {
            touching: false,
            won: false,
            lost: true,
            redirected: point,
        };
    }

    let flipped = Vec2::new(contact.projected.x, -contact.projected.y);
    TouchInfo {
        touching: true,
        won: level.terminal_hitbox().contains(flipped),
        lost: false,
        redirected: contact.projected,
    }
}
