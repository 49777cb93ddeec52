//! Geometry primitives shared by level generators and the contact engine
//!
//! Pure math, no state.

pub mod arc;
pub mod segment;

pub use arc::{ArcBand, ArcRail};
pub use segment::{
    LineSegment, Rect, clamp_range, point_in_polygon, project_point_onto_segment, rect_polygon,
};
