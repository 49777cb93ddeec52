//! Touch resolution and course progression
//!
//! Everything here is synchronous and deterministic given the RNG:
//! - One input sample is resolved before the next
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod contact;
pub mod state;
pub mod tick;

pub use contact::{Contact, TouchInfo, evaluate_touch, resolve_touch};
pub use state::{Course, CourseEntry, CourseEvent, CoursePhase, CoursePlan};
pub use tick::{DragInput, course_from_shapes, generate_course, handle_input};
