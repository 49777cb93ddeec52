//! Input dispatch and course generation
//!
//! One drag sample in, at most one course event out. Every sample is handled
//! to completion before the next.

use glam::Vec2;
use rand::Rng;

use super::state::{Course, CourseEvent, CoursePhase, CoursePlan};
use crate::level::{Level, LevelKind, LevelParams, ShapeKind};
use crate::settings::Settings;

/// One input sample, already converted to level coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Finger touched down
    Down(Vec2),
    /// Finger moved while down
    Moved(Vec2),
    /// Finger lifted or the touch was cancelled
    Up(Vec2),
}

/// Apply one input sample to the course
pub fn handle_input(course: &mut Course, input: &DragInput) -> Option<CourseEvent> {
    if course.phase != CoursePhase::Active {
        return None;
    }
    let level_kind = course.current_level()?.kind();

    match *input {
        DragInput::Down(point) => {
            // Tap levels are decided on touch-down
            if level_kind == LevelKind::FreeToken {
                return test_point(course, point);
            }
            if point.distance(course.token) <= course.token_radius {
                course.tracking = true;
                log::trace!("Token picked up at {point}");
            }
            None
        }
        DragInput::Moved(point) => {
            if course.tracking {
                test_point(course, point)
            } else {
                None
            }
        }
        DragInput::Up(_) => {
            course.tracking = false;
            course.place_token_at_start();
            None
        }
    }
}

fn test_point(course: &mut Course, point: Vec2) -> Option<CourseEvent> {
    let info = course.current_level()?.touch_info(point);
    log::trace!("Touch {point} -> {info:?}");

    if info.won {
        let event = course.advance();
        log::debug!("{event:?}");
        Some(event)
    } else if info.lost {
        Some(course.reset_level())
    } else {
        course.token = info.redirected;
        None
    }
}

/// Build a fresh course.
///
/// Pinned levels from `settings.fixed_levels` come first. Then 1 to
/// `shape_levels_max` archetypes drawn uniformly and `free_token_levels` tap
/// levels; those are shuffled when `settings.shuffle` is set.
pub fn generate_course<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Course {
    let params = settings.level_params();
    let token_radius = settings.token_radius();
    let mut plan = CoursePlan::new();

    for &shape in &settings.fixed_levels {
        plan.push_pinned(Level::from_shape(shape, params));
    }

    let shape_count = if settings.shape_levels_max > 0 {
        rng.random_range(1..=settings.shape_levels_max)
    } else {
        0
    };
    for _ in 0..shape_count {
        let shape = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        plan.push(Level::from_shape(shape, params));
    }

    for _ in 0..settings.free_token_levels {
        plan.push(Level::random_free_token(
            params,
            token_radius,
            rng,
        ));
    }

    if settings.shuffle {
        plan.shuffle(rng);
    }

    log::info!(
        "Generated course: {} fixed, {} shapes, {} tap levels",
        settings.fixed_levels.len(),
        shape_count,
        settings.free_token_levels
    );

    Course::new(plan.into_levels()).with_token_radius(token_radius)
}

/// Course of the given shapes in order, no tap levels
pub fn course_from_shapes(shapes: &[ShapeKind], params: LevelParams) -> Course {
    Course::new(
        shapes
            .iter()
            .map(|&shape| Level::from_shape(shape, params))
            .collect(),
    )
}
