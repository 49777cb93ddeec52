//! Button Trace entry point
//!
//! Headless driver: builds a course from settings and plays it with scripted
//! drags and taps, logging every event. Useful for checking a settings file.
//!
//! Usage: `button-trace [settings.json]`

use std::path::PathBuf;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use button_trace::level::{Level, LevelKind, Rail};
use button_trace::renderer;
use button_trace::settings::Settings;
use button_trace::sim::{CourseEvent, CoursePhase, DragInput, generate_course, handle_input};

/// Samples per rail when scripting a drag
const DRAG_STEPS: usize = 24;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Button Trace (native) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Course seed: {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut course = generate_course(&settings, &mut rng);
    if course.is_empty() {
        log::warn!("Settings produced an empty course, nothing to play");
        return;
    }
    course.start();

    while course.phase == CoursePhase::Active {
        let index = course.index();
        let Some(level) = course.current_level().cloned() else {
            break;
        };

        let triangles = renderer::level_vertices(&level, &settings.style).len() / 3;
        println!(
            "Level {:>2}/{} {:<14} {triangles} triangles",
            index + 1,
            course.len(),
            level_name(&level)
        );

        let script = script_for(&level);
        let mut won = false;
        for input in &script {
            match handle_input(&mut course, input) {
                Some(CourseEvent::Won { course_finished, .. }) => {
                    println!("  won{}", if course_finished { ", course finished" } else { "" });
                    won = true;
                    break;
                }
                Some(CourseEvent::Lost { .. }) => println!("  lost, retrying"),
                None => {}
            }
        }

        if !won {
            log::error!("Scripted play could not finish level {}", index + 1);
            break;
        }
    }

    println!(
        "Wins: {}  Losses: {}  Courses completed: {}",
        course.wins, course.losses, course.courses_completed
    );
}

fn level_name(level: &Level) -> &'static str {
    match level.kind() {
        LevelKind::Shape(shape) => shape.as_str(),
        LevelKind::FreeToken => "free token",
    }
}

/// Tap the target, or pick up the token and drag it along every rail and
/// just past the end.
fn script_for(level: &Level) -> Vec<DragInput> {
    if let Some(target) = level.target() {
        // One deliberate miss first so the loss path gets exercised
        let miss = if target.center.x > 0.0 {
            Vec2::new(-level.params().width, 0.0)
        } else {
            Vec2::new(level.params().width, 0.0)
        };
        return vec![DragInput::Down(miss), DragInput::Down(target.center)];
    }

    let mut script = vec![DragInput::Down(level.initial_position())];
    for rail in level.rails() {
        script.extend(sample_rail(rail).into_iter().map(DragInput::Moved));
    }
    if let Some(last) = level.rails().last() {
        let overshoot = level.params().end_rail_inset / 2.0;
        script.push(DragInput::Moved(last.end() + last.end_direction() * overshoot));
    }
    script.push(DragInput::Up(level.final_position()));
    script
}

fn sample_rail(rail: &Rail) -> Vec<Vec2> {
    (1..=DRAG_STEPS)
        .map(|i| {
            let t = i as f32 / DRAG_STEPS as f32;
            match rail {
                Rail::Segment(seg) => seg.a.lerp(seg.b, t),
                Rail::Arc(arc) => arc.point_at(arc.theta_start + arc.angular_span() * t),
            }
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is embedded by a host page; nothing to drive here
}
