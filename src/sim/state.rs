//! Course state: the level sequence and the token
//!
//! The only mutable state in the game lives here: which level is current and
//! where the token is. Both change only in response to input.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::TOKEN_RADIUS;
use crate::level::Level;

/// Where a course is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoursePhase {
    /// Built but not started
    NotStarted,
    /// Playing the level at `index`
    Active,
    /// Every level won; index wrapped to 0
    Finished,
}

/// Things the presentation layer reacts to (animations, sounds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CourseEvent {
    /// Level `index` was won
    Won { index: usize, course_finished: bool },
    /// Level `index` was lost; the token went back to the start
    Lost { index: usize },
}

/// A level plus whether shuffling may move it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub level: Level,
    pub pinned: bool,
}

/// Ordered levels before they become a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoursePlan {
    pub entries: Vec<CourseEntry>,
}

impl CoursePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level that keeps its position when shuffled
    pub fn push_pinned(&mut self, level: Level) {
        self.entries.push(CourseEntry {
            level,
            pinned: true,
        });
    }

    pub fn push(&mut self, level: Level) {
        self.entries.push(CourseEntry {
            level,
            pinned: false,
        });
    }

    /// Uniformly permute the unpinned entries among their own slots
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let slots: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.pinned)
            .map(|(i, _)| i)
            .collect();

        let mut order = slots.clone();
        order.shuffle(rng);

        let original = self.entries.clone();
        for (&slot, &from) in slots.iter().zip(&order) {
            self.entries[slot] = original[from].clone();
        }
    }

    pub fn into_levels(self) -> Vec<Level> {
        self.entries.into_iter().map(|e| e.level).collect()
    }
}

/// One traversal of a level sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    levels: Vec<Level>,
    index: usize,
    pub phase: CoursePhase,
    /// Token position, level coordinates
    pub token: Vec2,
    /// Radius within which a touch picks up the token
    pub token_radius: f32,
    /// A drag that picked up the token is in progress
    pub tracking: bool,
    pub wins: u32,
    pub losses: u32,
    /// Times the whole sequence has been won
    pub courses_completed: u32,
}

impl Course {
    pub fn new(levels: Vec<Level>) -> Self {
        Self {
            levels,
            index: 0,
            phase: CoursePhase::NotStarted,
            token: Vec2::ZERO,
            token_radius: TOKEN_RADIUS,
            tracking: false,
            wins: 0,
            losses: 0,
            courses_completed: 0,
        }
    }

    pub fn with_token_radius(mut self, radius: f32) -> Self {
        self.token_radius = radius;
        self
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.index)
    }

    /// Begin (or restart) at the first level
    pub fn start(&mut self) {
        self.index = 0;
        self.phase = CoursePhase::Active;
        self.tracking = false;
        self.place_token_at_start();
        log::info!("Course started with {} levels", self.levels.len());
    }

    /// Put the token back on the current level's start
    pub fn place_token_at_start(&mut self) {
        self.token = self
            .current_level()
            .map(Level::initial_position)
            .unwrap_or(Vec2::ZERO);
    }

    /// Record a win and move to the next level.
    ///
    /// Running past the last level wraps to 0 and finishes the course.
    pub fn advance(&mut self) -> CourseEvent {
        let won = self.index;
        self.wins += 1;
        self.tracking = false;
        self.index += 1;

        let course_finished = self.index >= self.levels.len();
        if course_finished {
            self.index = 0;
            self.phase = CoursePhase::Finished;
            self.courses_completed += 1;
            log::info!("Course finished ({} completed)", self.courses_completed);
        } else {
            log::info!("Level {} won, moving to {}", won, self.index);
        }
        self.place_token_at_start();

        CourseEvent::Won {
            index: won,
            course_finished,
        }
    }

    /// Record a loss; the index stays, the token goes back to the start
    pub fn reset_level(&mut self) -> CourseEvent {
        self.losses += 1;
        self.tracking = false;
        self.place_token_at_start();
        log::debug!("Level {} lost", self.index);
        CourseEvent::Lost { index: self.index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{LevelParams, ShapeKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn levels() -> Vec<Level> {
        [ShapeKind::HorizontalBar, ShapeKind::VerticalBar, ShapeKind::ReversedL]
            .into_iter()
            .map(|s| Level::from_shape(s, LevelParams::default()))
            .collect()
    }

    #[test]
    fn test_three_wins_wrap_and_finish() {
        let mut course = Course::new(levels());
        assert_eq!(course.phase, CoursePhase::NotStarted);
        course.start();
        assert_eq!(course.phase, CoursePhase::Active);
        assert_eq!(course.index(), 0);

        assert_eq!(
            course.advance(),
            CourseEvent::Won {
                index: 0,
                course_finished: false
            }
        );
        assert_eq!(course.index(), 1);
        course.advance();
        assert_eq!(course.index(), 2);
        assert_eq!(
            course.advance(),
            CourseEvent::Won {
                index: 2,
                course_finished: true
            }
        );
        assert_eq!(course.index(), 0);
        assert_eq!(course.phase, CoursePhase::Finished);
        assert_eq!(course.courses_completed, 1);
        assert_eq!(course.wins, 3);
    }

    #[test]
    fn test_loss_keeps_index_and_resets_token() {
        let mut course = Course::new(levels());
        course.start();
        course.advance();
        course.token = Vec2::new(3.0, 4.0);
        course.tracking = true;

        assert_eq!(course.reset_level(), CourseEvent::Lost { index: 1 });
        assert_eq!(course.index(), 1);
        assert!(!course.tracking);
        assert_eq!(course.token, course.levels()[1].initial_position());
        assert_eq!(course.losses, 1);
    }

    #[test]
    fn test_empty_course() {
        let mut course = Course::new(Vec::new());
        course.start();
        assert!(course.current_level().is_none());
        assert_eq!(course.token, Vec2::ZERO);
        let event = course.advance();
        assert_eq!(
            event,
            CourseEvent::Won {
                index: 0,
                course_finished: true
            }
        );
        assert_eq!(course.index(), 0);
    }

    #[test]
    fn test_shuffle_keeps_pinned_entries() {
        let mut plan = CoursePlan::new();
        let all: Vec<Level> = ShapeKind::ALL
            .into_iter()
            .map(|s| Level::from_shape(s, LevelParams::default()))
            .collect();
        plan.push_pinned(all[0].clone());
        for level in &all[1..] {
            plan.push(level.clone());
        }
        plan.push_pinned(all[0].with_band_width(120.0));

        let pinned_last = plan.entries[5].level.clone();
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..20 {
            plan.shuffle(&mut rng);
            assert_eq!(plan.entries[0].level, all[0]);
            assert_eq!(plan.entries[5].level, pinned_last);
            for level in &all[1..] {
                assert!(plan.entries.iter().any(|e| &e.level == level));
            }
        }
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let build = || {
            let mut plan = CoursePlan::new();
            for s in ShapeKind::ALL {
                plan.push(Level::from_shape(s, LevelParams::default()));
            }
            plan
        };
        let mut a = build();
        let mut b = build();
        a.shuffle(&mut Pcg32::seed_from_u64(99));
        b.shuffle(&mut Pcg32::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
