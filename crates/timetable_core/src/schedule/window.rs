//! Current/next lesson resolution against wall-clock time.
//!
//! # Responsibility
//! - Anchor lesson times to `now`'s calendar date and classify the window.
//!
//! # Invariants
//! - "Current" is an open interval: at exactly start or end the lesson does
//!   not match.
//! - "Next" is the earliest strictly-future start; ties keep the first lesson
//!   found in input order.
//! - No lookahead across midnight; only `now.date()` exists here.

use crate::model::lesson::Lesson;
use chrono::NaiveDateTime;

/// Returns the first lesson whose window strictly contains `now`.
pub fn current_lesson<'a>(lessons: &'a [Lesson], now: NaiveDateTime) -> Option<&'a Lesson> {
    let today = now.date();
    lessons
        .iter()
        .find(|lesson| lesson.start_on(today) < now && now < lesson.end_on(today))
}

/// Returns the lesson with the earliest start strictly after `now`.
///
/// Ties keep the first match in input order, so the scan is a manual
/// first-strict-minimum fold rather than `min_by_key` (which keeps the last).
pub fn next_lesson<'a>(lessons: &'a [Lesson], now: NaiveDateTime) -> Option<&'a Lesson> {
    let today = now.date();

    let mut best: Option<(&Lesson, NaiveDateTime)> = None;
    for lesson in lessons {
        let start = lesson.start_on(today);
        if start <= now {
            continue;
        }
        match best {
            Some((_, best_start)) if start >= best_start => {}
            _ => best = Some((lesson, start)),
        }
    }

    best.map(|(lesson, _)| lesson)
}
