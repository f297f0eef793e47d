//! Countdown formatting for the widget timer line.
//!
//! # Responsibility
//! - Render the gap between `now` and a lesson boundary as `"{h}h {m}min"`.
//!
//! # Invariants
//! - Whole-minute truncation: a 90-second gap renders as `"1min"`.
//! - Non-positive gaps return a fixed sentinel, never a negative duration.

use crate::model::lesson::Lesson;
use chrono::NaiveDateTime;

const ALREADY_STARTED: &str = "Lesson already started";
const ALREADY_ENDED: &str = "Lesson ended";

/// Formats the time left until `lesson` starts today.
///
/// Returns `"Lesson already started"` once the start is not strictly ahead.
pub fn time_until_next_lesson(lesson: &Lesson, now: NaiveDateTime) -> String {
    let start = lesson.start_on(now.date());
    format_gap(minutes_until(start, now), ALREADY_STARTED)
}

/// Formats the time left until `lesson` ends today.
///
/// Returns `"Lesson ended"` once the end is not strictly ahead.
pub fn time_until_lesson_end(lesson: &Lesson, now: NaiveDateTime) -> String {
    let end = lesson.end_on(now.date());
    format_gap(minutes_until(end, now), ALREADY_ENDED)
}

/// Whole minutes from `now` to `target`; `None` when the gap is non-positive.
fn minutes_until(target: NaiveDateTime, now: NaiveDateTime) -> Option<i64> {
    let gap = target - now;
    if gap <= chrono::Duration::zero() {
        return None;
    }
    Some(gap.num_minutes())
}

fn format_gap(minutes: Option<i64>, sentinel: &str) -> String {
    let Some(minutes) = minutes else {
        return sentinel.to_string();
    };
    let hours = minutes / 60;
    let min_part = minutes % 60;
    if hours > 0 {
        format!("{hours}h {min_part}min")
    } else {
        format!("{min_part}min")
    }
}
