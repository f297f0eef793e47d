//! Widget view-model assembly.
//!
//! # Responsibility
//! - Recompute the complete widget content for one update cycle.
//! - Compose the timer line from current/next resolution and countdowns.
//!
//! # Invariants
//! - Stateless: everything derives from the passed string and `now`.
//! - A missing preference value falls back to the built-in default schedule.

use crate::model::lesson::Lesson;
use crate::schedule::countdown::{time_until_lesson_end, time_until_next_lesson};
use crate::schedule::parser::parse_lessons;
use crate::schedule::window::{current_lesson, next_lesson};
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

/// Schedule used when the host has not stored a preference value yet.
pub const DEFAULT_SCHEDULE: &str =
    "08:00-08:45 Java 101;09:45-10:30 Социология 202;11:40-12:25 Flutter 303";

const NO_UPCOMING_LESSONS: &str = "No upcoming lessons";

/// One list row: the text fields of a single lesson item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRow {
    /// Normalized `"HH:MM-HH:MM"` range label.
    pub time: String,
    /// Display subject.
    pub subject: String,
    /// Display room.
    pub room: String,
}

impl LessonRow {
    pub(crate) fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            time: lesson.time_range_label(),
            subject: lesson.subject.clone(),
            room: lesson.room.clone(),
        }
    }
}

/// Complete widget content for one update cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetViewModel {
    /// Countdown line shown above the lesson list.
    pub timer_text: String,
    /// Lesson rows in input order.
    pub rows: Vec<LessonRow>,
}

/// Renders the widget view model from the host preference string and `now`.
///
/// `widget_text` of `None` means the host delivered no stored value; the
/// built-in default schedule is used instead, matching first-launch behavior.
pub fn render_widget_view(widget_text: Option<&str>, now: NaiveDateTime) -> WidgetViewModel {
    let schedule = widget_text.unwrap_or(DEFAULT_SCHEDULE);
    let lessons = parse_lessons(schedule);

    let timer_text = compose_timer_text(&lessons, now);
    let rows = lessons.iter().map(LessonRow::from_lesson).collect::<Vec<_>>();

    debug!(
        "event=widget_rendered module=widget status=ok rows={} fallback={}",
        rows.len(),
        widget_text.is_none()
    );

    WidgetViewModel { timer_text, rows }
}

fn compose_timer_text(lessons: &[Lesson], now: NaiveDateTime) -> String {
    if let Some(current) = current_lesson(lessons, now) {
        let until_end = time_until_lesson_end(current, now);
        return format!("{until_end} until current lesson ends ({})", current.subject);
    }
    if let Some(next) = next_lesson(lessons, now) {
        let until_next = time_until_next_lesson(next, now);
        return format!("{until_next} until next lesson ({})", next.subject);
    }
    NO_UPCOMING_LESSONS.to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_widget_view, DEFAULT_SCHEDULE};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .expect("valid date")
            .and_time(NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time"))
    }

    #[test]
    fn current_lesson_timer_counts_down_to_end() {
        let view = render_widget_view(Some(DEFAULT_SCHEDULE), at(8, 20));
        assert_eq!(view.timer_text, "25min until current lesson ends (Java)");
    }

    #[test]
    fn gap_between_lessons_counts_down_to_next_start() {
        let view = render_widget_view(Some(DEFAULT_SCHEDULE), at(9, 0));
        assert_eq!(view.timer_text, "45min until next lesson (Социология)");
    }

    #[test]
    fn after_last_lesson_timer_reports_no_upcoming() {
        let view = render_widget_view(Some(DEFAULT_SCHEDULE), at(23, 59));
        assert_eq!(view.timer_text, "No upcoming lessons");
    }

    #[test]
    fn missing_preference_falls_back_to_default_schedule() {
        let view = render_widget_view(None, at(7, 50));
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.timer_text, "10min until next lesson (Java)");
    }

    #[test]
    fn rows_preserve_input_order_and_labels() {
        let view = render_widget_view(Some("11:40-12:25 Flutter 303;08:00-08:45 Java 101"), at(6, 0));

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].time, "11:40-12:25");
        assert_eq!(view.rows[0].subject, "Flutter");
        assert_eq!(view.rows[0].room, "303");
        assert_eq!(view.rows[1].time, "08:00-08:45");
    }

    #[test]
    fn empty_schedule_renders_no_rows_and_no_upcoming() {
        let view = render_widget_view(Some(""), at(12, 0));
        assert!(view.rows.is_empty());
        assert_eq!(view.timer_text, "No upcoming lessons");
    }
}
