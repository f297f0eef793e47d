//! End-to-end widget render scenarios through the public API.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use timetable_core::{
    current_lesson, next_lesson, parse_lessons, render_widget_view, time_until_lesson_end,
    time_until_next_lesson, LessonRowFactory,
};

const SCHEDULE: &str = "08:00-08:45 Java 101;09:45-10:30 Социология 202;11:40-12:25 Flutter 303";

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 30)
        .expect("valid date")
        .and_time(NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time"))
}

#[test]
fn single_segment_parses_into_expected_lesson() {
    let lessons = parse_lessons("08:00-08:45 Java 101");

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(lessons[0].end, NaiveTime::from_hms_opt(8, 45, 0).unwrap());
    assert_eq!(lessons[0].subject, "Java");
    assert_eq!(lessons[0].room, "101");
}

#[test]
fn mid_lesson_the_widget_counts_down_to_lesson_end() {
    let lessons = parse_lessons(SCHEDULE);
    let now = at(8, 20);

    let current = current_lesson(&lessons, now).expect("08:20 falls inside first lesson");
    assert_eq!(current.subject, "Java");
    assert_eq!(time_until_lesson_end(current, now), "25min");

    let view = render_widget_view(Some(SCHEDULE), now);
    assert_eq!(view.timer_text, "25min until current lesson ends (Java)");
}

#[test]
fn before_school_the_widget_counts_down_to_first_start() {
    let lessons = parse_lessons(SCHEDULE);
    let now = at(7, 50);

    assert!(current_lesson(&lessons, now).is_none());
    let next = next_lesson(&lessons, now).expect("first lesson is ahead");
    assert_eq!(next.subject, "Java");
    assert_eq!(time_until_next_lesson(next, now), "10min");

    let view = render_widget_view(Some(SCHEDULE), now);
    assert_eq!(view.timer_text, "10min until next lesson (Java)");
}

#[test]
fn late_night_with_no_later_lessons_reports_no_upcoming() {
    let lessons = parse_lessons(SCHEDULE);
    let now = at(23, 59);

    assert!(current_lesson(&lessons, now).is_none());
    assert!(next_lesson(&lessons, now).is_none());

    let view = render_widget_view(Some(SCHEDULE), now);
    assert_eq!(view.timer_text, "No upcoming lessons");
}

#[test]
fn malformed_segment_is_dropped_on_every_surface() {
    let mixed = "08:00-08:45 Java 101;09:00 OnlyTwo;11:40-12:25 Flutter 303";

    let lessons = parse_lessons(mixed);
    assert_eq!(lessons.len(), 2);

    let view = render_widget_view(Some(mixed), at(6, 0));
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].subject, "Java");
    assert_eq!(view.rows[1].subject, "Flutter");

    let mut factory = LessonRowFactory::new();
    factory.refresh(mixed);
    assert_eq!(factory.row_count(), 2);
}

#[test]
fn lesson_window_is_open_on_both_ends() {
    let lessons = parse_lessons(SCHEDULE);

    assert!(current_lesson(&lessons, at(8, 0)).is_none());
    assert!(current_lesson(&lessons, at(8, 45)).is_none());
    // At exactly 08:00 the lesson is not "next" either.
    let next = next_lesson(&lessons, at(8, 0)).expect("later lessons exist");
    assert_eq!(next.subject, "Социология");
}

#[test]
fn long_gap_renders_hours_and_minutes() {
    let view = render_widget_view(Some(SCHEDULE), at(5, 35));
    assert_eq!(view.timer_text, "2h 25min until next lesson (Java)");
}

#[test]
fn row_factory_lifecycle_matches_adapter_contract() {
    let mut factory = LessonRowFactory::new();
    factory.refresh(SCHEDULE);

    assert_eq!(factory.row_count(), 3);
    assert!(factory.has_stable_ids());
    assert_eq!(factory.item_id(2), 2);

    let row = factory.row_at(1).expect("second row exists");
    assert_eq!(row.time, "09:45-10:30");
    assert_eq!(row.subject, "Социология");
    assert_eq!(row.room, "202");

    assert!(factory.row_at(3).is_none());

    factory.clear();
    assert_eq!(factory.row_count(), 0);
}
