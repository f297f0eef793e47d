//! Core domain logic for the timetable home-screen widget.
//! This crate is the single source of truth for schedule semantics.

pub mod logging;
pub mod model;
pub mod schedule;
pub mod widget;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::lesson::Lesson;
pub use schedule::countdown::{time_until_lesson_end, time_until_next_lesson};
pub use schedule::parser::parse_lessons;
pub use schedule::window::{current_lesson, next_lesson};
pub use widget::rows::LessonRowFactory;
pub use widget::view::{render_widget_view, LessonRow, WidgetViewModel, DEFAULT_SCHEDULE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
