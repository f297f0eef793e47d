//! FFI use-case API for Flutter-facing widget calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Render the complete widget content for each host update cycle.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call is a stateless recomputation from arguments and wall clock.

use chrono::Local;
use log::debug;
use timetable_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    render_widget_view, LessonRow, LessonRowFactory,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// List row item rendered into the widget's lesson list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRowItem {
    /// Normalized `"HH:MM-HH:MM"` range label.
    pub time: String,
    /// Display subject.
    pub subject: String,
    /// Display room.
    pub room: String,
}

/// Complete widget content for one host update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetViewResponse {
    /// Countdown line shown above the lesson list.
    pub timer_text: String,
    /// Lesson rows in schedule order.
    pub rows: Vec<WidgetRowItem>,
}

/// Renders the widget content for one update cycle.
///
/// Input semantics:
/// - `widget_text`: the host's stored `widgetText` preference; `None` when no
///   value has been stored yet, which falls back to the default schedule.
///
/// # FFI contract
/// - Sync call, pure computation against the device wall clock.
/// - Never panics; malformed schedule segments are silently dropped.
/// - Returns a complete view: timer line plus one row per parsed lesson.
#[flutter_rust_bridge::frb(sync)]
pub fn render_widget(widget_text: Option<String>) -> WidgetViewResponse {
    let now = Local::now().naive_local();
    let view = render_widget_view(widget_text.as_deref(), now);
    debug!(
        "event=render_widget module=ffi status=ok rows={}",
        view.rows.len()
    );

    WidgetViewResponse {
        timer_text: view.timer_text,
        rows: view.rows.iter().map(to_widget_row_item).collect(),
    }
}

/// Returns the lesson rows for the widget's standalone list-adapter path.
///
/// Input semantics:
/// - `schedule_data`: the schedule string handed to the list service; `None`
///   falls back to the default schedule, mirroring `render_widget`.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; malformed segments produce no rows.
/// - Row order matches the schedule string's segment order.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_rows(schedule_data: Option<String>) -> Vec<WidgetRowItem> {
    let schedule = schedule_data
        .unwrap_or_else(|| timetable_core::DEFAULT_SCHEDULE.to_string());

    let mut factory = LessonRowFactory::new();
    factory.refresh(&schedule);
    factory.rows().iter().map(to_widget_row_item).collect()
}

fn to_widget_row_item(row: &LessonRow) -> WidgetRowItem {
    WidgetRowItem {
        time: row.time.clone(),
        subject: row.subject.clone(),
        room: row.room.clone(),
    }
}
