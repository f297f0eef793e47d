//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `timetable_core` linkage.
//! - Print one widget render pass for quick local sanity checks.

use chrono::Local;
use timetable_core::render_widget_view;

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("timetable_core ping={}", timetable_core::ping());
    println!("timetable_core version={}", timetable_core::core_version());

    let now = Local::now().naive_local();
    let view = render_widget_view(None, now);
    println!("timer: {}", view.timer_text);
    for row in &view.rows {
        println!("  {} {} {}", row.time, row.subject, row.room);
    }
}
