//! Lesson list row cache mirroring the host list-adapter lifecycle.
//!
//! # Responsibility
//! - Hold the parsed rows between a refresh and the host's row queries.
//! - Answer row-count/row-at/item-id queries without panicking.
//!
//! # Invariants
//! - `refresh` fully replaces the cache from the schedule string.
//! - Item ids are stable positional ids within one refresh generation.
//! - Out-of-range positions return `None` rather than panic.

use crate::schedule::parser::parse_lessons;
use crate::widget::view::LessonRow;
use log::debug;

/// Row cache backing the widget's list adapter.
#[derive(Debug, Default)]
pub struct LessonRowFactory {
    rows: Vec<LessonRow>,
}

impl LessonRowFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-parses the schedule string and replaces all cached rows.
    pub fn refresh(&mut self, schedule_data: &str) {
        let lessons = parse_lessons(schedule_data);
        self.rows = lessons.iter().map(LessonRow::from_lesson).collect();
        debug!(
            "event=rows_refreshed module=widget status=ok rows={}",
            self.rows.len()
        );
    }

    /// Empties the cache; the adapter-teardown counterpart of `refresh`.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at `position`, or `None` when out of range.
    pub fn row_at(&self, position: usize) -> Option<&LessonRow> {
        self.rows.get(position)
    }

    /// Stable positional id for the host's recycling contract.
    pub fn item_id(&self, position: usize) -> i64 {
        position as i64
    }

    pub fn has_stable_ids(&self) -> bool {
        true
    }

    /// Snapshot of all cached rows in input order.
    pub fn rows(&self) -> &[LessonRow] {
        &self.rows
    }
}
