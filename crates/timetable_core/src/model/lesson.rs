//! Lesson domain model.
//!
//! # Responsibility
//! - Define the record parsed from one schedule-string segment.
//! - Anchor `HH:MM` times of day to a concrete calendar date.
//!
//! # Invariants
//! - `start` is assumed to precede `end`; reversed windows are NOT rejected.
//!   Resolution simply never matches them, which preserves host behavior.
//! - Lessons carry no date: they exist only for "today" at resolution time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One schedule entry: a same-day time window plus subject and room labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Start of the lesson window, wire shape `"HH:MM"`.
    #[serde(with = "wall_clock")]
    pub start: NaiveTime,
    /// End of the lesson window, wire shape `"HH:MM"`.
    #[serde(with = "wall_clock")]
    pub end: NaiveTime,
    /// Display subject; middle tokens of the segment joined by spaces.
    pub subject: String,
    /// Display room; the segment's last token.
    pub room: String,
}

impl Lesson {
    /// Creates a lesson from already-validated parts.
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        subject: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            subject: subject.into(),
            room: room.into(),
        }
    }

    /// Anchors the start time to the given calendar date.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    /// Anchors the end time to the given calendar date.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }

    /// Returns the normalized `"HH:MM-HH:MM"` range label for list rows.
    pub fn time_range_label(&self) -> String {
        format!(
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

mod wall_clock {
    //! Serde helpers keeping the wire shape aligned with the schedule grammar.

    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}
