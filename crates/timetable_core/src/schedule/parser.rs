//! Schedule string parser.
//!
//! # Responsibility
//! - Turn the host's `"HH:MM-HH:MM Subject Words Room"` segments into lessons.
//! - Drop malformed segments silently; drops surface only as debug log lines.
//!
//! # Invariants
//! - Parsing never fails: every input maps to a (possibly empty) lesson list.
//! - A segment needs at least 3 tokens; the first must be a valid time range.

use crate::model::lesson::Lesson;
use chrono::NaiveTime;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}:\d{2})-(\d{1,2}:\d{2})$").expect("valid time range regex"));

/// Parses the semicolon-delimited schedule string into lessons, input order.
///
/// Splits on `;`, trims each segment and drops empty ones. Malformed segments
/// (too few tokens, malformed or unparseable time range) are skipped without
/// affecting their neighbors.
pub fn parse_lessons(data: &str) -> Vec<Lesson> {
    let segments = data
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty());

    let mut lessons = Vec::new();
    let mut dropped = 0usize;
    for segment in segments {
        match parse_segment(segment) {
            Some(lesson) => lessons.push(lesson),
            None => {
                dropped += 1;
                debug!("event=segment_dropped module=schedule segment_len={}", segment.len());
            }
        }
    }

    debug!(
        "event=schedule_parsed module=schedule status=ok lessons={} dropped={}",
        lessons.len(),
        dropped
    );
    lessons
}

/// Parses one trimmed segment, or `None` when it does not fit the grammar.
fn parse_segment(segment: &str) -> Option<Lesson> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }

    let captures = TIME_RANGE_RE.captures(tokens[0])?;
    let start = parse_wall_clock(captures.get(1)?.as_str())?;
    let end = parse_wall_clock(captures.get(2)?.as_str())?;

    let room = *tokens.last()?;
    let subject = tokens[1..tokens.len() - 1].join(" ");

    Some(Lesson::new(start, end, subject, room))
}

/// Best-effort `"HH:MM"` parse.
fn parse_wall_clock(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}
