//! Schedule string grammar and time-window resolution.
//!
//! # Responsibility
//! - Parse the host's semicolon-delimited lesson string.
//! - Resolve current/next lessons against wall-clock time.
//! - Format countdown strings for the widget timer line.
//!
//! # Invariants
//! - Everything here is a pure function over a snapshot of `now`; no state
//!   survives a render pass.

pub mod countdown;
pub mod parser;
pub mod window;
