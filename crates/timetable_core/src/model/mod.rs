//! Domain model for the widget render pass.
//!
//! # Responsibility
//! - Define the lesson record parsed from the host's schedule string.
//!
//! # Invariants
//! - Lessons are value objects: parsed fresh per render pass, never mutated,
//!   never persisted by this crate.

pub mod lesson;
