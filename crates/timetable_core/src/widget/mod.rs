//! Widget-facing view model and list-adapter plumbing.
//!
//! # Responsibility
//! - Assemble the per-render-pass text fields and rows the host paints.
//! - Mirror the host list-adapter lifecycle with a panic-free row cache.

pub mod rows;
pub mod view;
