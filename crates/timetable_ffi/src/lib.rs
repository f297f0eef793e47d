//! FFI surface crate for the Flutter host.
//!
//! # Responsibility
//! - Re-export the use-case API consumed by the generated bridge.

pub mod api;
