//! Error types for boundgen
//!
//! Generation-time failures (bad configuration, unreadable or malformed schema
//! files, emitter I/O) are reported through [`BoundgenError`]. Every variant
//! carries a stable error code and an optional context string so the CLI can
//! print a consistent report.
//!
//! Failures of a single validation call at runtime are a different family and
//! live in [`crate::runtime::ValidationFault`].

mod constructors;
mod conversions;
mod types;

pub use types::{BoundgenError, BoundgenResult, OptionExt, ResultExt};
