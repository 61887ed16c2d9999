//! Source emission
//!
//! Renders record validators into Rust source units that a host crate
//! includes in its build, and persists them to an output directory.

mod naming;
mod rust;
mod writer;

pub use naming::{module_name, rust_identifier};
pub use rust::RustEmitter;
pub use writer::write_units;

/// One rendered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedUnit {
    /// Qualified name of the record the unit validates
    pub record: String,
    /// Module name, `<record_snake>_validator`
    pub module_name: String,
    pub file_name: String,
    pub source: String,
}
