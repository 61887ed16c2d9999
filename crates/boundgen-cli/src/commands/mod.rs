//! CLI commands

pub mod check;
pub mod config;
pub mod generate;
pub mod inspect;

use boundgen_core::{BoundgenError, BoundgenResult, RecordSpec, load_schema};
use std::path::Path;

/// Load a schema and pick one record by simple or qualified name.
pub(crate) fn load_record(schema: &Path, name: &str) -> BoundgenResult<RecordSpec> {
    let document = load_schema(schema)?;
    document.record(name).cloned().ok_or_else(|| {
        BoundgenError::schema_for_record(
            format!("Record '{}' not found in {}", name, schema.display()),
            name,
        )
    })
}
