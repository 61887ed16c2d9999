//! Schema Reader input model
//!
//! A schema document is the fully populated description of the records to
//! derive validators for. It is read once, before classification runs, and is
//! never re-queried during a generation pass.

mod loader;
mod record;
mod types;

pub use loader::{SchemaFormat, load_schema, parse_schema};
pub use record::{FieldDecl, RecordSpec, SchemaDocument};
pub use types::{Annotation, DeclaredType};
