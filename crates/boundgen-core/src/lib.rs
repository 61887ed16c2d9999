//! Boundgen Core Library
//!
//! This crate derives validators from field-level constraint annotations on
//! record schemas: type classification, constraint extraction, predicate
//! synthesis, record aggregation and Rust source emission.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod constraint;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod identity;
pub mod predicate;
pub mod runtime;
pub mod schema;

// Emitted validators reach the regex engine through this re-export
pub use regex;

// Re-export commonly used types
pub use aggregate::{RecordValidator, aggregate};
pub use classify::{Classification, ValueKind, classify};
pub use config::{Config, EmitConfig, GeneratorConfig, LoggingConfig};
pub use constraint::{Bound, ConstraintKind, ConstraintSpec, FieldSpec};
pub use diagnostics::{Notice, NoticeReason, Severity};
pub use emit::{EmittedUnit, RustEmitter, write_units};
pub use error::{BoundgenError, BoundgenResult};
pub use extract::{Extraction, extract};
pub use generate::{GenerationReport, Generator, RecordGeneration, generate_record};
pub use identity::IdentityMap;
pub use predicate::{FieldValidator, LeafPredicate, synthesize};
pub use runtime::{DynamicRecord, Observable, RecordAccess, ValidationFault, Validity};
pub use schema::{Annotation, DeclaredType, FieldDecl, RecordSpec, SchemaDocument, load_schema};
