//! Record and field declarations

use super::types::{Annotation, DeclaredType};
use crate::error::{BoundgenError, BoundgenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One named, typed member of a record together with its constraint metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name as declared on the record
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub declared: DeclaredType,

    /// Constraint metadata in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl FieldDecl {
    /// Create a field without annotations
    pub fn new(name: impl Into<String>, declared: DeclaredType) -> Self {
        Self {
            name: name.into(),
            declared,
            annotations: Vec::new(),
        }
    }

    /// Attach an annotation
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A record type as read from the schema, immutable for the rest of the pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSpec {
    /// Simple record name, e.g. `User`
    pub name: String,

    /// Namespace the record lives in, e.g. `app::data`
    #[serde(default)]
    pub namespace: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl RecordSpec {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field declaration
    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// `namespace::Name`, or just `Name` without a namespace
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }

    /// Check authoring rules: non-empty names and unique field names.
    pub fn validate_structure(&self) -> BoundgenResult<()> {
        if self.name.trim().is_empty() {
            return Err(BoundgenError::schema("Record name cannot be empty"));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(BoundgenError::schema_for_record(
                    "Field name cannot be empty",
                    &self.name,
                ));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(BoundgenError::schema_for_record(
                    format!("Duplicate field '{}'", field.name),
                    &self.name,
                ));
            }
        }

        Ok(())
    }
}

/// Everything a schema file declares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub records: Vec<RecordSpec>,
}

impl SchemaDocument {
    /// Find a record by simple or qualified name
    pub fn record(&self, name: &str) -> Option<&RecordSpec> {
        self.records
            .iter()
            .find(|r| r.name == name || r.qualified_name() == name)
    }

    /// Validate every record's structure
    pub fn validate(&self) -> BoundgenResult<()> {
        self.records.iter().try_for_each(RecordSpec::validate_structure)
    }
}
