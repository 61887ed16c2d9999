//! Schema file loading
//!
//! Supports JSON, TOML, and YAML documents, chosen by file extension.

use super::record::SchemaDocument;
use crate::error::{BoundgenError, BoundgenResult};
use std::fs;
use std::path::Path;

/// Serialization format of a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
    Yaml,
}

impl SchemaFormat {
    /// Pick a format from a path's extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a schema document from text and check its structure.
pub fn parse_schema(content: &str, format: SchemaFormat) -> BoundgenResult<SchemaDocument> {
    let document: SchemaDocument = match format {
        SchemaFormat::Toml => toml::from_str(content)
            .map_err(|e| BoundgenError::schema(format!("Failed to parse TOML schema: {}", e)))?,
        SchemaFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| BoundgenError::schema(format!("Failed to parse YAML schema: {}", e)))?,
        SchemaFormat::Json => serde_json::from_str(content)
            .map_err(|e| BoundgenError::schema(format!("Failed to parse JSON schema: {}", e)))?,
    };

    document.validate()?;
    Ok(document)
}

/// Load a schema document from a file.
pub fn load_schema(path: &Path) -> BoundgenResult<SchemaDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        BoundgenError::io_with_path(
            format!("Failed to read schema file: {}", e),
            path.display().to_string(),
        )
    })?;

    let document = parse_schema(&content, SchemaFormat::from_path(path))
        .map_err(|e| e.with_context(format!("Loading schema from '{}'", path.display())))?;

    tracing::debug!(
        "Loaded {} record(s) from {}",
        document.records.len(),
        path.display()
    );
    Ok(document)
}
