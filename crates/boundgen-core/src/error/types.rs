//! Core error type and result extension traits

use std::fmt::Display;
use thiserror::Error;

/// Result type alias for boundgen operations
pub type BoundgenResult<T> = Result<T, BoundgenError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: Display>(self, context: C) -> BoundgenResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> BoundgenResult<T>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn context<C: Display>(self, context: C) -> BoundgenResult<T> {
        self.map_err(|e| BoundgenError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> BoundgenResult<T> {
        self.map_err(|e| BoundgenError::other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types
pub trait OptionExt<T> {
    /// Convert Option to Result with context message
    fn context<C: Display>(self, context: C) -> BoundgenResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> BoundgenResult<T> {
        self.ok_or_else(|| BoundgenError::other(context.to_string()))
    }
}

/// Main error type for boundgen
#[derive(Error, Debug, Clone)]
pub enum BoundgenError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Schema authoring errors (empty names, duplicate fields, unreadable documents)
    #[error("Schema error: {message}")]
    Schema {
        message: String,
        record: Option<String>,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// YAML deserialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        context: Option<String>,
    },

    /// TOML deserialization errors
    #[error("TOML error: {message}")]
    Toml {
        message: String,
        context: Option<String>,
    },

    /// Source emission errors
    #[error("Emit error: {message}")]
    Emit {
        message: String,
        record: Option<String>,
        context: Option<String>,
    },

    /// Warning notices promoted to a failure by strict mode
    #[error("Generation reported {count} warning(s) in strict mode")]
    Diagnostics { count: usize, notices: Vec<String> },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl BoundgenError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "BOUNDGEN_CONFIG",
            Self::Schema { .. } => "BOUNDGEN_SCHEMA",
            Self::Io { .. } => "BOUNDGEN_IO",
            Self::Json { .. } => "BOUNDGEN_JSON",
            Self::Yaml { .. } => "BOUNDGEN_YAML",
            Self::Toml { .. } => "BOUNDGEN_TOML",
            Self::Emit { .. } => "BOUNDGEN_EMIT",
            Self::Diagnostics { .. } => "BOUNDGEN_DIAGNOSTICS",
            Self::Other { .. } => "BOUNDGEN_OTHER",
        }
    }

    /// Optional context about where the error occurred
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. }
            | Self::Schema { context, .. }
            | Self::Io { context, .. }
            | Self::Json { context, .. }
            | Self::Yaml { context, .. }
            | Self::Toml { context, .. }
            | Self::Emit { context, .. }
            | Self::Other { context, .. } => context.as_deref(),
            Self::Diagnostics { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            BoundgenError::config("a"),
            BoundgenError::schema("b"),
            BoundgenError::io("c"),
            BoundgenError::json("d"),
            BoundgenError::emit("e"),
            BoundgenError::other("f"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), String> = Err("boom".to_string());
        let err = result.context("loading schema").unwrap_err();
        assert_eq!(err.to_string(), "Error: loading schema: boom");
    }

    #[test]
    fn test_option_ext_context() {
        let value: Option<u8> = None;
        let err = value.context("record not found").unwrap_err();
        assert!(matches!(err, BoundgenError::Other { .. }));
    }
}
