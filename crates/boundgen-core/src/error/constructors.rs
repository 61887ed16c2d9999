//! Constructor methods for BoundgenError

use super::types::BoundgenError;

impl BoundgenError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            record: None,
            context: None,
        }
    }

    /// Create a schema error attributed to a record
    pub fn schema_for_record(message: impl Into<String>, record: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            record: Some(record.into()),
            context: None,
        }
    }

    /// Create a schema error with context
    pub fn schema_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            record: None,
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with the offending path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new YAML error
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new TOML error
    pub fn toml(message: impl Into<String>) -> Self {
        Self::Toml {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new emit error
    pub fn emit(message: impl Into<String>) -> Self {
        Self::Emit {
            message: message.into(),
            record: None,
            context: None,
        }
    }

    /// Create an emit error attributed to a record
    pub fn emit_for_record(message: impl Into<String>, record: impl Into<String>) -> Self {
        Self::Emit {
            message: message.into(),
            record: Some(record.into()),
            context: None,
        }
    }

    /// Create a strict-mode diagnostics failure
    pub fn diagnostics(notices: Vec<String>) -> Self {
        Self::Diagnostics {
            count: notices.len(),
            notices,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to any variant that carries it
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        let ctx = Some(ctx.into());
        match &mut self {
            Self::Config { context, .. }
            | Self::Schema { context, .. }
            | Self::Io { context, .. }
            | Self::Json { context, .. }
            | Self::Yaml { context, .. }
            | Self::Toml { context, .. }
            | Self::Emit { context, .. }
            | Self::Other { context, .. } => *context = ctx,
            Self::Diagnostics { .. } => {}
        }
        self
    }
}
