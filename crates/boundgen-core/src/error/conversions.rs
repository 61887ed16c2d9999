//! From trait implementations for BoundgenError conversions

use super::types::BoundgenError;

impl From<anyhow::Error> for BoundgenError {
    fn from(error: anyhow::Error) -> Self {
        Self::other(error.to_string())
    }
}

impl From<std::io::Error> for BoundgenError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for BoundgenError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<serde_yaml::Error> for BoundgenError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::yaml(error.to_string())
    }
}

impl From<toml::de::Error> for BoundgenError {
    fn from(error: toml::de::Error) -> Self {
        Self::toml(error.to_string())
    }
}

impl From<toml::ser::Error> for BoundgenError {
    fn from(error: toml::ser::Error) -> Self {
        Self::toml(error.to_string())
    }
}
