//! Validation outcomes and faults

use crate::classify::ValueKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result of running a record validator.
///
/// `NoValue` is distinct from `Invalid`: an observable field had no current
/// value, so its constraints could not be checked at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid { field: String },
    NoValue { field: String },
}

impl Validity {
    pub fn invalid(field: &str) -> Self {
        Self::Invalid {
            field: field.to_string(),
        }
    }

    pub fn no_value(field: &str) -> Self {
        Self::NoValue {
            field: field.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Field that decided a non-valid outcome
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { field } | Self::NoValue { field } => Some(field),
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid { field } => write!(f, "invalid ({})", field),
            Self::NoValue { field } => write!(f, "no value ({})", field),
        }
    }
}

/// A validation call that could not produce an outcome.
///
/// Faults end the single call they occur in; they are never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationFault {
    /// A pattern constraint does not compile. Fails every call that reaches it.
    #[error("{validator}: malformed pattern '{pattern}': {message}")]
    MalformedPattern {
        validator: String,
        pattern: String,
        message: String,
    },

    /// The record instance has no such field
    #[error("record has no field '{field}'")]
    MissingField { field: String },

    /// The field holds a value of a different kind than it was classified as
    #[error("field '{field}' expected a {expected} value, found {found}")]
    KindMismatch {
        field: String,
        expected: ValueKind,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_accessors() {
        assert!(Validity::Valid.is_valid());
        assert_eq!(Validity::invalid("age").field(), Some("age"));
        assert!(!Validity::no_value("speed").is_valid());
        assert_eq!(Validity::no_value("speed").to_string(), "no value (speed)");
    }

    #[test]
    fn test_fault_message() {
        let fault = ValidationFault::KindMismatch {
            field: "age".into(),
            expected: ValueKind::Int32,
            found: "text".into(),
        };
        assert_eq!(fault.to_string(), "field 'age' expected a int32 value, found text");
    }
}
