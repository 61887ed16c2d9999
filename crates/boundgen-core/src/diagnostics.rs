//! Generation notices
//!
//! None of these stop a generation pass. They are collected per record and
//! returned to the host, which decides whether to log them or fail the build
//! (strict mode fails on any [`Severity::Warning`]).

use crate::classify::ValueKind;
use crate::constraint::ConstraintKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Why a notice was raised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoticeReason {
    /// The declared type does not map to a supported value kind
    UnsupportedFieldType { declared: String, annotated: bool },
    /// An annotation is not legal for the field's kind and was not extracted
    ConstraintKindMismatch { annotation: String, kind: ValueKind },
    /// Several annotations of one constraint kind; the last one was kept
    DuplicateConstraint {
        constraint: ConstraintKind,
        occurrences: usize,
    },
    /// The natural identity was taken; a suffixed one was assigned
    IdentityCollision { requested: String, assigned: String },
    /// The field carries no constraints and is absent from the record check
    Unconstrained,
    /// No field of the record registered a validator
    NoRecordValidator,
}

impl NoticeReason {
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnsupportedFieldType { annotated, .. } => {
                if *annotated {
                    Severity::Warning
                } else {
                    Severity::Info
                }
            }
            Self::ConstraintKindMismatch { .. }
            | Self::DuplicateConstraint { .. }
            | Self::IdentityCollision { .. } => Severity::Warning,
            Self::Unconstrained | Self::NoRecordValidator => Severity::Info,
        }
    }
}

impl fmt::Display for NoticeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFieldType { declared, annotated } => {
                write!(f, "unsupported type '{}'", declared)?;
                if *annotated {
                    f.write_str(", its constraints are ignored")?;
                }
                Ok(())
            }
            Self::ConstraintKindMismatch { annotation, kind } => {
                write!(f, "annotation '{}' does not apply to {} fields", annotation, kind)
            }
            Self::DuplicateConstraint {
                constraint,
                occurrences,
            } => write!(
                f,
                "{} declared {} times, keeping the last one",
                constraint, occurrences
            ),
            Self::IdentityCollision {
                requested,
                assigned,
            } => write!(f, "identity '{}' already taken, using '{}'", requested, assigned),
            Self::Unconstrained => f.write_str("no constraints, excluded from the record check"),
            Self::NoRecordValidator => f.write_str("no constrained fields, no record validator"),
        }
    }
}

/// A notice attached to a record, and to a field when one is involved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub record: String,
    pub field: Option<String>,
    #[serde(flatten)]
    pub reason: NoticeReason,
}

impl Notice {
    pub fn for_field(
        record: impl Into<String>,
        field: impl Into<String>,
        reason: NoticeReason,
    ) -> Self {
        Self {
            record: record.into(),
            field: Some(field.into()),
            reason,
        }
    }

    pub fn for_record(record: impl Into<String>, reason: NoticeReason) -> Self {
        Self {
            record: record.into(),
            field: None,
            reason,
        }
    }

    pub fn severity(&self) -> Severity {
        self.reason.severity()
    }

    /// Emit through `tracing` at a level matching the severity
    pub(crate) fn log(&self) {
        match self.severity() {
            Severity::Warning => tracing::warn!("{}", self),
            Severity::Info => tracing::debug!("{}", self),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}: {}", self.record, field, self.reason),
            None => write!(f, "{}: {}", self.record, self.reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_severity_depends_on_annotations() {
        let plain = NoticeReason::UnsupportedFieldType {
            declared: "bool".into(),
            annotated: false,
        };
        let lossy = NoticeReason::UnsupportedFieldType {
            declared: "bool".into(),
            annotated: true,
        };
        assert_eq!(plain.severity(), Severity::Info);
        assert_eq!(lossy.severity(), Severity::Warning);
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice::for_field(
            "User",
            "age",
            NoticeReason::ConstraintKindMismatch {
                annotation: "min_length".into(),
                kind: ValueKind::Int32,
            },
        );
        assert_eq!(
            notice.to_string(),
            "User.age: annotation 'min_length' does not apply to int32 fields"
        );
    }

    #[test]
    fn test_notice_serializes_flat() {
        let notice = Notice::for_record("Empty", NoticeReason::NoRecordValidator);
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["reason"], "no_record_validator");
        assert_eq!(json["record"], "Empty");
    }
}
