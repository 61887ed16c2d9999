//! Field validators: the AND of a field's leaf predicates

use super::leaf::LeafPredicate;
use crate::classify::ValueKind;
use crate::runtime::{ValidationFault, ValueRef};

/// Conjunction of one field's leaf predicates, in extraction order.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    identity: String,
    field: String,
    kind: ValueKind,
    wrapped: bool,
    leaves: Vec<LeafPredicate>,
}

impl FieldValidator {
    pub fn new(
        identity: String,
        field: String,
        kind: ValueKind,
        wrapped: bool,
        leaves: Vec<LeafPredicate>,
    ) -> Self {
        Self {
            identity,
            field,
            kind,
            wrapped,
            leaves,
        }
    }

    /// `validate<CapitalizedField>`, possibly suffixed after a collision
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn leaves(&self) -> &[LeafPredicate] {
        &self.leaves
    }

    /// Evaluate against one value, stopping at the first failing leaf.
    pub fn check(&self, value: ValueRef<'_>) -> Result<bool, ValidationFault> {
        if value.kind() != self.kind {
            return Err(ValidationFault::KindMismatch {
                field: self.field.clone(),
                expected: self.kind,
                found: value.kind().to_string(),
            });
        }

        for leaf in &self.leaves {
            if !leaf.test(value)? {
                tracing::trace!("{} rejected by {}", self.field, leaf.identity());
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintSpec;

    fn name_validator(pattern: &str) -> FieldValidator {
        FieldValidator::new(
            "validateName".into(),
            "name".into(),
            ValueKind::Text,
            false,
            vec![
                LeafPredicate::new("validateNameMinLength", ConstraintSpec::MinLength(10)),
                LeafPredicate::new("validateNameMaxLength", ConstraintSpec::MaxLength(40)),
                LeafPredicate::new("validateNamePattern", ConstraintSpec::Pattern(pattern.into())),
            ],
        )
    }

    #[test]
    fn test_text_field_conjunction() {
        let validator = name_validator("[A-Za-z0-9]+");
        assert!(validator.check(ValueRef::Text("ValidName12")).unwrap());
        assert!(!validator.check(ValueRef::Text("short")).unwrap());
        assert!(!validator.check(ValueRef::Text("Valid Name 12")).unwrap());
        assert!(!validator.check(ValueRef::Text(&"x".repeat(41))).unwrap());
    }

    #[test]
    fn test_short_circuit_skips_later_leaves() {
        // The broken pattern is never reached when the length check fails first.
        let validator = name_validator("([");
        assert!(!validator.check(ValueRef::Text("short")).unwrap());
        assert!(validator.check(ValueRef::Text("long enough value")).is_err());
    }

    #[test]
    fn test_kind_checked_before_leaves() {
        let validator = name_validator(".*");
        let fault = validator.check(ValueRef::Int32(3)).unwrap_err();
        assert_eq!(
            fault,
            ValidationFault::KindMismatch {
                field: "name".into(),
                expected: ValueKind::Text,
                found: "int32".into()
            }
        );
    }
}
