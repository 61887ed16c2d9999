//! Validator aggregation
//!
//! Composes the registered field validators of one record into its record
//! validator, in field declaration order.

use crate::identity::IdentityMap;
use crate::predicate::FieldValidator;
use crate::runtime::{FieldRead, RecordAccess, ValidationFault, Validity};
use crate::schema::RecordSpec;

/// Conjunction of a record's field validators
#[derive(Debug, Clone)]
pub struct RecordValidator {
    identity: String,
    record: String,
    namespace: String,
    fields: Vec<FieldValidator>,
}

impl RecordValidator {
    /// `validate<CapitalizedRecord>`
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Field validators in declaration order
    pub fn fields(&self) -> &[FieldValidator] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldValidator> {
        self.fields.iter().find(|f| f.field() == name)
    }

    /// Validate a record instance.
    ///
    /// Each registered field is read exactly once. Evaluation stops at the
    /// first field that is invalid or whose observable holds no value.
    pub fn validate<R>(&self, record: &R) -> Result<Validity, ValidationFault>
    where
        R: RecordAccess + ?Sized,
    {
        for validator in &self.fields {
            let field = validator.field();
            match record.read_field(field, validator.kind(), validator.is_wrapped()) {
                FieldRead::Value(value) => {
                    if !validator.check(value.as_value_ref())? {
                        return Ok(Validity::invalid(field));
                    }
                }
                FieldRead::NoValue => return Ok(Validity::no_value(field)),
                FieldRead::Missing => {
                    return Err(ValidationFault::MissingField {
                        field: field.to_string(),
                    });
                }
                FieldRead::Unreadable { found } => {
                    return Err(ValidationFault::KindMismatch {
                        field: field.to_string(),
                        expected: validator.kind(),
                        found,
                    });
                }
            }
        }
        Ok(Validity::Valid)
    }

    /// Boolean shorthand: anything but [`Validity::Valid`] or a fault is `false`
    pub fn is_valid<R>(&self, record: &R) -> bool
    where
        R: RecordAccess + ?Sized,
    {
        matches!(self.validate(record), Ok(Validity::Valid))
    }
}

/// Build the record validator from the identity map and synthesized validators.
///
/// Returns `None` when no field registered a validator; there is nothing to
/// check, and no always-true validator is produced.
pub fn aggregate(
    record: &RecordSpec,
    identities: IdentityMap,
    mut validators: Vec<FieldValidator>,
) -> Option<RecordValidator> {
    if identities.is_empty() {
        return None;
    }

    let mut fields = Vec::with_capacity(identities.len());
    for decl in &record.fields {
        let Some(registration) = identities.get(&decl.name) else {
            continue;
        };
        let Some(position) = validators
            .iter()
            .position(|v| v.identity() == registration.identity)
        else {
            tracing::warn!(
                "{} registered as {} but no validator was synthesized",
                decl.name,
                registration.identity
            );
            continue;
        };
        let validator = validators.swap_remove(position);
        debug_assert_eq!(validator.is_wrapped(), registration.wrapped);
        fields.push(validator);
    }

    if fields.is_empty() {
        return None;
    }

    Some(RecordValidator {
        identity: identities.record_identity().to_string(),
        record: record.name.clone(),
        namespace: record.namespace.clone(),
        fields,
    })
}
