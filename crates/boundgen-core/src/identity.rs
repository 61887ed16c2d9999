//! Naming and identity bookkeeping
//!
//! Field validators are named `validate<CapitalizedField>`, leaf predicates
//! `validate<CapitalizedField><ConstraintKind>` and the record validator
//! `validate<CapitalizedRecord>`. An [`IdentityMap`] lives for exactly one
//! record's generation and guarantees these names never collide within it.

use crate::constraint::ConstraintKind;
use crate::schema::RecordSpec;
use std::collections::HashSet;

pub const VALIDATE_PREFIX: &str = "validate";

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn field_identity(field: &str) -> String {
    format!("{}{}", VALIDATE_PREFIX, capitalize(field))
}

pub fn leaf_identity(field_identity: &str, kind: ConstraintKind) -> String {
    format!("{}{}", field_identity, kind.identity_suffix())
}

pub fn record_identity(record: &str) -> String {
    format!("{}{}", VALIDATE_PREFIX, capitalize(record))
}

/// Identities reserved for one field: its validator and its leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedIdentity {
    /// The natural identity, before collision handling
    pub requested: String,
    pub identity: String,
    /// Leaf identities, in the order the constraint kinds were given
    pub leaves: Vec<String>,
}

impl ClaimedIdentity {
    pub fn collided(&self) -> bool {
        self.requested != self.identity
    }
}

/// What the aggregator needs to know about a registered field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub identity: String,
    pub wrapped: bool,
}

/// Per-record map from field name to its validator identity.
///
/// Created empty when a record's generation starts, filled as field
/// validators are synthesized and consumed once by the aggregator.
#[derive(Debug)]
pub struct IdentityMap {
    record_identity: String,
    taken: HashSet<String>,
    entries: Vec<(String, Registration)>,
}

impl IdentityMap {
    /// Start a map for `record`, reserving the record validator's identity.
    pub fn for_record(record: &RecordSpec) -> Self {
        let record_identity = record_identity(&record.name);
        let mut taken = HashSet::new();
        taken.insert(record_identity.clone());
        Self {
            record_identity,
            taken,
            entries: Vec::new(),
        }
    }

    pub fn record_identity(&self) -> &str {
        &self.record_identity
    }

    /// Reserve identities for a field and the given leaf kinds.
    ///
    /// If any of the natural names is taken, numeric suffixes starting at 2
    /// are tried on the field identity until all names are free.
    pub fn claim(&mut self, field: &str, kinds: &[ConstraintKind]) -> ClaimedIdentity {
        let requested = field_identity(field);
        let mut attempt = 1usize;

        loop {
            let identity = if attempt == 1 {
                requested.clone()
            } else {
                format!("{}{}", requested, attempt)
            };
            let leaves: Vec<String> = kinds.iter().map(|k| leaf_identity(&identity, *k)).collect();

            let free = !self.taken.contains(&identity)
                && leaves.iter().all(|leaf| !self.taken.contains(leaf));
            if free {
                self.taken.insert(identity.clone());
                self.taken.extend(leaves.iter().cloned());
                return ClaimedIdentity {
                    requested,
                    identity,
                    leaves,
                };
            }
            attempt += 1;
        }
    }

    /// Register a synthesized field validator.
    pub fn register(&mut self, field: impl Into<String>, identity: impl Into<String>, wrapped: bool) {
        self.entries.push((
            field.into(),
            Registration {
                identity: identity.into(),
                wrapped,
            },
        ));
    }

    pub fn get(&self, field: &str) -> Option<&Registration> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, registration)| registration)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registrations in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Registration)> {
        self.entries.iter().map(|(name, reg)| (name.as_str(), reg))
    }
}
