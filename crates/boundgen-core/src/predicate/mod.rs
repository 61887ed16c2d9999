//! Predicate synthesis
//!
//! One [`LeafPredicate`] per extracted constraint, composed into one
//! [`FieldValidator`] per constrained field. Both are in-memory predicate
//! trees: they can be evaluated directly or handed to an emitter.

mod field;
mod leaf;

pub use field::FieldValidator;
pub use leaf::LeafPredicate;
pub(crate) use leaf::anchored;

use crate::constraint::FieldSpec;
use crate::identity::ClaimedIdentity;

/// Build the field validator for `spec` under the identities in `claimed`.
///
/// Returns `None` for a field without constraints. `claimed.leaves` must be in
/// the same order as `spec.constraints`.
pub fn synthesize(spec: &FieldSpec, claimed: &ClaimedIdentity) -> Option<FieldValidator> {
    if !spec.is_constrained() {
        return None;
    }
    debug_assert_eq!(spec.constraints.len(), claimed.leaves.len());

    let leaves = spec
        .constraints
        .iter()
        .zip(&claimed.leaves)
        .map(|(constraint, identity)| LeafPredicate::new(identity.clone(), constraint.clone()))
        .collect();

    Some(FieldValidator::new(
        claimed.identity.clone(),
        spec.name.clone(),
        spec.kind,
        spec.wrapped,
        leaves,
    ))
}
