//! Constraint extraction
//!
//! For a classified field, reads only the annotations legal for its kind and
//! orders them by the fixed per-kind table, which is also the order leaf
//! predicates are evaluated in.

use crate::classify::{Classification, ValueKind};
use crate::constraint::{Bound, ConstraintSpec, FieldSpec};
use crate::diagnostics::NoticeReason;
use crate::schema::{Annotation, FieldDecl};

/// Extracted field together with the notices raised while extracting it
#[derive(Debug, Clone)]
pub struct Extraction {
    pub spec: FieldSpec,
    pub notices: Vec<NoticeReason>,
}

/// Translate an annotation into a constraint if it is legal for `kind`.
fn lift(annotation: &Annotation, kind: ValueKind) -> Option<ConstraintSpec> {
    use Annotation as A;
    use ConstraintSpec as C;

    let spec = match (kind, annotation) {
        (ValueKind::Text, A::MinLength(n)) => C::MinLength(*n),
        (ValueKind::Text, A::MaxLength(n)) => C::MaxLength(*n),
        (ValueKind::Text, A::Pattern(p)) => C::Pattern(p.clone()),
        (ValueKind::Int32, A::MinInt(v)) => C::MinNumeric(Bound::I32(*v)),
        (ValueKind::Int32, A::MaxInt(v)) => C::MaxNumeric(Bound::I32(*v)),
        (ValueKind::Int64, A::MinLong(v)) => C::MinNumeric(Bound::I64(*v)),
        (ValueKind::Int64, A::MaxLong(v)) => C::MaxNumeric(Bound::I64(*v)),
        (ValueKind::Float32, A::MinFloat(v)) => C::MinNumeric(Bound::F32(*v)),
        (ValueKind::Float32, A::MaxFloat(v)) => C::MaxNumeric(Bound::F32(*v)),
        (ValueKind::Float64, A::MinDouble(v)) => C::MinNumeric(Bound::F64(*v)),
        (ValueKind::Float64, A::MaxDouble(v)) => C::MaxNumeric(Bound::F64(*v)),
        _ => return None,
    };
    Some(spec)
}

/// Extract the constraints of `field` for its classification.
///
/// Unsupported fields never have constraints extracted. When one constraint
/// kind is declared more than once, the last declaration wins.
pub fn extract(field: &FieldDecl, classification: Classification) -> Extraction {
    let mut spec = FieldSpec {
        name: field.name.clone(),
        kind: classification.kind,
        wrapped: classification.wrapped,
        constraints: Vec::new(),
    };
    let mut notices = Vec::new();

    if !classification.kind.is_supported() {
        return Extraction { spec, notices };
    }

    let mut lifted = Vec::with_capacity(field.annotations.len());
    for annotation in &field.annotations {
        match lift(annotation, classification.kind) {
            Some(constraint) => lifted.push(constraint),
            None => notices.push(NoticeReason::ConstraintKindMismatch {
                annotation: annotation.name().to_string(),
                kind: classification.kind,
            }),
        }
    }

    for &kind in classification.kind.legal_constraints() {
        let mut matching = lifted.iter().filter(|c| c.kind() == kind);
        let occurrences = matching.clone().count();
        if occurrences > 1 {
            notices.push(NoticeReason::DuplicateConstraint {
                constraint: kind,
                occurrences,
            });
        }
        if let Some(last) = matching.next_back() {
            spec.constraints.push(last.clone());
        }
    }

    Extraction { spec, notices }
}
