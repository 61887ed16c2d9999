//! Leaf predicates: one constraint, one boolean test

use crate::constraint::{Bound, ConstraintSpec};
use crate::runtime::{ValidationFault, ValueRef};
use regex::Regex;
use std::sync::OnceLock;

/// A pure test of one value against exactly one constraint.
///
/// Pattern leaves compile their expression on first evaluation and keep the
/// outcome, so a malformed pattern faults every call that reaches it.
#[derive(Debug, Clone)]
pub struct LeafPredicate {
    identity: String,
    constraint: ConstraintSpec,
    matcher: OnceLock<Result<Regex, String>>,
}

/// Anchor a pattern so only a whole-value match succeeds
pub(crate) fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

fn compare<T: PartialOrd>(value: T, bound: T, at_least: bool) -> bool {
    if at_least { value >= bound } else { value <= bound }
}

impl LeafPredicate {
    pub fn new(identity: impl Into<String>, constraint: ConstraintSpec) -> Self {
        Self {
            identity: identity.into(),
            constraint,
            matcher: OnceLock::new(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn constraint(&self) -> &ConstraintSpec {
        &self.constraint
    }

    fn matcher(&self, pattern: &str) -> Result<&Regex, ValidationFault> {
        self.matcher
            .get_or_init(|| Regex::new(&anchored(pattern)).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|message| ValidationFault::MalformedPattern {
                validator: self.identity.clone(),
                pattern: pattern.to_string(),
                message: message.clone(),
            })
    }

    fn mismatch(&self, value: ValueRef<'_>) -> ValidationFault {
        let expected = match &self.constraint {
            ConstraintSpec::MinNumeric(b) | ConstraintSpec::MaxNumeric(b) => b.kind(),
            _ => crate::classify::ValueKind::Text,
        };
        ValidationFault::KindMismatch {
            field: self.identity.clone(),
            expected,
            found: value.kind().to_string(),
        }
    }

    /// Evaluate the predicate. Lengths count characters, bounds are inclusive.
    pub fn test(&self, value: ValueRef<'_>) -> Result<bool, ValidationFault> {
        let passed = match (&self.constraint, value) {
            (ConstraintSpec::MinLength(n), ValueRef::Text(s)) => s.chars().count() >= *n,
            (ConstraintSpec::MaxLength(n), ValueRef::Text(s)) => s.chars().count() <= *n,
            (ConstraintSpec::Pattern(p), ValueRef::Text(s)) => self.matcher(p)?.is_match(s),
            (ConstraintSpec::MinNumeric(bound), v) => self.numeric(*bound, v, true)?,
            (ConstraintSpec::MaxNumeric(bound), v) => self.numeric(*bound, v, false)?,
            (_, v) => return Err(self.mismatch(v)),
        };
        Ok(passed)
    }

    fn numeric(&self, bound: Bound, value: ValueRef<'_>, at_least: bool) -> Result<bool, ValidationFault> {
        let passed = match (bound, value) {
            (Bound::I32(b), ValueRef::Int32(v)) => compare(v, b, at_least),
            (Bound::I64(b), ValueRef::Int64(v)) => compare(v, b, at_least),
            (Bound::F32(b), ValueRef::Float32(v)) => compare(v, b, at_least),
            (Bound::F64(b), ValueRef::Float64(v)) => compare(v, b, at_least),
            (_, v) => return Err(self.mismatch(v)),
        };
        Ok(passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(constraint: ConstraintSpec) -> LeafPredicate {
        LeafPredicate::new("validateFieldLeaf", constraint)
    }

    #[test]
    fn test_length_edges() {
        let min = leaf(ConstraintSpec::MinLength(10));
        let max = leaf(ConstraintSpec::MaxLength(40));

        assert!(min.test(ValueRef::Text(&"a".repeat(10))).unwrap());
        assert!(!min.test(ValueRef::Text(&"a".repeat(9))).unwrap());
        assert!(max.test(ValueRef::Text(&"a".repeat(40))).unwrap());
        assert!(!max.test(ValueRef::Text(&"a".repeat(41))).unwrap());
    }

    #[test]
    fn test_length_counts_characters() {
        let max = leaf(ConstraintSpec::MaxLength(3));
        assert!(max.test(ValueRef::Text("äöü")).unwrap());
    }

    #[test]
    fn test_pattern_is_full_match() {
        let digits = leaf(ConstraintSpec::Pattern("[0-9]+".into()));
        assert!(digits.test(ValueRef::Text("12345")).unwrap());
        assert!(!digits.test(ValueRef::Text("abc123")).unwrap());
        assert!(!digits.test(ValueRef::Text("123abc")).unwrap());
    }

    #[test]
    fn test_pattern_alternation_is_anchored_as_group() {
        let either = leaf(ConstraintSpec::Pattern("cat|dog".into()));
        assert!(either.test(ValueRef::Text("dog")).unwrap());
        assert!(!either.test(ValueRef::Text("cats")).unwrap());
    }

    #[test]
    fn test_malformed_pattern_faults_every_call() {
        let broken = leaf(ConstraintSpec::Pattern("([a-z".into()));
        for _ in 0..2 {
            let fault = broken.test(ValueRef::Text("abc")).unwrap_err();
            assert!(matches!(fault, ValidationFault::MalformedPattern { .. }));
        }
    }

    #[test]
    fn test_numeric_inclusive_all_widths() {
        assert!(leaf(ConstraintSpec::MinNumeric(Bound::I32(5))).test(ValueRef::Int32(5)).unwrap());
        assert!(leaf(ConstraintSpec::MaxNumeric(Bound::I64(100))).test(ValueRef::Int64(100)).unwrap());
        assert!(leaf(ConstraintSpec::MinNumeric(Bound::F32(5.0))).test(ValueRef::Float32(5.0)).unwrap());
        assert!(leaf(ConstraintSpec::MaxNumeric(Bound::F64(100.0))).test(ValueRef::Float64(100.0)).unwrap());
        assert!(!leaf(ConstraintSpec::MaxNumeric(Bound::F64(100.0))).test(ValueRef::Float64(100.000_001)).unwrap());
    }

    #[test]
    fn test_nan_fails_bounds() {
        let min = leaf(ConstraintSpec::MinNumeric(Bound::F64(0.0)));
        let max = leaf(ConstraintSpec::MaxNumeric(Bound::F64(0.0)));
        assert!(!min.test(ValueRef::Float64(f64::NAN)).unwrap());
        assert!(!max.test(ValueRef::Float64(f64::NAN)).unwrap());
    }

    #[test]
    fn test_kind_mismatch() {
        let fault = leaf(ConstraintSpec::MinNumeric(Bound::I32(1)))
            .test(ValueRef::Int64(1))
            .unwrap_err();
        assert!(matches!(fault, ValidationFault::KindMismatch { .. }));

        let fault = leaf(ConstraintSpec::MinLength(1)).test(ValueRef::Int32(1)).unwrap_err();
        assert!(matches!(fault, ValidationFault::KindMismatch { .. }));
    }
}
