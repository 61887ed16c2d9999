//! Extracted constraints and classified field descriptors

use crate::classify::ValueKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of constraint a field can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    MinLength,
    MaxLength,
    Pattern,
    MinNumeric,
    MaxNumeric,
}

impl ConstraintKind {
    /// Suffix appended to a field identity to name the leaf predicate
    pub fn identity_suffix(self) -> &'static str {
        match self {
            Self::MinLength => "MinLength",
            Self::MaxLength => "MaxLength",
            Self::Pattern => "Pattern",
            Self::MinNumeric => "MinNumeric",
            Self::MaxNumeric => "MaxNumeric",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity_suffix())
    }
}

const TEXT_CONSTRAINTS: &[ConstraintKind] = &[
    ConstraintKind::MinLength,
    ConstraintKind::MaxLength,
    ConstraintKind::Pattern,
];

const NUMERIC_CONSTRAINTS: &[ConstraintKind] =
    &[ConstraintKind::MinNumeric, ConstraintKind::MaxNumeric];

impl ValueKind {
    /// Constraint kinds legal for this value kind, in extraction order.
    pub fn legal_constraints(self) -> &'static [ConstraintKind] {
        match self {
            Self::Text => TEXT_CONSTRAINTS,
            Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64 => NUMERIC_CONSTRAINTS,
            Self::Unsupported => &[],
        }
    }
}

/// Numeric bound, carrying the width of the field it applies to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Bound {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Bound {
    /// Value kind this bound can be compared against
    pub fn kind(self) -> ValueKind {
        match self {
            Self::I32(_) => ValueKind::Int32,
            Self::I64(_) => ValueKind::Int64,
            Self::F32(_) => ValueKind::Float32,
            Self::F64(_) => ValueKind::Float64,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
        }
    }
}

/// One constraint with its typed parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstraintSpec {
    MinLength(usize),
    MaxLength(usize),
    Pattern(String),
    MinNumeric(Bound),
    MaxNumeric(Bound),
}

impl ConstraintSpec {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::MinLength(_) => ConstraintKind::MinLength,
            Self::MaxLength(_) => ConstraintKind::MaxLength,
            Self::Pattern(_) => ConstraintKind::Pattern,
            Self::MinNumeric(_) => ConstraintKind::MinNumeric,
            Self::MaxNumeric(_) => ConstraintKind::MaxNumeric,
        }
    }
}

impl fmt::Display for ConstraintSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength(n) => write!(f, "len >= {}", n),
            Self::MaxLength(n) => write!(f, "len <= {}", n),
            Self::Pattern(p) => write!(f, "matches /{}/", p),
            Self::MinNumeric(b) => write!(f, ">= {}", b),
            Self::MaxNumeric(b) => write!(f, "<= {}", b),
        }
    }
}

/// A classified field with the constraints extracted for its kind.
///
/// Every constraint is legal for `kind`; extraction only ever produces those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: ValueKind,
    pub wrapped: bool,
    pub constraints: Vec<ConstraintSpec>,
}

impl FieldSpec {
    pub fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }
}
