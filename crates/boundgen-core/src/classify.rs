//! Type classification
//!
//! Maps a declared type onto the closed set of value kinds constraints can be
//! checked against. The mapping is total: anything outside the supported set
//! classifies as [`ValueKind::Unsupported`] and is skipped by later stages.

use crate::schema::DeclaredType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value kinds a field can be validated as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Int32,
    Int64,
    Float32,
    Float64,
    Unsupported,
}

impl ValueKind {
    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64
        )
    }

    /// Type name used when rendering Rust source
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::Text => "&str",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Unsupported => "()",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying one declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: ValueKind,
    /// The value has to be read out of an observable container first
    pub wrapped: bool,
}

impl Classification {
    const fn direct(kind: ValueKind) -> Self {
        Self {
            kind,
            wrapped: false,
        }
    }

    const UNSUPPORTED: Self = Self::direct(ValueKind::Unsupported);
}

fn classify_bare(declared: &DeclaredType) -> ValueKind {
    match declared {
        DeclaredType::Text => ValueKind::Text,
        DeclaredType::Int32 => ValueKind::Int32,
        DeclaredType::Int64 => ValueKind::Int64,
        DeclaredType::Float32 => ValueKind::Float32,
        DeclaredType::Float64 => ValueKind::Float64,
        DeclaredType::Bool
        | DeclaredType::Char
        | DeclaredType::Int8
        | DeclaredType::Int16
        | DeclaredType::Observable(_)
        | DeclaredType::Named(_) => ValueKind::Unsupported,
    }
}

/// Classify a declared type.
///
/// Only one level of observable wrapping is recognised; an observable of an
/// observable is unsupported.
pub fn classify(declared: &DeclaredType) -> Classification {
    match declared {
        DeclaredType::Observable(inner) => match classify_bare(inner) {
            ValueKind::Unsupported => Classification::UNSUPPORTED,
            kind => Classification {
                kind,
                wrapped: true,
            },
        },
        other => Classification::direct(classify_bare(other)),
    }
}
