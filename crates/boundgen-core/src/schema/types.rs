//! Declared field types and constraint annotations

use crate::error::{BoundgenError, BoundgenResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Container names accepted as "observable container of T"
const OBSERVABLE_CONTAINERS: &[&str] = &["Observable", "LiveData", "MutableLiveData"];

/// Closed description of a field's declared type.
///
/// Textual form (used in schema files):
/// `bool`, `char`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `String`,
/// `Observable<T>` and any other identifier, which is kept as [`DeclaredType::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeclaredType {
    Bool,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
    /// Observable container whose current value is read at validation time
    Observable(Box<DeclaredType>),
    /// Any other named or composite type
    Named(String),
}

impl DeclaredType {
    /// Wrap a type in an observable container
    pub fn observable(inner: DeclaredType) -> Self {
        Self::Observable(Box::new(inner))
    }

    fn from_primitive_name(name: &str) -> Option<Self> {
        let ty = match name {
            "bool" | "boolean" | "Boolean" => Self::Bool,
            "char" | "Char" | "Character" => Self::Char,
            "i8" | "byte" | "Byte" => Self::Int8,
            "i16" | "short" | "Short" => Self::Int16,
            "i32" | "int" | "Int" | "Integer" => Self::Int32,
            "i64" | "long" | "Long" => Self::Int64,
            "f32" | "float" | "Float" => Self::Float32,
            "f64" | "double" | "Double" => Self::Float64,
            "String" | "str" | "&str" | "text" => Self::Text,
            _ => return None,
        };
        Some(ty)
    }
}

/// Last path segment of a possibly qualified name (`a.b.C`, `a::b::C`)
fn simple_name(name: &str) -> &str {
    let after_colons = name.rsplit("::").next().unwrap_or(name);
    after_colons.rsplit('.').next().unwrap_or(after_colons)
}

impl FromStr for DeclaredType {
    type Err = BoundgenError;

    fn from_str(s: &str) -> BoundgenResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BoundgenError::schema("Declared type cannot be empty"));
        }

        if let (Some(open), true) = (s.find('<'), s.ends_with('>')) {
            let outer = s[..open].trim();
            let inner = s[open + 1..s.len() - 1].trim();
            if inner.is_empty() {
                return Err(BoundgenError::schema(format!(
                    "Type '{}' has an empty type argument",
                    s
                )));
            }
            if OBSERVABLE_CONTAINERS.contains(&simple_name(outer)) {
                return Ok(Self::observable(inner.parse()?));
            }
            return Ok(Self::Named(s.to_string()));
        }

        Ok(Self::from_primitive_name(simple_name(s)).unwrap_or_else(|| Self::Named(s.to_string())))
    }
}

impl TryFrom<String> for DeclaredType {
    type Error = BoundgenError;

    fn try_from(value: String) -> BoundgenResult<Self> {
        value.parse()
    }
}

impl From<DeclaredType> for String {
    fn from(value: DeclaredType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Char => f.write_str("char"),
            Self::Int8 => f.write_str("i8"),
            Self::Int16 => f.write_str("i16"),
            Self::Int32 => f.write_str("i32"),
            Self::Int64 => f.write_str("i64"),
            Self::Float32 => f.write_str("f32"),
            Self::Float64 => f.write_str("f64"),
            Self::Text => f.write_str("String"),
            Self::Observable(inner) => write!(f, "Observable<{}>", inner),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Constraint metadata as authored on a field.
///
/// Numeric annotations are typed by width; only the pair matching the field's
/// classified kind is ever consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    MinLength(usize),
    MaxLength(usize),
    Pattern(String),
    MinInt(i32),
    MaxInt(i32),
    MinLong(i64),
    MaxLong(i64),
    MinFloat(f32),
    MaxFloat(f32),
    MinDouble(f64),
    MaxDouble(f64),
}

impl Annotation {
    /// Annotation name as written in schema files
    pub fn name(&self) -> &'static str {
        match self {
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Pattern(_) => "pattern",
            Self::MinInt(_) => "min_int",
            Self::MaxInt(_) => "max_int",
            Self::MinLong(_) => "min_long",
            Self::MaxLong(_) => "max_long",
            Self::MinFloat(_) => "min_float",
            Self::MaxFloat(_) => "max_float",
            Self::MinDouble(_) => "min_double",
            Self::MaxDouble(_) => "max_double",
        }
    }
}
