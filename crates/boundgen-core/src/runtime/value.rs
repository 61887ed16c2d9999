//! Typed runtime values

use crate::classify::ValueKind;
use serde::{Deserialize, Serialize};

/// An owned field value of one of the supported kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

/// A borrowed view of a field value, what leaf predicates consume
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Text(&'a str),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        self.as_value_ref().kind()
    }

    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Text(s) => ValueRef::Text(s),
            Self::Int32(v) => ValueRef::Int32(*v),
            Self::Int64(v) => ValueRef::Int64(*v),
            Self::Float32(v) => ValueRef::Float32(*v),
            Self::Float64(v) => ValueRef::Float64(*v),
        }
    }

    /// Convert a JSON value, interpreting it as `kind`.
    ///
    /// Integers must fit the target width; floats accept integral JSON numbers.
    pub fn from_json(value: &serde_json::Value, kind: ValueKind) -> Option<Self> {
        match kind {
            ValueKind::Text => value.as_str().map(|s| Self::Text(s.to_string())),
            ValueKind::Int32 => value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Self::Int32),
            ValueKind::Int64 => value.as_i64().map(Self::Int64),
            ValueKind::Float32 => value.as_f64().map(|v| Self::Float32(v as f32)),
            ValueKind::Float64 => value.as_f64().map(Self::Float64),
            ValueKind::Unsupported => None,
        }
    }
}

impl ValueRef<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
        }
    }

    pub fn to_owned_value(&self) -> FieldValue {
        match *self {
            Self::Text(s) => FieldValue::Text(s.to_string()),
            Self::Int32(v) => FieldValue::Int32(v),
            Self::Int64(v) => FieldValue::Int64(v),
            Self::Float32(v) => FieldValue::Float32(v),
            Self::Float64(v) => FieldValue::Float64(v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for ValueRef<'_> {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for ValueRef<'_> {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f32> for ValueRef<'_> {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for ValueRef<'_> {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}
