//! Reading field values out of record instances

use super::observable::Observable;
use super::value::FieldValue;
use crate::classify::ValueKind;
use std::collections::HashMap;
use std::sync::Arc;

/// What reading one field of a record produced
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRead {
    Value(FieldValue),
    /// An observable field currently holds nothing
    NoValue,
    /// The record has no such field
    Missing,
    /// The field holds something that is not a value of the expected kind
    Unreadable { found: String },
}

/// Access to a record instance's current field values.
///
/// Called once per registered field per validation call. For wrapped fields
/// the implementation must return one consistent snapshot of the container.
pub trait RecordAccess {
    fn read_field(&self, field: &str, kind: ValueKind, wrapped: bool) -> FieldRead;
}

/// One field of a [`DynamicRecord`]
#[derive(Debug, Clone)]
pub enum Slot {
    Plain(FieldValue),
    Wrapped(Arc<Observable<FieldValue>>),
}

/// A record instance built at runtime, field by field
#[derive(Debug, Clone, Default)]
pub struct DynamicRecord {
    fields: HashMap<String, Slot>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain field value
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields
            .insert(field.into(), Slot::Plain(value.into()));
        self
    }

    /// Attach a shared observable container
    pub fn with_observable(
        mut self,
        field: impl Into<String>,
        container: Arc<Observable<FieldValue>>,
    ) -> Self {
        self.fields.insert(field.into(), Slot::Wrapped(container));
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields
            .insert(field.into(), Slot::Plain(value.into()));
    }

    pub fn slot(&self, field: &str) -> Option<&Slot> {
        self.fields.get(field)
    }
}

impl RecordAccess for DynamicRecord {
    // The slot decides how to read; a plain slot on a wrapped field is read as is.
    fn read_field(&self, field: &str, _kind: ValueKind, _wrapped: bool) -> FieldRead {
        match self.fields.get(field) {
            Some(Slot::Plain(value)) => FieldRead::Value(value.clone()),
            Some(Slot::Wrapped(container)) => match container.get() {
                Some(value) => FieldRead::Value(value),
                None => FieldRead::NoValue,
            },
            None => FieldRead::Missing,
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// JSON objects as record instances. A wrapped field reads `null` as no value.
impl RecordAccess for serde_json::Value {
    fn read_field(&self, field: &str, kind: ValueKind, wrapped: bool) -> FieldRead {
        let Some(raw) = self.as_object().and_then(|obj| obj.get(field)) else {
            return FieldRead::Missing;
        };

        if raw.is_null() && wrapped {
            return FieldRead::NoValue;
        }

        match FieldValue::from_json(raw, kind) {
            Some(value) => FieldRead::Value(value),
            None => FieldRead::Unreadable {
                found: json_type_name(raw).to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dynamic_record_reads() {
        let speed = Arc::new(Observable::empty());
        let record = DynamicRecord::new()
            .with("age", 7)
            .with_observable("speed", Arc::clone(&speed));

        assert_eq!(
            record.read_field("age", ValueKind::Int32, false),
            FieldRead::Value(FieldValue::Int32(7))
        );
        assert_eq!(
            record.read_field("speed", ValueKind::Int64, true),
            FieldRead::NoValue
        );
        speed.set(FieldValue::Int64(12));
        assert_eq!(
            record.read_field("speed", ValueKind::Int64, true),
            FieldRead::Value(FieldValue::Int64(12))
        );
        assert_eq!(
            record.read_field("name", ValueKind::Text, false),
            FieldRead::Missing
        );
    }

    #[test]
    fn test_json_reads() {
        let instance = json!({ "name": "Ada", "speed": null, "age": "seven" });
        assert_eq!(
            instance.read_field("name", ValueKind::Text, false),
            FieldRead::Value(FieldValue::Text("Ada".into()))
        );
        assert_eq!(
            instance.read_field("speed", ValueKind::Int64, true),
            FieldRead::NoValue
        );
        assert_eq!(
            instance.read_field("age", ValueKind::Int32, false),
            FieldRead::Unreadable {
                found: "string".into()
            }
        );
        assert_eq!(
            instance.read_field("luck", ValueKind::Float32, false),
            FieldRead::Missing
        );
    }

    #[test]
    fn test_json_null_on_plain_field_is_unreadable() {
        let instance = json!({ "age": null });
        assert_eq!(
            instance.read_field("age", ValueKind::Int32, false),
            FieldRead::Unreadable {
                found: "null".into()
            }
        );
    }
}
