//! Runtime side of validation
//!
//! Values, observable containers, record access and the outcome types used
//! when a synthesized validator is evaluated against a record instance.

mod access;
mod observable;
mod outcome;
mod value;

pub use access::{DynamicRecord, FieldRead, RecordAccess, Slot};
pub use observable::Observable;
pub use outcome::{ValidationFault, Validity};
pub use value::{FieldValue, ValueRef};
