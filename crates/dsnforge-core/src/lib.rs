//! Core contracts for dsnforge.
//!
//! This crate defines the field descriptor model for DSN record types and the
//! serialization engine that turns a record into ordered `CODE,'value'` lines.
//! It has no knowledge of how values are generated or where lines are written.

pub mod descriptor;
pub mod error;
pub mod format;
pub mod serialize;
pub mod validation;
pub mod value;

pub use descriptor::{FieldDescriptor, FieldKind, RecordType};
pub use error::{DescriptorError, FormatError, SerializeError};
pub use format::{FieldFormatter, FormatRegistry, format_date};
pub use serialize::{SerializedLine, Serializer};
pub use validation::validate_record_type;
pub use value::{FieldValue, Record};

/// Literal rendered for an absent optional value.
pub const NULL_LITERAL: &str = "NULL";
