use thiserror::Error;

use crate::descriptor::FieldKind;

/// Errors raised while checking a record type declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// Two descriptors of the same record type share an external code.
    #[error("duplicate field code '{code}' in record type '{record_type}'")]
    DuplicateCode {
        record_type: &'static str,
        code: &'static str,
    },
    /// Two descriptors of the same record type share a field name.
    #[error("duplicate field name '{field}' in record type '{record_type}'")]
    DuplicateField {
        record_type: &'static str,
        field: &'static str,
    },
}

/// Errors raised by the serialization engine.
///
/// All variants are fatal for the record being serialized: the engine never
/// returns the lines it produced before the failure.
#[derive(Debug, Error, PartialEq)]
pub enum SerializeError {
    /// A descriptor references a field absent from the record.
    #[error("record type '{record_type}' is missing field '{field}' ({code})")]
    SchemaMismatch {
        record_type: &'static str,
        field: &'static str,
        code: &'static str,
    },
    /// A descriptor declares a kind with no registered formatting rule.
    #[error("no formatting rule for kind '{kind}' ({record_type} {code})")]
    UnsupportedKind {
        record_type: &'static str,
        code: &'static str,
        kind: FieldKind,
    },
    /// The value cannot be rendered under the descriptor's kind.
    #[error("invalid value for {record_type} {code}: {reason}")]
    InvalidValue {
        record_type: &'static str,
        code: &'static str,
        reason: String,
    },
}

/// Rejection reported by a single formatting rule.
///
/// The serializer wraps it into [`SerializeError::InvalidValue`] with the
/// record type and field code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FormatError(pub String);
