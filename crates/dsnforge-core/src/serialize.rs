use std::fmt;

use crate::descriptor::RecordType;
use crate::error::SerializeError;
use crate::format::FormatRegistry;
use crate::value::Record;

/// One output line: `code,'value'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedLine {
    pub code: String,
    pub value: String,
}

impl SerializedLine {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }

    /// Section header line, which always carries an empty value.
    pub fn section(code: impl Into<String>) -> Self {
        Self::new(code, String::new())
    }
}

impl fmt::Display for SerializedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},'{}'", self.code, self.value)
    }
}

/// Serialization engine.
///
/// Stateless apart from its formatting rules, so one instance can serve any
/// number of records.
#[derive(Debug, Default)]
pub struct Serializer {
    registry: FormatRegistry,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Serialize `record` following the descriptor order of `record_type`.
    ///
    /// Internal fields (no external code) are skipped without being looked
    /// up. On error no line is returned for the record.
    pub fn serialize(
        &self,
        record: &Record,
        record_type: &RecordType,
    ) -> Result<Vec<SerializedLine>, SerializeError> {
        let mut lines = Vec::with_capacity(record_type.fields.len());

        for field in record_type.fields {
            let Some(code) = field.code else {
                continue;
            };

            let value = record
                .get(field.name)
                .ok_or(SerializeError::SchemaMismatch {
                    record_type: record_type.name,
                    field: field.name,
                    code,
                })?;

            let rule = self
                .registry
                .rule(field.kind)
                .ok_or(SerializeError::UnsupportedKind {
                    record_type: record_type.name,
                    code,
                    kind: field.kind,
                })?;

            let text = rule
                .format(value)
                .map_err(|err| SerializeError::InvalidValue {
                    record_type: record_type.name,
                    code,
                    reason: err.0,
                })?;

            lines.push(SerializedLine::new(code, text));
        }

        Ok(lines)
    }
}
