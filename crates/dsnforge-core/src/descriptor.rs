use std::fmt;

use serde::Serialize;

/// Formatting category of a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Date,
    OptionalDate,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Text,
        FieldKind::Integer,
        FieldKind::Float,
        FieldKind::Date,
        FieldKind::OptionalDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Date => "date",
            Self::OptionalDate => "optional_date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one field of a record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name used to look the value up in a [`crate::Record`].
    pub name: &'static str,
    /// External DSN code. `None` marks an internal field that is never emitted.
    pub code: Option<&'static str>,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, code: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            code: Some(code),
            kind,
        }
    }

    /// Descriptor for a linkage field kept out of the wire format.
    pub const fn internal(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            code: None,
            kind,
        }
    }

    pub fn is_emitted(&self) -> bool {
        self.code.is_some()
    }
}

/// A named, ordered field schema sharing one section code.
///
/// Field order is output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecordType {
    pub name: &'static str,
    /// Section header code written before each record of this type.
    pub section: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl RecordType {
    pub const fn new(
        name: &'static str,
        section: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            name,
            section,
            fields,
        }
    }

    /// Descriptors that carry an external code, in declaration order.
    pub fn emitted_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|field| field.is_emitted())
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_by_code(&self, code: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.code == Some(code))
    }
}
