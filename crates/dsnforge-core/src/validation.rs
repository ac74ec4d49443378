use std::collections::BTreeSet;

use crate::descriptor::RecordType;
use crate::error::DescriptorError;

/// Validate internal consistency of a record type declaration.
///
/// This checks:
/// - field names are unique
/// - external codes are unique (internal fields are ignored)
pub fn validate_record_type(record_type: &RecordType) -> Result<(), DescriptorError> {
    let mut names = BTreeSet::new();
    let mut codes = BTreeSet::new();

    for field in record_type.fields {
        if !names.insert(field.name) {
            return Err(DescriptorError::DuplicateField {
                record_type: record_type.name,
                field: field.name,
            });
        }

        if let Some(code) = field.code
            && !codes.insert(code)
        {
            return Err(DescriptorError::DuplicateCode {
                record_type: record_type.name,
                code,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, FieldKind};

    #[test]
    fn accepts_internal_fields_without_codes() {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("number", "S21.G00.40.009", FieldKind::Text),
            FieldDescriptor::internal("owner", FieldKind::Text),
            FieldDescriptor::internal("batch", FieldKind::Integer),
        ];
        let record_type = RecordType::new("contract", "S21.G00.40", FIELDS);
        assert_eq!(validate_record_type(&record_type), Ok(()));
    }

    #[test]
    fn rejects_duplicate_codes() {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("start", "S21.G00.51.001", FieldKind::Date),
            FieldDescriptor::new("end", "S21.G00.51.001", FieldKind::Date),
        ];
        let record_type = RecordType::new("remuneration", "S21.G00.51", FIELDS);
        assert_eq!(
            validate_record_type(&record_type),
            Err(DescriptorError::DuplicateCode {
                record_type: "remuneration",
                code: "S21.G00.51.001",
            })
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("city", "S10.G00.01.006", FieldKind::Text),
            FieldDescriptor::new("city", "S10.G00.01.007", FieldKind::Text),
        ];
        let record_type = RecordType::new("sender", "S10.G00.01", FIELDS);
        assert!(matches!(
            validate_record_type(&record_type),
            Err(DescriptorError::DuplicateField { field: "city", .. })
        ));
    }
}
