//! Static DSN block schema and the builders that fill each block.
//!
//! Every block is a `const` [`RecordType`]; its builder draws one value per
//! emitted field from a [`ValueSource`] and returns a [`Record`] ready for the
//! serializer.

use chrono::{Months, NaiveDate};

use dsnforge_core::{FieldDescriptor, FieldKind, FieldValue, Record, RecordType};

use crate::errors::GenerationError;
use crate::source::{GeneratedValue, ValueSource, ValueSpec};

pub mod contract;
pub mod employer;
pub mod header;
pub mod individual;
pub mod pay;

pub use contract::{CONTRACT, build_contract};
pub use employer::{COMPANY, ESTABLISHMENT, build_company, build_establishment};
pub use header::{
    DECLARATION, SENDER, SENDER_CONTACT, TRANSMISSION, build_declaration, build_sender,
    build_sender_contact, build_transmission,
};
pub use individual::{INDIVIDUAL, build_individual};
pub use pay::{ACTIVITY, PAYMENT, REMUNERATION, build_activity, build_payment, build_remuneration};

/// Every DSN block this crate knows, in declaration order.
pub const RECORD_TYPES: &[&RecordType] = &[
    &TRANSMISSION,
    &SENDER,
    &SENDER_CONTACT,
    &DECLARATION,
    &COMPANY,
    &ESTABLISHMENT,
    &INDIVIDUAL,
    &CONTRACT,
    &PAYMENT,
    &REMUNERATION,
    &ACTIVITY,
];

/// Internal field linking the per-individual blocks together.
pub const INDIVIDUAL_REF: FieldDescriptor =
    FieldDescriptor::internal("individual_ref", FieldKind::Integer);

pub(crate) const CODES_01_03: &[&str] = &["01", "02", "03"];
pub(crate) const CODES_01_10: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10",
];
/// Four digits followed by an uppercase letter (APEN/APET).
pub(crate) const ACTIVITY_CODE_PATTERN: &str = "[0-9]{4}[A-Z]";

pub fn record_type(section: &str) -> Option<&'static RecordType> {
    RECORD_TYPES
        .iter()
        .copied()
        .find(|record_type| record_type.section == section)
}

/// Dates shared by every builder of one run.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext {
    /// "Today" for the declaration; ranges relative to now use this date.
    pub reference_date: NaiveDate,
    earliest_date: NaiveDate,
    month_before: NaiveDate,
}

impl BuildContext {
    pub fn new(reference_date: NaiveDate) -> Result<Self, GenerationError> {
        let earliest_date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
        if reference_date < earliest_date {
            return Err(GenerationError::InvalidConfig(format!(
                "reference date {reference_date} is before {earliest_date}"
            )));
        }
        // Pay periods may end up to a month after the reference date.
        let latest_date = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);
        let fits = reference_date
            .checked_add_months(Months::new(1))
            .is_some_and(|date| date <= latest_date);
        if !fits {
            return Err(GenerationError::InvalidConfig(format!(
                "reference date {reference_date} leaves no room before {latest_date}"
            )));
        }
        let month_before = reference_date
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| {
                GenerationError::InvalidConfig(format!(
                    "reference date {reference_date} is out of range"
                ))
            })?;
        Ok(Self {
            reference_date,
            earliest_date,
            month_before,
        })
    }

    /// Any date up to the reference date.
    pub fn any_date(&self) -> ValueSpec<'static> {
        ValueSpec::DateRange(self.earliest_date, self.reference_date)
    }

    /// A date within the month preceding the reference date.
    pub fn last_month(&self) -> ValueSpec<'static> {
        ValueSpec::DateRange(self.month_before, self.reference_date)
    }
}

/// Draw one value per `(field, spec)` pair into a fresh record.
pub(crate) fn draw_record(
    source: &mut dyn ValueSource,
    record_type: &RecordType,
    draws: &[(&'static str, ValueSpec<'_>)],
) -> Result<Record, GenerationError> {
    let mut record = Record::with_capacity(record_type.fields.len());
    for (name, spec) in draws {
        let field = record_type.field(name).ok_or_else(|| {
            GenerationError::InvalidConfig(format!(
                "record type '{}' has no field '{name}'",
                record_type.name
            ))
        })?;
        let value = source.next_value(spec)?;
        record.insert(*name, to_field_value(field, spec, value)?);
    }
    Ok(record)
}

fn to_field_value(
    field: &FieldDescriptor,
    spec: &ValueSpec<'_>,
    value: GeneratedValue,
) -> Result<FieldValue, GenerationError> {
    let converted = match (field.kind, value) {
        (FieldKind::Text, GeneratedValue::Text(text)) => FieldValue::Text(text),
        (FieldKind::Integer, GeneratedValue::Int(number)) => FieldValue::Integer(number),
        (FieldKind::Float, GeneratedValue::Float(number)) => FieldValue::Float(number),
        (FieldKind::Date, GeneratedValue::Date(date)) => FieldValue::Date(date),
        (FieldKind::OptionalDate, GeneratedValue::Date(date)) => {
            FieldValue::OptionalDate(Some(date))
        }
        (kind, other) => {
            return Err(GenerationError::UnexpectedValue {
                spec: spec.to_string(),
                expected: kind.as_str(),
                found: other.type_name(),
            });
        }
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use dsnforge_core::validate_record_type;

    use super::*;

    #[test]
    fn every_record_type_is_consistent() {
        for record_type in RECORD_TYPES {
            validate_record_type(record_type)
                .unwrap_or_else(|err| panic!("{}: {err}", record_type.name));
            assert!(
                record_type
                    .emitted_fields()
                    .all(|field| field.code.is_some_and(|code| code.starts_with(record_type.section))),
                "{} has a code outside its section",
                record_type.name
            );
        }
    }

    #[test]
    fn sections_are_unique() {
        for expected in RECORD_TYPES {
            assert_eq!(record_type(expected.section), Some(*expected));
        }
    }

    #[test]
    fn reference_date_bounds_the_context() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let ctx = BuildContext::new(date).unwrap();
        assert_eq!(
            ctx.last_month(),
            ValueSpec::DateRange(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), date)
        );
        assert!(BuildContext::new(NaiveDate::from_ymd_opt(1850, 1, 1).unwrap()).is_err());
    }

    #[test]
    fn reference_date_keeps_four_digit_years() {
        for (year, month, day) in [(10000, 1, 1), (9999, 12, 31), (9999, 12, 1), (-1, 1, 1)] {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            assert!(
                matches!(BuildContext::new(date), Err(GenerationError::InvalidConfig(_))),
                "{date} accepted"
            );
        }
        assert!(BuildContext::new(NaiveDate::from_ymd_opt(9999, 11, 30).unwrap()).is_ok());
    }
}
