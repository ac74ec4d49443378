use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::NULL_LITERAL;
use crate::descriptor::FieldKind;
use crate::error::FormatError;
use crate::value::FieldValue;

/// Formatting rule for one field kind.
pub trait FieldFormatter: Send + Sync {
    fn kind(&self) -> FieldKind;

    fn format(&self, value: &FieldValue) -> Result<String, FormatError>;
}

/// Formatting rules keyed by kind.
pub struct FormatRegistry {
    rules: HashMap<FieldKind, Box<dyn FieldFormatter>>,
}

impl FormatRegistry {
    /// Registry with the built-in rule for every [`FieldKind`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TextRule));
        registry.register(Box::new(IntegerRule));
        registry.register(Box::new(FloatRule));
        registry.register(Box::new(DateRule));
        registry.register(Box::new(OptionalDateRule));
        registry
    }

    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule, replacing any previous rule for the same kind.
    pub fn register(&mut self, rule: Box<dyn FieldFormatter>) {
        self.rules.insert(rule.kind(), rule);
    }

    pub fn rule(&self, kind: FieldKind) -> Option<&dyn FieldFormatter> {
        self.rules.get(&kind).map(|rule| rule.as_ref())
    }

    pub fn supports(&self, kind: FieldKind) -> bool {
        self.rules.contains_key(&kind)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<FieldKind> = self.rules.keys().copied().collect();
        kinds.sort();
        f.debug_struct("FormatRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

/// Years that fit the four-digit `YYYY` slot.
pub const DATE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Render a date as `YYYYMMDD` with every component zero-padded.
///
/// Fails for years outside [`DATE_YEARS`], which have no eight-digit form.
pub fn format_date(date: NaiveDate) -> Result<String, FormatError> {
    if !DATE_YEARS.contains(&date.year()) {
        return Err(FormatError(format!(
            "date {date} is outside years {}..={}",
            DATE_YEARS.start(),
            DATE_YEARS.end()
        )));
    }
    Ok(format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

fn mismatch(expected: FieldKind, value: &FieldValue) -> FormatError {
    FormatError(format!(
        "expected {expected} value, found {}",
        value.kind()
    ))
}

struct TextRule;

impl FieldFormatter for TextRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    // Quotes are passed through unescaped; the line format has no escape syntax.
    fn format(&self, value: &FieldValue) -> Result<String, FormatError> {
        match value {
            FieldValue::Text(text) => Ok(text.clone()),
            other => Err(mismatch(FieldKind::Text, other)),
        }
    }
}

struct IntegerRule;

impl FieldFormatter for IntegerRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Integer
    }

    fn format(&self, value: &FieldValue) -> Result<String, FormatError> {
        match value {
            FieldValue::Integer(number) => Ok(number.to_string()),
            other => Err(mismatch(FieldKind::Integer, other)),
        }
    }
}

struct FloatRule;

impl FieldFormatter for FloatRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Float
    }

    fn format(&self, value: &FieldValue) -> Result<String, FormatError> {
        match value {
            FieldValue::Float(number) if number.is_finite() => Ok(format!("{number:.6}")),
            FieldValue::Float(number) => Err(FormatError(format!(
                "non-finite float {number} has no textual form"
            ))),
            other => Err(mismatch(FieldKind::Float, other)),
        }
    }
}

struct DateRule;

impl FieldFormatter for DateRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn format(&self, value: &FieldValue) -> Result<String, FormatError> {
        match value {
            FieldValue::Date(date) => format_date(*date),
            other => Err(mismatch(FieldKind::Date, other)),
        }
    }
}

struct OptionalDateRule;

impl FieldFormatter for OptionalDateRule {
    fn kind(&self) -> FieldKind {
        FieldKind::OptionalDate
    }

    fn format(&self, value: &FieldValue) -> Result<String, FormatError> {
        match value {
            FieldValue::OptionalDate(Some(date)) | FieldValue::Date(date) => format_date(*date),
            FieldValue::OptionalDate(None) => Ok(NULL_LITERAL.to_string()),
            other => Err(mismatch(FieldKind::OptionalDate, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn float_keeps_six_fraction_digits() {
        let registry = FormatRegistry::new();
        let rule = registry.rule(FieldKind::Float).expect("float rule");
        assert_eq!(rule.format(&FieldValue::Float(3.5)).unwrap(), "3.500000");
        assert_eq!(rule.format(&FieldValue::Float(0.0)).unwrap(), "0.000000");
        assert_eq!(rule.format(&FieldValue::Float(-12.25)).unwrap(), "-12.250000");
        assert_eq!(
            rule.format(&FieldValue::Float(1234567.0)).unwrap(),
            "1234567.000000"
        );
    }

    #[test]
    fn float_rejects_non_finite() {
        let rule = FloatRule;
        assert!(rule.format(&FieldValue::Float(f64::NAN)).is_err());
        assert!(rule.format(&FieldValue::Float(f64::INFINITY)).is_err());
    }

    #[test]
    fn integer_has_no_padding_or_separators() {
        let rule = IntegerRule;
        assert_eq!(rule.format(&FieldValue::Integer(0)).unwrap(), "0");
        assert_eq!(rule.format(&FieldValue::Integer(1200)).unwrap(), "1200");
        assert_eq!(rule.format(&FieldValue::Integer(-42)).unwrap(), "-42");
    }

    #[test]
    fn date_is_compact_and_padded() {
        assert_eq!(format_date(date(2024, 3, 7)).unwrap(), "20240307");
        assert_eq!(format_date(date(1, 1, 1)).unwrap(), "00010101");
        assert_eq!(format_date(date(0, 1, 1)).unwrap(), "00000101");
        assert_eq!(format_date(date(9999, 12, 31)).unwrap(), "99991231");
    }

    #[test]
    fn date_rules_reject_years_without_four_digits() {
        for out_of_range in [date(10000, 1, 1), date(-1, 1, 1)] {
            assert!(format_date(out_of_range).is_err());
            assert!(DateRule.format(&FieldValue::Date(out_of_range)).is_err());
            assert!(
                OptionalDateRule
                    .format(&FieldValue::OptionalDate(Some(out_of_range)))
                    .is_err()
            );
        }
    }

    #[test]
    fn optional_date_renders_null_when_absent() {
        let rule = OptionalDateRule;
        assert_eq!(rule.format(&FieldValue::OptionalDate(None)).unwrap(), "NULL");
        assert_eq!(
            rule.format(&FieldValue::OptionalDate(Some(date(2024, 3, 7))))
                .unwrap(),
            DateRule.format(&FieldValue::Date(date(2024, 3, 7))).unwrap()
        );
    }

    #[test]
    fn rules_reject_other_variants() {
        let err = DateRule
            .format(&FieldValue::Text("2024-03-07".to_string()))
            .unwrap_err();
        assert_eq!(err.0, "expected date value, found text");
        assert!(DateRule.format(&FieldValue::OptionalDate(None)).is_err());
        assert!(TextRule.format(&FieldValue::Integer(1)).is_err());
    }

    #[test]
    fn text_is_verbatim() {
        let value = FieldValue::Text("L'Oréal, S.A.".to_string());
        assert_eq!(TextRule.format(&value).unwrap(), "L'Oréal, S.A.");
    }

    #[test]
    fn default_registry_covers_every_kind() {
        let registry = FormatRegistry::default();
        for kind in FieldKind::ALL {
            assert!(registry.supports(kind), "missing rule for {kind}");
        }
        assert!(!FormatRegistry::empty().supports(FieldKind::Text));
    }
}
