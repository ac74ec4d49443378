//! Value generation service consumed by the record builders.
//!
//! Builders ask for a value of a semantic kind ([`ValueSpec`]) and never see
//! how randomness is produced.

mod faker;
mod locales;

pub use faker::{FakerSource, SourceOptions};
pub use locales::LocaleKey;

use std::fmt;

use chrono::NaiveDate;

use crate::errors::GenerationError;

/// Value produced by a [`ValueSource`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl GeneratedValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            GeneratedValue::Bool(_) => "bool",
            GeneratedValue::Int(_) => "int",
            GeneratedValue::Float(_) => "float",
            GeneratedValue::Text(_) => "text",
            GeneratedValue::Date(_) => "date",
        }
    }
}

/// Faker-backed text kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakeKind {
    FirstName,
    LastName,
    FullName,
    CompanyName,
    Buzzword,
    Street,
    City,
    Zip,
    CountryCode,
    CountryName,
    Email,
    Phone,
    Word,
    JobTitle,
}

/// Semantic request passed to [`ValueSource::next_value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueSpec<'a> {
    /// Text of exactly `n` ASCII digits.
    Digits(usize),
    /// Text of exactly `n` ASCII letters.
    Letters(usize),
    /// Text matching a regular expression.
    Pattern(&'a str),
    /// One of a closed set of text values.
    OneOf(&'a [&'a str]),
    /// Integer in `min..=max`.
    IntRange(i64, i64),
    /// Float in `min..=max`.
    FloatRange(f64, f64),
    /// Date in `min..=max`.
    DateRange(NaiveDate, NaiveDate),
    /// `true` with the given probability.
    Chance(f64),
    /// Random (v4) UUID text.
    Uuid,
    Fake(FakeKind),
}

impl fmt::Display for ValueSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSpec::Digits(n) => write!(f, "digits({n})"),
            ValueSpec::Letters(n) => write!(f, "letters({n})"),
            ValueSpec::Pattern(pattern) => write!(f, "pattern({pattern})"),
            ValueSpec::OneOf(values) => write!(f, "one_of({})", values.join("|")),
            ValueSpec::IntRange(min, max) => write!(f, "int_range({min}..={max})"),
            ValueSpec::FloatRange(min, max) => write!(f, "float_range({min}..={max})"),
            ValueSpec::DateRange(min, max) => write!(f, "date_range({min}..={max})"),
            ValueSpec::Chance(p) => write!(f, "chance({p})"),
            ValueSpec::Uuid => f.write_str("uuid"),
            ValueSpec::Fake(kind) => write!(f, "fake({kind:?})"),
        }
    }
}

/// Pluggable value-generation service.
pub trait ValueSource {
    fn next_value(&mut self, spec: &ValueSpec<'_>) -> Result<GeneratedValue, GenerationError>;

    /// Seed that reproduces this source's stream, when known.
    fn seed(&self) -> Option<u64> {
        None
    }

    fn text(&mut self, spec: &ValueSpec<'_>) -> Result<String, GenerationError> {
        match self.next_value(spec)? {
            GeneratedValue::Text(value) => Ok(value),
            other => Err(unexpected(spec, "text", &other)),
        }
    }

    fn int(&mut self, spec: &ValueSpec<'_>) -> Result<i64, GenerationError> {
        match self.next_value(spec)? {
            GeneratedValue::Int(value) => Ok(value),
            other => Err(unexpected(spec, "int", &other)),
        }
    }

    fn float(&mut self, spec: &ValueSpec<'_>) -> Result<f64, GenerationError> {
        match self.next_value(spec)? {
            GeneratedValue::Float(value) => Ok(value),
            other => Err(unexpected(spec, "float", &other)),
        }
    }

    fn date(&mut self, spec: &ValueSpec<'_>) -> Result<NaiveDate, GenerationError> {
        match self.next_value(spec)? {
            GeneratedValue::Date(value) => Ok(value),
            other => Err(unexpected(spec, "date", &other)),
        }
    }

    fn chance(&mut self, probability: f64) -> Result<bool, GenerationError> {
        let spec = ValueSpec::Chance(probability);
        match self.next_value(&spec)? {
            GeneratedValue::Bool(value) => Ok(value),
            other => Err(unexpected(&spec, "bool", &other)),
        }
    }
}

pub(crate) fn unexpected(
    spec: &ValueSpec<'_>,
    expected: &'static str,
    found: &GeneratedValue,
) -> GenerationError {
    GenerationError::UnexpectedValue {
        spec: spec.to_string(),
        expected,
        found: found.type_name(),
    }
}
