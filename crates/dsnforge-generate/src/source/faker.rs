use std::collections::HashMap;

use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_regex::Regex as RandRegex;

use crate::errors::GenerationError;
use crate::source::locales::LocaleKey;
use crate::source::{FakeKind, GeneratedValue, ValueSource, ValueSpec};

const DEFAULT_MAX_REPEAT: u32 = 32;
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

macro_rules! fake_in_locale {
    ($locale:ident, $kind:expr, $rng:expr) => {{
        use fake::faker::address::$locale::{
            CityName, CountryCode, CountryName, StreetName, ZipCode,
        };
        use fake::faker::company::$locale::{Buzzword, CompanyName};
        use fake::faker::internet::$locale::SafeEmail;
        use fake::faker::job::$locale::Title;
        use fake::faker::lorem::$locale::Word;
        use fake::faker::name::$locale::{FirstName, LastName, Name};
        use fake::faker::phone_number::$locale::PhoneNumber;

        let rng = $rng;
        let value: String = match $kind {
            FakeKind::FirstName => FirstName().fake_with_rng(rng),
            FakeKind::LastName => LastName().fake_with_rng(rng),
            FakeKind::FullName => Name().fake_with_rng(rng),
            FakeKind::CompanyName => CompanyName().fake_with_rng(rng),
            FakeKind::Buzzword => Buzzword().fake_with_rng(rng),
            FakeKind::Street => StreetName().fake_with_rng(rng),
            FakeKind::City => CityName().fake_with_rng(rng),
            FakeKind::Zip => ZipCode().fake_with_rng(rng),
            FakeKind::CountryCode => CountryCode().fake_with_rng(rng),
            FakeKind::CountryName => CountryName().fake_with_rng(rng),
            FakeKind::Email => SafeEmail().fake_with_rng(rng),
            FakeKind::Phone => PhoneNumber().fake_with_rng(rng),
            FakeKind::Word => Word().fake_with_rng(rng),
            FakeKind::JobTitle => Title().fake_with_rng(rng),
        };
        value
    }};
}

/// Construction options for [`FakerSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceOptions {
    /// Fixed seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub locale: LocaleKey,
}

/// Seeded value source backed by `fake` data tables.
pub struct FakerSource {
    rng: ChaCha8Rng,
    seed: u64,
    locale: LocaleKey,
    patterns: HashMap<String, RandRegex>,
}

impl FakerSource {
    pub fn new(options: SourceOptions) -> Self {
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            locale: options.locale,
            patterns: HashMap::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SourceOptions {
            seed: Some(seed),
            ..SourceOptions::default()
        })
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }

    fn pattern(&mut self, pattern: &str) -> Result<String, GenerationError> {
        if !self.patterns.contains_key(pattern) {
            let regex = RandRegex::compile(pattern, DEFAULT_MAX_REPEAT).map_err(|err| {
                GenerationError::InvalidConfig(format!("invalid pattern '{pattern}': {err}"))
            })?;
            self.patterns.insert(pattern.to_string(), regex);
        }
        let regex = self.patterns.get(pattern).ok_or_else(|| {
            GenerationError::InvalidConfig(format!("pattern '{pattern}' not compiled"))
        })?;
        Ok(self.rng.sample::<String, _>(regex))
    }

    fn fake(&mut self, kind: FakeKind) -> String {
        match self.locale {
            LocaleKey::EnUs => fake_in_locale!(en, kind, &mut self.rng),
            LocaleKey::FrFr => fake_in_locale!(fr_fr, kind, &mut self.rng),
        }
    }
}

impl ValueSource for FakerSource {
    fn next_value(&mut self, spec: &ValueSpec<'_>) -> Result<GeneratedValue, GenerationError> {
        let value = match *spec {
            ValueSpec::Digits(len) => {
                let digits = (0..len)
                    .map(|_| char::from(b'0' + self.rng.random_range(0..10_u8)))
                    .collect();
                GeneratedValue::Text(digits)
            }
            ValueSpec::Letters(len) => {
                let letters = (0..len)
                    .map(|_| char::from(LETTERS[self.rng.random_range(0..LETTERS.len())]))
                    .collect();
                GeneratedValue::Text(letters)
            }
            ValueSpec::Pattern(pattern) => GeneratedValue::Text(self.pattern(pattern)?),
            ValueSpec::OneOf(values) => {
                if values.is_empty() {
                    return Err(GenerationError::InvalidConfig(
                        "one_of requires at least one value".to_string(),
                    ));
                }
                let idx = self.rng.random_range(0..values.len());
                GeneratedValue::Text(values[idx].to_string())
            }
            ValueSpec::IntRange(min, max) => {
                if min > max {
                    return Err(GenerationError::InvalidConfig(format!(
                        "int_range min must be <= max ({min} > {max})"
                    )));
                }
                GeneratedValue::Int(self.rng.random_range(min..=max))
            }
            ValueSpec::FloatRange(min, max) => {
                if !(min.is_finite() && max.is_finite()) || min > max {
                    return Err(GenerationError::InvalidConfig(format!(
                        "float_range requires finite min <= max ({min}, {max})"
                    )));
                }
                GeneratedValue::Float(self.rng.random_range(min..=max))
            }
            ValueSpec::DateRange(min, max) => {
                if min > max {
                    return Err(GenerationError::InvalidConfig(format!(
                        "date_range min must be <= max ({min} > {max})"
                    )));
                }
                let span = (max - min).num_days();
                let offset = self.rng.random_range(0..=span);
                GeneratedValue::Date(min + chrono::Duration::days(offset))
            }
            ValueSpec::Chance(probability) => {
                if !(0.0..=1.0).contains(&probability) {
                    return Err(GenerationError::InvalidConfig(format!(
                        "chance probability must be within [0, 1] ({probability})"
                    )));
                }
                GeneratedValue::Bool(self.rng.random_bool(probability))
            }
            ValueSpec::Uuid => {
                let bytes: [u8; 16] = self.rng.random();
                let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
                GeneratedValue::Text(uuid.to_string())
            }
            ValueSpec::Fake(kind) => GeneratedValue::Text(self.fake(kind)),
        };
        Ok(value)
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}
