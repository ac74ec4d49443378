use chrono::NaiveDate;

use dsnforge_generate::{
    FakeKind, FakerSource, GeneratedValue, GenerationError, LocaleKey, SourceOptions, ValueSource,
    ValueSpec,
};

const CODES: &[&str] = &["012", "013", "017", "018"];

#[test]
fn digits_and_letters_have_requested_length() {
    let mut source = FakerSource::seeded(10);
    for len in [0, 1, 5, 14] {
        let digits = source.text(&ValueSpec::Digits(len)).unwrap();
        assert_eq!(digits.len(), len);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));

        let letters = source.text(&ValueSpec::Letters(len)).unwrap();
        assert_eq!(letters.len(), len);
        assert!(letters.chars().all(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn ranges_are_inclusive_and_respected() {
    let mut source = FakerSource::seeded(20);
    let from = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    for _ in 0..500 {
        let int = source.int(&ValueSpec::IntRange(-3, 3)).unwrap();
        assert!((-3..=3).contains(&int));

        let float = source.float(&ValueSpec::FloatRange(1.0, 10.0)).unwrap();
        assert!((1.0..=10.0).contains(&float));

        let date = source.date(&ValueSpec::DateRange(from, to)).unwrap();
        assert!((from..=to).contains(&date));

        let code = source.text(&ValueSpec::OneOf(CODES)).unwrap();
        assert!(CODES.contains(&code.as_str()));
    }
    assert_eq!(source.int(&ValueSpec::IntRange(7, 7)).unwrap(), 7);
}

#[test]
fn pattern_output_matches_shape() {
    let mut source = FakerSource::seeded(30);
    for _ in 0..50 {
        let version = source
            .text(&ValueSpec::Pattern(r"[1-9]\.[0-9]{1,2}\.[0-9]{1,2}"))
            .unwrap();
        let parts: Vec<&str> = version.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|part| part.chars().all(|c| c.is_ascii_digit())));
    }
}

#[test]
fn uuid_is_well_formed() {
    let mut source = FakerSource::seeded(40);
    let value = source.text(&ValueSpec::Uuid).unwrap();
    let parsed = uuid::Uuid::parse_str(&value).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn fake_values_exist_in_both_locales() {
    for locale in [LocaleKey::EnUs, LocaleKey::FrFr] {
        let mut source = FakerSource::new(SourceOptions {
            seed: Some(50),
            locale,
        });
        for kind in [
            FakeKind::FirstName,
            FakeKind::LastName,
            FakeKind::CompanyName,
            FakeKind::City,
            FakeKind::Email,
            FakeKind::JobTitle,
        ] {
            let value = source.text(&ValueSpec::Fake(kind)).unwrap();
            assert!(!value.is_empty(), "{locale} {kind:?}");
        }
    }
}

#[test]
fn invalid_constraints_are_rejected() {
    let mut source = FakerSource::seeded(60);
    let later = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let earlier = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for spec in [
        ValueSpec::IntRange(5, 1),
        ValueSpec::FloatRange(2.0, 1.0),
        ValueSpec::FloatRange(f64::NAN, 1.0),
        ValueSpec::DateRange(later, earlier),
        ValueSpec::OneOf(&[]),
        ValueSpec::Chance(1.5),
        ValueSpec::Pattern("[unclosed"),
    ] {
        assert!(
            matches!(source.next_value(&spec), Err(GenerationError::InvalidConfig(_))),
            "{spec} should be rejected"
        );
    }
}

#[test]
fn typed_helper_reports_unexpected_variant() {
    let mut source = FakerSource::seeded(70);
    let err = source.int(&ValueSpec::Digits(3)).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::UnexpectedValue {
            expected: "int",
            found: "text",
            ..
        }
    ));
}

#[test]
fn chance_extremes_are_certain() {
    let mut source = FakerSource::seeded(80);
    assert!(source.chance(1.0).unwrap());
    assert!(!source.chance(0.0).unwrap());
    assert!(matches!(
        source.next_value(&ValueSpec::Chance(0.5)).unwrap(),
        GeneratedValue::Bool(_)
    ));
}
