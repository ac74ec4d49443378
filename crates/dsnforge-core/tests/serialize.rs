use chrono::NaiveDate;

use dsnforge_core::{
    FieldDescriptor, FieldFormatter, FieldKind, FieldValue, FormatError, FormatRegistry, Record,
    RecordType, SerializeError, SerializedLine, Serializer,
};

const PAY_PERIOD_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("zeta_start", "S21.G00.51.001", FieldKind::Date),
    FieldDescriptor::new("alpha_end", "S21.G00.51.002", FieldKind::OptionalDate),
    FieldDescriptor::internal("contract_ref", FieldKind::Text),
    FieldDescriptor::new("middle_number", "S21.G00.51.010", FieldKind::Text),
    FieldDescriptor::new("beta_hours", "S21.G00.51.012", FieldKind::Integer),
    FieldDescriptor::new("amount", "S21.G00.51.013", FieldKind::Float),
];

const PAY_PERIOD: RecordType = RecordType::new("pay_period", "S21.G00.51", PAY_PERIOD_FIELDS);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn pay_period_record() -> Record {
    Record::new()
        .with("zeta_start", date(2024, 3, 1))
        .with("alpha_end", Some(date(2024, 3, 31)))
        .with("contract_ref", "individual-7")
        .with("middle_number", "00042")
        .with("beta_hours", 151_i64)
        .with("amount", 2500.5)
}

#[test]
fn lines_follow_descriptor_order() {
    let lines = Serializer::new()
        .serialize(&pay_period_record(), &PAY_PERIOD)
        .expect("serialize");

    let codes: Vec<&str> = lines.iter().map(|line| line.code.as_str()).collect();
    assert_eq!(
        codes,
        [
            "S21.G00.51.001",
            "S21.G00.51.002",
            "S21.G00.51.010",
            "S21.G00.51.012",
            "S21.G00.51.013",
        ]
    );

    let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "S21.G00.51.001,'20240301'",
            "S21.G00.51.002,'20240331'",
            "S21.G00.51.010,'00042'",
            "S21.G00.51.012,'151'",
            "S21.G00.51.013,'2500.500000'",
        ]
    );
}

#[test]
fn internal_fields_are_not_emitted_and_may_be_absent() {
    let mut record = Record::new()
        .with("zeta_start", date(2024, 3, 1))
        .with("alpha_end", None::<NaiveDate>)
        .with("middle_number", "1")
        .with("beta_hours", 0_i64)
        .with("amount", 0.0);

    let without_ref = Serializer::new()
        .serialize(&record, &PAY_PERIOD)
        .expect("serialize without internal field");
    record.insert("contract_ref", "individual-1");
    let with_ref = Serializer::new()
        .serialize(&record, &PAY_PERIOD)
        .expect("serialize with internal field");

    assert_eq!(without_ref, with_ref);
    assert_eq!(with_ref.len(), 5);
    assert_eq!(with_ref[1], SerializedLine::new("S21.G00.51.002", "NULL"));
    assert_eq!(with_ref[4].value, "0.000000");
}

#[test]
fn missing_field_is_a_schema_mismatch() {
    let record = Record::new()
        .with("zeta_start", date(2024, 3, 1))
        .with("alpha_end", None::<NaiveDate>)
        .with("beta_hours", 0_i64)
        .with("amount", 0.0);

    let err = Serializer::new()
        .serialize(&record, &PAY_PERIOD)
        .expect_err("missing field");
    assert_eq!(
        err,
        SerializeError::SchemaMismatch {
            record_type: "pay_period",
            field: "middle_number",
            code: "S21.G00.51.010",
        }
    );
    assert!(err.to_string().contains("S21.G00.51.010"));
}

#[test]
fn kind_without_rule_is_rejected_without_output() {
    let mut registry = FormatRegistry::empty();
    registry.register(Box::new(UpperText));
    let serializer = Serializer::with_registry(registry);

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("name", "S10.G00.02.002", FieldKind::Text),
        FieldDescriptor::new("since", "S10.G00.02.099", FieldKind::Date),
    ];
    const CONTACT: RecordType = RecordType::new("contact", "S10.G00.02", FIELDS);
    let record = Record::new()
        .with("name", "dupont")
        .with("since", date(2020, 1, 2));

    let result = serializer.serialize(&record, &CONTACT);
    assert_eq!(
        result,
        Err(SerializeError::UnsupportedKind {
            record_type: "contact",
            code: "S10.G00.02.099",
            kind: FieldKind::Date,
        })
    );
}

#[test]
fn custom_rules_replace_builtin_ones() {
    let mut registry = FormatRegistry::new();
    registry.register(Box::new(UpperText));
    let serializer = Serializer::with_registry(registry);

    const FIELDS: &[FieldDescriptor] =
        &[FieldDescriptor::new("name", "S10.G00.02.002", FieldKind::Text)];
    const CONTACT: RecordType = RecordType::new("contact", "S10.G00.02", FIELDS);

    let lines = serializer
        .serialize(&Record::new().with("name", "dupont"), &CONTACT)
        .expect("serialize");
    assert_eq!(lines, [SerializedLine::new("S10.G00.02.002", "DUPONT")]);
}

#[test]
fn wrong_value_variant_is_invalid() {
    let record = pay_period_record().with("beta_hours", "151");
    let err = Serializer::new()
        .serialize(&record, &PAY_PERIOD)
        .expect_err("text in integer field");
    assert!(matches!(
        err,
        SerializeError::InvalidValue {
            code: "S21.G00.51.012",
            ..
        }
    ));
}

#[test]
fn non_finite_float_is_invalid() {
    let record = pay_period_record().with("amount", f64::NAN);
    let result = Serializer::new().serialize(&record, &PAY_PERIOD);
    assert!(matches!(
        result,
        Err(SerializeError::InvalidValue {
            code: "S21.G00.51.013",
            ..
        })
    ));
}

#[test]
fn quotes_in_text_pass_through() {
    let record = pay_period_record().with("middle_number", "O'Brien");
    let lines = Serializer::new()
        .serialize(&record, &PAY_PERIOD)
        .expect("serialize");
    assert_eq!(lines[2].to_string(), "S21.G00.51.010,'O'Brien'");
}

#[test]
fn section_header_has_empty_value() {
    assert_eq!(SerializedLine::section("S21.G00.30").to_string(), "S21.G00.30,''");
}

#[test]
fn optional_date_matches_mandatory_date_when_present() {
    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("mandatory", "X.1", FieldKind::Date),
        FieldDescriptor::new("optional", "X.2", FieldKind::OptionalDate),
    ];
    const DATES: RecordType = RecordType::new("dates", "X", FIELDS);
    let record = Record::new()
        .with("mandatory", date(2024, 3, 7))
        .with("optional", Some(date(2024, 3, 7)));

    let lines = Serializer::new().serialize(&record, &DATES).expect("serialize");
    assert_eq!(lines[0].value, "20240307");
    assert_eq!(lines[0].value, lines[1].value);
}

struct UpperText;

impl FieldFormatter for UpperText {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn format(&self, value: &FieldValue) -> Result<String, FormatError> {
        value
            .as_str()
            .map(str::to_uppercase)
            .ok_or_else(|| FormatError("expected text".to_string()))
    }
}

#[test]
fn dates_without_four_digit_year_are_invalid() {
    for year in [10000, -1] {
        let record = pay_period_record().with("zeta_start", date(year, 1, 1));
        let err = Serializer::new()
            .serialize(&record, &PAY_PERIOD)
            .expect_err("year outside 0..=9999");
        assert!(matches!(
            err,
            SerializeError::InvalidValue {
                code: "S21.G00.51.001",
                ..
            }
        ));

        let record = pay_period_record().with("alpha_end", Some(date(year, 1, 1)));
        assert!(matches!(
            Serializer::new().serialize(&record, &PAY_PERIOD),
            Err(SerializeError::InvalidValue {
                code: "S21.G00.51.002",
                ..
            })
        ));
    }
}

#[test]
fn serializer_exposes_its_rules_and_descriptors_resolve_by_code() {
    let serializer = Serializer::new();
    for kind in FieldKind::ALL {
        assert!(serializer.registry().supports(kind));
    }

    let field = PAY_PERIOD.field_by_code("S21.G00.51.012").expect("hours field");
    assert_eq!(field.name, "beta_hours");
    assert!(PAY_PERIOD.field_by_code("S21.G00.51.999").is_none());

    let record = pay_period_record();
    assert_eq!(record.get(field.name).and_then(FieldValue::as_i64), Some(151));
    assert_eq!(record.get("middle_number").and_then(FieldValue::as_i64), None);
}
