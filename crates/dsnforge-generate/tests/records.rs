use chrono::NaiveDate;

use dsnforge_core::{FieldValue, Serializer};
use dsnforge_generate::dsn::{self, BuildContext, RECORD_TYPES};
use dsnforge_generate::{FakerSource, GenerateOptions, LocaleKey, SourceOptions, build_plan};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn date_of(value: Option<&FieldValue>) -> Option<NaiveDate> {
    value.and_then(FieldValue::as_date)
}

#[test]
fn schema_is_valid() {
    dsnforge_generate::validate_schema().unwrap();
    assert_eq!(RECORD_TYPES.len(), 11);
    assert_eq!(dsn::CONTRACT.emitted_fields().count(), 77);
    assert_eq!(dsn::INDIVIDUAL.emitted_fields().count(), 25);
    assert_eq!(dsn::ESTABLISHMENT.emitted_fields().count(), 17);
}

#[test]
fn every_planned_record_serializes_against_its_type() {
    let serializer = Serializer::new();
    for locale in [LocaleKey::EnUs, LocaleKey::FrFr] {
        let mut options = GenerateOptions::new(reference_date());
        options.individuals = 10;
        options.with_activity = true;
        let mut source = FakerSource::new(SourceOptions {
            seed: Some(99),
            locale,
        });
        let plan = build_plan(&mut source, &options).unwrap();
        for planned in plan.entries() {
            let lines = serializer
                .serialize(&planned.record, planned.record_type)
                .unwrap_or_else(|err| panic!("{}: {err}", planned.record_type.name));
            assert_eq!(lines.len(), planned.record_type.emitted_fields().count());
        }
    }
}

#[test]
fn pay_period_carries_its_contract_number() {
    let mut options = GenerateOptions::new(reference_date());
    options.individuals = 8;
    let mut source = FakerSource::seeded(2024);
    let plan = build_plan(&mut source, &options).unwrap();

    for individual in &plan.individuals {
        let contract = individual.contract.record.text("contract_number").unwrap();
        let pay_period = individual.pay_period.record.text("contract_number").unwrap();
        assert_eq!(contract, pay_period);
        assert_eq!(contract.len(), 5);
    }
}

#[test]
fn individual_blocks_share_their_reference() {
    let mut options = GenerateOptions::new(reference_date());
    options.individuals = 3;
    let mut source = FakerSource::seeded(8);
    let plan = build_plan(&mut source, &options).unwrap();

    for (index, individual) in plan.individuals.iter().enumerate() {
        for planned in [
            &individual.identity,
            &individual.contract,
            &individual.payment,
            &individual.pay_period,
        ] {
            assert_eq!(
                planned.record.get("individual_ref"),
                Some(&FieldValue::Integer(index as i64))
            );
        }
    }
}

#[test]
fn individual_identity_follows_generation_rules() {
    let ctx = BuildContext::new(reference_date()).unwrap();
    let mut source = FakerSource::seeded(31);
    let earliest = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let latest = NaiveDate::from_ymd_opt(2005, 12, 31).unwrap();

    for index in 0..50 {
        let record = dsn::build_individual(&mut source, &ctx, index).unwrap();
        let gender = record.text("gender").unwrap();
        let nir = record.text("nir").unwrap();
        assert!(gender == "01" || gender == "02");
        assert_eq!(nir.len(), 15);
        assert!(nir.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(&nir[..1], &gender[1..]);

        let birth = date_of(record.get("birth_date")).unwrap();
        assert!((earliest..=latest).contains(&birth));
    }
}

#[test]
fn establishment_exit_never_precedes_join() {
    let ctx = BuildContext::new(reference_date()).unwrap();
    let mut source = FakerSource::seeded(77);
    let mut members = 0;
    let mut non_members = 0;

    for _ in 0..200 {
        let record = dsn::build_establishment(&mut source, &ctx).unwrap();
        let join = record.get("tese_join_date").unwrap();
        let exit = record.get("tese_exit_date").unwrap();
        match (join, exit) {
            (FieldValue::OptionalDate(Some(join)), FieldValue::OptionalDate(Some(exit))) => {
                assert!(join <= exit);
                assert!(*exit <= reference_date());
                members += 1;
            }
            (FieldValue::OptionalDate(None), FieldValue::OptionalDate(None)) => non_members += 1,
            other => panic!("inconsistent TESE dates: {other:?}"),
        }

        let apet = record.text("apet_code").unwrap();
        assert_eq!(apet.len(), 5);
        assert!(apet[..4].chars().all(|c| c.is_ascii_digit()));
        assert!(apet[4..].chars().all(|c| c.is_ascii_uppercase()));
    }
    assert!(members > 0 && non_members > 0);
}

#[test]
fn pay_dates_fall_in_the_month_before_reference() {
    let ctx = BuildContext::new(reference_date()).unwrap();
    let month_before = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let mut source = FakerSource::seeded(4);

    for index in 0..30 {
        let payment = dsn::build_payment(&mut source, &ctx, index).unwrap();
        let paid = date_of(payment.get("payment_date")).unwrap();
        assert!((month_before..=reference_date()).contains(&paid));

        let month = payment.text("reference_month").unwrap();
        assert_eq!(month.len(), 7);
        assert_eq!(&month[4..5], "-");

        let period = dsn::build_remuneration(&mut source, &ctx, index, "00042").unwrap();
        let start = date_of(period.get("period_start_date")).unwrap();
        let end = date_of(period.get("period_end_date")).unwrap();
        assert!((month_before..=reference_date()).contains(&start));
        assert!(start <= end);
        assert_eq!(period.text("contract_number"), Some("00042"));
    }
}

#[test]
fn transmission_stamps_standard_version() {
    let ctx = BuildContext::new(reference_date()).unwrap();
    let mut source = FakerSource::seeded(1);
    let record = dsn::build_transmission(&mut source, &ctx).unwrap();
    assert_eq!(record.text("standard_version"), Some("P24V01"));

    let declaration = dsn::build_declaration(&mut source, &ctx).unwrap();
    assert_eq!(declaration.text("currency"), Some("EUR"));
}
