use chrono::NaiveDate;

use dsnforge_core::FieldKind::{Date, Text};
use dsnforge_core::{FieldDescriptor, Record, RecordType};

use crate::dsn::{BuildContext, CODES_01_03, CODES_01_10, INDIVIDUAL_REF, draw_record};
use crate::errors::GenerationError;
use crate::source::{FakeKind, ValueSource, ValueSpec};

const GENDERS: &[&str] = &["01", "02"];

/// Individual identity block (S21.G00.30).
pub const INDIVIDUAL: RecordType = RecordType::new(
    "individual",
    "S21.G00.30",
    &[
        FieldDescriptor::new("nir", "S21.G00.30.001", Text),
        FieldDescriptor::new("last_name", "S21.G00.30.002", Text),
        FieldDescriptor::new("usage_name", "S21.G00.30.003", Text),
        FieldDescriptor::new("first_names", "S21.G00.30.004", Text),
        FieldDescriptor::new("gender", "S21.G00.30.005", Text),
        FieldDescriptor::new("birth_date", "S21.G00.30.006", Date),
        FieldDescriptor::new("birth_place", "S21.G00.30.007", Text),
        FieldDescriptor::new("street_address", "S21.G00.30.008", Text),
        FieldDescriptor::new("postal_code", "S21.G00.30.009", Text),
        FieldDescriptor::new("city", "S21.G00.30.010", Text),
        FieldDescriptor::new("country_code", "S21.G00.30.011", Text),
        FieldDescriptor::new("foreign_distribution", "S21.G00.30.012", Text),
        FieldDescriptor::new("eu_codification", "S21.G00.30.013", Text),
        FieldDescriptor::new("birth_department_code", "S21.G00.30.014", Text),
        FieldDescriptor::new("birth_country_code", "S21.G00.30.015", Text),
        FieldDescriptor::new("building_complement", "S21.G00.30.016", Text),
        FieldDescriptor::new("delivery_service", "S21.G00.30.017", Text),
        FieldDescriptor::new("email", "S21.G00.30.018", Text),
        FieldDescriptor::new("company_id", "S21.G00.30.019", Text),
        FieldDescriptor::new("temporary_technical_id", "S21.G00.30.020", Text),
        FieldDescriptor::new("foreign_tax_status", "S21.G00.30.022", Text),
        FieldDescriptor::new("retirement_cumulation", "S21.G00.30.023", Text),
        FieldDescriptor::new("highest_education_level", "S21.G00.30.024", Text),
        FieldDescriptor::new("current_diploma_level", "S21.G00.30.025", Text),
        FieldDescriptor::new("birth_country_name", "S21.G00.30.029", Text),
        INDIVIDUAL_REF,
    ],
);

fn birth_dates() -> ValueSpec<'static> {
    let earliest = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or(NaiveDate::MIN);
    let latest = NaiveDate::from_ymd_opt(2005, 12, 31).unwrap_or(NaiveDate::MAX);
    ValueSpec::DateRange(earliest, latest)
}

/// NIR: the gender digit followed by 14 random digits.
pub fn nir(gender: &str, digits: &str) -> Result<String, GenerationError> {
    let sex_digit = match gender {
        "01" => '1',
        "02" => '2',
        other => {
            return Err(GenerationError::InvalidConfig(format!(
                "cannot build NIR for gender '{other}'"
            )));
        }
    };
    let mut nir = String::with_capacity(1 + digits.len());
    nir.push(sex_digit);
    nir.push_str(digits);
    Ok(nir)
}

pub fn build_individual(
    source: &mut dyn ValueSource,
    _ctx: &BuildContext,
    individual_ref: i64,
) -> Result<Record, GenerationError> {
    let gender = source.text(&ValueSpec::OneOf(GENDERS))?;
    let nir = nir(&gender, &source.text(&ValueSpec::Digits(14))?)?;

    let mut record = draw_record(
        source,
        &INDIVIDUAL,
        &[
            ("last_name", ValueSpec::Fake(FakeKind::LastName)),
            ("usage_name", ValueSpec::Fake(FakeKind::LastName)),
            ("first_names", ValueSpec::Fake(FakeKind::FirstName)),
            ("birth_date", birth_dates()),
            ("birth_place", ValueSpec::Fake(FakeKind::City)),
            ("street_address", ValueSpec::Fake(FakeKind::Street)),
            ("postal_code", ValueSpec::Fake(FakeKind::Zip)),
            ("city", ValueSpec::Fake(FakeKind::City)),
            ("country_code", ValueSpec::Fake(FakeKind::CountryCode)),
            ("foreign_distribution", ValueSpec::Fake(FakeKind::Word)),
            ("eu_codification", ValueSpec::OneOf(CODES_01_03)),
            ("birth_department_code", ValueSpec::Digits(2)),
            ("birth_country_code", ValueSpec::Fake(FakeKind::CountryCode)),
            ("building_complement", ValueSpec::Fake(FakeKind::FullName)),
            ("delivery_service", ValueSpec::Fake(FakeKind::Word)),
            ("email", ValueSpec::Fake(FakeKind::Email)),
            ("company_id", ValueSpec::Digits(8)),
            ("temporary_technical_id", ValueSpec::Uuid),
            ("foreign_tax_status", ValueSpec::OneOf(CODES_01_03)),
            ("retirement_cumulation", ValueSpec::OneOf(CODES_01_03)),
            ("highest_education_level", ValueSpec::OneOf(CODES_01_10)),
            ("current_diploma_level", ValueSpec::OneOf(CODES_01_10)),
            ("birth_country_name", ValueSpec::Fake(FakeKind::CountryName)),
        ],
    )?;
    record.insert("nir", nir);
    record.insert("gender", gender);
    record.insert(INDIVIDUAL_REF.name, individual_ref);
    Ok(record)
}
