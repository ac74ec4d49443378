//! Employer blocks: company (S21.G00.06) and establishment (S21.G00.11).

use dsnforge_core::FieldKind::{Integer, OptionalDate, Text};
use dsnforge_core::{FieldDescriptor, Record, RecordType};

use crate::dsn::{ACTIVITY_CODE_PATTERN, BuildContext, CODES_01_03, draw_record};
use crate::errors::GenerationError;
use crate::source::{FakeKind, ValueSource, ValueSpec};

const SKILLS_OPERATORS: &[&str] = &["OPCO1", "OPCO2", "OPCO3"];
/// Share of establishments that joined the TESE/CEA scheme.
const TESE_MEMBERSHIP_RATE: f64 = 0.8;

pub const COMPANY: RecordType = RecordType::new(
    "company",
    "S21.G00.06",
    &[
        FieldDescriptor::new("siren", "S21.G00.06.001", Text),
        FieldDescriptor::new("headquarters_nic", "S21.G00.06.002", Text),
        FieldDescriptor::new("apen_code", "S21.G00.06.003", Text),
        FieldDescriptor::new("street_address", "S21.G00.06.004", Text),
        FieldDescriptor::new("postal_code", "S21.G00.06.005", Text),
        FieldDescriptor::new("city", "S21.G00.06.006", Text),
        FieldDescriptor::new("building_complement", "S21.G00.06.007", Text),
        FieldDescriptor::new("delivery_service", "S21.G00.06.008", Text),
        FieldDescriptor::new("average_workforce", "S21.G00.06.009", Integer),
        FieldDescriptor::new("country_code", "S21.G00.06.010", Text),
        FieldDescriptor::new("foreign_distribution", "S21.G00.06.011", Text),
        FieldDescriptor::new("company_location", "S21.G00.06.012", Text),
        FieldDescriptor::new("collective_agreement_code", "S21.G00.06.015", Text),
    ],
);

pub const ESTABLISHMENT: RecordType = RecordType::new(
    "establishment",
    "S21.G00.11",
    &[
        FieldDescriptor::new("nic", "S21.G00.11.001", Text),
        FieldDescriptor::new("apet_code", "S21.G00.11.002", Text),
        FieldDescriptor::new("street_address", "S21.G00.11.003", Text),
        FieldDescriptor::new("postal_code", "S21.G00.11.004", Text),
        FieldDescriptor::new("city", "S21.G00.11.005", Text),
        FieldDescriptor::new("building_complement", "S21.G00.11.006", Text),
        FieldDescriptor::new("delivery_service", "S21.G00.11.007", Text),
        FieldDescriptor::new("workforce_at_period_end", "S21.G00.11.008", Integer),
        FieldDescriptor::new("expat_remuneration_type", "S21.G00.11.009", Text),
        FieldDescriptor::new("country_code", "S21.G00.11.015", Text),
        FieldDescriptor::new("foreign_distribution", "S21.G00.11.016", Text),
        FieldDescriptor::new("employer_legal_nature", "S21.G00.11.017", Text),
        FieldDescriptor::new("tese_join_date", "S21.G00.11.019", OptionalDate),
        FieldDescriptor::new("tese_exit_date", "S21.G00.11.020", OptionalDate),
        FieldDescriptor::new("main_collective_agreement_code", "S21.G00.11.022", Text),
        FieldDescriptor::new("skills_operator", "S21.G00.11.023", Text),
        FieldDescriptor::new("dsn_exit_request", "S21.G00.11.024", Text),
    ],
);

pub fn build_company(
    source: &mut dyn ValueSource,
    _ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    draw_record(
        source,
        &COMPANY,
        &[
            ("siren", ValueSpec::Digits(9)),
            ("headquarters_nic", ValueSpec::Digits(5)),
            ("apen_code", ValueSpec::Pattern(ACTIVITY_CODE_PATTERN)),
            ("street_address", ValueSpec::Fake(FakeKind::Street)),
            ("postal_code", ValueSpec::Fake(FakeKind::Zip)),
            ("city", ValueSpec::Fake(FakeKind::City)),
            ("building_complement", ValueSpec::Fake(FakeKind::FullName)),
            ("delivery_service", ValueSpec::Fake(FakeKind::Word)),
            ("average_workforce", ValueSpec::IntRange(1, 10_000)),
            ("country_code", ValueSpec::Fake(FakeKind::CountryCode)),
            ("foreign_distribution", ValueSpec::Fake(FakeKind::Word)),
            ("company_location", ValueSpec::OneOf(CODES_01_03)),
            ("collective_agreement_code", ValueSpec::Digits(4)),
        ],
    )
}

pub fn build_establishment(
    source: &mut dyn ValueSource,
    ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    let mut record = draw_record(
        source,
        &ESTABLISHMENT,
        &[
            ("nic", ValueSpec::Digits(5)),
            ("apet_code", ValueSpec::Pattern(ACTIVITY_CODE_PATTERN)),
            ("street_address", ValueSpec::Fake(FakeKind::Street)),
            ("postal_code", ValueSpec::Fake(FakeKind::Zip)),
            ("city", ValueSpec::Fake(FakeKind::City)),
            ("building_complement", ValueSpec::Fake(FakeKind::FullName)),
            ("delivery_service", ValueSpec::Fake(FakeKind::Word)),
            ("workforce_at_period_end", ValueSpec::IntRange(1, 1_000)),
            ("expat_remuneration_type", ValueSpec::OneOf(CODES_01_03)),
            ("country_code", ValueSpec::Fake(FakeKind::CountryCode)),
            ("foreign_distribution", ValueSpec::Fake(FakeKind::Word)),
            ("employer_legal_nature", ValueSpec::OneOf(CODES_01_03)),
            ("main_collective_agreement_code", ValueSpec::Digits(4)),
            ("skills_operator", ValueSpec::OneOf(SKILLS_OPERATORS)),
            ("dsn_exit_request", ValueSpec::OneOf(SKILLS_OPERATORS)),
        ],
    )?;

    // The exit date only exists for a member, and never precedes its join date.
    let join_date = if source.chance(TESE_MEMBERSHIP_RATE)? {
        Some(source.date(&ctx.any_date())?)
    } else {
        None
    };
    let exit_date = match join_date {
        Some(joined) => Some(source.date(&ValueSpec::DateRange(joined, ctx.reference_date))?),
        None => None,
    };
    record.insert("tese_join_date", join_date);
    record.insert("tese_exit_date", exit_date);
    Ok(record)
}
