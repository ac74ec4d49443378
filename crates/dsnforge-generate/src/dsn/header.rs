//! Envelope blocks: transmission, sender, sender contact and declaration.

use dsnforge_core::FieldKind::{Date, Text};
use dsnforge_core::{FieldDescriptor, Record, RecordType};

use crate::dsn::{BuildContext, CODES_01_03, draw_record};
use crate::errors::GenerationError;
use crate::source::{FakeKind, ValueSource, ValueSpec};

/// Norm version stamped on every transmission.
pub const STANDARD_VERSION: &str = "P24V01";
pub const CURRENCY: &str = "EUR";

const FILE_TYPES: &[&str] = &["01", "02"];
const SOFTWARE_VERSION_PATTERN: &str = r"[1-9]\.[0-9]{1,2}\.[0-9]{1,2}";

pub const TRANSMISSION: RecordType = RecordType::new(
    "transmission",
    "S10.G00.00",
    &[
        FieldDescriptor::new("software_name", "S10.G00.00.001", Text),
        FieldDescriptor::new("publisher_name", "S10.G00.00.002", Text),
        FieldDescriptor::new("software_version", "S10.G00.00.003", Text),
        FieldDescriptor::new("pre_check_code", "S10.G00.00.004", Text),
        FieldDescriptor::new("file_type", "S10.G00.00.005", Text),
        FieldDescriptor::new("standard_version", "S10.G00.00.006", Text),
        FieldDescriptor::new("submission_point", "S10.G00.00.007", Text),
        FieldDescriptor::new("transmission_type", "S10.G00.00.008", Text),
    ],
);

pub const SENDER: RecordType = RecordType::new(
    "sender",
    "S10.G00.01",
    &[
        FieldDescriptor::new("siren", "S10.G00.01.001", Text),
        FieldDescriptor::new("nic", "S10.G00.01.002", Text),
        FieldDescriptor::new("name", "S10.G00.01.003", Text),
        FieldDescriptor::new("street_address", "S10.G00.01.004", Text),
        FieldDescriptor::new("postal_code", "S10.G00.01.005", Text),
        FieldDescriptor::new("city", "S10.G00.01.006", Text),
        FieldDescriptor::new("country_code", "S10.G00.01.007", Text),
        FieldDescriptor::new("foreign_distribution", "S10.G00.01.008", Text),
        FieldDescriptor::new("building_complement", "S10.G00.01.009", Text),
        FieldDescriptor::new("delivery_service", "S10.G00.01.010", Text),
    ],
);

// Code 003 is not part of the contact block.
pub const SENDER_CONTACT: RecordType = RecordType::new(
    "sender_contact",
    "S10.G00.02",
    &[
        FieldDescriptor::new("civility_code", "S10.G00.02.001", Text),
        FieldDescriptor::new("full_name", "S10.G00.02.002", Text),
        FieldDescriptor::new("email", "S10.G00.02.004", Text),
        FieldDescriptor::new("phone_number", "S10.G00.02.005", Text),
        FieldDescriptor::new("fax_number", "S10.G00.02.006", Text),
    ],
);

pub const DECLARATION: RecordType = RecordType::new(
    "declaration",
    "S20.G00.05",
    &[
        FieldDescriptor::new("nature", "S20.G00.05.001", Text),
        FieldDescriptor::new("declaration_type", "S20.G00.05.002", Text),
        FieldDescriptor::new("fraction_number", "S20.G00.05.003", Text),
        FieldDescriptor::new("order_number", "S20.G00.05.004", Text),
        FieldDescriptor::new("main_declaration_month", "S20.G00.05.005", Date),
        FieldDescriptor::new("cancelled_declaration_id", "S20.G00.05.006", Text),
        FieldDescriptor::new("file_creation_date", "S20.G00.05.007", Date),
        FieldDescriptor::new("declaration_field", "S20.G00.05.008", Text),
        FieldDescriptor::new("business_id", "S20.G00.05.009", Text),
        FieldDescriptor::new("currency", "S20.G00.05.010", Text),
        FieldDescriptor::new("trigger_event_nature", "S20.G00.05.011", Text),
        FieldDescriptor::new("last_known_siret", "S20.G00.05.012", Text),
        FieldDescriptor::new("substitution_dsn_type", "S20.G00.05.013", Text),
    ],
);

pub fn build_transmission(
    source: &mut dyn ValueSource,
    _ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    let mut record = draw_record(
        source,
        &TRANSMISSION,
        &[
            ("software_name", ValueSpec::Fake(FakeKind::Buzzword)),
            ("publisher_name", ValueSpec::Fake(FakeKind::CompanyName)),
            ("software_version", ValueSpec::Pattern(SOFTWARE_VERSION_PATTERN)),
            ("pre_check_code", ValueSpec::Digits(1)),
            ("file_type", ValueSpec::OneOf(FILE_TYPES)),
            ("submission_point", ValueSpec::Digits(2)),
            ("transmission_type", ValueSpec::Digits(2)),
        ],
    )?;
    record.insert("standard_version", STANDARD_VERSION);
    Ok(record)
}

pub fn build_sender(
    source: &mut dyn ValueSource,
    _ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    draw_record(
        source,
        &SENDER,
        &[
            ("siren", ValueSpec::Digits(9)),
            ("nic", ValueSpec::Digits(5)),
            ("name", ValueSpec::Fake(FakeKind::CompanyName)),
            ("street_address", ValueSpec::Fake(FakeKind::Street)),
            ("postal_code", ValueSpec::Fake(FakeKind::Zip)),
            ("city", ValueSpec::Fake(FakeKind::City)),
            ("country_code", ValueSpec::Fake(FakeKind::CountryCode)),
            ("foreign_distribution", ValueSpec::Fake(FakeKind::Word)),
            ("building_complement", ValueSpec::Fake(FakeKind::FullName)),
            ("delivery_service", ValueSpec::Fake(FakeKind::Word)),
        ],
    )
}

pub fn build_sender_contact(
    source: &mut dyn ValueSource,
    _ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    draw_record(
        source,
        &SENDER_CONTACT,
        &[
            ("civility_code", ValueSpec::OneOf(CODES_01_03)),
            ("full_name", ValueSpec::Fake(FakeKind::FullName)),
            ("email", ValueSpec::Fake(FakeKind::Email)),
            ("phone_number", ValueSpec::Fake(FakeKind::Phone)),
            ("fax_number", ValueSpec::Fake(FakeKind::Phone)),
        ],
    )
}

pub fn build_declaration(
    source: &mut dyn ValueSource,
    ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    let mut record = draw_record(
        source,
        &DECLARATION,
        &[
            ("nature", ValueSpec::OneOf(CODES_01_03)),
            ("declaration_type", ValueSpec::OneOf(CODES_01_03)),
            ("fraction_number", ValueSpec::Digits(2)),
            ("order_number", ValueSpec::Digits(3)),
            ("main_declaration_month", ctx.any_date()),
            ("cancelled_declaration_id", ValueSpec::Uuid),
            ("file_creation_date", ctx.any_date()),
            ("declaration_field", ValueSpec::OneOf(CODES_01_03)),
            ("business_id", ValueSpec::Uuid),
            ("trigger_event_nature", ValueSpec::OneOf(CODES_01_03)),
            ("last_known_siret", ValueSpec::Digits(14)),
            ("substitution_dsn_type", ValueSpec::OneOf(CODES_01_03)),
        ],
    )?;
    record.insert("currency", CURRENCY);
    Ok(record)
}
