//! Pay blocks: payment (S21.G00.50), pay period (S21.G00.51) and activity
//! (S21.G00.53).

use chrono::Months;

use dsnforge_core::FieldKind::{Date, Float, Integer, Text};
use dsnforge_core::{FieldDescriptor, Record, RecordType};

use crate::dsn::{BuildContext, INDIVIDUAL_REF, draw_record};
use crate::errors::GenerationError;
use crate::source::{ValueSource, ValueSpec};

const REMUNERATION_TYPES: &[&str] = &["012", "013", "017", "018"];
const ACTIVITY_TYPES: &[&str] = &["01"];

pub const PAYMENT: RecordType = RecordType::new(
    "payment",
    "S21.G00.50",
    &[
        FieldDescriptor::new("payment_date", "S21.G00.50.001", Date),
        FieldDescriptor::new("taxable_net_remuneration", "S21.G00.50.002", Float),
        FieldDescriptor::new("payment_number", "S21.G00.50.003", Text),
        FieldDescriptor::new("net_amount_paid", "S21.G00.50.004", Float),
        FieldDescriptor::new("withholding_tax_rate", "S21.G00.50.006", Float),
        FieldDescriptor::new("withholding_tax_rate_type", "S21.G00.50.007", Text),
        FieldDescriptor::new("withholding_tax_rate_id", "S21.G00.50.008", Text),
        FieldDescriptor::new("withholding_tax_amount", "S21.G00.50.009", Float),
        FieldDescriptor::new("non_taxable_income_amount", "S21.G00.50.011", Float),
        FieldDescriptor::new("tax_base_deduction_amount", "S21.G00.50.012", Float),
        FieldDescriptor::new("amount_subject_to_withholding", "S21.G00.50.013", Float),
        FieldDescriptor::new("reference_month", "S21.G00.50.020", Text),
        INDIVIDUAL_REF,
    ],
);

/// Pay-period remuneration; `contract_number` links it to its contract.
pub const REMUNERATION: RecordType = RecordType::new(
    "remuneration",
    "S21.G00.51",
    &[
        FieldDescriptor::new("period_start_date", "S21.G00.51.001", Date),
        FieldDescriptor::new("period_end_date", "S21.G00.51.002", Date),
        FieldDescriptor::new("contract_number", "S21.G00.51.010", Text),
        FieldDescriptor::new("remuneration_type", "S21.G00.51.011", Text),
        FieldDescriptor::new("number_of_hours", "S21.G00.51.012", Integer),
        FieldDescriptor::new("amount", "S21.G00.51.013", Float),
        FieldDescriptor::new("administrative_pay_rate", "S21.G00.51.014", Float),
        FieldDescriptor::new("nuclear_operation_rate", "S21.G00.51.015", Float),
        FieldDescriptor::new("increased_rate", "S21.G00.51.016", Float),
        FieldDescriptor::new("contributed_remuneration_rate", "S21.G00.51.019", Float),
        FieldDescriptor::new("former_apprentice_rate", "S21.G00.51.020", Float),
        INDIVIDUAL_REF,
    ],
);

pub const ACTIVITY: RecordType = RecordType::new(
    "activity",
    "S21.G00.53",
    &[
        FieldDescriptor::new("activity_type", "S21.G00.53.001", Text),
        FieldDescriptor::new("measure", "S21.G00.53.002", Float),
        FieldDescriptor::new("measurement_unit", "S21.G00.53.003", Text),
    ],
);

pub fn build_payment(
    source: &mut dyn ValueSource,
    ctx: &BuildContext,
    individual_ref: i64,
) -> Result<Record, GenerationError> {
    let mut record = draw_record(
        source,
        &PAYMENT,
        &[
            ("payment_date", ctx.last_month()),
            ("taxable_net_remuneration", ValueSpec::FloatRange(1_000.0, 10_000.0)),
            ("payment_number", ValueSpec::Digits(5)),
            ("net_amount_paid", ValueSpec::FloatRange(1_000.0, 10_000.0)),
            ("withholding_tax_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("withholding_tax_rate_type", ValueSpec::Letters(2)),
            ("withholding_tax_rate_id", ValueSpec::Uuid),
            ("withholding_tax_amount", ValueSpec::FloatRange(0.0, 1_000.0)),
            ("non_taxable_income_amount", ValueSpec::FloatRange(0.0, 1_000.0)),
            ("tax_base_deduction_amount", ValueSpec::FloatRange(0.0, 1_000.0)),
            ("amount_subject_to_withholding", ValueSpec::FloatRange(1_000.0, 10_000.0)),
        ],
    )?;
    let month = source.date(&ctx.any_date())?;
    record.insert("reference_month", month.format("%Y-%m").to_string());
    record.insert(INDIVIDUAL_REF.name, individual_ref);
    Ok(record)
}

pub fn build_remuneration(
    source: &mut dyn ValueSource,
    ctx: &BuildContext,
    individual_ref: i64,
    contract_number: &str,
) -> Result<Record, GenerationError> {
    let start = source.date(&ctx.last_month())?;
    let latest_end = start.checked_add_months(Months::new(1)).ok_or_else(|| {
        GenerationError::InvalidConfig(format!("pay period starting {start} is out of range"))
    })?;
    let end = source.date(&ValueSpec::DateRange(start, latest_end))?;

    let mut record = draw_record(
        source,
        &REMUNERATION,
        &[
            ("remuneration_type", ValueSpec::OneOf(REMUNERATION_TYPES)),
            ("number_of_hours", ValueSpec::IntRange(0, 200)),
            ("amount", ValueSpec::FloatRange(1_000.0, 10_000.0)),
            ("administrative_pay_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("nuclear_operation_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("increased_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("contributed_remuneration_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("former_apprentice_rate", ValueSpec::FloatRange(0.0, 100.0)),
        ],
    )?;
    record.insert("period_start_date", start);
    record.insert("period_end_date", end);
    record.insert("contract_number", contract_number);
    record.insert(INDIVIDUAL_REF.name, individual_ref);
    Ok(record)
}

pub fn build_activity(
    source: &mut dyn ValueSource,
    _ctx: &BuildContext,
) -> Result<Record, GenerationError> {
    draw_record(
        source,
        &ACTIVITY,
        &[
            ("activity_type", ValueSpec::OneOf(ACTIVITY_TYPES)),
            ("measure", ValueSpec::FloatRange(0.0, 1_000.0)),
            ("measurement_unit", ValueSpec::Digits(2)),
        ],
    )
}
