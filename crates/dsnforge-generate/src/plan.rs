//! Ordered list of record instances making up one declaration.

use dsnforge_core::{Record, RecordType, validate_record_type};

use crate::dsn::{self, BuildContext, contract::CONTRACT_NUMBER};
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, MAX_INDIVIDUALS};
use crate::source::ValueSource;

/// A record instance paired with the type it serializes against.
#[derive(Debug, Clone)]
pub struct PlannedRecord {
    pub record_type: &'static RecordType,
    pub record: Record,
}

impl PlannedRecord {
    pub fn new(record_type: &'static RecordType, record: Record) -> Self {
        Self {
            record_type,
            record,
        }
    }
}

/// Blocks declared for one employee.
#[derive(Debug, Clone)]
pub struct IndividualRecords {
    pub identity: PlannedRecord,
    pub contract: PlannedRecord,
    pub payment: PlannedRecord,
    pub pay_period: PlannedRecord,
    pub activity: Option<PlannedRecord>,
}

impl IndividualRecords {
    /// Blocks in emission order.
    pub fn entries(&self) -> impl Iterator<Item = &PlannedRecord> {
        [
            &self.identity,
            &self.contract,
            &self.payment,
            &self.pay_period,
        ]
        .into_iter()
        .chain(self.activity.as_ref())
    }
}

/// Envelope and employer blocks once, then one group per individual.
#[derive(Debug, Clone, Default)]
pub struct EmissionPlan {
    pub preamble: Vec<PlannedRecord>,
    pub individuals: Vec<IndividualRecords>,
}

impl EmissionPlan {
    pub fn entries(&self) -> impl Iterator<Item = &PlannedRecord> {
        self.preamble
            .iter()
            .chain(self.individuals.iter().flat_map(|individual| individual.entries()))
    }

    pub fn len(&self) -> usize {
        self.preamble.len()
            + self
                .individuals
                .iter()
                .map(|individual| 4 + usize::from(individual.activity.is_some()))
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.individuals.is_empty()
    }
}

/// Check every DSN record type before any value is drawn.
pub fn validate_schema() -> Result<(), GenerationError> {
    for record_type in dsn::RECORD_TYPES {
        validate_record_type(record_type)?;
    }
    Ok(())
}

/// Draw a complete declaration from `source`.
pub fn build_plan(
    source: &mut dyn ValueSource,
    options: &GenerateOptions,
) -> Result<EmissionPlan, GenerationError> {
    validate_schema()?;
    if options.individuals > MAX_INDIVIDUALS {
        return Err(GenerationError::InvalidConfig(format!(
            "{} individuals requested, at most {MAX_INDIVIDUALS} are supported",
            options.individuals
        )));
    }
    let ctx = BuildContext::new(options.reference_date)?;

    let preamble = vec![
        PlannedRecord::new(&dsn::TRANSMISSION, dsn::build_transmission(source, &ctx)?),
        PlannedRecord::new(&dsn::SENDER, dsn::build_sender(source, &ctx)?),
        PlannedRecord::new(
            &dsn::SENDER_CONTACT,
            dsn::build_sender_contact(source, &ctx)?,
        ),
        PlannedRecord::new(&dsn::DECLARATION, dsn::build_declaration(source, &ctx)?),
        PlannedRecord::new(&dsn::COMPANY, dsn::build_company(source, &ctx)?),
        PlannedRecord::new(
            &dsn::ESTABLISHMENT,
            dsn::build_establishment(source, &ctx)?,
        ),
    ];

    let mut individuals = Vec::with_capacity(usize::try_from(options.individuals).unwrap_or(0));
    for index in 0..options.individuals {
        individuals.push(build_individual(source, &ctx, index, options.with_activity)?);
    }

    Ok(EmissionPlan {
        preamble,
        individuals,
    })
}

fn build_individual(
    source: &mut dyn ValueSource,
    ctx: &BuildContext,
    index: u64,
    with_activity: bool,
) -> Result<IndividualRecords, GenerationError> {
    let individual_ref = i64::try_from(index).map_err(|_| {
        GenerationError::InvalidConfig(format!("individual index {index} is too large"))
    })?;

    let identity = dsn::build_individual(source, ctx, individual_ref)?;
    let contract = dsn::build_contract(source, ctx, individual_ref)?;
    let payment = dsn::build_payment(source, ctx, individual_ref)?;

    let contract_number = contract.text(CONTRACT_NUMBER).ok_or_else(|| {
        GenerationError::InvalidConfig(format!(
            "contract for individual {index} has no text '{CONTRACT_NUMBER}'"
        ))
    })?;
    let pay_period = dsn::build_remuneration(source, ctx, individual_ref, contract_number)?;

    let activity = if with_activity {
        Some(PlannedRecord::new(
            &dsn::ACTIVITY,
            dsn::build_activity(source, ctx)?,
        ))
    } else {
        None
    };

    Ok(IndividualRecords {
        identity: PlannedRecord::new(&dsn::INDIVIDUAL, identity),
        contract: PlannedRecord::new(&dsn::CONTRACT, contract),
        payment: PlannedRecord::new(&dsn::PAYMENT, payment),
        pay_period: PlannedRecord::new(&dsn::REMUNERATION, pay_period),
        activity,
    })
}
