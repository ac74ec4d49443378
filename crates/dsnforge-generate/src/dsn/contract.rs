//! Employment contract block (S21.G00.40).

use dsnforge_core::FieldKind::{Date, Float, Integer, Text};
use dsnforge_core::{FieldDescriptor, Record, RecordType};

use crate::dsn::{BuildContext, INDIVIDUAL_REF, draw_record};
use crate::errors::GenerationError;
use crate::source::{FakeKind, ValueSource, ValueSpec};

/// Field the pay-period block copies to link back to its contract.
pub const CONTRACT_NUMBER: &str = "contract_number";

pub const CONTRACT: RecordType = RecordType::new(
    "contract",
    "S21.G00.40",
    &[
        FieldDescriptor::new("contract_start_date", "S21.G00.40.001", Date),
        FieldDescriptor::new("employee_status", "S21.G00.40.002", Text),
        FieldDescriptor::new("mandatory_supplementary_pension_code", "S21.G00.40.003", Text),
        FieldDescriptor::new("occupation_code", "S21.G00.40.004", Text),
        FieldDescriptor::new("occupation_code_extension", "S21.G00.40.005", Text),
        FieldDescriptor::new("job_title", "S21.G00.40.006", Text),
        FieldDescriptor::new("contract_type", "S21.G00.40.007", Text),
        FieldDescriptor::new("public_policy_scheme", "S21.G00.40.008", Text),
        FieldDescriptor::new("contract_number", "S21.G00.40.009", Text),
        FieldDescriptor::new("expected_end_date", "S21.G00.40.010", Date),
        FieldDescriptor::new("work_time_unit", "S21.G00.40.011", Text),
        FieldDescriptor::new("company_work_time_reference", "S21.G00.40.012", Float),
        FieldDescriptor::new("contract_work_time", "S21.G00.40.013", Float),
        FieldDescriptor::new("work_time_arrangement", "S21.G00.40.014", Text),
        FieldDescriptor::new("mandatory_scheme_contribution", "S21.G00.40.016", Text),
        FieldDescriptor::new("collective_agreement_code", "S21.G00.40.017", Text),
        FieldDescriptor::new("health_insurance_scheme", "S21.G00.40.018", Text),
        FieldDescriptor::new("workplace_id", "S21.G00.40.019", Text),
        FieldDescriptor::new("pension_scheme", "S21.G00.40.020", Text),
        FieldDescriptor::new("hiring_reason", "S21.G00.40.021", Text),
        FieldDescriptor::new("paid_leave_scheme", "S21.G00.40.022", Text),
        FieldDescriptor::new("specific_deduction_rate", "S21.G00.40.023", Float),
        FieldDescriptor::new("overseas_worker", "S21.G00.40.024", Text),
        FieldDescriptor::new("dsn_exclusion_reason", "S21.G00.40.025", Text),
        FieldDescriptor::new("employment_status", "S21.G00.40.026", Text),
        FieldDescriptor::new("unemployment_insurance_assignment", "S21.G00.40.027", Text),
        FieldDescriptor::new("public_employer_internal_number", "S21.G00.40.028", Text),
        FieldDescriptor::new("unemployment_insurance_management", "S21.G00.40.029", Text),
        FieldDescriptor::new("adhesion_date", "S21.G00.40.030", Date),
        FieldDescriptor::new("termination_date", "S21.G00.40.031", Date),
        FieldDescriptor::new("management_agreement_effective_date", "S21.G00.40.032", Date),
        FieldDescriptor::new("management_agreement_number", "S21.G00.40.033", Text),
        FieldDescriptor::new("health_insurance_delegate_code", "S21.G00.40.035", Text),
        FieldDescriptor::new("multiple_jobs_code", "S21.G00.40.036", Text),
        FieldDescriptor::new("multiple_employers_code", "S21.G00.40.037", Text),
        FieldDescriptor::new("work_accident_risk_scheme", "S21.G00.40.039", Text),
        FieldDescriptor::new("work_accident_risk_code", "S21.G00.40.040", Text),
        FieldDescriptor::new("collective_agreement_position", "S21.G00.40.041", Text),
        FieldDescriptor::new("apecita_category_code", "S21.G00.40.042", Text),
        FieldDescriptor::new("work_accident_contribution_rate", "S21.G00.40.043", Float),
        FieldDescriptor::new("part_time_full_time_contribution", "S21.G00.40.044", Text),
        FieldDescriptor::new("tip_based_remuneration", "S21.G00.40.045", Text),
        FieldDescriptor::new("user_establishment_id", "S21.G00.40.046", Text),
        FieldDescriptor::new("live_performance_service_provider_id", "S21.G00.40.048", Text),
        FieldDescriptor::new("show_business_license_number", "S21.G00.40.049", Text),
        FieldDescriptor::new("show_object_number", "S21.G00.40.050", Text),
        FieldDescriptor::new("show_organizer_status", "S21.G00.40.051", Text),
        FieldDescriptor::new("state_public_service_pcs_ese_code", "S21.G00.40.052", Text),
        FieldDescriptor::new("position_nature", "S21.G00.40.053", Text),
        FieldDescriptor::new("full_time_work_reference_quota", "S21.G00.40.054", Float),
        FieldDescriptor::new("part_time_work_rate", "S21.G00.40.055", Float),
        FieldDescriptor::new("service_category_code", "S21.G00.40.056", Text),
        FieldDescriptor::new("gross_index", "S21.G00.40.057", Integer),
        FieldDescriptor::new("net_index", "S21.G00.40.058", Integer),
        FieldDescriptor::new("new_index_bonus", "S21.G00.40.059", Integer),
        FieldDescriptor::new("original_gross_index", "S21.G00.40.060", Integer),
        FieldDescriptor::new("article15_contribution_gross_index", "S21.G00.40.061", Integer),
        FieldDescriptor::new("former_public_employer", "S21.G00.40.062", Text),
        FieldDescriptor::new("former_public_employee_original_index", "S21.G00.40.063", Integer),
        FieldDescriptor::new("firefighter_original_index", "S21.G00.40.064", Integer),
        FieldDescriptor::new("contractual_original_salary", "S21.G00.40.065", Text),
        FieldDescriptor::new("secondment_type", "S21.G00.40.066", Text),
        FieldDescriptor::new("navigation_type", "S21.G00.40.067", Text),
        FieldDescriptor::new("active_service_rate", "S21.G00.40.068", Float),
        FieldDescriptor::new("remuneration_level", "S21.G00.40.069", Text),
        FieldDescriptor::new("pay_grade", "S21.G00.40.070", Text),
        FieldDescriptor::new("hierarchical_coefficient", "S21.G00.40.071", Float),
        FieldDescriptor::new("disabled_worker_status", "S21.G00.40.072", Text),
        FieldDescriptor::new("public_policy_scheme_complement", "S21.G00.40.073", Text),
        FieldDescriptor::new("external_assignment_case", "S21.G00.40.074", Text),
        FieldDescriptor::new("final_classification_category", "S21.G00.40.075", Text),
        FieldDescriptor::new("maritime_engagement_contract_id", "S21.G00.40.076", Text),
        FieldDescriptor::new("cnieg_college", "S21.G00.40.077", Text),
        FieldDescriptor::new("part_time_work_arrangement", "S21.G00.40.078", Text),
        FieldDescriptor::new("grade", "S21.G00.40.079", Text),
        FieldDescriptor::new("index_supplementary_treatment", "S21.G00.40.080", Integer),
        FieldDescriptor::new("geographic_finess", "S21.G00.40.081", Text),
        INDIVIDUAL_REF,
    ],
);

pub fn build_contract(
    source: &mut dyn ValueSource,
    ctx: &BuildContext,
    individual_ref: i64,
) -> Result<Record, GenerationError> {
    let mut record = draw_record(
        source,
        &CONTRACT,
        &[
            ("contract_start_date", ctx.any_date()),
            ("employee_status", ValueSpec::Letters(1)),
            ("mandatory_supplementary_pension_code", ValueSpec::Letters(2)),
            ("occupation_code", ValueSpec::Digits(4)),
            ("occupation_code_extension", ValueSpec::Digits(2)),
            ("job_title", ValueSpec::Fake(FakeKind::JobTitle)),
            ("contract_type", ValueSpec::Digits(2)),
            ("public_policy_scheme", ValueSpec::Digits(2)),
            (CONTRACT_NUMBER, ValueSpec::Digits(5)),
            ("expected_end_date", ctx.any_date()),
            ("work_time_unit", ValueSpec::Digits(2)),
            ("company_work_time_reference", ValueSpec::FloatRange(0.0, 100.0)),
            ("contract_work_time", ValueSpec::FloatRange(0.0, 100.0)),
            ("work_time_arrangement", ValueSpec::Digits(2)),
            ("mandatory_scheme_contribution", ValueSpec::Digits(2)),
            ("collective_agreement_code", ValueSpec::Digits(4)),
            ("health_insurance_scheme", ValueSpec::Digits(3)),
            ("workplace_id", ValueSpec::Uuid),
            ("pension_scheme", ValueSpec::Digits(3)),
            ("hiring_reason", ValueSpec::Digits(2)),
            ("paid_leave_scheme", ValueSpec::Digits(2)),
            ("specific_deduction_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("overseas_worker", ValueSpec::Digits(2)),
            ("dsn_exclusion_reason", ValueSpec::Digits(2)),
            ("employment_status", ValueSpec::Digits(2)),
            ("unemployment_insurance_assignment", ValueSpec::Digits(2)),
            ("public_employer_internal_number", ValueSpec::Digits(10)),
            ("unemployment_insurance_management", ValueSpec::Digits(2)),
            ("adhesion_date", ctx.any_date()),
            ("termination_date", ctx.any_date()),
            ("management_agreement_effective_date", ctx.any_date()),
            ("management_agreement_number", ValueSpec::Digits(10)),
            ("health_insurance_delegate_code", ValueSpec::Digits(3)),
            ("multiple_jobs_code", ValueSpec::Digits(2)),
            ("multiple_employers_code", ValueSpec::Digits(2)),
            ("work_accident_risk_scheme", ValueSpec::Digits(3)),
            ("work_accident_risk_code", ValueSpec::Digits(6)),
            ("collective_agreement_position", ValueSpec::Digits(4)),
            ("apecita_category_code", ValueSpec::Digits(2)),
            ("work_accident_contribution_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("part_time_full_time_contribution", ValueSpec::Digits(2)),
            ("tip_based_remuneration", ValueSpec::Digits(2)),
            ("user_establishment_id", ValueSpec::Uuid),
            ("live_performance_service_provider_id", ValueSpec::Digits(10)),
            ("show_business_license_number", ValueSpec::Digits(10)),
            ("show_object_number", ValueSpec::Digits(10)),
            ("show_organizer_status", ValueSpec::Digits(2)),
            ("state_public_service_pcs_ese_code", ValueSpec::Digits(4)),
            ("position_nature", ValueSpec::Digits(2)),
            ("full_time_work_reference_quota", ValueSpec::FloatRange(0.0, 100.0)),
            ("part_time_work_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("service_category_code", ValueSpec::Digits(2)),
            ("gross_index", ValueSpec::IntRange(100, 1000)),
            ("net_index", ValueSpec::IntRange(100, 1000)),
            ("new_index_bonus", ValueSpec::IntRange(0, 100)),
            ("original_gross_index", ValueSpec::IntRange(100, 1000)),
            ("article15_contribution_gross_index", ValueSpec::IntRange(100, 1000)),
            ("former_public_employer", ValueSpec::Digits(2)),
            ("former_public_employee_original_index", ValueSpec::IntRange(100, 1000)),
            ("firefighter_original_index", ValueSpec::IntRange(100, 1000)),
            ("contractual_original_salary", ValueSpec::Digits(2)),
            ("secondment_type", ValueSpec::Digits(2)),
            ("navigation_type", ValueSpec::Digits(2)),
            ("active_service_rate", ValueSpec::FloatRange(0.0, 100.0)),
            ("remuneration_level", ValueSpec::Digits(2)),
            ("pay_grade", ValueSpec::Digits(2)),
            ("hierarchical_coefficient", ValueSpec::FloatRange(1.0, 10.0)),
            ("disabled_worker_status", ValueSpec::Digits(2)),
            ("public_policy_scheme_complement", ValueSpec::Digits(2)),
            ("external_assignment_case", ValueSpec::Digits(2)),
            ("final_classification_category", ValueSpec::Digits(2)),
            ("maritime_engagement_contract_id", ValueSpec::Uuid),
            ("cnieg_college", ValueSpec::Digits(2)),
            ("part_time_work_arrangement", ValueSpec::Digits(2)),
            ("grade", ValueSpec::Letters(3)),
            ("index_supplementary_treatment", ValueSpec::IntRange(0, 100)),
            ("geographic_finess", ValueSpec::Digits(9)),
        ],
    )?;
    record.insert(INDIVIDUAL_REF.name, individual_ref);
    Ok(record)
}
