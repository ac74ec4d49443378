//! Synthetic DSN declaration generator.
//!
//! Builds envelope, employer and per-individual blocks from a seeded value
//! source, then writes them through the `dsnforge-core` serializer as
//! `code,'value'` lines.

pub mod dsn;
pub mod emit;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod plan;
pub mod source;

pub use emit::emit;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use model::{EmissionSummary, GenerateOptions, GenerationReport, MAX_INDIVIDUALS};
pub use output::DsnWriter;
pub use plan::{EmissionPlan, IndividualRecords, PlannedRecord, build_plan, validate_schema};
pub use source::{
    FakeKind, FakerSource, GeneratedValue, LocaleKey, SourceOptions, ValueSource, ValueSpec,
};
