use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INDIVIDUALS: u64 = 100;
/// Largest individual count accepted; the whole plan is held in memory.
pub const MAX_INDIVIDUALS: u64 = 1_000_000;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of employees declared, each with its own block group.
    pub individuals: u64,
    /// "Today" for every date drawn relative to the declaration.
    pub reference_date: NaiveDate,
    /// Emit an activity block (S21.G00.53) after each pay period.
    pub with_activity: bool,
}

impl GenerateOptions {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            individuals: DEFAULT_INDIVIDUALS,
            reference_date,
            with_activity: false,
        }
    }
}

/// Counts gathered while writing a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionSummary {
    pub records: u64,
    pub field_lines: u64,
    /// Section headers written, by section code.
    pub sections: BTreeMap<String, u64>,
    pub bytes_written: u64,
}

impl EmissionSummary {
    pub fn record_section(&mut self, section: &str, field_lines: usize) {
        *self.sections.entry(section.to_string()).or_insert(0) += 1;
        self.records += 1;
        self.field_lines += field_lines as u64;
    }

    /// Every line written, section headers included.
    pub fn total_lines(&self) -> u64 {
        self.records + self.field_lines
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Seed replaying this run, when the source exposes one.
    pub seed: Option<u64>,
    pub reference_date: NaiveDate,
    pub individuals: u64,
    pub records: u64,
    pub lines: u64,
    pub sections: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, options: &GenerateOptions, seed: Option<u64>) -> Self {
        Self {
            run_id,
            seed,
            reference_date: options.reference_date,
            individuals: options.individuals,
            records: 0,
            lines: 0,
            sections: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn absorb(&mut self, summary: EmissionSummary) {
        self.records = summary.records;
        self.lines = summary.total_lines();
        self.bytes_written = summary.bytes_written;
        self.sections = summary.sections;
    }
}
