use std::io::Write;
use std::time::Instant;

use tracing::{info, warn};

use dsnforge_core::Serializer;

use crate::emit::emit;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::DsnWriter;
use crate::plan::build_plan;
use crate::source::ValueSource;

/// Entry point for generating one declaration.
#[derive(Debug)]
pub struct GenerationEngine {
    options: GenerateOptions,
    serializer: Serializer,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            serializer: Serializer::new(),
        }
    }

    pub fn with_serializer(mut self, serializer: Serializer) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Build a plan from `source` and write it to `writer`.
    pub fn run<W: Write>(
        &self,
        source: &mut dyn ValueSource,
        writer: &mut DsnWriter<W>,
    ) -> Result<GenerationReport, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), &self.options, source.seed());

        info!(
            run_id = %run_id,
            seed = ?report.seed,
            individuals = self.options.individuals,
            reference_date = %self.options.reference_date,
            with_activity = self.options.with_activity,
            "generation started"
        );

        let outcome = build_plan(source, &self.options).and_then(|plan| {
            info!(run_id = %run_id, records = plan.len(), "plan built");
            emit(&plan, &self.serializer, writer)
        });

        let summary = match outcome {
            Ok(summary) => summary,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "generation failed");
                return Err(err);
            }
        };

        report.absorb(summary);
        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            records = report.records,
            lines = report.lines,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );
        Ok(report)
    }
}
