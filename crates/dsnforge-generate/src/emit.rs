use std::io::Write;

use tracing::debug;

use dsnforge_core::Serializer;

use crate::errors::GenerationError;
use crate::model::EmissionSummary;
use crate::output::DsnWriter;
use crate::plan::EmissionPlan;

/// Write every planned record as a section header followed by its field lines.
///
/// A record is fully serialized before its header is written, so a failing
/// record leaves nothing of itself in the sink. The first failure aborts the
/// whole emission; the caller owns discarding what was already written.
pub fn emit<W: Write>(
    plan: &EmissionPlan,
    serializer: &Serializer,
    writer: &mut DsnWriter<W>,
) -> Result<EmissionSummary, GenerationError> {
    let mut summary = EmissionSummary::default();

    for planned in plan.entries() {
        let record_type = planned.record_type;
        let lines = serializer.serialize(&planned.record, record_type)?;
        writer.write_section(record_type.section)?;
        writer.write_lines(&lines)?;
        summary.record_section(record_type.section, lines.len());
        debug!(
            section = record_type.section,
            record_type = record_type.name,
            lines = lines.len(),
            "record emitted"
        );
    }

    writer.flush()?;
    summary.bytes_written = writer.bytes_written();
    Ok(summary)
}
