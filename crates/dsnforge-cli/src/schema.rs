use std::io::{self, Write};

use dsnforge_core::RecordType;
use dsnforge_generate::dsn::{self, RECORD_TYPES};

/// Record types to list: all of them, or the one opened by `section`.
///
/// Returns `None` when no record type uses `section`.
pub fn select(section: Option<&str>) -> Option<Vec<&'static RecordType>> {
    match section {
        Some(section) => dsn::record_type(section).map(|record_type| vec![record_type]),
        None => Some(RECORD_TYPES.to_vec()),
    }
}

/// One header line per record type, then one line per field in emission
/// order. Internal fields show `-` in place of a code.
pub fn write_text<W: Write>(out: &mut W, record_types: &[&RecordType]) -> io::Result<()> {
    for record_type in record_types {
        writeln!(out, "{} {}", record_type.section, record_type.name)?;
        for field in record_type.fields {
            writeln!(
                out,
                "  {:<16} {:<13} {}",
                field.code.unwrap_or("-"),
                field.kind.as_str(),
                field.name
            )?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, record_types: &[&RecordType]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, record_types)?;
    writeln!(out).map_err(serde_json::Error::io)
}
