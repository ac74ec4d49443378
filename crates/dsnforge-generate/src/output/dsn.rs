use std::io::{BufWriter, Write};

use dsnforge_core::SerializedLine;

/// Line-oriented DSN text sink.
///
/// Every line is `code,'value'` followed by a single `\n`; section headers
/// carry an empty value.
pub struct DsnWriter<W: Write> {
    inner: CountingWriter<BufWriter<W>>,
    lines: u64,
}

impl<W: Write> DsnWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: CountingWriter::new(BufWriter::new(inner)),
            lines: 0,
        }
    }

    pub fn write_section(&mut self, section: &str) -> std::io::Result<()> {
        self.write_line(&SerializedLine::section(section))
    }

    pub fn write_line(&mut self, line: &SerializedLine) -> std::io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn write_lines(&mut self, lines: &[SerializedLine]) -> std::io::Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    /// Lines written so far, section headers included.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Bytes accepted by the underlying writer.
    ///
    /// Buffered bytes are only counted once flushed.
    pub fn bytes_written(&self) -> u64 {
        self.inner.bytes_written()
    }

    /// Flush and hand back the wrapped writer.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.inner
            .into_inner()
            .into_inner()
            .map_err(|err| err.into_error())
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_headers_and_fields() {
        let mut writer = DsnWriter::new(Vec::new());
        writer.write_section("S10.G00.00").unwrap();
        writer
            .write_lines(&[SerializedLine::new("S10.G00.00.005", "01")])
            .unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.lines_written(), 2);

        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "S10.G00.00,''\nS10.G00.00.005,'01'\n"
        );
    }
}
