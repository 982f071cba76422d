//! JSON lines output

use std::io::Write;

use crate::analysis::UrlAnalysis;
use crate::output::traits::{OutputHandler, OutputResult};

/// Writes each analysis as one JSON object per line
pub struct JsonLinesOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputHandler for JsonLinesOutput<W> {
    fn record_analysis(&mut self, analysis: &UrlAnalysis) -> OutputResult<()> {
        serde_json::to_writer(&mut self.writer, analysis)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
