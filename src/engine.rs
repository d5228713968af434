//! Per-file processing cycle: classify, ingest, report.

use crate::aggregate::Aggregator;
use crate::config::Separators;
use crate::decoder::Decoder;
use crate::error::{EngineError, Result};
use crate::record::Record;
use crate::report;
use log::debug;
use std::io::{BufRead, Write};

/// Drives one file's aggregation cycle.
///
/// One engine handles one file start to finish. The watcher builds a
/// fresh engine per file so nothing survives a cycle; callers that reuse
/// an engine must [`reset`](ReportEngine::reset) it between files or the
/// previous file's records leak into the next report.
pub struct ReportEngine {
    decoder: Decoder,
    aggregator: Aggregator,
}

impl ReportEngine {
    /// Creates an engine with an empty aggregator.
    pub fn new(separators: Separators) -> Self {
        ReportEngine {
            decoder: Decoder::new(separators),
            aggregator: Aggregator::new(),
        }
    }

    /// Decodes and ingests every line of the reader.
    ///
    /// Unknown tags are ingested as no-op records. A malformed field
    /// aborts the whole cycle, carrying the offending 1-based line number.
    pub fn process_lines<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let record = self
                .decoder
                .classify(&line)
                .map_err(|source| EngineError::Decode {
                    line: line_no,
                    source,
                })?;
            if matches!(record, Record::Unknown) && !line.is_empty() {
                debug!("line {}: unrecognized type tag, ignoring content", line_no);
            }
            self.aggregator.ingest(record);
        }
        Ok(())
    }

    /// Renders the report and writes its four lines, newline-terminated.
    pub fn write_report<W: Write>(&self, mut writer: W) -> Result<()> {
        for line in report::render(&self.aggregator) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Clears the aggregator so the engine can start the next cycle.
    pub fn reset(&mut self) {
        self.aggregator.reset();
    }

    /// Read access to the accumulated state.
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }
}
