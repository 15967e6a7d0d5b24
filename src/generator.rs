//! Single-pass report generation: open, parse, aggregate, render.

use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::accumulator::ReportAccumulator;
use crate::output::{print_json, render_no_data, render_report};
use crate::parser::parse_record;

pub const DEFAULT_INPUT: &str = "student_scores.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How a run of [`ReportGenerator::generate`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Rendered { students: usize },
    NoData,
    InputUnavailable,
}

#[derive(Debug, Clone)]
pub struct ReportGenerator {
    input: PathBuf,
    format: OutputFormat,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

impl ReportGenerator {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Runs the whole report.
    ///
    /// The report goes to `out`; warnings and the open-failure error go to
    /// `diag`. An input that cannot be opened is not an `Err`, it ends the
    /// run with [`ReportOutcome::InputUnavailable`].
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the report or a diagnostic fails.
    #[tracing::instrument(skip(self, out, diag), fields(input = %self.input.display()))]
    pub fn generate<O: Write, E: Write>(&self, out: &mut O, diag: &mut E) -> Result<ReportOutcome> {
        let file = match File::open(&self.input) {
            Ok(file) => file,
            Err(e) => {
                debug!(error = %e, "Input open failed");
                writeln!(
                    diag,
                    "Error: Could not open the file '{}'. Please ensure the file exists in the same directory.",
                    self.input.display()
                )?;
                return Ok(ReportOutcome::InputUnavailable);
            }
        };

        // The file handle is dropped at the end of this block, before rendering.
        let accumulator = {
            let mut reader = BufReader::new(file);
            read_records(&mut reader, diag)?
        };

        let Some(summary) = accumulator.summary() else {
            info!("No records accepted");
            render_no_data(out)?;
            return Ok(ReportOutcome::NoData);
        };

        match self.format {
            OutputFormat::Text => render_report(&summary, out)?,
            OutputFormat::Json => print_json(&summary, out)?,
        }

        info!(
            students = accumulator.len(),
            class_average = summary.class_average,
            "Report rendered"
        );
        Ok(ReportOutcome::Rendered {
            students: accumulator.len(),
        })
    }
}

/// Reads every data line after the header into an accumulator.
///
/// Rejected lines produce one warning each on `diag`; empty lines are
/// skipped silently. A read error ends the input, the same as end of file.
pub fn read_records<R: BufRead, E: Write>(reader: &mut R, diag: &mut E) -> Result<ReportAccumulator> {
    let mut accumulator = ReportAccumulator::new();
    let mut buf = Vec::new();

    // header
    if !next_line(reader, &mut buf) {
        debug!("Input is empty");
        return Ok(accumulator);
    }

    let mut line_no = 1usize;
    while next_line(reader, &mut buf) {
        line_no += 1;

        let raw = String::from_utf8_lossy(&buf);
        let text: &str = &raw;
        let line = text.strip_suffix('\n').unwrap_or(text);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            continue;
        }

        match parse_record(line) {
            Ok(record) => {
                debug!(line_no, name = %record.full_name, average = record.average, "Record accepted");
                accumulator.push(record);
            }
            Err(e) => {
                debug!(line_no, error = ?e, "Record rejected");
                writeln!(diag, "{}", e.warning(line))?;
            }
        }
    }

    Ok(accumulator)
}

/// Reads the next raw line into `buf`. Returns `false` at end of input or on
/// a read error.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> bool {
    buf.clear();
    match reader.read_until(b'\n', buf) {
        Ok(0) => false,
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "Input read failed, treating as end of input");
            false
        }
    }
}
