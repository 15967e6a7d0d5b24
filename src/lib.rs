pub mod accumulator;
pub mod error;
pub mod generator;
pub mod output;
pub mod parser;
pub mod record;

pub use accumulator::{ReportAccumulator, ReportSummary};
pub use error::{LineError, ScoreErrorKind};
pub use generator::{OutputFormat, ReportGenerator, ReportOutcome};
pub use record::StudentRecord;
