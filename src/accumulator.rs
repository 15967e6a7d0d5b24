//! Class-wide accumulation of parsed student records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::StudentRecord;

/// Records accepted during the parse pass, in file order.
#[derive(Debug, Default)]
pub struct ReportAccumulator {
    records: Vec<StudentRecord>,
    class_average_sum: f64,
    count: usize,
}

/// Everything the renderers need, computed once after parsing.
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub generated_at: DateTime<Utc>,
    pub students: &'a [StudentRecord],
    pub class_average: f64,
    pub highest_average: f64,
    pub top_students: Vec<&'a StudentRecord>,
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StudentRecord) {
        self.class_average_sum += record.average;
        self.count += 1;
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Mean of the individual averages, or `None` when nothing was accepted.
    pub fn class_average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.class_average_sum / self.count as f64)
        }
    }

    pub fn highest_average(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.records
                .iter()
                .fold(f64::NEG_INFINITY, |max, r| if r.average > max { r.average } else { max }),
        )
    }

    /// Every record whose average equals the maximum exactly, in file order.
    pub fn top_students(&self) -> Vec<&StudentRecord> {
        match self.highest_average() {
            Some(max) => self.records.iter().filter(|r| r.average == max).collect(),
            None => Vec::new(),
        }
    }

    /// Builds the report summary, or `None` when no records were accepted.
    pub fn summary(&self) -> Option<ReportSummary<'_>> {
        let class_average = self.class_average()?;
        let highest_average = self.highest_average()?;

        Some(ReportSummary {
            generated_at: Utc::now(),
            students: &self.records,
            class_average,
            highest_average,
            top_students: self.top_students(),
        })
    }
}
