//! Output formatting for grade reports.
//!
//! Supports the fixed-width text table and JSON serialization.

use anyhow::Result;

use crate::accumulator::ReportSummary;
use std::io::Write;

const NAME_WIDTH: usize = 25;
const VALUE_WIDTH: usize = 10;
const RULE_WIDTH: usize = NAME_WIDTH + VALUE_WIDTH;
const TITLE: &str = "        Student Grade Report       ";

const NO_DATA_MESSAGE: &str = "No student data was successfully processed.";

/// Writes the text report table.
pub fn render_report<W: Write>(summary: &ReportSummary<'_>, out: &mut W) -> Result<()> {
    let banner = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", banner)?;

    writeln!(out, "{:<NAME_WIDTH$}{:>VALUE_WIDTH$}", "Name", "Average")?;
    writeln!(out, "{}", rule)?;
    for student in summary.students {
        writeln!(
            out,
            "{:<NAME_WIDTH$}{:>VALUE_WIDTH$.2}",
            student.full_name, student.average
        )?;
    }
    writeln!(out, "{}", rule)?;

    writeln!(
        out,
        "{:<NAME_WIDTH$}{:>VALUE_WIDTH$.2}",
        "Class Average:", summary.class_average
    )?;

    writeln!(out)?;
    writeln!(out, "-- Highest Average --")?;
    let top = summary
        .top_students
        .iter()
        .map(|s| format!("{} ({:.2})", s.full_name, summary.highest_average))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{}", top)?;
    writeln!(out, "{}", banner)?;

    Ok(())
}

pub fn render_no_data<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", NO_DATA_MESSAGE)?;
    Ok(())
}

/// Writes the summary as pretty-printed JSON.
pub fn print_json<W: Write>(summary: &ReportSummary<'_>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
