use grade_report::{OutputFormat, ReportGenerator, ReportOutcome};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("student_scores.txt");
    fs::write(&path, content).unwrap();
    path
}

fn run(generator: &ReportGenerator) -> (ReportOutcome, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let outcome = generator.generate(&mut out, &mut diag).unwrap();
    (
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn test_full_pipeline_with_ties() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "FirstName,LastName,Score1,Score2,Score3\nAlice,Smith,90,80,70\nBob,Jones,90,80,70\n",
    );

    let (outcome, out, diag) = run(&ReportGenerator::new(path));

    assert_eq!(outcome, ReportOutcome::Rendered { students: 2 });
    assert!(diag.is_empty());
    assert!(out.contains("Class Average:                80.00\n"));
    assert!(out.contains("-- Highest Average --\nAlice Smith (80.00), Bob Jones (80.00)\n"));
}

#[test]
fn test_header_only_file() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "FirstName,LastName,Score1,Score2,Score3\n");

    let (outcome, out, diag) = run(&ReportGenerator::new(path));

    assert_eq!(outcome, ReportOutcome::NoData);
    assert_eq!(out, "No student data was successfully processed.\n");
    assert!(diag.is_empty());
}

#[test]
fn test_bad_lines_do_not_stop_processing() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "h\nJane,Doe,abc,90,80\nJohn,Smith,90,80\n\nCara,Lee,100,95,90\n",
    );

    let (outcome, out, diag) = run(&ReportGenerator::new(path));

    assert_eq!(outcome, ReportOutcome::Rendered { students: 1 });
    assert!(out.contains("Cara Lee                      95.00\n"));
    assert!(!out.contains("Jane"));
    assert_eq!(
        diag.lines().collect::<Vec<_>>(),
        [
            "Warning: Skipping line due to invalid score conversion: Jane,Doe,abc,90,80",
            "Warning: Skipping line due to incorrect number of fields: John,Smith,90,80",
        ]
    );
}

#[test]
fn test_all_lines_rejected_is_no_data() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "h\nJane,Doe,abc,90,80\n");

    let (outcome, out, diag) = run(&ReportGenerator::new(path));

    assert_eq!(outcome, ReportOutcome::NoData);
    assert_eq!(out, "No student data was successfully processed.\n");
    assert_eq!(diag.lines().count(), 1);
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "h\nAlice,Smith,90,80,70\nBob,Jones,60,60,60\n");

    let (_, out, _) = run(&ReportGenerator::new(path).with_format(OutputFormat::Json));

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["students"].as_array().unwrap().len(), 2);
    assert_eq!(value["highest_average"], 80.0);
    assert_eq!(value["class_average"], 70.0);
    assert_eq!(value["top_students"][0]["full_name"], "Alice Smith");
}
