//! Line parser for `FirstName,LastName,Score1,Score2,Score3` records.

use crate::error::{LineError, ScoreErrorKind};
use crate::record::StudentRecord;

/// The five raw fields of one input line, borrowed from the line.
#[derive(Debug, PartialEq, Eq)]
pub struct LineFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub scores: [&'a str; 3],
}

/// Splits `line` into its five fields.
///
/// The first four fields end at a comma; the fifth is the rest of the line
/// and must not be empty. Fields are not trimmed.
///
/// # Errors
///
/// Returns [`LineError::FieldCount`] when five fields cannot be extracted.
pub fn parse_line(line: &str) -> Result<LineFields<'_>, LineError> {
    let mut parts = line.splitn(5, ',');

    match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some(first_name), Some(last_name), Some(s1), Some(s2), Some(s3)) if !s3.is_empty() => {
            Ok(LineFields {
                first_name,
                last_name,
                scores: [s1, s2, s3],
            })
        }
        _ => Err(LineError::FieldCount),
    }
}

/// Converts one score field to an integer.
///
/// Leading whitespace and an optional sign are accepted, followed by at least
/// one decimal digit. Anything after the digits is ignored, so a trailing
/// `\r` or space does not reject the score.
///
/// # Errors
///
/// Returns [`LineError::InvalidScore`] when there are no digits or the value
/// does not fit in an `i32`.
pub fn parse_score(field: &str) -> Result<i32, LineError> {
    let invalid = |kind| LineError::InvalidScore {
        field: field.to_string(),
        kind,
    };

    let s = field.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'));

    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digit_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_len == 0 {
        return Err(invalid(ScoreErrorKind::NotANumber));
    }

    s[..sign_len + digit_len]
        .parse::<i32>()
        .map_err(|_| invalid(ScoreErrorKind::OutOfRange))
}

/// Parses a full line into a [`StudentRecord`].
///
/// All three scores must convert before a record is built.
pub fn parse_record(line: &str) -> Result<StudentRecord, LineError> {
    let fields = parse_line(line)?;

    let [s1, s2, s3] = fields.scores;
    let scores = [parse_score(s1)?, parse_score(s2)?, parse_score(s3)?];

    Ok(StudentRecord::new(
        fields.first_name,
        fields.last_name,
        scores,
    ))
}
