//! Error types for line parsing.

use thiserror::Error;

/// Why a single input line was rejected.
///
/// The `Display` text is the fixed warning body written to the diagnostic
/// stream, followed by `": "` and the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Fewer than five comma-separated fields could be extracted.
    #[error("Skipping line due to incorrect number of fields")]
    FieldCount,

    /// A score field was not a base-10 integer.
    #[error("Skipping line due to invalid score conversion")]
    InvalidScore { field: String, kind: ScoreErrorKind },
}

/// Why a score field failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreErrorKind {
    /// No leading digits.
    NotANumber,
    /// Digits present but outside the 32-bit signed range.
    OutOfRange,
}

impl LineError {
    /// Formats the full warning line for `line`.
    pub fn warning(&self, line: &str) -> String {
        format!("Warning: {}: {}", self, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_warning() {
        assert_eq!(
            LineError::FieldCount.warning("John,Smith,90,80"),
            "Warning: Skipping line due to incorrect number of fields: John,Smith,90,80"
        );
    }

    #[test]
    fn test_invalid_score_warning() {
        let err = LineError::InvalidScore {
            field: "abc".to_string(),
            kind: ScoreErrorKind::NotANumber,
        };
        assert_eq!(
            err.warning("Jane,Doe,abc,90,80"),
            "Warning: Skipping line due to invalid score conversion: Jane,Doe,abc,90,80"
        );
    }
}
