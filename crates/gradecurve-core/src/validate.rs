//! Non-fatal pre-grading checks.
//!
//! Grading itself fails fast on the first bad row; `validate` instead scans
//! a whole table and reports everything that would fail or looks suspect,
//! so an operator can fix the export before a grading run.

use crate::model::{ParsedResult, SubmissionRecord};
use crate::parser::parse_result;
use crate::timestamp::parse_timestamp;

/// A warning from submission-table validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based data-row index the warning refers to.
    pub row: usize,
    /// Student identifier, when the row has one.
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a submission table for common issues.
///
/// Reports unrecognized result text, malformed timestamps, missing student
/// identifiers, and pass counts exceeding totals. None of these block the
/// scan; every row is checked.
pub fn validate_records(records: &[SubmissionRecord]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let student = if record.student.is_empty() {
            warnings.push(ValidationWarning {
                row,
                student: None,
                message: "row has no student identifier".into(),
            });
            None
        } else {
            Some(record.student.clone())
        };

        match parse_result(&record.test_result) {
            Err(e) => {
                warnings.push(ValidationWarning {
                    row,
                    student,
                    message: e.to_string(),
                });
            }
            Ok(ParsedResult::CompileError) => {}
            Ok(ParsedResult::TestOutcome { passed, total }) => {
                if passed > total {
                    warnings.push(ValidationWarning {
                        row,
                        student: student.clone(),
                        message: format!("{passed} passed exceeds total of {total}"),
                    });
                }
                if let Err(e) = parse_timestamp(&record.date, &record.time) {
                    warnings.push(ValidationWarning {
                        row,
                        student,
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(student: &str, result: &str, date: &str, time: &str) -> SubmissionRecord {
        SubmissionRecord {
            student: student.into(),
            test_result: result.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    #[test]
    fn clean_table_has_no_warnings() {
        let records = vec![
            record("alice", "5 passed of 5", "9/22/2025", "11:00:00 PM"),
            record("bob", "Compile error", "", ""),
        ];
        assert!(validate_records(&records).is_empty());
    }

    #[test]
    fn flags_empty_student() {
        let records = vec![record("", "5 passed of 5", "9/22/2025", "11:00:00 PM")];
        let warnings = validate_records(&records);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("student identifier"));
        assert_eq!(warnings[0].row, 0);
    }

    #[test]
    fn flags_unrecognized_result() {
        let records = vec![record("alice", "hmm", "9/22/2025", "11:00:00 PM")];
        let warnings = validate_records(&records);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].student.as_deref(), Some("alice"));
    }

    #[test]
    fn flags_passed_over_total() {
        let records = vec![record("alice", "6 passed of 5", "9/22/2025", "11:00:00 PM")];
        let warnings = validate_records(&records);
        assert!(warnings.iter().any(|w| w.message.contains("exceeds")));
    }

    #[test]
    fn flags_bad_timestamp_only_for_test_outcomes() {
        let records = vec![
            record("alice", "5 passed of 5", "", ""),
            record("bob", "Compile error", "", ""),
        ];
        let warnings = validate_records(&records);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].student.as_deref(), Some("alice"));
    }

    #[test]
    fn collects_warnings_across_rows() {
        let records = vec![
            record("", "nope", "", ""),
            record("bob", "6 passed of 5", "bad", "worse"),
        ];
        let warnings = validate_records(&records);
        assert!(warnings.len() >= 4);
    }
}
