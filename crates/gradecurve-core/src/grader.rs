//! Per-assignment grading orchestration.
//!
//! An [`AssignmentGrader`] owns one assignment's due date and grading scale
//! and applies the full pipeline (result parse, timestamp parse, penalty,
//! curve) to each submission row independently. A malformed row aborts the
//! assignment rather than silently scoring it — data-quality problems
//! surface at the caller, not in the gradebook.

use chrono::NaiveDateTime;

use crate::error::GradeError;
use crate::grade::compute_grade;
use crate::model::{AssignmentResultSet, GradeScale, GradedRow, ParsedResult, SubmissionRecord};
use crate::parser::parse_result;
use crate::timestamp::parse_timestamp;

/// Grades every row of one assignment's submission table.
///
/// Each instance is independently constructible, holds no shared mutable
/// state, and can run concurrently with graders for other assignments.
#[derive(Debug, Clone)]
pub struct AssignmentGrader {
    assignment: String,
    due: NaiveDateTime,
    scale: GradeScale,
}

impl AssignmentGrader {
    pub fn new(assignment: impl Into<String>, due: NaiveDateTime, scale: GradeScale) -> Self {
        Self {
            assignment: assignment.into(),
            due,
            scale,
        }
    }

    pub fn assignment(&self) -> &str {
        &self.assignment
    }

    /// Grade every record, producing one row per input in input order.
    ///
    /// Rows are independent; the first unparsable row fails the whole
    /// assignment. Grading is deterministic: the same records and scale
    /// always produce the same result set.
    pub fn grade_all(
        &self,
        records: &[SubmissionRecord],
    ) -> Result<AssignmentResultSet, GradeError> {
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let row = match parse_result(&record.test_result)? {
                // Compile failures score 0.0 without looking at the
                // timestamp; an unparsable stamp must not fail these rows.
                ParsedResult::CompileError => GradedRow {
                    student: record.student.clone(),
                    grade: 0.0,
                    penalty: 0.0,
                },
                outcome => {
                    let submitted = parse_timestamp(&record.date, &record.time)?;
                    let graded = compute_grade(outcome, submitted, self.due, &self.scale);
                    GradedRow {
                        student: record.student.clone(),
                        grade: graded.grade,
                        penalty: graded.penalty,
                    }
                }
            };
            rows.push(row);
        }

        tracing::info!(
            assignment = %self.assignment,
            rows = rows.len(),
            "graded assignment"
        );

        Ok(AssignmentResultSet {
            assignment: self.assignment.clone(),
            rows,
        })
    }
}
