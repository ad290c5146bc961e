//! Grading error types.
//!
//! These errors represent the three failure kinds the grading pipeline can
//! raise. They are typed so callers can distinguish a bad row from a bad
//! configuration without string matching.

use thiserror::Error;

/// Errors raised while grading an assignment.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The test-result text did not contain exactly two digit runs and was
    /// not a compile-error marker.
    #[error("unrecognized test result text: {text:?}")]
    ResultParse { text: String },

    /// A submission date or time substring did not match its required
    /// pattern.
    #[error("submission timestamp does not match the expected format: {text:?}")]
    TimestampFormat { text: String },

    /// No due date is registered for the assignment.
    #[error("no due date configured for assignment '{assignment}'")]
    MissingDueDate { assignment: String },
}

impl GradeError {
    /// Returns `true` if this error is a configuration problem rather than a
    /// bad input row. A configuration error means the assignment could never
    /// have been graded at all.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GradeError::MissingDueDate { .. })
    }
}
