//! Aggregate statistics over one assignment's grades.

use serde::{Deserialize, Serialize};

use crate::model::AssignmentResultSet;

/// Summary figures for one graded assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentStats {
    /// Assignment name.
    pub assignment: String,
    /// Number of submission rows graded.
    pub submissions: usize,
    /// Distinct non-empty student identifiers.
    pub students: usize,
    /// Mean grade across rows (0.0 for an empty table).
    pub mean: f64,
    /// Highest grade.
    pub max: f64,
    /// Lowest grade.
    pub min: f64,
    /// Rows that had a lateness penalty deducted.
    pub penalized: usize,
    /// Rows that graded to exactly 0.0.
    pub zeros: usize,
}

/// Compute summary statistics for a result set.
pub fn summarize(set: &AssignmentResultSet) -> AssignmentStats {
    let submissions = set.rows.len();
    let students = set.students().len();

    let (mut sum, mut max, mut min) = (0.0f64, f64::NEG_INFINITY, f64::INFINITY);
    let mut penalized = 0usize;
    let mut zeros = 0usize;

    for row in &set.rows {
        sum += row.grade;
        max = max.max(row.grade);
        min = min.min(row.grade);
        if row.penalty > 0.0 {
            penalized += 1;
        }
        if row.grade == 0.0 {
            zeros += 1;
        }
    }

    let (mean, max, min) = if submissions == 0 {
        (0.0, 0.0, 0.0)
    } else {
        (sum / submissions as f64, max, min)
    };

    AssignmentStats {
        assignment: set.assignment.clone(),
        submissions,
        students,
        mean,
        max,
        min,
        penalized,
        zeros,
    }
}
