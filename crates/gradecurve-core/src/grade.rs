//! Grade computation: curve, penalty deduction, rounding, clamping.

use chrono::NaiveDateTime;

use crate::model::{GradeScale, ParsedResult};
use crate::penalty::penalty;

/// Maximum reportable grade.
pub const MAX_GRADE: f64 = 5.0;

/// The grade and deducted penalty for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGrade {
    pub grade: f64,
    pub penalty: f64,
}

/// Raw curved score before any penalty: `5.0 * fraction^k`.
///
/// Monotonically non-decreasing in `fraction` for any `k > 0`.
pub fn curve_score(fraction: f64, k: f64) -> f64 {
    MAX_GRADE * fraction.powf(k)
}

/// Compute the final grade for one parsed row.
///
/// A compile error scores 0.0 with no penalty applied; the submission
/// timestamp is irrelevant in that case. Otherwise the curved score has the
/// lateness penalty subtracted, is rounded per the scale's policy, and is
/// clamped to `[0.0, MAX_GRADE]`.
pub fn compute_grade(
    result: ParsedResult,
    submission: NaiveDateTime,
    due: NaiveDateTime,
    scale: &GradeScale,
) -> RowGrade {
    if result == ParsedResult::CompileError {
        return RowGrade {
            grade: 0.0,
            penalty: 0.0,
        };
    }

    let deduction = penalty(submission, due);
    let raw = curve_score(result.fraction(), scale.curve) - deduction;
    let rounded = scale.rounding.apply(raw);

    RowGrade {
        grade: rounded.clamp(0.0, MAX_GRADE),
        penalty: deduction,
    }
}
