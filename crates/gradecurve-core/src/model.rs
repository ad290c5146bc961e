//! Core data model types for gradecurve.
//!
//! These are the fundamental types the grading pipeline operates on:
//! submission rows, parsed judge results, grading tunables, and the
//! per-assignment result collection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One row of an online-judge export, reduced to the fields grading reads.
///
/// The `date` and `time` fields are the two substrings split out of the
/// export's combined timestamp column. Both are empty when the raw column
/// did not match the expected shape; grading then fails on that row instead
/// of silently scoring it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Student identifier as given; may be empty for anonymous rows.
    pub student: String,
    /// Free-text judge output, e.g. "3 passed of 5" or "Compile error".
    pub test_result: String,
    /// Submission date substring, `M/D/YYYY`.
    pub date: String,
    /// Submission time substring, `H:MM:SS AM|PM`.
    pub time: String,
}

/// Outcome of parsing judge result text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedResult {
    /// The submission failed to build; always grades 0.0.
    CompileError,
    /// Pass/total counts extracted from the result text.
    TestOutcome { passed: u32, total: u32 },
}

impl ParsedResult {
    /// Fraction of tests passed, in the usual case. `total == 0` counts as
    /// 0.0 rather than dividing by zero. `passed > total` is not clamped;
    /// the ratio is reported as computed.
    pub fn fraction(&self) -> f64 {
        match *self {
            ParsedResult::CompileError => 0.0,
            ParsedResult::TestOutcome { total: 0, .. } => 0.0,
            ParsedResult::TestOutcome { passed, total } => f64::from(passed) / f64::from(total),
        }
    }
}

/// How a raw curved score is snapped to a reportable grade.
///
/// Exactly one policy applies to a grading run; policies are never mixed
/// within an assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Round half up to the nearest 0.5 (the default).
    #[default]
    NearestHalf,
    /// Floor to a whole point.
    FloorWhole,
    /// Ceiling to the next 0.5.
    CeilHalf,
}

impl RoundingPolicy {
    /// Apply the policy to a raw grade. The result is not clamped here.
    pub fn apply(self, grade: f64) -> f64 {
        match self {
            RoundingPolicy::NearestHalf => (grade * 2.0).round() / 2.0,
            RoundingPolicy::FloorWhole => grade.floor(),
            RoundingPolicy::CeilHalf => (grade * 2.0).ceil() / 2.0,
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingPolicy::NearestHalf => write!(f, "nearest-half"),
            RoundingPolicy::FloorWhole => write!(f, "floor-whole"),
            RoundingPolicy::CeilHalf => write!(f, "ceil-half"),
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest-half" | "nearest" => Ok(RoundingPolicy::NearestHalf),
            "floor-whole" | "floor" => Ok(RoundingPolicy::FloorWhole),
            "ceil-half" | "ceil" => Ok(RoundingPolicy::CeilHalf),
            other => Err(format!("unknown rounding policy: {other}")),
        }
    }
}

/// Grading tunables shared by every row of a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradeScale {
    /// Curve exponent applied to the pass fraction: `< 1` generous,
    /// `1` linear, `> 1` harsh.
    #[serde(default = "default_curve")]
    pub curve: f64,
    /// Rounding policy for the final grade.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

fn default_curve() -> f64 {
    0.8
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            curve: default_curve(),
            rounding: RoundingPolicy::default(),
        }
    }
}

/// One student's graded row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedRow {
    /// Student identifier as it appeared in the export.
    pub student: String,
    /// Final grade after curve, penalty, rounding, and clamping.
    pub grade: f64,
    /// The lateness penalty that was deducted (0.0 for compile errors).
    pub penalty: f64,
}

/// All grades for one assignment, in input-row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResultSet {
    /// Assignment name, an opaque key supplied by the caller.
    pub assignment: String,
    /// One row per input record, same order as the input.
    pub rows: Vec<GradedRow>,
}

impl AssignmentResultSet {
    /// All non-empty student identifiers, deduplicated and sorted.
    pub fn students(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .filter(|r| !r.student.is_empty())
            .map(|r| r.student.as_str())
            .collect()
    }

    /// The grade for the first row matching `student`, or 0.0 when the
    /// student made no submission. Absence is not an error.
    pub fn grade_of(&self, student: &str) -> f64 {
        self.rows
            .iter()
            .find(|r| r.student == student)
            .map(|r| r.grade)
            .unwrap_or(0.0)
    }
}
