//! gradecurve-report — merges per-assignment results into one gradebook.

pub mod gradebook;
pub mod natural;
