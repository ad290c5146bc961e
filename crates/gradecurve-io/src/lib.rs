//! gradecurve-io — filesystem collaborators for the grading core.
//!
//! Everything here is a thin wrapper with no grading logic: the tool
//! configuration file, the due-date lookup table, and CSV submission
//! tables.

pub mod config;
pub mod due_dates;
pub mod table;
