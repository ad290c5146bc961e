//! Tiered late-penalty schedule.
//!
//! Lateness is penalized in coarse half-point steps rather than continuous
//! decay: a flat half point for any late submission, plus another half point
//! for every full 12-hour block elapsed since the day after the due date.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Compute the lateness penalty for one submission.
///
/// Tiers, evaluated in order:
/// 1. on or before the due timestamp: 0.0;
/// 2. late but on the due date's calendar day: 0.5;
/// 3. late on a later calendar day: 0.5 plus 0.5 for each full 12-hour
///    block since the midnight that ended the due date.
///
/// The result is always a non-negative multiple of 0.5.
pub fn penalty(submission: NaiveDateTime, due: NaiveDateTime) -> f64 {
    if submission <= due {
        return 0.0;
    }
    if submission.date() == due.date() {
        return 0.5;
    }

    // Case ordering guarantees submission.date() > due.date(), so the
    // submission is at or past this midnight and hours_late is non-negative.
    let midnight = due.date().and_time(NaiveTime::MIN) + Duration::days(1);
    let hours_late = (submission - midnight).num_hours();

    0.5 + (hours_late / 12) as f64 * 0.5
}
