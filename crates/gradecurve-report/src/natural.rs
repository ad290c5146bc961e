//! Natural string ordering.
//!
//! Assignment names like `hw2` and `hw10` should sort by the embedded
//! number, not lexicographically. The comparator splits both strings into
//! alternating digit/non-digit runs, compares digit runs numerically, and
//! compares text runs case-insensitively.

use std::cmp::Ordering;

/// Compare two strings with embedded numbers treated as numbers.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_runs = split_runs(a);
    let b_runs = split_runs(b);

    for (x, y) in a_runs.iter().zip(&b_runs) {
        let ord = if is_digit_run(x) && is_digit_run(y) {
            cmp_numeric(x, y)
        } else {
            x.to_lowercase().cmp(&y.to_lowercase())
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_runs.len().cmp(&b_runs.len())
}

/// Split into maximal runs that are either all digits or all non-digits.
fn split_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (i, ch) in s.char_indices() {
        let d = ch.is_ascii_digit();
        match in_digits {
            None => in_digits = Some(d),
            Some(prev) if prev != d => {
                runs.push(&s[start..i]);
                start = i;
                in_digits = Some(d);
            }
            _ => {}
        }
    }
    if start < s.len() {
        runs.push(&s[start..]);
    }

    runs
}

fn is_digit_run(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric comparison without parsing: strip leading zeros, then longer
/// means larger and equal lengths compare lexicographically. Immune to
/// runs too long for any integer type.
fn cmp_numeric(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}
