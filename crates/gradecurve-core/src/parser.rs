//! Judge result-text parser.
//!
//! Extracts pass/total counts from the free-text result column, or flags a
//! compile failure. The source format is a fixed phrase such as
//! `"<passed> passed of <total>"`, but only the digit runs are relied on.

use crate::error::GradeError;
use crate::model::ParsedResult;

/// Parse one result-text cell into a [`ParsedResult`].
///
/// The input is trimmed and matched case-insensitively against the literal
/// token "compile error". Otherwise it must contain exactly two maximal
/// digit runs, read left to right as `(passed, total)`. Any other count of
/// digit runs fails the row.
pub fn parse_result(raw: &str) -> Result<ParsedResult, GradeError> {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("compile error") {
        return Ok(ParsedResult::CompileError);
    }

    let runs = digit_runs(trimmed);
    match runs.as_slice() {
        [passed, total] => {
            let passed = parse_count(passed, raw)?;
            let total = parse_count(total, raw)?;
            Ok(ParsedResult::TestOutcome { passed, total })
        }
        _ => Err(GradeError::ResultParse {
            text: raw.to_string(),
        }),
    }
}

/// Maximal runs of ASCII digits, left to right.
fn digit_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, ch) in s.char_indices() {
        match (ch.is_ascii_digit(), start) {
            (true, None) => start = Some(i),
            (false, Some(from)) => {
                runs.push(&s[from..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(from) = start {
        runs.push(&s[from..]);
    }

    runs
}

fn parse_count(run: &str, raw: &str) -> Result<u32, GradeError> {
    run.parse().map_err(|_| GradeError::ResultParse {
        text: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_passed_of_total() {
        assert_eq!(
            parse_result("3 passed of 5").unwrap(),
            ParsedResult::TestOutcome {
                passed: 3,
                total: 5,
            }
        );
    }

    #[test]
    fn parse_compile_error_any_casing() {
        for text in ["Compile error", "COMPILE ERROR", "compile error", "  Compile Error \n"] {
            assert_eq!(parse_result(text).unwrap(), ParsedResult::CompileError);
        }
    }

    #[test]
    fn parse_zero_passed() {
        assert_eq!(
            parse_result("0 passed of 5").unwrap(),
            ParsedResult::TestOutcome {
                passed: 0,
                total: 5,
            }
        );
    }

    #[test]
    fn parse_surrounding_noise_still_two_runs() {
        // Phrasing varies between judge versions; only the digit runs count.
        assert_eq!(
            parse_result("Passed 12 out of 15 tests").unwrap(),
            ParsedResult::TestOutcome {
                passed: 12,
                total: 15,
            }
        );
    }

    #[test]
    fn parse_rejects_wrong_run_count() {
        assert!(parse_result("all tests passed").is_err());
        assert!(parse_result("5").is_err());
        assert!(parse_result("1 of 2 of 3").is_err());
        assert!(parse_result("").is_err());
    }

    #[test]
    fn parse_rejects_oversized_count() {
        assert!(parse_result("99999999999999999999 passed of 5").is_err());
    }

    #[test]
    fn parse_error_carries_offending_text() {
        let err = parse_result("no numbers here").unwrap_err();
        assert!(err.to_string().contains("no numbers here"));
    }
}
