//! End-to-end pipeline tests: grade real fixture exports, then merge them
//! into a gradebook, checking the exact grades along the way.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradecurve() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gradecurve").unwrap()
}

const DUE_DATES: &str = r#"{
    "hw2": "9/22/2025 11:59 PM",
    "hw10": "10/6/2025 11:59 PM"
}"#;

const HW2: &str = "\
Submitted By,Test Result,Submission Date,Grade
alice,5 passed of 5,\"9/22/2025, 11:00:00 PM\",
bob,3 passed of 5,\"9/22/2025, 10:15:21 PM\",
carol,Compile error,\"9/23/2025, 9:00:00 AM\",
dave,5 passed of 5,\"9/24/2025, 1:00:00 PM\",
eve,0 passed of 5,\"9/22/2025, 8:00:00 PM\",
";

const HW10: &str = "\
Submitted By,Test Result,Submission Date,Grade
alice,4 passed of 5,\"10/6/2025, 1:00:00 PM\",
frank,5 passed of 5,\"10/6/2025, 11:58:59 PM\",
";

fn setup(dir: &TempDir) {
    let exports = dir.path().join("exports");
    std::fs::create_dir_all(&exports).unwrap();
    std::fs::write(exports.join("hw2.csv"), HW2).unwrap();
    std::fs::write(exports.join("hw10.csv"), HW10).unwrap();
    std::fs::write(dir.path().join("due_dates.json"), DUE_DATES).unwrap();
}

fn run_grade(dir: &TempDir, extra: &[&str]) {
    let mut args = vec![
        "grade",
        "--exports",
        "exports",
        "--output",
        "graded",
        "--due-dates",
        "due_dates.json",
    ];
    args.extend_from_slice(extra);

    gradecurve()
        .current_dir(dir.path())
        .args(&args)
        .assert()
        .success()
        .stderr(predicate::str::contains("Graded files written"));
}

#[test]
fn grade_writes_expected_grades() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    run_grade(&dir, &[]);

    let hw2 = std::fs::read_to_string(dir.path().join("graded/hw2_graded.csv")).unwrap();
    let mut lines = hw2.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Submitted By,Test Result,Submission Date,Grade,Submission Hour"
    );
    // Full marks on time.
    assert_eq!(
        lines.next().unwrap(),
        "alice,5 passed of 5,9/22/2025,5.0,11:00:00 PM"
    );
    // 5 * 0.6^0.8 = 3.32, nearest half 3.5.
    assert_eq!(
        lines.next().unwrap(),
        "bob,3 passed of 5,9/22/2025,3.5,10:15:21 PM"
    );
    // Compile error scores zero, late or not.
    assert_eq!(
        lines.next().unwrap(),
        "carol,Compile error,9/23/2025,0.0,9:00:00 AM"
    );
    // Two days late: 5.0 - 2.0 penalty.
    assert_eq!(
        lines.next().unwrap(),
        "dave,5 passed of 5,9/24/2025,3.0,1:00:00 PM"
    );
    // Nothing passed.
    assert_eq!(
        lines.next().unwrap(),
        "eve,0 passed of 5,9/22/2025,0.0,8:00:00 PM"
    );
}

#[test]
fn grade_summary_table_reports_each_assignment() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    gradecurve()
        .current_dir(dir.path())
        .args([
            "grade",
            "--exports",
            "exports",
            "--output",
            "graded",
            "--due-dates",
            "due_dates.json",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("hw2"))
        .stderr(predicate::str::contains("hw10"));
}

#[test]
fn rounding_override_changes_grades() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    run_grade(&dir, &["--rounding", "floor-whole"]);

    let hw2 = std::fs::read_to_string(dir.path().join("graded/hw2_graded.csv")).unwrap();
    // 3.32 floors to 3.0 under floor-whole.
    assert!(hw2.contains("bob,3 passed of 5,9/22/2025,3.0,10:15:21 PM"));
}

#[test]
fn linear_curve_override() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    run_grade(&dir, &["--curve", "1.0"]);

    let hw2 = std::fs::read_to_string(dir.path().join("graded/hw2_graded.csv")).unwrap();
    // 5 * 0.6 = 3.0 exactly under a linear curve.
    assert!(hw2.contains("bob,3 passed of 5,9/22/2025,3.0,10:15:21 PM"));
}

#[test]
fn merge_builds_natural_ordered_gradebook() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    run_grade(&dir, &[]);

    gradecurve()
        .current_dir(dir.path())
        .args(["merge", "--graded", "graded", "--output", "gradebook.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gradebook saved to"));

    let book = std::fs::read_to_string(dir.path().join("gradebook.csv")).unwrap();
    let lines: Vec<&str> = book.lines().collect();

    // hw2 sorts before hw10 despite "hw10.csv" < "hw2.csv" lexically.
    assert_eq!(lines[0], "Student,hw2,hw10");
    assert_eq!(lines[1], "alice,5.0,4.0");
    assert_eq!(lines[2], "bob,3.5,0.0");
    assert_eq!(lines[3], "carol,0.0,0.0");
    assert_eq!(lines[4], "dave,3.0,0.0");
    assert_eq!(lines[5], "eve,0.0,0.0");
    // frank only submitted hw10; hw2 fills with 0.0.
    assert_eq!(lines[6], "frank,0.0,5.0");
}

#[test]
fn merge_markdown_format() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    run_grade(&dir, &[]);

    gradecurve()
        .current_dir(dir.path())
        .args(["merge", "--graded", "graded", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Student |"))
        .stdout(predicate::str::contains("| alice | 5.0 | 4.0 |"));

    // Markdown goes to stdout; no gradebook file is written.
    assert!(!dir.path().join("gradebook.csv").exists());
}

#[test]
fn regrading_is_idempotent() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    run_grade(&dir, &[]);
    let first = std::fs::read_to_string(dir.path().join("graded/hw2_graded.csv")).unwrap();

    run_grade(&dir, &[]);
    let second = std::fs::read_to_string(dir.path().join("graded/hw2_graded.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn malformed_row_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    let broken = "\
Submitted By,Test Result,Submission Date,Grade
alice,everything passed I promise,\"9/22/2025, 11:00:00 PM\",
";
    std::fs::write(dir.path().join("exports/hw2.csv"), broken).unwrap();

    gradecurve()
        .current_dir(dir.path())
        .args([
            "grade",
            "--exports",
            "exports",
            "--output",
            "graded",
            "--due-dates",
            "due_dates.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized test result"));
}
