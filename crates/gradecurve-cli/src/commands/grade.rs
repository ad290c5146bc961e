//! The `gradecurve grade` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecurve_core::grader::AssignmentGrader;
use gradecurve_core::model::RoundingPolicy;
use gradecurve_core::statistics::{summarize, AssignmentStats};
use gradecurve_io::config::load_config_from;
use gradecurve_io::due_dates::DueDateTable;
use gradecurve_io::table::{scan_exports, SubmissionTable};

pub fn execute(
    exports: Option<PathBuf>,
    output: Option<PathBuf>,
    due_dates: Option<PathBuf>,
    curve: Option<f64>,
    rounding: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let exports = exports.unwrap_or_else(|| config.exports_dir.clone());
    let output = output.unwrap_or_else(|| config.graded_dir.clone());
    let due_dates_path = due_dates.unwrap_or_else(|| config.due_dates_file.clone());

    let mut scale = config.scale();
    if let Some(k) = curve {
        scale.curve = k;
    }
    if let Some(r) = &rounding {
        scale.rounding = r
            .parse::<RoundingPolicy>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    anyhow::ensure!(
        scale.curve.is_finite() && scale.curve > 0.0,
        "curve must be a finite positive number"
    );

    let due_table = DueDateTable::load(&due_dates_path)?;

    let files = if exports.is_file() {
        vec![exports.clone()]
    } else {
        scan_exports(&exports)?
    };
    anyhow::ensure!(
        !files.is_empty(),
        "no export files found in {}",
        exports.display()
    );

    let mut stats = Vec::new();
    for path in &files {
        let table = SubmissionTable::load(path)?;
        // Resolve the due date before touching any row; a missing entry
        // must fail the assignment, never grade it.
        let due = due_table.require(table.assignment())?;
        let grader = AssignmentGrader::new(table.assignment(), due, scale);
        let results = grader.grade_all(table.records())?;
        table.write_graded(&output, &results)?;
        stats.push(summarize(&results));
    }

    print_summary(&stats);
    eprintln!("\nGraded files written to: {}", output.display());

    Ok(())
}

fn print_summary(stats: &[AssignmentStats]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Assignment",
        "Rows",
        "Students",
        "Mean",
        "Max",
        "Min",
        "Late",
        "Zeros",
    ]);

    for s in stats {
        table.add_row(vec![
            Cell::new(&s.assignment),
            Cell::new(s.submissions),
            Cell::new(s.students),
            Cell::new(format!("{:.2}", s.mean)),
            Cell::new(format!("{:.1}", s.max)),
            Cell::new(format!("{:.1}", s.min)),
            Cell::new(s.penalized),
            Cell::new(s.zeros),
        ]);
    }

    eprintln!("\n{table}");
}
