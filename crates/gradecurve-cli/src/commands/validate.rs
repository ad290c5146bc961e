//! The `gradecurve validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecurve_core::validate::validate_records;
use gradecurve_io::config::load_config_from;
use gradecurve_io::due_dates::DueDateTable;
use gradecurve_io::table::{scan_exports, SubmissionTable};

pub fn execute(
    exports: Option<PathBuf>,
    due_dates: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let exports = exports.unwrap_or_else(|| config.exports_dir.clone());
    let due_dates_path = due_dates.unwrap_or_else(|| config.due_dates_file.clone());

    let due_table = DueDateTable::load(&due_dates_path)?;

    let files = if exports.is_file() {
        vec![exports.clone()]
    } else {
        scan_exports(&exports)?
    };

    let mut total_warnings = 0;

    for path in &files {
        let table = SubmissionTable::load(path)?;
        println!(
            "Assignment: {} ({} rows)",
            table.assignment(),
            table.records().len()
        );

        if due_table.lookup(table.assignment()).is_none() {
            println!(
                "  WARNING: no due date configured for '{}'",
                table.assignment()
            );
            total_warnings += 1;
        }

        let warnings = validate_records(table.records());
        for w in &warnings {
            let who = w
                .student
                .as_deref()
                .map(|s| format!(" ({s})"))
                .unwrap_or_default();
            println!("  [row {}]{} WARNING: {}", w.row + 1, who, w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All exports valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
