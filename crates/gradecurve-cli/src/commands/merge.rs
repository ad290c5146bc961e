//! The `gradecurve merge` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecurve_io::config::load_config_from;
use gradecurve_io::table::{read_result_set, scan_exports};
use gradecurve_report::gradebook::Gradebook;

pub fn execute(
    graded: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let graded = graded.unwrap_or_else(|| config.graded_dir.clone());
    let output = output.unwrap_or_else(|| config.gradebook_file.clone());

    let files = scan_exports(&graded)?;
    anyhow::ensure!(
        !files.is_empty(),
        "no graded files found in {}",
        graded.display()
    );

    let sets = files
        .iter()
        .map(|path| read_result_set(path))
        .collect::<Result<Vec<_>>>()?;

    let book = Gradebook::merge(&sets);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", book.to_markdown());
        }
        _ => {
            book.write_csv(&output)?;
            println!(
                "Gradebook saved to: {} ({} students x {} assignments)",
                output.display(),
                book.students().len(),
                book.assignments().len()
            );
        }
    }

    Ok(())
}
