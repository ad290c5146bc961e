//! The `gradecurve init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradecurve.toml
    if std::path::Path::new("gradecurve.toml").exists() {
        println!("gradecurve.toml already exists, skipping.");
    } else {
        std::fs::write("gradecurve.toml", SAMPLE_CONFIG)?;
        println!("Created gradecurve.toml");
    }

    // Create the due-date table
    if std::path::Path::new("due_dates.json").exists() {
        println!("due_dates.json already exists, skipping.");
    } else {
        std::fs::write("due_dates.json", SAMPLE_DUE_DATES)?;
        println!("Created due_dates.json");
    }

    std::fs::create_dir_all("exports")?;

    println!("\nNext steps:");
    println!("  1. Drop the judge's CSV exports into exports/");
    println!("  2. Edit due_dates.json with one entry per assignment");
    println!("  3. Run: gradecurve validate");
    println!("  4. Run: gradecurve grade && gradecurve merge");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradecurve configuration

exports_dir = "exports"
graded_dir = "graded"
gradebook_file = "gradebook.csv"
due_dates_file = "due_dates.json"

# Curve exponent applied to the pass fraction: < 1 generous, 1 linear,
# > 1 harsh.
curve = 0.8

# One of: nearest-half, floor-whole, ceil-half.
rounding = "nearest-half"
"#;

const SAMPLE_DUE_DATES: &str = r#"{
  "hw1": "9/22/2025 11:59 PM",
  "hw2": "10/6/2025 11:59 PM"
}
"#;
