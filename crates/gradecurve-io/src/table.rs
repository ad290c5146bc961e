//! CSV submission tables.
//!
//! Loads one assignment's export, normalizes its combined timestamp column
//! into the date/time substrings the core grades from, and writes the
//! graded copy back out. Columns the grader does not read are preserved
//! untouched on write-back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::StringRecord;

use gradecurve_core::model::{AssignmentResultSet, GradedRow, SubmissionRecord};
use gradecurve_core::timestamp::split_stamp;

pub const STUDENT_COLUMN: &str = "Submitted By";
pub const RESULT_COLUMN: &str = "Test Result";
pub const STAMP_COLUMN: &str = "Submission Date";
pub const HOUR_COLUMN: &str = "Submission Hour";
pub const GRADE_COLUMN: &str = "Grade";

/// Suffix appended to the file stem of a graded copy.
const GRADED_SUFFIX: &str = "_graded";

/// One assignment's export, with raw rows kept for write-back.
#[derive(Debug, Clone)]
pub struct SubmissionTable {
    assignment: String,
    headers: StringRecord,
    raw_rows: Vec<StringRecord>,
    records: Vec<SubmissionRecord>,
}

impl SubmissionTable {
    /// Load an export CSV. The assignment name is the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let assignment = file_stem(path)?;

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open export: {}", path.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("failed to read header row: {}", path.display()))?
            .clone();

        let student_idx = require_column(&headers, STUDENT_COLUMN, path)?;
        let result_idx = require_column(&headers, RESULT_COLUMN, path)?;
        let stamp_idx = require_column(&headers, STAMP_COLUMN, path)?;

        let mut raw_rows = Vec::new();
        let mut records = Vec::new();

        for row in reader.records() {
            let row =
                row.with_context(|| format!("failed to read row from {}", path.display()))?;
            let (date, time) = split_stamp(row.get(stamp_idx).unwrap_or(""));
            records.push(SubmissionRecord {
                student: row.get(student_idx).unwrap_or("").to_string(),
                test_result: row.get(result_idx).unwrap_or("").to_string(),
                date,
                time,
            });
            raw_rows.push(row);
        }

        tracing::debug!(
            assignment = %assignment,
            rows = records.len(),
            "loaded export"
        );

        Ok(Self {
            assignment,
            headers,
            raw_rows,
            records,
        })
    }

    pub fn assignment(&self) -> &str {
        &self.assignment
    }

    /// The normalized submission records, one per data row.
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    /// Write the graded copy of this table into `dir`.
    ///
    /// The timestamp column is replaced by its date substring, a
    /// `Submission Hour` column is added (or reused when present), and the
    /// `Grade` column is filled from `results`, which must hold one row per
    /// input row. Returns the written path, `<stem>_graded.csv`.
    pub fn write_graded(&self, dir: &Path, results: &AssignmentResultSet) -> Result<PathBuf> {
        anyhow::ensure!(
            results.rows.len() == self.raw_rows.len(),
            "result set has {} rows but table has {}",
            results.rows.len(),
            self.raw_rows.len()
        );

        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
        let out_path = dir.join(format!("{}{GRADED_SUFFIX}.csv", self.assignment));

        let mut out_headers: Vec<String> = self.headers.iter().map(str::to_string).collect();
        let stamp_idx = require_column(&self.headers, STAMP_COLUMN, &out_path)?;
        let hour_idx = ensure_column(&mut out_headers, HOUR_COLUMN);
        let grade_idx = ensure_column(&mut out_headers, GRADE_COLUMN);

        let mut writer = csv::Writer::from_path(&out_path)
            .with_context(|| format!("failed to create graded file: {}", out_path.display()))?;
        writer.write_record(&out_headers)?;

        for ((raw, record), graded) in self.raw_rows.iter().zip(&self.records).zip(&results.rows)
        {
            let mut cells: Vec<String> = (0..out_headers.len())
                .map(|i| raw.get(i).unwrap_or("").to_string())
                .collect();
            cells[stamp_idx] = record.date.clone();
            cells[hour_idx] = record.time.clone();
            cells[grade_idx] = format_grade(graded.grade);
            writer.write_record(&cells)?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to write graded file: {}", out_path.display()))?;

        tracing::info!(path = %out_path.display(), "wrote graded file");
        Ok(out_path)
    }
}

/// Read a graded file back into a result set for merging.
///
/// Only the student and grade columns are consulted; deducted penalties are
/// not persisted in graded files and come back as 0.0. The `_graded` suffix
/// is stripped from the stem to recover the assignment name.
pub fn read_result_set(path: &Path) -> Result<AssignmentResultSet> {
    let stem = file_stem(path)?;
    let assignment = stem.strip_suffix(GRADED_SUFFIX).unwrap_or(&stem).to_string();

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open graded file: {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let student_idx = require_column(&headers, STUDENT_COLUMN, path)?;
    let grade_idx = require_column(&headers, GRADE_COLUMN, path)?;

    let mut rows = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let grade_cell = row.get(grade_idx).unwrap_or("");
        let grade: f64 = grade_cell.parse().with_context(|| {
            format!(
                "bad grade {:?} at row {} of {}",
                grade_cell,
                i + 1,
                path.display()
            )
        })?;
        rows.push(GradedRow {
            student: row.get(student_idx).unwrap_or("").to_string(),
            grade,
            penalty: 0.0,
        });
    }

    Ok(AssignmentResultSet { assignment, rows })
}

/// All `.csv` files directly inside `dir`, sorted by path.
pub fn scan_exports(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Render a grade for the CSV cell. Grades are half-point multiples, so one
/// decimal place is exact.
pub fn format_grade(grade: f64) -> String {
    format!("{grade:.1}")
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("cannot derive assignment name from {}", path.display()))
}

fn require_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow::anyhow!("missing column {:?} in {}", name, path.display()))
}

fn ensure_column(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(i) => i,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}
