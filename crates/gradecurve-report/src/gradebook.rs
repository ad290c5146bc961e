//! The consolidated gradebook.
//!
//! Merges every assignment's result set into one wide table: one row per
//! student, one column per assignment in natural order, 0.0 where a student
//! made no submission.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use gradecurve_core::model::AssignmentResultSet;

use crate::natural::natural_cmp;

/// One wide per-student table of grades.
#[derive(Debug, Clone)]
pub struct Gradebook {
    students: Vec<String>,
    assignments: Vec<String>,
    /// Row per student, column per assignment, aligned with the two
    /// vectors above.
    grades: Vec<Vec<f64>>,
}

impl Gradebook {
    /// Merge result sets into a gradebook.
    ///
    /// Students are the union across all sets, sorted; assignments keep
    /// natural order regardless of input order. Missing submissions fill
    /// with 0.0.
    pub fn merge(sets: &[AssignmentResultSet]) -> Self {
        let mut ordered: Vec<&AssignmentResultSet> = sets.iter().collect();
        ordered.sort_by(|a, b| natural_cmp(&a.assignment, &b.assignment));

        let mut students: BTreeSet<&str> = BTreeSet::new();
        for set in &ordered {
            students.extend(set.students());
        }
        let students: Vec<String> = students.into_iter().map(str::to_string).collect();

        let grades = students
            .iter()
            .map(|student| ordered.iter().map(|set| set.grade_of(student)).collect())
            .collect();

        tracing::info!(
            students = students.len(),
            assignments = ordered.len(),
            "merged gradebook"
        );

        Self {
            students,
            assignments: ordered
                .iter()
                .map(|set| set.assignment.clone())
                .collect(),
            grades,
        }
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    /// The grade for one student on one assignment, if both exist.
    pub fn grade(&self, student: &str, assignment: &str) -> Option<f64> {
        let row = self.students.iter().position(|s| s == student)?;
        let col = self.assignments.iter().position(|a| a == assignment)?;
        Some(self.grades[row][col])
    }

    /// Write the gradebook as CSV with a `Student` key column.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create gradebook: {}", path.display()))?;

        let mut header = vec!["Student".to_string()];
        header.extend(self.assignments.iter().cloned());
        writer.write_record(&header)?;

        for (student, row) in self.students.iter().zip(&self.grades) {
            let mut cells = vec![student.clone()];
            cells.extend(row.iter().map(|g| format!("{g:.1}")));
            writer.write_record(&cells)?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to write gradebook: {}", path.display()))?;
        Ok(())
    }

    /// Format the gradebook as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("| Student |");
        for a in &self.assignments {
            md.push_str(&format!(" {a} |"));
        }
        md.push('\n');

        md.push_str("|---------|");
        for _ in &self.assignments {
            md.push_str("---|");
        }
        md.push('\n');

        for (student, row) in self.students.iter().zip(&self.grades) {
            md.push_str(&format!("| {student} |"));
            for g in row {
                md.push_str(&format!(" {g:.1} |"));
            }
            md.push('\n');
        }

        md
    }
}
