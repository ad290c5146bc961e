//! Due-date lookup table.
//!
//! Deadlines live in a JSON object mapping assignment name to a due string
//! in `M/D/YYYY h:mm AM|PM`. The whole file is parsed at load time into an
//! immutable table; a malformed entry fails the load naming its assignment
//! instead of surfacing mid-run. The loaded table is read-only and safe to
//! share across concurrent graders.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use gradecurve_core::error::GradeError;
use gradecurve_core::timestamp::parse_due;

/// Immutable mapping from assignment name to due timestamp.
#[derive(Debug, Clone, Default)]
pub struct DueDateTable {
    entries: HashMap<String, NaiveDateTime>,
}

impl DueDateTable {
    /// Load and fully parse a due-date file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read due-date file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse due-date file: {}", path.display()))
    }

    /// Parse a JSON object of `name -> due string` (useful for testing).
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(content).context("due-date file is not a JSON object")?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (assignment, due_str) in raw {
            let due = parse_due(&due_str)
                .with_context(|| format!("bad due date for assignment '{assignment}'"))?;
            entries.insert(assignment, due);
        }

        Ok(Self { entries })
    }

    /// Build a table directly from parsed entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, NaiveDateTime)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The due timestamp for an assignment, if configured.
    pub fn lookup(&self, assignment: &str) -> Option<NaiveDateTime> {
        self.entries.get(assignment).copied()
    }

    /// Like [`lookup`](Self::lookup), but a missing entry is the fatal
    /// configuration error the grading core expects.
    pub fn require(&self, assignment: &str) -> Result<NaiveDateTime, GradeError> {
        self.lookup(assignment)
            .ok_or_else(|| GradeError::MissingDueDate {
                assignment: assignment.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
