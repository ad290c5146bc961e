//! Tool configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use gradecurve_core::model::{GradeScale, RoundingPolicy};

/// Top-level gradecurve configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradecurveConfig {
    /// Directory holding the judge's CSV exports.
    #[serde(default = "default_exports_dir")]
    pub exports_dir: PathBuf,
    /// Directory the graded copies are written to.
    #[serde(default = "default_graded_dir")]
    pub graded_dir: PathBuf,
    /// Path of the merged gradebook file.
    #[serde(default = "default_gradebook_file")]
    pub gradebook_file: PathBuf,
    /// Path of the due-date table.
    #[serde(default = "default_due_dates_file")]
    pub due_dates_file: PathBuf,
    /// Curve exponent applied to the pass fraction.
    #[serde(default = "default_curve")]
    pub curve: f64,
    /// Rounding policy for final grades.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

fn default_exports_dir() -> PathBuf {
    PathBuf::from("exports")
}
fn default_graded_dir() -> PathBuf {
    PathBuf::from("graded")
}
fn default_gradebook_file() -> PathBuf {
    PathBuf::from("gradebook.csv")
}
fn default_due_dates_file() -> PathBuf {
    PathBuf::from("due_dates.json")
}
fn default_curve() -> f64 {
    0.8
}

impl Default for GradecurveConfig {
    fn default() -> Self {
        Self {
            exports_dir: default_exports_dir(),
            graded_dir: default_graded_dir(),
            gradebook_file: default_gradebook_file(),
            due_dates_file: default_due_dates_file(),
            curve: default_curve(),
            rounding: RoundingPolicy::default(),
        }
    }
}

impl GradecurveConfig {
    /// The grading tunables this configuration selects.
    pub fn scale(&self) -> GradeScale {
        GradeScale {
            curve: self.curve,
            rounding: self.rounding,
        }
    }
}

/// Load configuration from the well-known paths.
///
/// Search order:
/// 1. `gradecurve.toml` in the current directory
/// 2. `~/.config/gradecurve/config.toml`
///
/// Falls back to defaults when neither exists.
pub fn load_config() -> Result<GradecurveConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradecurveConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradecurve.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(GradecurveConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradecurve"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GradecurveConfig::default();
        assert_eq!(config.exports_dir, PathBuf::from("exports"));
        assert_eq!(config.graded_dir, PathBuf::from("graded"));
        assert_eq!(config.curve, 0.8);
        assert_eq!(config.rounding, RoundingPolicy::NearestHalf);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
exports_dir = "dumps"
graded_dir = "out"
gradebook_file = "notes.csv"
due_dates_file = "deadlines.json"
curve = 1.0
rounding = "floor-whole"
"#;
        let config: GradecurveConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.exports_dir, PathBuf::from("dumps"));
        assert_eq!(config.curve, 1.0);
        assert_eq!(config.rounding, RoundingPolicy::FloorWhole);
        assert_eq!(config.scale().curve, 1.0);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: GradecurveConfig = toml::from_str("curve = 2.0").unwrap();
        assert_eq!(config.curve, 2.0);
        assert_eq!(config.graded_dir, PathBuf::from("graded"));
        assert_eq!(config.rounding, RoundingPolicy::NearestHalf);
    }

    #[test]
    fn explicit_missing_path_fails() {
        let missing = Path::new("/definitely/not/here/gradecurve.toml");
        assert!(load_config_from(Some(missing)).is_err());
    }

    #[test]
    fn explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradecurve.toml");
        std::fs::write(&path, "curve = 0.5\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.curve, 0.5);
    }
}
