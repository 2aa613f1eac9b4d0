use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::graph::build::BuildMode;

/// Options for one analysis run, read from a TOML file.
///
/// ```toml
/// mode = "lenient"
/// seeds = ["A"]
/// distances = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub mode: BuildMode,
    /// Initial node ids. Empty means "enumerate the whole source".
    #[serde(default)]
    pub seeds: Vec<String>,
    /// Fill the result matrix right after a successful build.
    #[serde(default = "default_true")]
    pub distances: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            seeds: Vec::new(),
            distances: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
}

impl AnalysisConfig {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this shape.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
    }

    /// Load `path` if given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AnalysisConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: AnalysisConfig = toml::from_str("").expect("parse");
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.mode, BuildMode::Strict);
        assert!(config.distances);
    }

    #[test]
    fn fields_override_defaults() {
        let config: AnalysisConfig =
            toml::from_str("mode = \"lenient\"\nseeds = [\"A\", \"C\"]\ndistances = false\n")
                .expect("parse");
        assert_eq!(config.mode, BuildMode::Lenient);
        assert_eq!(config.seeds, vec!["A", "C"]);
        assert!(!config.distances);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(toml::from_str::<AnalysisConfig>("mode = \"eager\"").is_err());
    }

    #[test]
    fn load_reports_path_in_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("graphiti.toml");
        std::fs::write(&path, "mode = 3").expect("write");

        let err = AnalysisConfig::load(&path).expect_err("bad config");
        assert!(format!("{err:#}").contains("graphiti.toml"));

        assert_eq!(
            AnalysisConfig::load_or_default(None).expect("defaults"),
            AnalysisConfig::default()
        );
    }
}
