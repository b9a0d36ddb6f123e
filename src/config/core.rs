use serde::{Deserialize, Serialize};

use super::classification::ClassificationConfig;
use super::parallel::ParallelConfig;

/// Root configuration structure for methodsort
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MethodsortConfig {
    /// Sorts reported by batch classification
    #[serde(default)]
    pub classification: Option<ClassificationConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Parallel classification configuration
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// `terminal` or `json`
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl MethodsortConfig {
    pub fn classification(&self) -> ClassificationConfig {
        self.classification.clone().unwrap_or_default()
    }

    pub fn parallel(&self) -> ParallelConfig {
        self.parallel.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref()?.use_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: MethodsortConfig = toml::from_str("").unwrap();
        assert_eq!(config, MethodsortConfig::default());
        assert!(config.parallel().enabled);
        assert!(config.default_format().is_none());
    }

    #[test]
    fn test_full_config() {
        let config: MethodsortConfig = toml::from_str(indoc! {r#"
            [classification]
            sorts = ["visibility-bridge", "type-variable-bridge"]
            include_unmatched = true

            [output]
            default_format = "json"
            use_color = false

            [parallel]
            enabled = false
        "#})
        .unwrap();

        assert!(config.classification().include_unmatched);
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
        assert!(!config.parallel().enabled);
    }
}
