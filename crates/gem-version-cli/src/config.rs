use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "gemver.toml";

/// The gemver configuration file structure (gemver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GemverConfig {
    /// Output settings
    pub output: OutputConfig,

    /// Settings for the `check` command
    pub check: CheckConfig,
}

/// Output configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colour the satisfied/unsatisfied markers
    pub color: bool,

    /// Sort in descending order by default
    pub reverse: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            reverse: false,
        }
    }
}

/// `check` command configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Skip candidate versions that fail to parse instead of aborting
    pub skip_invalid: bool,
}

impl GemverConfig {
    /// Load configuration from gemver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: GemverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: GemverConfig = toml::from_str("").unwrap();
        assert!(config.output.color);
        assert!(!config.output.reverse);
        assert!(!config.check.skip_invalid);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
color = false
reverse = true

[check]
skip_invalid = true
"#;
        let config: GemverConfig = toml::from_str(toml).unwrap();
        assert!(!config.output.color);
        assert!(config.output.reverse);
        assert!(config.check.skip_invalid);
    }

    #[test]
    fn test_parse_partial_section() {
        let config: GemverConfig = toml::from_str("[output]\nreverse = true\n").unwrap();
        assert!(config.output.color);
        assert!(config.output.reverse);
    }

    #[test]
    fn test_load_searches_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[check]\nskip_invalid = true\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = GemverConfig::load(&nested).unwrap().unwrap();
        assert!(config.check.skip_invalid);
    }

    #[test]
    fn test_load_reports_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output\n").unwrap();

        let err = GemverConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
