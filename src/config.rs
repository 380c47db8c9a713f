use crate::domain::ReleaseStage;
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "addonrelease.toml";

/// Represents the complete configuration for addon-release.
///
/// Contains the source file to resolve, the build action inputs, release naming, and
/// where step outputs go.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default source file holding the version declaration.
fn default_source_path() -> PathBuf {
    PathBuf::from("__init__.py")
}

/// Returns the default packaged product name.
fn default_product_name() -> String {
    "paint_system".to_string()
}

/// Returns the default list of paths excluded from the packaged artifact.
fn default_exclude() -> Vec<String> {
    vec![
        ".github".to_string(),
        ".gitignore".to_string(),
        "README.md".to_string(),
        "tests".to_string(),
        "__pycache__".to_string(),
    ]
}

fn default_artifact_name() -> String {
    "{product}-{version}".to_string()
}

fn default_folder_name() -> String {
    "paint_system".to_string()
}

fn default_stage() -> String {
    ReleaseStage::default().to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Where the version declaration lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            path: default_source_path(),
        }
    }
}

/// Inputs forwarded to the addon build action.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_product_name")]
    pub product_name: String,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            product_name: default_product_name(),
            exclude: default_exclude(),
        }
    }
}

/// Naming used by the addon release action.
///
/// `artifact_name` accepts `{product}`, `{version}` and `{stage}` placeholders;
/// `tag_pattern` must contain `{version}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,

    #[serde(default = "default_folder_name")]
    pub folder_name: String,

    #[serde(default = "default_stage")]
    pub default_stage: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            artifact_name: default_artifact_name(),
            folder_name: default_folder_name(),
            default_stage: default_stage(),
            tag_pattern: default_tag_pattern(),
        }
    }
}

impl ReleaseConfig {
    /// The configured fallback stage, validated
    pub fn default_stage(&self) -> Result<ReleaseStage> {
        ReleaseStage::parse(&self.default_stage).map_err(|e| {
            ReleaseError::config(format!("release.default_stage is invalid: {}", e))
        })
    }
}

/// Step output destination.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `addonrelease.toml` in current directory
/// 3. `.addonrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ReleaseError::config(format!("Cannot read {}: {}", path.display(), e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.path, PathBuf::from("__init__.py"));
        assert_eq!(config.build.product_name, "paint_system");
        assert!(config.build.exclude.contains(&".github".to_string()));
        assert_eq!(config.release.tag_pattern, "v{version}");
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[release]
folder_name = "ps"
"#,
        )
        .unwrap();
        assert_eq!(config.release.folder_name, "ps");
        assert_eq!(config.release.artifact_name, "{product}-{version}");
        assert_eq!(config.build, BuildConfig::default());
    }

    #[test]
    fn test_default_stage_validation() {
        let mut release = ReleaseConfig::default();
        assert_eq!(release.default_stage().unwrap(), ReleaseStage::Alpha);

        release.default_stage = "rc".to_string();
        assert_eq!(release.default_stage().unwrap(), ReleaseStage::Rc);

        release.default_stage = "weekly".to_string();
        let err = release.default_stage().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = load_config(Some(Path::new("/nonexistent/addonrelease.toml")));
        assert!(result.is_err());
    }
}
