use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use credseal_core::backup::DEFAULT_PASSWORD_PLACEHOLDER;

use crate::constants::DEFAULT_LOG_LEVEL;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredsealConfig {
    pub logging: LoggingSection,
    pub output: OutputSection,
    pub restore: RestoreSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub pretty: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreSection {
    pub password_placeholder: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for RestoreSection {
    fn default() -> Self {
        Self {
            password_placeholder: DEFAULT_PASSWORD_PLACEHOLDER.to_string(),
        }
    }
}

/// Load configuration.
///
/// An explicitly named file must exist. The default location is optional:
/// when it is missing (or `HOME` is unset) the defaults apply.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<CredsealConfig> {
    if let Some(path) = explicit {
        return read_config(Path::new(path));
    }
    match default_config_path() {
        Ok(path) if path.exists() => read_config(&path),
        _ => Ok(CredsealConfig::default()),
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<CredsealConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("credseal"));
        }
    }
    Ok(home_dir()?.join(".config").join("credseal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = CredsealConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert!(!config.output.pretty);
        assert_eq!(config.restore.password_placeholder, "<NEW_PASSWORD>");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\npretty = true\n").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.restore.password_placeholder, "<NEW_PASSWORD>");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output\npretty = 1").unwrap();

        assert!(read_config(&path)
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config"));
    }
}
