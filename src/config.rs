use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "simplegitver.toml";

/// How the describe line is obtained from the repository.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the git executable
    #[default]
    Command,
    /// Use libgit2, no git executable required
    Libgit2,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_git_exe() -> String {
    "git".to_string()
}

fn default_dirty() -> bool {
    true
}

/// Settings for one version derivation.
///
/// Every field has a default so a partial file is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Tags are filtered by and parsed after this prefix
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Add the number of commits since the tag to the build number
    #[serde(default)]
    pub auto_increment_build_number: bool,

    /// Path to the git executable used by the command backend
    #[serde(default = "default_git_exe")]
    pub git_exe: String,

    #[serde(default)]
    pub backend: Backend,

    /// Ask describe to mark modified working trees with `-dirty`
    #[serde(default = "default_dirty")]
    pub dirty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tag_prefix: default_tag_prefix(),
            auto_increment_build_number: false,
            git_exe: default_git_exe(),
            backend: Backend::default(),
            dirty: default_dirty(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Loads settings from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `simplegitver.toml` in current directory
/// 3. `simplegitver.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Settings> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            let text = fs::read_to_string(&path)?;
            Settings::from_toml(&text)
        }
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Settings::default())
        }
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tag_prefix, "v");
        assert!(!settings.auto_increment_build_number);
        assert_eq!(settings.git_exe, "git");
        assert_eq!(settings.backend, Backend::Command);
        assert!(settings.dirty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = Settings::from_toml("auto_increment_build_number = true").unwrap();
        assert!(settings.auto_increment_build_number);
        assert_eq!(settings.tag_prefix, "v");
        assert_eq!(settings.git_exe, "git");
    }

    #[test]
    fn test_backend_names() {
        let settings = Settings::from_toml("backend = \"libgit2\"").unwrap();
        assert_eq!(settings.backend, Backend::Libgit2);
        assert!(Settings::from_toml("backend = \"svn\"").is_err());
    }
}
