//! User interface module - rendering derived versions.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Output format selection and serialized reports

use anyhow::Result;
use serde::Serialize;

use crate::domain::VersionResult;

pub mod formatter;

pub use formatter::{display_error, display_status, format_env, format_summary};

/// Output formats of the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    #[default]
    Text,
    Json,
    Toml,
    /// `SIMPLEGITVER_*=value` lines
    Env,
    /// Only the dotted version
    Version,
}

/// Flat, serializable view of a [`VersionResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionReport {
    pub version: String,
    pub base_version: String,
    pub semver: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub base_build: u32,
    pub build: u32,
    pub commits_ahead: u32,
    pub sha: String,
    pub dirty: bool,
    pub raw_describe: String,
    pub tag_prefix: String,
}

impl From<&VersionResult> for VersionReport {
    fn from(result: &VersionResult) -> Self {
        VersionReport {
            version: result.final_version_string(),
            base_version: result.base_version_string(),
            semver: result.final_version().to_semver().to_string(),
            major: result.major(),
            minor: result.minor(),
            patch: result.patch(),
            base_build: result.base_build(),
            build: result.final_build(),
            commits_ahead: result.commits_ahead(),
            sha: result.short_hash().to_string(),
            dirty: result.is_dirty(),
            raw_describe: result.raw_describe().to_string(),
            tag_prefix: result.tag_prefix().to_string(),
        }
    }
}

/// Render `result` in the requested format.
///
/// `base_only` selects the tagged version instead of the final one for
/// [`OutputFormat::Version`]; other formats always carry both.
pub fn render(result: &VersionResult, format: OutputFormat, base_only: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => format_summary(result),
        OutputFormat::Json => serde_json::to_string_pretty(&VersionReport::from(result))?,
        OutputFormat::Toml => toml::to_string(&VersionReport::from(result))?,
        OutputFormat::Env => format_env(result),
        OutputFormat::Version if base_only => result.base_version_string(),
        OutputFormat::Version => result.final_version_string(),
    };
    Ok(rendered)
}
