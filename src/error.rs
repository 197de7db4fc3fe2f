use thiserror::Error;

/// Unified error type for simple-git-ver operations
#[derive(Error, Debug)]
pub enum SimpleGitVerError {
    #[error("Describe output is empty")]
    EmptyInput,

    #[error("Invalid git tag format: '{raw}' does not match prefix '{tag_prefix}' ({reason})")]
    InvalidFormat {
        raw: String,
        tag_prefix: String,
        reason: String,
    },

    #[error("Build number overflow: {build} + {commits_ahead} commits ahead")]
    BuildOverflow { build: u32, commits_ahead: u32 },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("git describe failed: {0}")]
    Describe(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in simple-git-ver
pub type Result<T> = std::result::Result<T, SimpleGitVerError>;

impl SimpleGitVerError {
    /// Create an invalid format error carrying the offending text
    pub fn invalid_format(
        raw: impl Into<String>,
        tag_prefix: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SimpleGitVerError::InvalidFormat {
            raw: raw.into(),
            tag_prefix: tag_prefix.into(),
            reason: reason.into(),
        }
    }

    /// Create a describe error with context
    pub fn describe(msg: impl Into<String>) -> Self {
        SimpleGitVerError::Describe(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SimpleGitVerError::Config(msg.into())
    }
}
