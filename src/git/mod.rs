//! Describe invocation layer
//!
//! The version core only consumes one line of `git describe` output. This
//! module produces that line through the [Describer] trait so callers can pick
//! how the repository is queried:
//!
//! - [command::GitCommandDescriber]: runs the git executable
//! - [libgit2::Git2Describer]: uses the `git2` crate, no executable needed
//! - [mock::MockDescriber]: canned output for tests
//!
//! # Usage
//!
//! ```rust
//! # use simple_git_ver::config::Settings;
//! # use simple_git_ver::git::{describe_version, MockDescriber};
//! let describer = MockDescriber::new("v1.2.3.4-7-gA1b2c3");
//! let settings = Settings {
//!     auto_increment_build_number: true,
//!     ..Settings::default()
//! };
//! let result = describe_version(&describer, &settings).unwrap();
//! assert_eq!(result.final_version_string(), "1.2.3.11");
//! ```

pub mod command;
pub mod libgit2;
pub mod mock;

pub use command::GitCommandDescriber;
pub use libgit2::Git2Describer;
pub use mock::MockDescriber;

use std::path::Path;

use crate::config::{Backend, Settings};
use crate::domain::{derive_version, VersionResult};
use crate::error::Result;

/// Suffix requested from describe for modified working trees
pub const DIRTY_MARKER: &str = "-dirty";

/// Source of a single describe line
///
/// ## Contract
///
/// Implementations describe HEAD against the nearest tag starting with
/// `tag_prefix` and return exactly one line without its line terminator.
/// Empty output, several conflicting lines and a failing git invocation are
/// all errors here; the caller never sees partial output.
pub trait Describer: Send + Sync {
    /// Describe HEAD using tags that start with `tag_prefix`
    fn describe(&self, tag_prefix: &str) -> Result<String>;
}

/// Build the describer selected by `settings` for the repository at `repo_dir`
pub fn describer_for(settings: &Settings, repo_dir: &Path) -> Result<Box<dyn Describer>> {
    let describer: Box<dyn Describer> = match settings.backend {
        Backend::Command => Box::new(
            GitCommandDescriber::new(&settings.git_exe, repo_dir).with_dirty(settings.dirty),
        ),
        Backend::Libgit2 => Box::new(Git2Describer::open(repo_dir)?.with_dirty(settings.dirty)),
    };
    Ok(describer)
}

/// Describe the repository and derive its version
pub fn describe_version<D: Describer + ?Sized>(
    describer: &D,
    settings: &Settings,
) -> Result<VersionResult> {
    tracing::debug!("Tag prefix: {}", settings.tag_prefix);
    let raw = describer.describe(&settings.tag_prefix)?;
    tracing::debug!("Tag received from git: {}", raw);

    let result = derive_version(
        &raw,
        &settings.tag_prefix,
        settings.auto_increment_build_number,
    )?;

    tracing::info!(
        base = %result.base_version(),
        version = %result.final_version(),
        commits_ahead = result.commits_ahead(),
        dirty = result.is_dirty(),
        "Derived version"
    );
    Ok(result)
}

/// Describe pattern matching every tag that starts with `tag_prefix`
pub(crate) fn match_pattern(tag_prefix: &str) -> String {
    format!("{}*", tag_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimpleGitVerError;

    #[test]
    fn test_match_pattern() {
        assert_eq!(match_pattern("v"), "v*");
        assert_eq!(match_pattern("release-"), "release-*");
    }

    #[test]
    fn test_describe_version_uses_settings() {
        let describer = MockDescriber::new("rel-2.0.1.10-3-gabc1234");
        let settings = Settings {
            tag_prefix: "rel-".to_string(),
            auto_increment_build_number: true,
            ..Settings::default()
        };

        let result = describe_version(&describer, &settings).unwrap();
        assert_eq!(result.base_version_string(), "2.0.1.10");
        assert_eq!(result.final_version_string(), "2.0.1.13");
        assert_eq!(describer.requested_prefixes(), vec!["rel-".to_string()]);
    }

    #[test]
    fn test_describe_version_propagates_describer_failure() {
        let describer = MockDescriber::failing("fatal: No names found");
        let result = describe_version(&describer, &Settings::default());
        assert!(matches!(result, Err(SimpleGitVerError::Describe(_))));
    }

    #[test]
    fn test_describe_version_rejects_foreign_tags() {
        let describer = MockDescriber::new("release-1.2.3.4");
        let result = describe_version(&describer, &Settings::default());
        assert!(matches!(
            result,
            Err(SimpleGitVerError::InvalidFormat { .. })
        ));
    }
}
