use git2::{DescribeFormatOptions, DescribeOptions, Repository};
use std::path::Path;
use std::sync::Mutex;

use crate::error::{Result, SimpleGitVerError};
use crate::git::{match_pattern, Describer, DIRTY_MARKER};

/// Describes HEAD through libgit2
pub struct Git2Describer {
    repo: Mutex<Repository>,
    dirty: bool,
}

impl Git2Describer {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2Describer::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Describer {
            repo: Mutex::new(repo),
            dirty: true,
        }
    }

    /// Whether modified working trees get the dirty marker
    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }
}

impl Describer for Git2Describer {
    fn describe(&self, tag_prefix: &str) -> Result<String> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| SimpleGitVerError::describe("repository handle is poisoned"))?;
        let pattern = match_pattern(tag_prefix);
        tracing::debug!("Describing {} with pattern {}", repo.path().display(), pattern);

        let mut options = DescribeOptions::new();
        options.describe_tags().pattern(&pattern);
        let description = repo.describe(&options)?;

        let mut format = DescribeFormatOptions::new();
        if self.dirty {
            format.dirty_suffix(DIRTY_MARKER);
        }

        Ok(description.format(Some(&format))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Git2Describer::open(dir.path()).is_err());
    }
}
