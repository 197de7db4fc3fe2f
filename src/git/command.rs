use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, SimpleGitVerError};
use crate::git::{match_pattern, Describer, DIRTY_MARKER};

/// Runs `git describe --tags --match <prefix>*` with a git executable
pub struct GitCommandDescriber {
    git_exe: PathBuf,
    work_dir: PathBuf,
    dirty: bool,
}

impl GitCommandDescriber {
    /// Describer running `git_exe` inside `work_dir`
    pub fn new(git_exe: impl Into<PathBuf>, work_dir: impl AsRef<Path>) -> Self {
        GitCommandDescriber {
            git_exe: git_exe.into(),
            work_dir: work_dir.as_ref().to_path_buf(),
            dirty: true,
        }
    }

    /// Whether to pass `--dirty` so modified trees get the dirty marker
    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    /// Arguments passed to git for `tag_prefix`
    pub fn arguments(&self, tag_prefix: &str) -> Vec<String> {
        let mut args = vec![
            "describe".to_string(),
            "--tags".to_string(),
            "--match".to_string(),
            match_pattern(tag_prefix),
        ];
        if self.dirty {
            args.push(format!("--dirty={}", DIRTY_MARKER));
        }
        args
    }
}

impl Describer for GitCommandDescriber {
    fn describe(&self, tag_prefix: &str) -> Result<String> {
        let args = self.arguments(tag_prefix);
        tracing::debug!(
            "Running {} {} in {}",
            self.git_exe.display(),
            args.join(" "),
            self.work_dir.display()
        );

        let output = Command::new(&self.git_exe)
            .args(&args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| {
                SimpleGitVerError::describe(format!(
                    "Failed to execute '{}': {}",
                    self.git_exe.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SimpleGitVerError::describe(format!(
                "Failed to execute Git, returned {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        single_line(&stdout)
    }
}

/// The only non-empty line of `stdout`
fn single_line(stdout: &str) -> Result<String> {
    let mut lines = stdout.lines().map(str::trim_end).filter(|l| !l.is_empty());

    let first = lines
        .next()
        .ok_or_else(|| SimpleGitVerError::describe("Git returned invalid data: no output"))?;

    if let Some(second) = lines.next() {
        return Err(SimpleGitVerError::describe(format!(
            "Git returned invalid data: {}   {}",
            first, second
        )));
    }

    Ok(first.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments() {
        let describer = GitCommandDescriber::new("git", ".");
        assert_eq!(
            describer.arguments("v"),
            vec!["describe", "--tags", "--match", "v*", "--dirty=-dirty"]
        );
    }

    #[test]
    fn test_arguments_without_dirty() {
        let describer = GitCommandDescriber::new("git", ".").with_dirty(false);
        assert_eq!(
            describer.arguments("rel-"),
            vec!["describe", "--tags", "--match", "rel-*"]
        );
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("v1.2.3.4\n").unwrap(), "v1.2.3.4");
        assert_eq!(single_line("\r\nv1.2.3.4\r\n\n").unwrap(), "v1.2.3.4");
    }

    #[test]
    fn test_single_line_rejects_empty_output() {
        assert!(matches!(
            single_line("\n\n"),
            Err(SimpleGitVerError::Describe(_))
        ));
    }

    #[test]
    fn test_single_line_rejects_multiple_lines() {
        let err = single_line("v1.2.3.4\nv1.2.3.5\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("v1.2.3.4"));
        assert!(msg.contains("v1.2.3.5"));
    }

    #[test]
    fn test_missing_executable() {
        let describer = GitCommandDescriber::new("/nonexistent/simple-git-ver-git", ".");
        let err = describer.describe("v").unwrap_err();
        assert!(matches!(err, SimpleGitVerError::Describe(_)));
        assert!(err.to_string().contains("Failed to execute"));
    }
}
