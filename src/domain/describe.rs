use regex::{Captures, Regex};

use crate::error::{Result, SimpleGitVerError};

const DIRTY_SUFFIX: &str = "-dirty";

/// Fields extracted from a single line of `git describe` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeFields {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
    /// Zero when HEAD sits exactly on the tag
    pub commits_ahead: u32,
    /// Empty when HEAD sits exactly on the tag
    pub short_hash: String,
    pub is_dirty: bool,
}

/// Compiled matcher for describe output of tags carrying a given prefix
///
/// Accepted shape: `<prefix>MAJOR.MINOR.PATCH.BUILD[-AHEAD-gHASH][-dirty]`,
/// anchored at both ends. The prefix is matched literally and case-sensitively;
/// only the hash letters are case-insensitive.
#[derive(Debug, Clone)]
pub struct DescribePattern {
    tag_prefix: String,
    regex: Regex,
}

impl DescribePattern {
    /// Build the matcher for a tag prefix
    pub fn new(tag_prefix: impl Into<String>) -> Result<Self> {
        let tag_prefix = tag_prefix.into();
        let pattern = format!(
            concat!(
                r"^{}",
                r"(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)\.(?P<build>[0-9]+)",
                r"(?:-(?P<ahead>[0-9]+)-g(?P<sha>[0-9a-fA-F]+))?",
                r"(?P<dirty>{})?$"
            ),
            regex::escape(&tag_prefix),
            regex::escape(DIRTY_SUFFIX)
        );

        let regex = Regex::new(&pattern).map_err(|e| {
            SimpleGitVerError::config(format!("Invalid tag prefix '{}': {}", tag_prefix, e))
        })?;

        Ok(DescribePattern { tag_prefix, regex })
    }

    /// The prefix this pattern was built for
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    /// Validate `raw` end-to-end and extract every field in one pass
    pub fn parse(&self, raw: &str) -> Result<DescribeFields> {
        if raw.is_empty() {
            return Err(SimpleGitVerError::EmptyInput);
        }

        let captures = self
            .regex
            .captures(raw)
            .ok_or_else(|| self.mismatch(raw))?;

        let commits_ahead = match captures.name("ahead") {
            Some(_) => self.number(raw, &captures, "ahead")?,
            None => 0,
        };
        let short_hash = captures
            .name("sha")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        if commits_ahead == 0 && !short_hash.is_empty() {
            return Err(SimpleGitVerError::invalid_format(
                raw,
                &self.tag_prefix,
                "commit hash present with zero commits ahead",
            ));
        }

        Ok(DescribeFields {
            major: self.number(raw, &captures, "major")?,
            minor: self.number(raw, &captures, "minor")?,
            patch: self.number(raw, &captures, "patch")?,
            build: self.number(raw, &captures, "build")?,
            commits_ahead,
            short_hash,
            is_dirty: captures.name("dirty").is_some(),
        })
    }

    fn number(&self, raw: &str, captures: &Captures<'_>, group: &str) -> Result<u32> {
        let text = captures.name(group).map(|m| m.as_str()).unwrap_or_default();
        text.parse::<u32>().map_err(|_| {
            SimpleGitVerError::invalid_format(
                raw,
                &self.tag_prefix,
                format!("{} component '{}' is out of range", group, text),
            )
        })
    }

    fn mismatch(&self, raw: &str) -> SimpleGitVerError {
        let reason = if raw.starts_with(&self.tag_prefix) {
            "expected MAJOR.MINOR.PATCH.BUILD[-AHEAD-gHASH][-dirty] after the prefix"
        } else {
            "tag prefix mismatch"
        };
        SimpleGitVerError::invalid_format(raw, &self.tag_prefix, reason)
    }
}

/// One-off parse of a describe line
pub fn parse_describe(raw: &str, tag_prefix: &str) -> Result<DescribeFields> {
    DescribePattern::new(tag_prefix)?.parse(raw)
}
