use crate::domain::describe::{DescribeFields, DescribePattern};
use crate::domain::version::FourPartVersion;
use crate::error::{Result, SimpleGitVerError};

/// Version information derived from one line of describe output.
///
/// Built fresh per invocation and never mutated afterwards. Equal inputs
/// always produce equal results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResult {
    major: u32,
    minor: u32,
    patch: u32,
    base_build: u32,
    final_build: u32,
    commits_ahead: u32,
    short_hash: String,
    is_dirty: bool,
    raw_describe: String,
    tag_prefix: String,
}

impl VersionResult {
    /// Combine extracted fields with the increment setting.
    ///
    /// With `auto_increment_build_number` the final build number is the tagged
    /// build plus the commits ahead; otherwise it equals the tagged build.
    /// Fails with [`SimpleGitVerError::BuildOverflow`] if the sum does not fit.
    pub fn derive(
        fields: DescribeFields,
        raw_describe: impl Into<String>,
        tag_prefix: impl Into<String>,
        auto_increment_build_number: bool,
    ) -> Result<Self> {
        let final_build = if auto_increment_build_number {
            fields
                .build
                .checked_add(fields.commits_ahead)
                .ok_or(SimpleGitVerError::BuildOverflow {
                    build: fields.build,
                    commits_ahead: fields.commits_ahead,
                })?
        } else {
            fields.build
        };

        Ok(VersionResult {
            major: fields.major,
            minor: fields.minor,
            patch: fields.patch,
            base_build: fields.build,
            final_build,
            commits_ahead: fields.commits_ahead,
            short_hash: fields.short_hash,
            is_dirty: fields.is_dirty,
            raw_describe: raw_describe.into(),
            tag_prefix: tag_prefix.into(),
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Build number exactly as tagged
    pub fn base_build(&self) -> u32 {
        self.base_build
    }

    /// Build number after optionally folding in the commits ahead
    pub fn final_build(&self) -> u32 {
        self.final_build
    }

    pub fn commits_ahead(&self) -> u32 {
        self.commits_ahead
    }

    /// Abbreviated commit hash, empty when HEAD is exactly on the tag
    pub fn short_hash(&self) -> &str {
        &self.short_hash
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// The unmodified describe line this result was parsed from
    pub fn raw_describe(&self) -> &str {
        &self.raw_describe
    }

    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    /// Version exactly as tagged
    pub fn base_version(&self) -> FourPartVersion {
        FourPartVersion::new(self.major, self.minor, self.patch, self.base_build)
    }

    /// Version to stamp artifacts with
    pub fn final_version(&self) -> FourPartVersion {
        self.base_version().with_build(self.final_build)
    }

    pub fn base_version_string(&self) -> String {
        self.base_version().to_string()
    }

    pub fn final_version_string(&self) -> String {
        self.final_version().to_string()
    }
}

/// Validate a describe line and derive its base and final versions.
///
/// # Arguments
/// * `raw_text` - One line of `git describe --tags` output
/// * `tag_prefix` - Prefix the tags were filtered with, matched literally
/// * `auto_increment_build_number` - Add the commits ahead to the build number
///
/// # Returns
/// * `Ok(VersionResult)` - Parsed fields and both version views
/// * `Err(EmptyInput)` - If `raw_text` is empty
/// * `Err(InvalidFormat)` - If `raw_text` does not have the expected shape
/// * `Err(BuildOverflow)` - If the incremented build number does not fit
///
/// # Example
/// ```
/// use simple_git_ver::derive_version;
///
/// let result = derive_version("v1.2.3.4-7-gA1b2c3", "v", true).unwrap();
/// assert_eq!(result.base_version_string(), "1.2.3.4");
/// assert_eq!(result.final_version_string(), "1.2.3.11");
/// ```
pub fn derive_version(
    raw_text: &str,
    tag_prefix: &str,
    auto_increment_build_number: bool,
) -> Result<VersionResult> {
    let fields = DescribePattern::new(tag_prefix)?.parse(raw_text)?;
    VersionResult::derive(fields, raw_text, tag_prefix, auto_increment_build_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tag_versions_match() {
        for auto_increment in [true, false] {
            let result = derive_version("v1.2.3.4", "v", auto_increment).unwrap();
            assert_eq!(result.base_version(), FourPartVersion::new(1, 2, 3, 4));
            assert_eq!(result.base_version(), result.final_version());
            assert_eq!(result.commits_ahead(), 0);
            assert_eq!(result.short_hash(), "");
            assert!(!result.is_dirty());
        }
    }

    #[test]
    fn test_auto_increment_adds_commits_ahead() {
        let result = derive_version("v1.2.3.4-7-gA1b2c3", "v", true).unwrap();
        assert_eq!(result.base_version(), FourPartVersion::new(1, 2, 3, 4));
        assert_eq!(result.final_version(), FourPartVersion::new(1, 2, 3, 11));
        assert_eq!(result.final_version_string(), "1.2.3.11");
        assert_eq!(result.commits_ahead(), 7);
        assert_eq!(result.short_hash(), "A1b2c3");
    }

    #[test]
    fn test_without_auto_increment_build_is_kept() {
        let result = derive_version("v1.2.3.4-7-gA1b2c3", "v", false).unwrap();
        assert_eq!(result.final_version(), FourPartVersion::new(1, 2, 3, 4));
        assert_eq!(result.base_build(), result.final_build());
    }

    #[test]
    fn test_traceability_fields() {
        let result = derive_version("rel-1.0.0.0-2-gabc-dirty", "rel-", true).unwrap();
        assert_eq!(result.raw_describe(), "rel-1.0.0.0-2-gabc-dirty");
        assert_eq!(result.tag_prefix(), "rel-");
        assert!(result.is_dirty());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let raw = format!("v1.0.0.{}-1-gabc", u32::MAX);
        assert!(matches!(
            derive_version(&raw, "v", true),
            Err(SimpleGitVerError::BuildOverflow { .. })
        ));
        // Without incrementing there is nothing to overflow.
        let result = derive_version(&raw, "v", false).unwrap();
        assert_eq!(result.final_build(), u32::MAX);
    }

    #[test]
    fn test_idempotent() {
        let first = derive_version("v3.1.4.1-5-gfeed-dirty", "v", true).unwrap();
        let second = derive_version("v3.1.4.1-5-gfeed-dirty", "v", true).unwrap();
        assert_eq!(first, second);
    }
}
