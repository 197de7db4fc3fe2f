use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SimpleGitVerError};

/// Four-part version (major.minor.patch.build) as encoded in release tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FourPartVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl FourPartVersion {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        FourPartVersion {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Same version with a different build number
    pub fn with_build(self, build: u32) -> Self {
        FourPartVersion { build, ..self }
    }

    /// Convert to a SemVer value, carrying the build number as build metadata
    /// (e.g. 1.2.3.4 -> "1.2.3+4").
    pub fn to_semver(&self) -> semver::Version {
        let mut version = semver::Version::new(
            u64::from(self.major),
            u64::from(self.minor),
            u64::from(self.patch),
        );
        // A decimal integer is always valid build metadata.
        if let Ok(build) = semver::BuildMetadata::new(&self.build.to_string()) {
            version.build = build;
        }
        version
    }
}

impl fmt::Display for FourPartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}

impl FromStr for FourPartVersion {
    type Err = SimpleGitVerError;

    /// Parse the dotted form, e.g. "1.2.3.4"
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(SimpleGitVerError::invalid_format(
                s,
                "",
                "expected four dot-separated numbers",
            ));
        }

        let mut numbers = [0u32; 4];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(SimpleGitVerError::invalid_format(
                    s,
                    "",
                    format!("'{}' is not a number", part),
                ));
            }
            *slot = part.parse::<u32>().map_err(|_| {
                SimpleGitVerError::invalid_format(s, "", format!("'{}' is out of range", part))
            })?;
        }

        Ok(FourPartVersion::new(
            numbers[0], numbers[1], numbers[2], numbers[3],
        ))
    }
}
