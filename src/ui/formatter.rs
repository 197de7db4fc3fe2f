//! Pure formatting functions for UI output.
//!
//! Functions returning `String` have no side effects and are tested directly;
//! the `display_*` helpers only print.

use console::style;

use crate::domain::VersionResult;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Human readable summary of a derived version.
///
/// Hash and commit count are only shown when HEAD is past the tag.
pub fn format_summary(result: &VersionResult) -> String {
    let mut lines = vec![
        format!("{} {}", style("Version:").bold(), style(result.final_version()).green()),
        format!("  Tagged:  {}{}", result.tag_prefix(), result.base_version()),
        format!("  SemVer:  {}", result.final_version().to_semver()),
    ];

    if result.commits_ahead() > 0 {
        lines.push(format!(
            "  Ahead:   {} commit(s) at {}",
            result.commits_ahead(),
            result.short_hash()
        ));
    }

    if result.is_dirty() {
        lines.push(format!(
            "  {}",
            style("Working tree has uncommitted changes").yellow()
        ));
    }

    lines.push(format!("  Describe: {}", result.raw_describe()));
    lines.join("\n")
}

/// `KEY=value` lines for CI environments
pub fn format_env(result: &VersionResult) -> String {
    let pairs: [(&str, String); 13] = [
        ("VERSION", result.final_version_string()),
        ("BASE_VERSION", result.base_version_string()),
        ("SEMVER", result.final_version().to_semver().to_string()),
        ("MAJOR", result.major().to_string()),
        ("MINOR", result.minor().to_string()),
        ("PATCH", result.patch().to_string()),
        ("BASE_BUILD", result.base_build().to_string()),
        ("BUILD", result.final_build().to_string()),
        ("COMMITS_AHEAD", result.commits_ahead().to_string()),
        ("SHA", result.short_hash().to_string()),
        ("DIRTY", result.is_dirty().to_string()),
        ("RAW_DESCRIBE", result.raw_describe().to_string()),
        ("TAG_PREFIX", result.tag_prefix().to_string()),
    ];

    pairs
        .iter()
        .map(|(key, value)| format!("SIMPLEGITVER_{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::derive_version;

    #[test]
    fn test_summary_exact_tag() {
        console::set_colors_enabled(false);
        let result = derive_version("v1.2.3.4", "v", true).unwrap();
        let summary = format_summary(&result);
        assert!(summary.contains("Version: 1.2.3.4"));
        assert!(summary.contains("Tagged:  v1.2.3.4"));
        assert!(!summary.contains("Ahead"));
        assert!(!summary.contains("uncommitted"));
    }

    #[test]
    fn test_summary_ahead_and_dirty() {
        console::set_colors_enabled(false);
        let result = derive_version("v1.2.3.4-7-gA1b2c3-dirty", "v", true).unwrap();
        let summary = format_summary(&result);
        assert!(summary.contains("Version: 1.2.3.11"));
        assert!(summary.contains("7 commit(s) at A1b2c3"));
        assert!(summary.contains("uncommitted changes"));
        assert!(summary.contains("SemVer:  1.2.3+11"));
    }

    #[test]
    fn test_env_lines() {
        let result = derive_version("v1.2.3.4-7-gA1b2c3", "v", true).unwrap();
        let env = format_env(&result);
        assert!(env.contains("SIMPLEGITVER_VERSION=1.2.3.11\n"));
        assert!(env.contains("SIMPLEGITVER_BASE_VERSION=1.2.3.4\n"));
        assert!(env.contains("SIMPLEGITVER_SHA=A1b2c3\n"));
        assert!(env.contains("SIMPLEGITVER_DIRTY=false\n"));
        assert!(env.ends_with("SIMPLEGITVER_TAG_PREFIX=v"));
    }
}
