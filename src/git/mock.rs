use std::sync::Mutex;

use crate::error::{Result, SimpleGitVerError};
use crate::git::Describer;

/// Mock describer for testing without a repository
pub struct MockDescriber {
    output: std::result::Result<String, String>,
    requested: Mutex<Vec<String>>,
}

impl MockDescriber {
    /// Describer that always returns `line`
    pub fn new(line: impl Into<String>) -> Self {
        MockDescriber {
            output: Ok(line.into()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Describer that always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockDescriber {
            output: Err(message.into()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Prefixes passed to [`Describer::describe`] so far, oldest first
    pub fn requested_prefixes(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|requested| requested.clone())
            .unwrap_or_default()
    }
}

impl Describer for MockDescriber {
    fn describe(&self, tag_prefix: &str) -> Result<String> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(tag_prefix.to_string());
        }

        self.output.clone().map_err(SimpleGitVerError::describe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_describer_returns_line() {
        let describer = MockDescriber::new("v1.0.0.0");
        assert_eq!(describer.describe("v").unwrap(), "v1.0.0.0");
    }

    #[test]
    fn test_mock_describer_failure() {
        let describer = MockDescriber::failing("boom");
        let err = describer.describe("v").unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_mock_describer_records_prefixes() {
        let describer = MockDescriber::new("x");
        describer.describe("v").unwrap();
        describer.describe("rel-").unwrap();
        assert_eq!(describer.requested_prefixes(), vec!["v", "rel-"]);
    }
}
