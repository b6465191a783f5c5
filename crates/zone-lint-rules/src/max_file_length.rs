//! Rule limiting file length.
//!
//! # Configuration
//!
//! - `max_lines`: Maximum number of lines (default: 400)

use std::path::Path;

use zone_lint_core::{Category, CheckOutcome, Rule, RuleError};

/// Rule name for max file length.
pub const NAME: &str = "Max file length";

/// Default line limit.
pub const DEFAULT_MAX_LINES: usize = 400;

/// Flags files longer than a line limit.
#[derive(Debug, Clone)]
pub struct MaxFileLength {
    /// Maximum number of lines.
    pub max_lines: usize,
    message: String,
}

impl Default for MaxFileLength {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxFileLength {
    /// Creates a new rule with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_lines(DEFAULT_MAX_LINES)
    }

    /// Creates a new rule with a custom limit.
    #[must_use]
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            max_lines,
            message: format!("File exceeds {max_lines} lines; consider splitting it"),
        }
    }
}

impl Rule for MaxFileLength {
    fn name(&self) -> &str {
        NAME
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn description(&self) -> &str {
        "Files should stay under the configured line limit"
    }

    fn check(&self, content: &str, _path: &Path) -> Result<CheckOutcome, RuleError> {
        Ok((content.lines().count() > self.max_lines).into())
    }
}
