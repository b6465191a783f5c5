//! Catalog entry for dead-code analysis.
//!
//! The engine recognizes this rule by name and runs the installed
//! [`zone_lint_core::UnusedDeclarationFinder`] instead of calling `check`.
//! Disabling or re-severitying the rule in configuration controls the
//! analyzer's findings.

use std::path::Path;

use zone_lint_core::{Category, CheckOutcome, Rule, RuleError, DEAD_CODE_RULE};

/// Reports variables that are declared but never referenced.
#[derive(Debug, Clone, Default)]
pub struct NoUnusedVariables;

impl NoUnusedVariables {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoUnusedVariables {
    fn name(&self) -> &str {
        DEAD_CODE_RULE
    }

    fn category(&self) -> Category {
        Category::Quality
    }

    fn message(&self) -> &str {
        "Variable is declared but never used"
    }

    fn description(&self) -> &str {
        "Unexported variables never referenced in the file (prefix with _ to opt out)"
    }

    fn check(&self, _content: &str, _path: &Path) -> Result<CheckOutcome, RuleError> {
        Ok(CheckOutcome::Pass)
    }
}
