//! Rule and plug-in contracts.
//!
//! Three kinds of checks plug into the engine:
//!
//! - [`Rule`]: a named catalog entry whose `check` sees raw content and path
//!   and answers with a [`CheckOutcome`]. Rules are what configuration merges,
//!   enables, and re-severities.
//! - [`ContentPredicate`] / [`PathPredicate`]: always-on plug-ins that build
//!   their own [`Violation`]s.
//! - [`DirectoryPredicate`]: a path plug-in that shares the run-wide
//!   [`RunContext`] to avoid repeating itself across files.
//!
//! [`UnusedDeclarationFinder`] is the seam for the syntax-tree based
//! dead-code analyzer.

use std::path::Path;
use std::sync::Arc;

use crate::context::RunContext;
use crate::types::{Category, Severity, Violation};

/// Errors a rule can report instead of an outcome.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The predicate could not evaluate the file.
    #[error("{message}")]
    Check {
        /// Failure description.
        message: String,
    },

    /// The predicate panicked; the engine caught it.
    #[error("rule panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string.
        message: String,
    },
}

impl RuleError {
    /// Creates a check failure with the given message.
    #[must_use]
    pub fn check(message: impl Into<String>) -> Self {
        Self::Check {
            message: message.into(),
        }
    }
}

/// What a rule reports for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No violation.
    Pass,
    /// One file-level violation.
    Fail,
    /// One violation per listed line (1-indexed).
    Lines(Vec<usize>),
}

/// A single place a rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Line number, absent for file-level findings.
    pub line: Option<usize>,
}

impl CheckOutcome {
    /// Normalizes the outcome into zero or more occurrences.
    #[must_use]
    pub fn occurrences(self) -> Vec<Occurrence> {
        match self {
            Self::Pass => Vec::new(),
            Self::Fail => vec![Occurrence { line: None }],
            Self::Lines(lines) => lines
                .into_iter()
                .map(|line| Occurrence { line: Some(line) })
                .collect(),
        }
    }
}

impl From<bool> for CheckOutcome {
    fn from(failed: bool) -> Self {
        if failed {
            Self::Fail
        } else {
            Self::Pass
        }
    }
}

impl From<Vec<usize>> for CheckOutcome {
    fn from(lines: Vec<usize>) -> Self {
        Self::Lines(lines)
    }
}

/// A named, categorized check over a file's raw text.
///
/// # Example
///
/// ```ignore
/// use zone_lint_core::{Category, CheckOutcome, Rule, RuleError};
///
/// pub struct NoAlert;
///
/// impl Rule for NoAlert {
///     fn name(&self) -> &str { "No alert" }
///     fn category(&self) -> Category { Category::Content }
///     fn message(&self) -> &str { "Use the notification service instead of alert()" }
///
///     fn check(&self, content: &str, _path: &Path) -> Result<CheckOutcome, RuleError> {
///         Ok(content.contains("alert(").into())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Unique, human-readable name (e.g. "No console.log").
    fn name(&self) -> &str;

    /// Catalog category.
    fn category(&self) -> Category;

    /// Severity used unless configuration overrides it.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Message attached to every violation of this rule.
    fn message(&self) -> &str;

    /// Longer description for `list-rules`.
    fn description(&self) -> &str {
        ""
    }

    /// Checks one file.
    ///
    /// # Errors
    ///
    /// Returns an error when the predicate cannot evaluate this file. The
    /// engine logs it and skips the rule for this file only.
    fn check(&self, content: &str, path: &Path) -> Result<CheckOutcome, RuleError>;
}

/// Shared handle to a rule.
pub type RuleBox = Arc<dyn Rule>;

/// A rule as it appears in a resolved configuration: the rule plus its
/// effective severity.
#[derive(Clone)]
pub struct RuleEntry {
    rule: RuleBox,
    severity: Severity,
}

impl RuleEntry {
    /// Wraps a shared rule at its default severity.
    #[must_use]
    pub fn new(rule: RuleBox) -> Self {
        let severity = rule.default_severity();
        Self { rule, severity }
    }

    /// Wraps a concrete rule at its default severity.
    #[must_use]
    pub fn from_rule<R: Rule + 'static>(rule: R) -> Self {
        Self::new(Arc::new(rule))
    }

    /// Returns the same rule with a different severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.rule.name()
    }

    /// Rule category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.rule.category()
    }

    /// Effective severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Underlying rule.
    #[must_use]
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }
}

impl std::fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEntry")
            .field("name", &self.name())
            .field("category", &self.category())
            .field("severity", &self.severity)
            .finish()
    }
}

/// A plug-in that inspects file content and reports its own violations.
///
/// Implementations must be side-effect free; any suppression heuristics stay
/// private to the plug-in.
pub trait ContentPredicate: Send + Sync {
    /// Plug-in identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Returns zero or more violations for this file.
    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation>;
}

/// A plug-in that judges a file by its path alone.
pub trait PathPredicate: Send + Sync {
    /// Plug-in identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Returns at most one violation for this path.
    fn inspect(&self, path: &Path) -> Option<Violation>;
}

/// A path plug-in that reports directories, once per run.
pub trait DirectoryPredicate: Send + Sync {
    /// Plug-in identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Returns violations for directories of `path` not yet reported in `run`.
    fn inspect(&self, path: &Path, run: &RunContext) -> Vec<Violation>;
}

/// A declared identifier that is never referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedDeclaration {
    /// Identifier name.
    pub name: String,
    /// Line of the declaration (1-indexed).
    pub line: usize,
}

/// Finds unused declarations in a file.
pub trait UnusedDeclarationFinder: Send + Sync {
    /// Whether this finder understands the file's language.
    fn supports(&self, path: &Path) -> bool;

    /// Returns unused declarations; an empty list when the file cannot be
    /// analyzed.
    fn find_unused(&self, content: &str, path: &Path) -> Vec<UnusedDeclaration>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &str {
            "test-rule"
        }
        fn category(&self) -> Category {
            Category::Content
        }
        fn message(&self) -> &str {
            "Test violation"
        }
        fn check(&self, content: &str, _path: &Path) -> Result<CheckOutcome, RuleError> {
            Ok(content.contains("bad").into())
        }
    }

    #[test]
    fn rule_defaults() {
        let rule = TestRule;
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert_eq!(rule.description(), "");
        assert_eq!(
            rule.check("bad code", Path::new("a.ts")).unwrap(),
            CheckOutcome::Fail
        );
    }

    #[test]
    fn entry_severity_override_keeps_rule() {
        let entry = RuleEntry::from_rule(TestRule).with_severity(Severity::Error);
        assert_eq!(entry.name(), "test-rule");
        assert_eq!(entry.severity(), Severity::Error);
        assert_eq!(entry.rule().default_severity(), Severity::Warning);
    }

    #[test]
    fn outcome_normalization() {
        assert!(CheckOutcome::Pass.occurrences().is_empty());
        assert_eq!(
            CheckOutcome::Fail.occurrences(),
            vec![Occurrence { line: None }]
        );
        assert_eq!(
            CheckOutcome::from(vec![3, 7]).occurrences(),
            vec![Occurrence { line: Some(3) }, Occurrence { line: Some(7) }]
        );
        assert!(CheckOutcome::from(Vec::new()).occurrences().is_empty());
    }
}
