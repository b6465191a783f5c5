//! Regex-backed rules.
//!
//! `PatternRule` is how configuration files add rules without code, and the
//! building block for the line-reporting rules of the built-in catalog.

use regex::Regex;
use std::path::Path;

use crate::rule::{CheckOutcome, Rule, RuleError};
use crate::types::{Category, Severity};
use crate::utils::{has_extension, matching_lines};

/// How a [`PatternRule`] reports matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// One violation per matching line.
    #[default]
    Lines,
    /// One file-level violation if anything matches.
    File,
}

impl ReportMode {
    /// Parses `"lines"` or `"file"`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lines" => Some(Self::Lines),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// A rule that fires where `pattern` matches the file text.
///
/// Matches inside comments are ignored unless [`PatternRule::include_comments`]
/// is set.
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    category: Category,
    severity: Severity,
    message: String,
    description: String,
    pattern: Regex,
    report: ReportMode,
    extensions: Vec<String>,
    skip_comments: bool,
}

impl PatternRule {
    /// Creates a line-reporting rule at warning severity.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        message: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(name, category, message, Regex::new(pattern)?))
    }

    /// Creates a line-reporting rule from a compiled regex.
    #[must_use]
    pub fn from_regex(
        name: impl Into<String>,
        category: Category,
        message: impl Into<String>,
        pattern: Regex,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            severity: Severity::Warning,
            message: message.into(),
            description: String::new(),
            pattern,
            report: ReportMode::Lines,
            extensions: Vec::new(),
            skip_comments: true,
        }
    }

    /// Sets the default severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the report mode.
    #[must_use]
    pub fn with_report(mut self, report: ReportMode) -> Self {
        self.report = report;
        self
    }

    /// Restricts the rule to files with these dotted extensions.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Matches comment text too (for directives such as `@ts-ignore`).
    #[must_use]
    pub fn include_comments(mut self) -> Self {
        self.skip_comments = false;
        self
    }

    /// Sets the listing description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn applies_to(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        has_extension(path, &extensions)
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, content: &str, path: &Path) -> Result<CheckOutcome, RuleError> {
        if !self.applies_to(path) {
            return Ok(CheckOutcome::Pass);
        }
        let lines = matching_lines(content, &self.pattern, self.skip_comments);
        Ok(match self.report {
            ReportMode::Lines => CheckOutcome::Lines(lines),
            ReportMode::File => (!lines.is_empty()).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console_rule() -> PatternRule {
        PatternRule::new(
            "No console.log",
            Category::Content,
            "Remove console.log",
            r"console\.log\(",
        )
        .unwrap()
    }

    #[test]
    fn reports_matching_lines_outside_comments() {
        let content = "console.log(1);\n// console.log(2);\nconst a = 1;\nconsole.log(a);\n";
        let outcome = console_rule().check(content, Path::new("a.ts")).unwrap();
        assert_eq!(outcome, CheckOutcome::Lines(vec![1, 4]));
    }

    #[test]
    fn file_mode_reports_once() {
        let rule = console_rule().with_report(ReportMode::File);
        let outcome = rule
            .check("console.log(1);\nconsole.log(2);", Path::new("a.ts"))
            .unwrap();
        assert_eq!(outcome, CheckOutcome::Fail);
        assert_eq!(
            rule.check("const a = 1;", Path::new("a.ts")).unwrap(),
            CheckOutcome::Pass
        );
    }

    #[test]
    fn extensions_restrict_applicability() {
        let rule = console_rule().with_extensions([".ts"]);
        assert_eq!(
            rule.check("console.log(1);", Path::new("a.js")).unwrap(),
            CheckOutcome::Pass
        );
        assert_eq!(
            rule.check("console.log(1);", Path::new("a.ts")).unwrap(),
            CheckOutcome::Lines(vec![1])
        );
    }

    #[test]
    fn include_comments_matches_directives() {
        let rule = PatternRule::new("No ts-ignore", Category::Typescript, "m", "@ts-ignore").unwrap();
        let content = "// @ts-ignore\nfoo();\n";
        assert_eq!(
            rule.check(content, Path::new("a.ts")).unwrap(),
            CheckOutcome::Lines(vec![])
        );
        assert_eq!(
            rule.include_comments()
                .check(content, Path::new("a.ts"))
                .unwrap(),
            CheckOutcome::Lines(vec![1])
        );
    }

    #[test]
    fn invalid_regex_is_rejected() {
        assert!(PatternRule::new("bad", Category::Content, "m", "(").is_err());
    }

    #[test]
    fn report_mode_parse() {
        assert_eq!(ReportMode::parse("lines"), Some(ReportMode::Lines));
        assert_eq!(ReportMode::parse("file"), Some(ReportMode::File));
        assert_eq!(ReportMode::parse("column"), None);
    }
}
