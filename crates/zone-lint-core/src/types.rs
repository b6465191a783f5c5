//! Core types for violations and reports.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Severity level for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail the run.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Parses the lowercase configuration spelling (`error`, `warning`, `info`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Category a rule belongs to in the default catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// File, directory, and identifier naming.
    Naming,
    /// File layout and size.
    Structure,
    /// Forbidden content patterns.
    Content,
    /// Styling conventions.
    Style,
    /// TypeScript-specific checks.
    Typescript,
    /// Documentation coverage.
    Documentation,
    /// Code quality (dead code and similar).
    Quality,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Naming,
        Self::Structure,
        Self::Content,
        Self::Style,
        Self::Typescript,
        Self::Documentation,
        Self::Quality,
    ];

    /// Parses the lowercase configuration spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Returns the lowercase name of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Naming => "naming",
            Self::Structure => "structure",
            Self::Content => "content",
            Self::Style => "style",
            Self::Typescript => "typescript",
            Self::Documentation => "documentation",
            Self::Quality => "quality",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A convention violation found in one file.
///
/// Created once per `(file, rule, line)` occurrence by the engine and
/// handed to the reporter untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the rule that produced this violation.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Path of the offending file.
    pub file_path: PathBuf,
    /// Line number (1-indexed), when the rule reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Severity of this violation.
    pub severity: Severity,
    /// Category of the producing rule.
    pub category: Category,
}

impl Violation {
    /// Creates a new file-level violation.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        category: Category,
        severity: Severity,
        file_path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            file_path: file_path.into(),
            line: None,
            severity,
            category,
        }
    }

    /// Attaches a line number.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_path.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        write!(f, ": {} [{}] {}", self.severity, self.rule, self.message)
    }
}

/// A violation rendered as a miette diagnostic with its source snippet.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{severity}: [{rule}] {message}")]
pub struct ViolationDiagnostic {
    severity: Severity,
    rule: String,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("{category}")]
    span: Option<SourceSpan>,
    category: Category,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic for `violation` over the file's `content`.
    ///
    /// The label spans the reported line; file-level violations carry no label.
    #[must_use]
    pub fn new(violation: &Violation, content: String) -> Self {
        let span = violation
            .line
            .and_then(|line| crate::utils::lines::line_span(&content, line))
            .map(SourceSpan::from);
        Self {
            severity: violation.severity,
            rule: violation.rule.clone(),
            message: violation.message.clone(),
            source_code: NamedSource::new(violation.file_path.display().to_string(), content),
            span,
            category: violation.category,
        }
    }
}

/// Result of a lint run, bucketed by zone.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintReport {
    /// Violations per zone name.
    pub zones: BTreeMap<String, Vec<Violation>>,
    /// Number of files validated.
    pub files_checked: usize,
}

impl LintReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends violations to a zone bucket, creating it if needed.
    pub fn extend_zone(&mut self, zone: &str, violations: impl IntoIterator<Item = Violation>) {
        self.zones
            .entry(zone.to_string())
            .or_default()
            .extend(violations);
    }

    /// Iterates over all violations, zone by zone.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.zones.values().flatten()
    }

    /// Total number of violations across zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.zones.values().map(Vec::len).sum()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations().any(|v| v.severity == Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Merges another report into this one.
    pub fn extend(&mut self, other: Self) {
        for (zone, violations) in other.zones {
            self.extend_zone(&zone, violations);
        }
        self.files_checked += other.files_checked;
    }
}
