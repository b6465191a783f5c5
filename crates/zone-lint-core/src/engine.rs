//! Per-file rule execution.

use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Configuration;
use crate::context::{FileContext, RunContext};
use crate::rule::{
    CheckOutcome, ContentPredicate, DirectoryPredicate, PathPredicate, Rule, RuleEntry, RuleError,
    UnusedDeclarationFinder,
};
use crate::types::{Category, Severity, Violation};

/// Name of the catalog rule that enables dead-code analysis.
pub const DEAD_CODE_RULE: &str = "No unused variables";

/// Rule name of the synthetic violation reported for unreadable files.
pub const FILE_VALIDATION_ERROR: &str = "File validation error";

/// Builder for configuring a [`RuleEngine`].
#[derive(Default)]
pub struct RuleEngineBuilder {
    content_plugins: Vec<Arc<dyn ContentPredicate>>,
    path_plugins: Vec<Arc<dyn PathPredicate>>,
    directory_plugins: Vec<Arc<dyn DirectoryPredicate>>,
    unused_finder: Option<Arc<dyn UnusedDeclarationFinder>>,
    config: Option<Configuration>,
}

impl RuleEngineBuilder {
    /// Creates a new builder with no plug-ins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a content plug-in.
    #[must_use]
    pub fn content_plugin<P: ContentPredicate + 'static>(mut self, plugin: P) -> Self {
        self.content_plugins.push(Arc::new(plugin));
        self
    }

    /// Adds a path plug-in.
    #[must_use]
    pub fn path_plugin<P: PathPredicate + 'static>(mut self, plugin: P) -> Self {
        self.path_plugins.push(Arc::new(plugin));
        self
    }

    /// Adds a directory plug-in.
    #[must_use]
    pub fn directory_plugin<P: DirectoryPredicate + 'static>(mut self, plugin: P) -> Self {
        self.directory_plugins.push(Arc::new(plugin));
        self
    }

    /// Installs the dead-code analyzer used by [`DEAD_CODE_RULE`].
    #[must_use]
    pub fn unused_declaration_finder<F: UnusedDeclarationFinder + 'static>(
        mut self,
        finder: F,
    ) -> Self {
        self.unused_finder = Some(Arc::new(finder));
        self
    }

    /// Initializes the engine with `config` when built.
    #[must_use]
    pub fn config(mut self, config: Configuration) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> RuleEngine {
        let mut engine = RuleEngine {
            rules: Vec::new(),
            content_plugins: self.content_plugins,
            path_plugins: self.path_plugins,
            directory_plugins: self.directory_plugins,
            unused_finder: self.unused_finder,
        };
        if let Some(config) = &self.config {
            engine.initialize(config);
        }
        engine
    }
}

/// Per-file results computed before the run-wide directory checks.
#[derive(Debug, Default)]
pub(crate) struct FileFindings {
    violations: Vec<Violation>,
    /// False for skipped or unreadable files.
    judge_directories: bool,
}

/// Runs the active rules and plug-ins against single files.
///
/// Use [`RuleEngine::builder()`] to construct an instance. The engine holds
/// no per-file state and can be shared across threads.
pub struct RuleEngine {
    rules: Vec<RuleEntry>,
    content_plugins: Vec<Arc<dyn ContentPredicate>>,
    path_plugins: Vec<Arc<dyn PathPredicate>>,
    directory_plugins: Vec<Arc<dyn DirectoryPredicate>>,
    unused_finder: Option<Arc<dyn UnusedDeclarationFinder>>,
}

impl RuleEngine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::new()
    }

    /// Loads the configuration's rules as a flat list, one entry per name.
    ///
    /// A later rule with an already-seen name replaces the earlier entry in
    /// the earlier position.
    pub fn initialize(&mut self, config: &Configuration) {
        let mut rules: Vec<RuleEntry> = Vec::with_capacity(config.rules.len());
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for entry in &config.rules {
            if let Some(&i) = positions.get(entry.name()) {
                debug!("Rule '{}' redefined; replacing earlier entry", entry.name());
                rules[i] = entry.clone();
            } else {
                positions.insert(entry.name(), rules.len());
                rules.push(entry.clone());
            }
        }

        debug!("Engine initialized with {} rules", rules.len());
        self.rules = rules;
    }

    /// The active rules, in execution order.
    #[must_use]
    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    /// Reads and validates one file.
    ///
    /// An unreadable file yields a single [`FILE_VALIDATION_ERROR`] violation.
    #[must_use]
    pub fn validate_file(&self, path: &Path, run: &RunContext) -> Vec<Violation> {
        self.finish_file(path, self.inspect_file(path), run)
    }

    /// Validates already-loaded file content.
    #[must_use]
    pub fn validate_source(&self, path: &Path, content: &str, run: &RunContext) -> Vec<Violation> {
        if FileContext::detect_config_file(path) {
            debug!("Skipping configuration file: {}", path.display());
            return Vec::new();
        }
        let findings = FileFindings {
            violations: self.inspect_content(path, content),
            judge_directories: true,
        };
        self.finish_file(path, findings, run)
    }

    /// Everything that depends on the file alone: rules, dead code, content
    /// and path plug-ins. Safe to run for many files at once.
    pub(crate) fn inspect_file(&self, path: &Path) -> FileFindings {
        if FileContext::detect_config_file(path) {
            debug!("Skipping configuration file: {}", path.display());
            return FileFindings::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => FileFindings {
                violations: self.inspect_content(path, &content),
                judge_directories: true,
            },
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                FileFindings {
                    violations: vec![Violation::new(
                        FILE_VALIDATION_ERROR,
                        Category::Content,
                        Severity::Error,
                        path,
                        format!("Could not validate file: {e}"),
                    )],
                    judge_directories: false,
                }
            }
        }
    }

    /// Adds the run-wide directory checks and deduplicates.
    ///
    /// Directory plug-ins record what they report in `run`, so callers
    /// validating a batch must finish files in input order.
    pub(crate) fn finish_file(
        &self,
        path: &Path,
        findings: FileFindings,
        run: &RunContext,
    ) -> Vec<Violation> {
        let mut violations = findings.violations;
        if findings.judge_directories {
            for plugin in &self.directory_plugins {
                if let Some(found) = isolated(plugin.name(), path, || plugin.inspect(path, run)) {
                    violations.extend(found);
                }
            }
        }
        dedup(violations)
    }

    fn inspect_content(&self, path: &Path, content: &str) -> Vec<Violation> {
        let file = FileContext::new(path, content);
        let mut violations = Vec::new();

        for entry in &self.rules {
            if entry.name() == DEAD_CODE_RULE {
                continue;
            }
            match check_isolated(entry.rule(), content, path) {
                Ok(outcome) => violations.extend(rule_violations(entry, path, outcome)),
                Err(e) => warn!(
                    "Rule '{}' failed on {}: {e}; skipping",
                    entry.name(),
                    path.display()
                ),
            }
        }

        violations.extend(self.dead_code_violations(&file));

        if file.is_index {
            debug!("Index file, skipping content plug-ins: {}", path.display());
        } else {
            for plugin in &self.content_plugins {
                if let Some(found) = isolated(plugin.name(), path, || plugin.inspect(content, path))
                {
                    violations.extend(found);
                }
            }
        }

        for plugin in &self.path_plugins {
            if let Some(found) = isolated(plugin.name(), path, || plugin.inspect(path)) {
                violations.extend(found);
            }
        }

        violations
    }

    fn dead_code_violations(&self, file: &FileContext<'_>) -> Vec<Violation> {
        let Some(finder) = &self.unused_finder else {
            return Vec::new();
        };
        let Some(entry) = self.rules.iter().find(|r| r.name() == DEAD_CODE_RULE) else {
            return Vec::new();
        };
        if !finder.supports(file.path) {
            return Vec::new();
        }

        let unused = isolated(DEAD_CODE_RULE, file.path, || {
            finder.find_unused(file.content, file.path)
        })
        .unwrap_or_default();

        unused
            .into_iter()
            .map(|decl| {
                Violation::new(
                    entry.name(),
                    entry.category(),
                    entry.severity(),
                    file.path,
                    format!(
                        "{}: '{}' (line {})",
                        entry.rule().message(),
                        decl.name,
                        decl.line
                    ),
                )
                .at_line(decl.line)
            })
            .collect()
    }
}

fn rule_violations(entry: &RuleEntry, path: &Path, outcome: CheckOutcome) -> Vec<Violation> {
    let message = entry.rule().message();
    outcome
        .occurrences()
        .into_iter()
        .map(|occurrence| {
            let violation = Violation::new(
                entry.name(),
                entry.category(),
                entry.severity(),
                path,
                message,
            );
            match occurrence.line {
                Some(line) => {
                    let mut violation = violation.at_line(line);
                    violation.message = format!("{message} (line {line})");
                    violation
                }
                None => violation,
            }
        })
        .collect()
}

/// Runs a rule, converting a panic into [`RuleError::Panicked`].
fn check_isolated(rule: &dyn Rule, content: &str, path: &Path) -> Result<CheckOutcome, RuleError> {
    panic::catch_unwind(AssertUnwindSafe(|| rule.check(content, path))).unwrap_or_else(|payload| {
        Err(RuleError::Panicked {
            message: panic_message(payload.as_ref()),
        })
    })
}

/// Runs a plug-in; a panic is logged and yields `None`.
fn isolated<T>(name: &str, path: &Path, f: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            warn!(
                "Plug-in '{name}' panicked on {}: {}; skipping",
                path.display(),
                panic_message(payload.as_ref())
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Keeps the first violation per `(file, rule, line)`.
fn dedup(violations: Vec<Violation>) -> Vec<Violation> {
    let mut seen: HashSet<(PathBuf, String, Option<usize>)> = HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert((v.file_path.clone(), v.rule.clone(), v.line)))
        .collect()
}
