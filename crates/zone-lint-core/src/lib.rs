//! # zone-lint-core
//!
//! Rule resolution and execution engine for JavaScript/TypeScript
//! convention linting.
//!
//! This crate provides the foundational traits and types for building
//! convention linters. It includes:
//!
//! - [`Rule`] trait for named, categorized checks over raw file text
//! - [`ContentPredicate`], [`PathPredicate`] and [`DirectoryPredicate`]
//!   for always-on plug-ins
//! - [`config`] for merging a user override with the [`DefaultCatalog`]
//! - [`RuleEngine`] for validating one file with failure containment
//! - [`Linter`] for validating a zone-tagged batch on a worker pool
//!
//! ## Example
//!
//! ```ignore
//! use zone_lint_core::{config, Linter, RuleEngine, SourceFile};
//!
//! let config = config::load_or_default(Path::new("zone-lint.toml"), &catalog);
//! let engine = RuleEngine::builder()
//!     .content_plugin(MyPlugin::new())
//!     .config(config)
//!     .build();
//!
//! let report = Linter::new(&engine).run(&[SourceFile::new("src/App.tsx", "web")])?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod context;
mod engine;
mod linter;
mod pattern;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{
    ConfigError, ConfigOverride, Configuration, DefaultCatalog, RuleOverride, Selection,
    TransformFn, TransformOutput, UserConfig, ZoneConfig,
};
pub use context::{FileContext, RunContext, CONFIG_FILE_PATTERNS};
pub use engine::{RuleEngine, RuleEngineBuilder, DEAD_CODE_RULE, FILE_VALIDATION_ERROR};
pub use linter::{Linter, LinterError, SourceFile};
pub use pattern::{PatternRule, ReportMode};
pub use rule::{
    CheckOutcome, ContentPredicate, DirectoryPredicate, Occurrence, PathPredicate, Rule,
    RuleBox, RuleEntry, RuleError, UnusedDeclaration, UnusedDeclarationFinder,
};
pub use types::{Category, LintReport, Severity, Violation, ViolationDiagnostic};
