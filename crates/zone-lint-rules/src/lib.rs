//! # zone-lint-rules
//!
//! Built-in rules and plug-ins for zone-lint.
//!
//! ## Default Catalog
//!
//! | Category | Name | Reports |
//! |----------|------|---------|
//! | naming | `Component naming` | file |
//! | naming | `Hook naming` | file |
//! | structure | `Max file length` | file |
//! | structure | `Single component per file` | file |
//! | content | `No console.log` | lines |
//! | content | `No debugger statements` | lines |
//! | content | `No var declarations` | lines |
//! | typescript | `No explicit any` | lines |
//! | typescript | `No ts-ignore` | lines |
//! | quality | `No unused variables` | lines (dead-code analyzer) |
//!
//! Plug-ins are listed in [`plugins`].
//!
//! ## Usage
//!
//! ```ignore
//! use zone_lint_core::{config, RuleEngine};
//! use zone_lint_rules::{default_catalog, plugins};
//!
//! let config = config::resolve(&default_catalog(), None);
//! let engine = plugins::with_default_plugins(RuleEngine::builder(), None)
//!     .config(config)
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod component_naming;
mod content_patterns;
mod hook_naming;
mod max_file_length;
mod no_unused_variables;
pub mod plugins;
mod single_component;
mod typescript_patterns;

pub use catalog::default_catalog;
pub use component_naming::ComponentNaming;
pub use content_patterns::{no_console_log, no_debugger, no_var};
pub use hook_naming::HookNaming;
pub use max_file_length::{MaxFileLength, DEFAULT_MAX_LINES};
pub use no_unused_variables::NoUnusedVariables;
pub use single_component::SingleComponentPerFile;
pub use typescript_patterns::{no_explicit_any, no_ts_ignore};

/// Re-export core types for convenience.
pub use zone_lint_core::{Rule, Severity, Violation};

/// Compiles a built-in pattern literal.
#[allow(clippy::expect_used)]
pub(crate) fn static_regex(pattern: &str) -> regex::Regex {
    regex::Regex::new(pattern).expect("built-in pattern is a valid regex")
}
