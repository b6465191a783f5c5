//! # zone-lint-ts
//!
//! Tree-sitter based dead-code analysis for TypeScript and JavaScript.
//!
//! - [`SyntaxTreeProvider`] parses source text with the TypeScript or TSX
//!   grammar, chosen by [`Dialect::from_path`]
//! - [`ScopeAnalyzer`] builds flat declaration/usage tables and reports
//!   variables that are never referenced
//! - [`TypeScriptAnalyzer`] plugs both into the rule engine as an
//!   [`zone_lint_core::UnusedDeclarationFinder`]
//!
//! ```ignore
//! use zone_lint_core::RuleEngine;
//! use zone_lint_ts::TypeScriptAnalyzer;
//!
//! let engine = RuleEngine::builder()
//!     .unused_declaration_finder(TypeScriptAnalyzer::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
pub mod provider;
pub mod scope;

pub use analyzer::TypeScriptAnalyzer;
pub use provider::{Dialect, ParseError, SyntaxTree, SyntaxTreeProvider};
pub use scope::{DeclaredVariable, ScopeAnalyzer};
