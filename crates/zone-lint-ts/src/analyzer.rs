//! The dead-code finder handed to the rule engine.

use std::path::Path;

use tracing::debug;
use zone_lint_core::{UnusedDeclaration, UnusedDeclarationFinder};

use crate::provider::{Dialect, SyntaxTreeProvider};
use crate::scope::ScopeAnalyzer;

/// Parses TypeScript/JavaScript files and reports unused variables.
///
/// Files that fail to parse yield no findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptAnalyzer {
    provider: SyntaxTreeProvider,
    scope: ScopeAnalyzer,
}

impl TypeScriptAnalyzer {
    /// Creates a new analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnusedDeclarationFinder for TypeScriptAnalyzer {
    fn supports(&self, path: &Path) -> bool {
        Dialect::from_path(path).is_some()
    }

    fn find_unused(&self, content: &str, path: &Path) -> Vec<UnusedDeclaration> {
        let Some(parsed) = self.provider.parse_path(content, path) else {
            return Vec::new();
        };
        match parsed {
            Ok(tree) => {
                debug!("Analyzing {} as {}", path.display(), tree.dialect());
                self.scope.find_unused_declarations(&tree)
            }
            Err(e) => {
                debug!("Skipping dead-code analysis for {}: {e}", path.display());
                Vec::new()
            }
        }
    }
}
