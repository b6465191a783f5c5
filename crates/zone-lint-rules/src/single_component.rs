//! Rule allowing at most one exported component per file.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::utils::{has_extension, CommentTracker};
use zone_lint_core::{Category, CheckOutcome, Rule, RuleError};

use crate::static_regex;

/// Rule name for single component per file.
pub const NAME: &str = "Single component per file";

static EXPORTED_COMPONENT: Lazy<Regex> = Lazy::new(|| {
    static_regex(r"^\s*export\s+(?:default\s+)?(?:function|const|let|class)\s+([A-Z][A-Za-z0-9]*)")
});

/// Flags `.tsx`/`.jsx` files exporting more than one PascalCase component.
#[derive(Debug, Clone, Default)]
pub struct SingleComponentPerFile;

impl SingleComponentPerFile {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn exported_components(content: &str) -> BTreeSet<String> {
    let mut tracker = CommentTracker::new();
    content
        .lines()
        .filter_map(|line| {
            let code = tracker.strip(line);
            EXPORTED_COMPONENT
                .captures(&code)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

impl Rule for SingleComponentPerFile {
    fn name(&self) -> &str {
        NAME
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn message(&self) -> &str {
        "Export one component per file"
    }

    fn description(&self) -> &str {
        "A .tsx or .jsx file should export at most one PascalCase component"
    }

    fn check(&self, content: &str, path: &Path) -> Result<CheckOutcome, RuleError> {
        if !has_extension(path, &[".tsx", ".jsx"]) {
            return Ok(CheckOutcome::Pass);
        }
        Ok((exported_components(content).len() > 1).into())
    }
}
