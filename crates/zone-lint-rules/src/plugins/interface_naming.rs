//! Interface naming: PascalCase without a Hungarian `I` prefix.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::utils::{has_extension, is_pascal_case, CommentTracker};
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "interface-naming";

/// Rule name on reported violations.
pub const RULE: &str = "Interface naming";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "Interfaces must be PascalCase and not I-prefixed",
};

static INTERFACE: Lazy<Regex> =
    Lazy::new(|| static_regex(r"^\s*(?:export\s+)?(?:declare\s+)?interface\s+([A-Za-z_$][\w$]*)"));

/// Flags badly named TypeScript interfaces.
#[derive(Debug, Clone, Default)]
pub struct InterfaceNaming;

impl InterfaceNaming {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn problem(name: &str) -> Option<String> {
    if !is_pascal_case(name) {
        return Some(format!("Interface '{name}' should be PascalCase"));
    }
    let mut chars = name.chars();
    let hungarian = chars.next() == Some('I')
        && chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.next().is_some_and(|c| c.is_ascii_lowercase());
    hungarian.then(|| format!("Interface '{name}' should not use an I prefix"))
}

impl ContentPredicate for InterfaceNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        if !has_extension(path, &[".ts", ".tsx", ".mts", ".cts"]) {
            return Vec::new();
        }

        let mut tracker = CommentTracker::new();
        let mut violations = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let code = tracker.strip(line);
            let Some(name) = INTERFACE.captures(&code).and_then(|c| c.get(1)) else {
                continue;
            };
            if let Some(message) = problem(name.as_str()) {
                violations.push(
                    Violation::new(RULE, Category::Typescript, Severity::Warning, path, message)
                        .at_line(i + 1),
                );
            }
        }
        violations
    }
}
