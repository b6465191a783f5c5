//! Function naming: camelCase, with PascalCase allowed for components in
//! JSX files.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::utils::{is_camel_case, is_pascal_case, CommentTracker};
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{is_jsx_file, PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "function-naming";

/// Rule name on reported violations.
pub const RULE: &str = "Function naming";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "Function declarations and arrow functions must be camelCase",
};

static FUNCTION_DECLARATION: Lazy<Regex> =
    Lazy::new(|| static_regex(r"\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)\s*[<(]"));

static ARROW_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    static_regex(
        r"\b(?:const|let)\s+([A-Za-z_$][\w$]*)\s*(?::[^=]+)?=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*(?::[^=]+)?=>|[A-Za-z_$][\w$]*\s*=>)",
    )
});

/// Flags functions whose names break the camelCase convention.
#[derive(Debug, Clone, Default)]
pub struct FunctionNaming;

impl FunctionNaming {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn acceptable(name: &str, jsx: bool) -> bool {
    let name = name.trim_start_matches('_');
    name.is_empty() || is_camel_case(name) || (jsx && is_pascal_case(name))
}

impl ContentPredicate for FunctionNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        let jsx = is_jsx_file(path);
        let mut tracker = CommentTracker::new();
        let mut violations = Vec::new();

        for (i, line) in content.lines().enumerate() {
            let code = tracker.strip(line);
            let name = FUNCTION_DECLARATION
                .captures(&code)
                .or_else(|| ARROW_FUNCTION.captures(&code))
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str());

            if let Some(name) = name.filter(|n| !acceptable(n, jsx)) {
                violations.push(
                    Violation::new(
                        RULE,
                        Category::Naming,
                        Severity::Warning,
                        path,
                        format!("Function '{name}' should be camelCase"),
                    )
                    .at_line(i + 1),
                );
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(path: &str, code: &str) -> Vec<usize> {
        FunctionNaming::new()
            .inspect(code, Path::new(path))
            .iter()
            .filter_map(|v| v.line)
            .collect()
    }

    #[test]
    fn test_detects_snake_and_pascal_in_ts() {
        let code = r"function fetch_user() {}
export async function loadData(id: string) {}
const Format_Date = (d: Date) => d.toISOString();
const handleClick = async () => {};
function BuildStore() {}
const MAX = (1 + 2);
";
        assert_eq!(flagged("src/api.ts", code), [1, 3, 5]);
    }

    #[test]
    fn test_allows_components_in_jsx() {
        let code = "export function UserCard() {}\nconst Header = () => <h1 />;\n";
        assert!(flagged("src/UserCard.tsx", code).is_empty());
    }

    #[test]
    fn test_allows_private_prefix_and_generators() {
        let code = "function _internalHelper() {}\nfunction* idGenerator() {}\n";
        assert!(flagged("src/a.ts", code).is_empty());
    }
}
