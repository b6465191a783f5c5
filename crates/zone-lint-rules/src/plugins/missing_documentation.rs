//! JSDoc coverage for exported functions and classes.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{is_test_file, PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "missing-documentation";

/// Rule name on reported violations.
pub const RULE: &str = "Missing documentation";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "Exported functions and classes without a JSDoc comment",
};

static EXPORTED_ITEM: Lazy<Regex> = Lazy::new(|| {
    static_regex(
        r"^export\s+(?:default\s+)?(?:async\s+)?(?:function\s*\*?\s*|class\s+|const\s+)([A-Za-z_$][\w$]*)",
    )
});

/// Requires a `/** ... */` block directly above exported functions and
/// classes. Exported constants count only when they hold arrow functions.
#[derive(Debug, Clone, Default)]
pub struct MissingDocumentation;

impl MissingDocumentation {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Whether the nearest non-decorator line above `index` closes a JSDoc block.
fn documented(lines: &[&str], index: usize) -> bool {
    lines[..index]
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| !l.starts_with('@'))
        .is_some_and(|l| l.starts_with("/**") || (l.ends_with("*/") && !l.starts_with("/*")))
}

fn is_exported_function(line: &str) -> Option<&str> {
    let caps = EXPORTED_ITEM.captures(line)?;
    let name = caps.get(1)?.as_str();
    let is_const = line.contains("const ");
    if is_const && !line.contains("=>") && !line.contains("function") {
        return None;
    }
    Some(name)
}

impl ContentPredicate for MissingDocumentation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        if is_test_file(path) {
            return Vec::new();
        }

        let lines: Vec<&str> = content.lines().collect();
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let name = is_exported_function(line)?;
                (!documented(&lines, i)).then(|| {
                    Violation::new(
                        RULE,
                        Category::Documentation,
                        Severity::Info,
                        path,
                        format!("Exported '{name}' has no JSDoc comment"),
                    )
                    .at_line(i + 1)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(code: &str) -> Vec<usize> {
        MissingDocumentation::new()
            .inspect(code, Path::new("src/api.ts"))
            .iter()
            .filter_map(|v| v.line)
            .collect()
    }

    #[test]
    fn test_detects_undocumented_exports() {
        let code = r"export function load() {}

/** Saves the user. */
export async function save() {}

/**
 * Formats a date.
 */
export const format = (d: Date) => d.toISOString();
export const LIMIT = 10;
export class Store {}
";
        assert_eq!(lines(code), [1, 11]);
    }

    #[test]
    fn test_decorators_between_doc_and_class() {
        let code = "/** Service. */\n@Injectable()\nexport class Service {}\n";
        assert!(lines(code).is_empty());
    }

    #[test]
    fn test_plain_comment_is_not_jsdoc() {
        let code = "/* not jsdoc */\nexport function a() {}\n// nor this\nexport function b() {}\n";
        assert_eq!(lines(code), [2, 4]);
    }
}
