//! The default, category-organized rule catalog.

use zone_lint_core::{Category, DefaultCatalog, RuleEntry};

use crate::content_patterns::{no_console_log, no_debugger, no_var};
use crate::typescript_patterns::{no_explicit_any, no_ts_ignore};
use crate::{ComponentNaming, HookNaming, MaxFileLength, NoUnusedVariables, SingleComponentPerFile};

/// Returns the built-in catalog.
///
/// | Category | Rules |
/// |----------|-------|
/// | naming | `Component naming`, `Hook naming` |
/// | structure | `Max file length`, `Single component per file` |
/// | content | `No console.log`, `No debugger statements`, `No var declarations` |
/// | typescript | `No explicit any`, `No ts-ignore` |
/// | quality | `No unused variables` |
#[must_use]
pub fn default_catalog() -> DefaultCatalog {
    DefaultCatalog::new()
        .with_category(
            Category::Naming,
            [
                RuleEntry::from_rule(ComponentNaming::new()),
                RuleEntry::from_rule(HookNaming::new()),
            ],
        )
        .with_category(
            Category::Structure,
            [
                RuleEntry::from_rule(MaxFileLength::new()),
                RuleEntry::from_rule(SingleComponentPerFile::new()),
            ],
        )
        .with_category(
            Category::Content,
            [
                RuleEntry::from_rule(no_console_log()),
                RuleEntry::from_rule(no_debugger()),
                RuleEntry::from_rule(no_var()),
            ],
        )
        .with_category(
            Category::Typescript,
            [
                RuleEntry::from_rule(no_explicit_any()),
                RuleEntry::from_rule(no_ts_ignore()),
            ],
        )
        .with_category(
            Category::Quality,
            [RuleEntry::from_rule(NoUnusedVariables::new())],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use zone_lint_core::DEAD_CODE_RULE;

    #[test]
    fn test_catalog_names_are_unique() {
        let rules = default_catalog().flatten();
        let names: HashSet<_> = rules.iter().map(RuleEntry::name).collect();
        assert_eq!(names.len(), rules.len());
        assert_eq!(rules.len(), 10);
    }

    #[test]
    fn test_rules_sit_in_their_category() {
        for (category, rules) in default_catalog().categories() {
            for rule in rules {
                assert_eq!(rule.category(), category, "{}", rule.name());
            }
        }
    }

    #[test]
    fn test_catalog_contains_dead_code_rule() {
        assert!(default_catalog().find(DEAD_CODE_RULE).is_some());
    }
}
