//! Line-reporting content rules.
//!
//! Each rule reports every offending line; comment text is ignored.

use zone_lint_core::{Category, PatternRule, Severity};

use crate::static_regex;

/// Rule name for the `console.log` check.
pub const NO_CONSOLE_LOG: &str = "No console.log";

/// Rule name for the `debugger` check.
pub const NO_DEBUGGER: &str = "No debugger statements";

/// Rule name for the `var` check.
pub const NO_VAR: &str = "No var declarations";

/// Flags `console.log(...)` calls.
#[must_use]
pub fn no_console_log() -> PatternRule {
    PatternRule::from_regex(
        NO_CONSOLE_LOG,
        Category::Content,
        "Remove console.log before committing; use the project logger",
        static_regex(r"\bconsole\.log\s*\("),
    )
    .with_description("console.log calls outside comments")
}

/// Flags `debugger` statements.
#[must_use]
pub fn no_debugger() -> PatternRule {
    PatternRule::from_regex(
        NO_DEBUGGER,
        Category::Content,
        "Remove debugger statements",
        static_regex(r"(?:^|[;{}])\s*debugger\s*(?:;|\}|$)"),
    )
    .with_severity(Severity::Error)
    .with_description("debugger statements left in source")
}

/// Flags `var` declarations.
#[must_use]
pub fn no_var() -> PatternRule {
    PatternRule::from_regex(
        NO_VAR,
        Category::Content,
        "Use let or const instead of var",
        static_regex(r"(?:^|[^.\w$])var\s+[A-Za-z_$\[{]"),
    )
    .with_description("function-scoped var declarations")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use zone_lint_core::{CheckOutcome, Rule};

    fn lines(rule: &PatternRule, content: &str) -> CheckOutcome {
        rule.check(content, Path::new("src/app.ts")).unwrap()
    }

    #[test]
    fn test_console_log() {
        let code = "console.log('a');\nconsole.error('b');\n// console.log('c');\nlogger.console.log ('d');\n";
        assert_eq!(lines(&no_console_log(), code), CheckOutcome::Lines(vec![1, 4]));
    }

    #[test]
    fn test_debugger() {
        let code = "debugger;\nif (x) { debugger }\nconst debuggerEnabled = true;\n";
        let rule = no_debugger();
        assert_eq!(lines(&rule, code), CheckOutcome::Lines(vec![1, 2]));
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn test_var() {
        let code = "var a = 1;\nfor (var i = 0; i < 3; i++) {}\nconst variable = 2;\nobj.var = 3;\n";
        assert_eq!(lines(&no_var(), code), CheckOutcome::Lines(vec![1, 2]));
    }
}
