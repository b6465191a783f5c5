//! TypeScript-only rules.

use zone_lint_core::{Category, PatternRule};

use crate::static_regex;

/// Rule name for the explicit `any` check.
pub const NO_EXPLICIT_ANY: &str = "No explicit any";

/// Rule name for the `@ts-ignore` check.
pub const NO_TS_IGNORE: &str = "No ts-ignore";

const TS_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".mts", ".cts"];

/// Flags `: any`, `as any`, `<any>` and `any[]`.
#[must_use]
pub fn no_explicit_any() -> PatternRule {
    PatternRule::from_regex(
        NO_EXPLICIT_ANY,
        Category::Typescript,
        "Avoid explicit any; use unknown or a precise type",
        static_regex(r":\s*any\b|\bas\s+any\b|<any>|\bany\[\]"),
    )
    .with_extensions(TS_EXTENSIONS)
    .with_description("explicit any annotations and casts")
}

/// Flags `@ts-ignore` directives.
#[must_use]
pub fn no_ts_ignore() -> PatternRule {
    PatternRule::from_regex(
        NO_TS_IGNORE,
        Category::Typescript,
        "Use @ts-expect-error with a reason instead of @ts-ignore",
        static_regex(r"@ts-ignore\b"),
    )
    .with_extensions(TS_EXTENSIONS)
    .include_comments()
    .with_description("@ts-ignore compiler directives")
}
