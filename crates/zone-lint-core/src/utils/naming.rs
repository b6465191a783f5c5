//! Case-convention predicates for file and identifier names.

use std::path::Path;

/// `PascalCase`: leading uppercase letter, then ASCII alphanumerics.
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `camelCase`: leading lowercase letter, then ASCII alphanumerics.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `kebab-case`: lowercase alphanumeric words joined by single hyphens.
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// `SCREAMING_SNAKE_CASE`.
#[must_use]
pub fn is_screaming_snake_case(name: &str) -> bool {
    matches!(name.chars().next(), Some(c) if c.is_ascii_uppercase())
        && name.split('_').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
}

/// File name up to its first dot: `Button.test.tsx` → `Button`.
#[must_use]
pub fn base_name(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    file_name.split('.').next()
}

/// Returns true when `path` has one of the given dotted extensions
/// (e.g. `[".ts", ".tsx"]`).
#[must_use]
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
}

/// Returns true when any directory component of `path` equals `dir`.
#[must_use]
pub fn in_directory(path: &Path, dir: &str) -> bool {
    path.parent()
        .is_some_and(|parent| parent.components().any(|c| c.as_os_str() == dir))
}
