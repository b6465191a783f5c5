//! Context types for rule execution.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

/// Basename globs of build and tooling configuration files.
///
/// Files matching any of these are skipped entirely by the engine.
pub const CONFIG_FILE_PATTERNS: &[&str] = &[
    "*.config.*",
    ".*rc",
    ".*rc.*",
    "package.json",
    "package-lock.json",
    "tsconfig*.json",
    "jsconfig*.json",
    "next-env.d.ts",
];

/// Context about the file being validated.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file as supplied by the enumerator.
    pub path: &'a Path,
    /// File contents.
    pub content: &'a str,
    /// Whether the file is a module index (`index.ts`, `index.jsx`, ...).
    pub is_index: bool,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            content,
            is_index: Self::detect_index_file(path),
        }
    }

    /// Detects module index files by their stem.
    #[must_use]
    pub fn detect_index_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem == "index")
    }

    /// Detects build/tooling configuration files by basename.
    #[must_use]
    pub fn detect_config_file(path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        CONFIG_PATTERNS.iter().any(|p| p.matches(file_name))
    }
}

static CONFIG_PATTERNS: Lazy<Vec<glob::Pattern>> = Lazy::new(|| {
    CONFIG_FILE_PATTERNS
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect()
});

/// State shared by every file validation in one run.
///
/// Owned by the orchestrator and passed by reference to each validation;
/// safe to share across worker threads. Entries are only ever added.
#[derive(Debug, Default)]
pub struct RunContext {
    reported_dirs: Mutex<HashSet<String>>,
}

impl RunContext {
    /// Creates an empty run context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a directory basename as reported.
    ///
    /// Returns `true` only for the first call with a given name.
    pub fn mark_directory_reported(&self, dir: &str) -> bool {
        self.reported_dirs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(dir.to_string())
    }

    /// Number of directory names reported so far.
    #[must_use]
    pub fn reported_directory_count(&self) -> usize {
        self.reported_dirs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_detect_index_file() {
        assert!(FileContext::detect_index_file(Path::new("src/index.ts")));
        assert!(FileContext::detect_index_file(Path::new("src/ui/index.jsx")));
        assert!(!FileContext::detect_index_file(Path::new("src/indexer.ts")));
        assert!(!FileContext::detect_index_file(Path::new("src/app.ts")));
    }

    #[test]
    fn test_detect_config_file() {
        for name in [
            "vite.config.ts",
            "jest.config.js",
            "tailwind.config.cjs",
            ".eslintrc",
            ".eslintrc.json",
            ".prettierrc.js",
            "package.json",
            "tsconfig.build.json",
        ] {
            assert!(
                FileContext::detect_config_file(Path::new(name)),
                "{name} should be a config file"
            );
        }
        assert!(!FileContext::detect_config_file(Path::new("src/config.ts")));
        assert!(!FileContext::detect_config_file(Path::new("src/App.tsx")));
        assert!(!FileContext::detect_config_file(Path::new("src/rc.ts")));
    }

    #[test]
    fn run_context_reports_each_directory_once() {
        let run = RunContext::new();
        assert!(run.mark_directory_reported("UserProfile"));
        assert!(!run.mark_directory_reported("UserProfile"));
        assert!(run.mark_directory_reported("OtherDir"));
        assert_eq!(run.reported_directory_count(), 2);
    }

    #[test]
    fn run_context_is_shared_across_threads() {
        let run = Arc::new(RunContext::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let run = Arc::clone(&run);
                std::thread::spawn(move || run.mark_directory_reported("Shared"))
            })
            .collect();

        let firsts = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|first| *first)
            .count();
        assert_eq!(firsts, 1);
    }
}
