//! Directory naming: kebab-case, with PascalCase component folders.
//!
//! Each offending directory name is reported once per run, on the first
//! file validated beneath it.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use zone_lint_core::utils::{is_kebab_case, is_pascal_case};
use zone_lint_core::{Category, DirectoryPredicate, RunContext, Severity, Violation};

use super::{PluginInfo, PluginKind};

/// Plug-in identifier.
pub const NAME: &str = "directory-naming";

/// Rule name on reported violations.
pub const RULE: &str = "Directory naming";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Directory,
    rule: RULE,
    description: "Directories must be kebab-case (PascalCase inside components/)",
};

/// Flags badly named directories, once per name per run.
#[derive(Debug, Clone, Default)]
pub struct DirectoryNaming {
    root: Option<PathBuf>,
}

impl DirectoryNaming {
    /// Creates the plug-in; every directory of a relative path is judged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Judges only directories below `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

/// Framework and tooling names that follow their own conventions.
fn is_exempt(name: &str) -> bool {
    name.starts_with(['_', '.', '[', '(', '@', '+'])
        || matches!(name, "node_modules" | "__tests__" | "__mocks__")
}

fn acceptable(name: &str, parent: Option<&str>) -> bool {
    is_exempt(name)
        || is_kebab_case(name)
        || (parent == Some("components") && is_pascal_case(name))
}

impl DirectoryPredicate for DirectoryNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, path: &Path, run: &RunContext) -> Vec<Violation> {
        let (base, relative) = match &self.root {
            Some(root) => match path.strip_prefix(root) {
                Ok(rel) => (root.clone(), rel),
                Err(_) => (PathBuf::new(), path),
            },
            None => (PathBuf::new(), path),
        };
        let Some(dirs) = relative.parent() else {
            return Vec::new();
        };

        let mut current = base;
        let mut parent: Option<&str> = None;
        let mut violations = Vec::new();

        for component in dirs.components() {
            current.push(component);
            let Component::Normal(os_name) = component else {
                parent = None;
                continue;
            };
            let Some(name) = os_name.to_str() else {
                continue;
            };

            if !acceptable(name, parent) && run.mark_directory_reported(name) {
                debug!("Reporting directory '{name}'");
                violations.push(Violation::new(
                    RULE,
                    Category::Naming,
                    Severity::Warning,
                    current.clone(),
                    format!("Directory '{name}' should be kebab-case"),
                ));
            }
            parent = Some(name);
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptable_names() {
        assert!(acceptable("user-profile", None));
        assert!(acceptable("UserCard", Some("components")));
        assert!(acceptable("[id]", Some("pages")));
        assert!(acceptable("(auth)", Some("app")));
        assert!(acceptable("__tests__", None));
        assert!(!acceptable("UserProfile", Some("pages")));
        assert!(!acceptable("user_profile", None));
    }

    #[test]
    fn test_reports_each_directory_once_per_run() {
        let plugin = DirectoryNaming::new();
        let run = RunContext::new();

        let first = plugin.inspect(Path::new("src/UserProfile/index.ts"), &run);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].file_path, PathBuf::from("src/UserProfile"));

        let second = plugin.inspect(Path::new("src/UserProfile/avatar.ts"), &run);
        assert!(second.is_empty());

        let fresh_run = RunContext::new();
        assert_eq!(
            plugin
                .inspect(Path::new("src/UserProfile/avatar.ts"), &fresh_run)
                .len(),
            1
        );
    }

    #[test]
    fn test_root_is_not_judged() {
        let plugin = DirectoryNaming::new().with_root("/home/Dev/My_Project");
        let run = RunContext::new();
        let violations = plugin.inspect(
            Path::new("/home/Dev/My_Project/src/components/UserCard/UserCard.tsx"),
            &run,
        );
        assert!(violations.is_empty());

        let violations = plugin.inspect(Path::new("/home/Dev/My_Project/src/Bad_Dir/a.ts"), &run);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].file_path,
            PathBuf::from("/home/Dev/My_Project/src/Bad_Dir")
        );
    }
}
