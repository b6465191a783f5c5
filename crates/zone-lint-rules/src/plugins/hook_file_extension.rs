//! Hook files use `.ts`/`.js`; JSX extensions are for components.

use std::path::Path;

use zone_lint_core::utils::{base_name, has_extension};
use zone_lint_core::{Category, PathPredicate, Severity, Violation};

use super::{PluginInfo, PluginKind};

/// Plug-in identifier.
pub const NAME: &str = "hook-file-extension";

/// Rule name on reported violations.
pub const RULE: &str = "Hook file extension";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Path,
    rule: RULE,
    description: "useX files should be .ts/.js rather than .tsx/.jsx",
};

/// Flags hook files with JSX extensions.
#[derive(Debug, Clone, Default)]
pub struct HookFileExtension;

impl HookFileExtension {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PathPredicate for HookFileExtension {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, path: &Path) -> Option<Violation> {
        let name = base_name(path)?;
        let is_hook = name
            .strip_prefix("use")
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_uppercase());
        if !is_hook || !has_extension(path, &[".tsx", ".jsx"]) {
            return None;
        }
        Some(Violation::new(
            RULE,
            Category::Naming,
            Severity::Info,
            path,
            format!("Hook '{name}' should use a .ts or .js extension"),
        ))
    }
}
