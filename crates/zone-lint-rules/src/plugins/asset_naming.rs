//! Asset file naming: kebab-case.

use std::path::Path;

use zone_lint_core::utils::{base_name, has_extension, is_kebab_case};
use zone_lint_core::{Category, PathPredicate, Severity, Violation};

use super::{PluginInfo, PluginKind};

/// Plug-in identifier.
pub const NAME: &str = "asset-naming";

/// Rule name on reported violations.
pub const RULE: &str = "Asset naming";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Path,
    rule: RULE,
    description: "Images, fonts and media must be kebab-case",
};

/// Extensions treated as static assets.
pub const ASSET_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".avif", ".ico", ".woff", ".woff2", ".ttf",
    ".otf", ".mp3", ".mp4", ".webm",
];

/// Flags asset files whose names are not kebab-case.
#[derive(Debug, Clone, Default)]
pub struct AssetNaming;

impl AssetNaming {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PathPredicate for AssetNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, path: &Path) -> Option<Violation> {
        if !has_extension(path, ASSET_EXTENSIONS) {
            return None;
        }
        let name = base_name(path)?;
        if is_kebab_case(name) {
            return None;
        }
        Some(Violation::new(
            RULE,
            Category::Naming,
            Severity::Warning,
            path,
            format!("Asset '{name}' should be kebab-case (e.g. hero-banner.png)"),
        ))
    }
}
