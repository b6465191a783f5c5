//! Enum modules live under `types/`, `enums/` or `constants/`.

use std::path::Path;

use zone_lint_core::utils::in_directory;
use zone_lint_core::{Category, PathPredicate, Severity, Violation};

use super::{PluginInfo, PluginKind};

/// Plug-in identifier.
pub const NAME: &str = "misplaced-enum";

/// Rule name on reported violations.
pub const RULE: &str = "Misplaced enum";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Path,
    rule: RULE,
    description: "*.enum.ts and enums.ts files outside types/, enums/ or constants/",
};

const ENUM_HOMES: [&str; 3] = ["types", "enums", "constants"];

/// Flags enum files outside the designated directories.
#[derive(Debug, Clone, Default)]
pub struct MisplacedEnum;

impl MisplacedEnum {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_enum_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let mut parts = name.split('.');
    let stem = parts.next().unwrap_or_default();
    stem == "enums" || stem == "enum" || parts.any(|p| p == "enum")
}

impl PathPredicate for MisplacedEnum {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, path: &Path) -> Option<Violation> {
        if !is_enum_file(path) || ENUM_HOMES.iter().any(|dir| in_directory(path, dir)) {
            return None;
        }
        Some(Violation::new(
            RULE,
            Category::Structure,
            Severity::Info,
            path,
            "Move enum definitions into types/, enums/ or constants/",
        ))
    }
}
