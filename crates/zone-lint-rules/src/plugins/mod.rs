//! Always-on plug-ins.
//!
//! Unlike catalog rules, plug-ins are not selected through configuration:
//! each builds its own [`zone_lint_core::Violation`]s and keeps its
//! suppression heuristics private.
//!
//! | Plug-in | Kind | Reports as |
//! |---------|------|------------|
//! | `hardcoded-data` | content | `No hardcoded data` |
//! | `commented-code` | content | `No commented-out code` |
//! | `inline-styles` | content | `No inline styles` |
//! | `function-naming` | content | `Function naming` |
//! | `interface-naming` | content | `Interface naming` |
//! | `style-conventions` | content | `Style conventions` |
//! | `missing-documentation` | content | `Missing documentation` |
//! | `asset-naming` | path | `Asset naming` |
//! | `hook-file-extension` | path | `Hook file extension` |
//! | `misplaced-enum` | path | `Misplaced enum` |
//! | `directory-naming` | directory | `Directory naming` |

use std::path::{Path, PathBuf};

use zone_lint_core::RuleEngineBuilder;

mod asset_naming;
mod commented_code;
mod directory_naming;
mod function_naming;
mod hardcoded_data;
mod hook_file_extension;
mod inline_styles;
mod interface_naming;
mod misplaced_enum;
mod missing_documentation;
mod style_conventions;

pub use asset_naming::AssetNaming;
pub use commented_code::CommentedCode;
pub use directory_naming::DirectoryNaming;
pub use function_naming::FunctionNaming;
pub use hardcoded_data::HardcodedData;
pub use hook_file_extension::HookFileExtension;
pub use inline_styles::InlineStyles;
pub use interface_naming::InterfaceNaming;
pub use misplaced_enum::MisplacedEnum;
pub use missing_documentation::MissingDocumentation;
pub use style_conventions::StyleConventions;

/// How a plug-in is invoked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    /// Sees content and path; skipped for index files.
    Content,
    /// Sees the path only.
    Path,
    /// Sees the path and the run-wide context.
    Directory,
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content => write!(f, "content"),
            Self::Path => write!(f, "path"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// Listing entry for a plug-in.
#[derive(Debug, Clone, Copy)]
pub struct PluginInfo {
    /// Plug-in identifier.
    pub name: &'static str,
    /// Invocation kind.
    pub kind: PluginKind,
    /// Rule name on the violations it produces.
    pub rule: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Describes every built-in plug-in, in registration order.
#[must_use]
pub fn plugin_infos() -> Vec<PluginInfo> {
    vec![
        hardcoded_data::INFO,
        commented_code::INFO,
        inline_styles::INFO,
        function_naming::INFO,
        interface_naming::INFO,
        style_conventions::INFO,
        missing_documentation::INFO,
        asset_naming::INFO,
        hook_file_extension::INFO,
        misplaced_enum::INFO,
        directory_naming::INFO,
    ]
}

/// Registers every built-in plug-in.
///
/// `root`, when given, is stripped from paths before directory names are
/// judged, so directories above the project are never reported.
#[must_use]
pub fn with_default_plugins(builder: RuleEngineBuilder, root: Option<PathBuf>) -> RuleEngineBuilder {
    let directory_naming = match root {
        Some(root) => DirectoryNaming::new().with_root(root),
        None => DirectoryNaming::new(),
    };

    builder
        .content_plugin(HardcodedData::new())
        .content_plugin(CommentedCode::new())
        .content_plugin(InlineStyles::new())
        .content_plugin(FunctionNaming::new())
        .content_plugin(InterfaceNaming::new())
        .content_plugin(StyleConventions::new())
        .content_plugin(MissingDocumentation::new())
        .path_plugin(AssetNaming::new())
        .path_plugin(HookFileExtension::new())
        .path_plugin(MisplacedEnum::new())
        .directory_plugin(directory_naming)
}

/// Test, spec, mock and fixture files.
pub(crate) fn is_test_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    name.contains(".test.")
        || name.contains(".spec.")
        || name.contains(".stories.")
        || path.components().any(|c| {
            matches!(
                c.as_os_str().to_str(),
                Some("__tests__" | "__mocks__" | "fixtures" | "test" | "tests")
            )
        })
}

/// Whether the file can contain JSX.
pub(crate) fn is_jsx_file(path: &Path) -> bool {
    zone_lint_core::utils::has_extension(path, &[".tsx", ".jsx"])
}
