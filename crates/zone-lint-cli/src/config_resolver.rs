//! Locates the zone-lint configuration for a project.
//!
//! First hit wins:
//!
//! 1. the `--config` path, trusted without an existence check
//! 2. `zone-lint.toml`, `.zone-lint.toml`, then `zone-lint.json` in the project
//! 3. `config.toml` in the global directory (see [`global_config_dir`])
//! 4. nothing: the built-in catalog

use std::path::{Path, PathBuf};

/// Origin of the configuration in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Next to the project sources.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.zone-lint/`).
    Global(PathBuf),
    /// None found; the catalog defaults apply.
    Default,
}

impl ConfigSource {
    /// File to load, unless defaults apply.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Short label for log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Project(_) => "project",
            Self::Global(_) => "global",
            Self::Default => "default",
        }
    }
}

/// Candidate names in the project directory, by priority.
const PROJECT_CONFIG_NAMES: &[&str] = &["zone-lint.toml", ".zone-lint.toml", "zone-lint.json"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Finds the configuration for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(candidate) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", candidate.display());
        return ConfigSource::Project(candidate);
    }

    let global = global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file());
    if let Some(candidate) = global {
        tracing::debug!("Found global config: {}", candidate.display());
        return ConfigSource::Global(candidate);
    }

    ConfigSource::Default
}

/// Directory holding the user-wide `config.toml`.
///
/// Resolution: `$ZONE_LINT_CONFIG_DIR` > `~/.zone-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ZONE_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".zone-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zone-lint.toml"), "").unwrap();

        let explicit = Path::new("/nonexistent/custom.toml");
        let result = resolve_inner(tmp.path(), Some(explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit.to_path_buf()));
    }

    #[test]
    fn project_names_checked_in_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zone-lint.json"), "{}").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join("zone-lint.json"))
        );

        fs::write(tmp.path().join(".zone-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join(".zone-lint.toml"))
        );

        fs::write(tmp.path().join("zone-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join("zone-lint.toml"))
        );
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
        assert_eq!(result.label(), "global");
    }

    #[test]
    fn global_skipped_when_project_config_exists() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("zone-lint.toml"), "").unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn nothing_found_is_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }
}
