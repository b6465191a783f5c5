//! Zone discovery and source file enumeration.
//!
//! Zones come from `[zones.*]` in the configuration. Without them, a
//! monorepo layout (`apps/*`, `packages/*`) yields one zone per child
//! directory, and anything else is a single zone named `root`.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::overrides::OverrideBuilder;
use zone_lint_core::{Configuration, SourceFile};

/// Name of the fallback zone.
pub const ROOT_ZONE: &str = "root";

/// Monorepo container directories scanned for zones.
const WORKSPACE_DIRS: &[&str] = &["apps", "packages"];

/// Zone name → directories, relative paths already joined with the root.
pub type Zones = BTreeMap<String, Vec<PathBuf>>;

/// Determines the zones of the project at `root`.
#[must_use]
pub fn discover(root: &Path, config: &Configuration) -> Zones {
    if !config.zones.is_empty() {
        return config
            .zones
            .iter()
            .map(|(name, zone)| {
                let paths = zone.paths.iter().map(|p| root.join(p)).collect();
                (name.clone(), paths)
            })
            .collect();
    }

    let mut zones = Zones::new();
    for container in WORKSPACE_DIRS {
        let Ok(entries) = std::fs::read_dir(root.join(container)) else {
            continue;
        };
        let mut children: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        children.sort();

        for child in children {
            let Some(name) = child.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            zones.entry(name.to_string()).or_default().push(child.clone());
        }
    }

    if zones.is_empty() {
        zones.insert(ROOT_ZONE.to_string(), vec![root.to_path_buf()]);
    }
    zones
}

/// Keeps only the named zones; unknown names are warned about.
#[must_use]
pub fn select(mut zones: Zones, names: &[String]) -> Zones {
    if names.is_empty() {
        return zones;
    }
    for name in names {
        if !zones.contains_key(name) {
            tracing::warn!("Unknown zone '{name}'");
        }
    }
    zones.retain(|zone, _| names.contains(zone));
    zones
}

/// Lists the source files of every zone.
///
/// The walk honors `.gitignore` and the configured ignore patterns, keeps
/// only configured extensions, and assigns each file to the first zone (in
/// name order) that reaches it. Files are sorted within each zone.
///
/// # Errors
///
/// Returns an error if an ignore pattern is not a valid glob.
pub fn collect_files(root: &Path, zones: &Zones, config: &Configuration) -> Result<Vec<SourceFile>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for (zone, paths) in zones {
        let mut zone_files = Vec::new();
        for dir in paths {
            if !dir.exists() {
                tracing::warn!("Zone '{zone}' path {} does not exist", dir.display());
                continue;
            }
            zone_files.extend(walk(root, dir, config)?);
        }
        zone_files.sort();
        zone_files.dedup();

        for path in zone_files {
            if seen.insert(path.clone()) {
                files.push(SourceFile::new(path, zone.clone()));
            }
        }
    }

    Ok(files)
}

fn walk(root: &Path, dir: &Path, config: &Configuration) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(root);
    for pattern in &config.ignore_patterns {
        overrides
            .add(&format!("!{pattern}"))
            .with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
    }
    let overrides = overrides.build().context("Failed to build ignore patterns")?;

    let mut builder = ignore::WalkBuilder::new(dir);
    builder
        .hidden(false)
        .git_ignore(true)
        .require_git(false)
        .overrides(overrides);

    let extensions: Vec<&str> = config.extensions.iter().map(String::as_str).collect();
    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && zone_lint_core::utils::has_extension(path, &extensions) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
