//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "zone-lint.toml";

const DEFAULT_CONFIG: &str = r#"# zone-lint configuration
#
# Without a [rules] table every built-in rule runs at its default severity.
# Run `zone-lint list-rules` to see them.

# Source extensions to lint
extensions = [".js", ".jsx", ".ts", ".tsx"]

# Gitignore-style globs to skip (.gitignore is honored as well)
ignore_patterns = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/coverage/**",
    "**/.next/**",
]

# Worker threads (default: one per CPU)
# jobs = 4

# Zones default to one per directory under apps/ and packages/.
# [zones.web]
# paths = ["apps/web"]

# Select rules by name; only the listed rules run.
# A severity overrides the rule's default, `true` keeps it.
# [rules]
# "No console.log" = "error"
# "Component naming" = true
# "No unused variables" = "warning"

# Or add regex rules on top of the defaults.
# Set `merge = false` to run only these.
# [[rules]]
# name = "No lodash default import"
# category = "content"
# severity = "warning"
# message = "Import lodash functions individually"
# pattern = "import _ from 'lodash'"
# report = "lines"
"#;

/// Runs the init command in `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let path = write_config(dir, force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to select rules and zones");
    println!("  2. Run: zone-lint check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
