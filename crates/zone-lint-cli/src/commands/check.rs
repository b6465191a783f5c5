//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use zone_lint_core::{config, Configuration, LintReport, Linter, RuleEngine};
use zone_lint_rules::{default_catalog, plugins};
use zone_lint_ts::TypeScriptAnalyzer;

use crate::config_resolver::ConfigSource;
use crate::{zones, OutputFormat};

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    jobs: Option<usize>,
    zone_filter: &[String],
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source);
    let report = lint(path, &config, jobs, zone_filter)?;

    super::output::print(&report, format)?;

    if report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the resolved configuration, falling back to defaults on any error.
pub fn load_config(source: &ConfigSource) -> Configuration {
    let catalog = default_catalog();
    match source.path() {
        Some(p) => {
            tracing::info!("Using {} config: {}", source.label(), p.display());
            config::load_or_default(p, &catalog)
        }
        None => catalog.to_configuration(),
    }
}

/// Lints the project at `path`.
///
/// # Errors
///
/// Returns an error if `path` is not a directory, an ignore pattern is
/// invalid, or the worker pool cannot be built.
pub fn lint(
    path: &Path,
    config: &Configuration,
    jobs: Option<usize>,
    zone_filter: &[String],
) -> Result<LintReport> {
    anyhow::ensure!(path.is_dir(), "Not a directory: {}", path.display());

    let zones = zones::select(zones::discover(path, config), zone_filter);
    let files = zones::collect_files(path, &zones, config)?;

    let engine = plugins::with_default_plugins(RuleEngine::builder(), Some(path.to_path_buf()))
        .unused_declaration_finder(TypeScriptAnalyzer::new())
        .config(config.clone())
        .build();

    tracing::info!(
        "Analyzing {} across {} zone(s) with {} rules",
        path.display(),
        zones.len(),
        engine.rules().len()
    );

    let mut report = Linter::new(&engine)
        .jobs(jobs.or(config.jobs))
        .run(&files)
        .context("Lint run failed")?;

    for zone in zones.keys() {
        report.zones.entry(zone.clone()).or_default();
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use zone_lint_core::Severity;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn rules_in(report: &LintReport, zone: &str) -> Vec<String> {
        report.zones[zone].iter().map(|v| v.rule.clone()).collect()
    }

    #[test]
    fn lints_monorepo_by_zone() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "apps/web/src/app.ts", "debugger;\nexport const a = 1;\n");
        write(tmp.path(), "packages/ui/src/util.ts", "export const b = 2;\n");

        let config = default_catalog().to_configuration();
        let report = lint(tmp.path(), &config, Some(2), &[]).unwrap();

        assert_eq!(report.files_checked, 2);
        assert!(rules_in(&report, "web").contains(&"No debugger statements".to_string()));
        assert!(report.zones["ui"].iter().all(|v| v.severity != Severity::Error));
        assert!(report.has_errors());
    }

    #[test]
    fn dead_code_rule_uses_syntax_tree() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "src/math.ts",
            "const helper = () => 1;\nconst unused = 2;\nexport const value = helper();\n",
        );

        let config = default_catalog().to_configuration();
        let report = lint(tmp.path(), &config, None, &[]).unwrap();

        let dead: Vec<_> = report.zones["root"]
            .iter()
            .filter(|v| v.rule == zone_lint_core::DEAD_CODE_RULE)
            .collect();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].line, Some(2));
        assert!(dead[0].message.contains("'unused'"));
    }

    #[test]
    fn zone_filter_limits_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "apps/web/a.ts", "export const a = 1;\n");
        write(tmp.path(), "apps/admin/a.ts", "export const a = 1;\n");

        let config = default_catalog().to_configuration();
        let report = lint(tmp.path(), &config, None, &["admin".to_string()]).unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.zones.keys().collect::<Vec<_>>(), ["admin"]);
    }

    #[test]
    fn config_files_are_not_linted() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "vite.config.ts", "var a = 1;\nconsole.log(a);\n");

        let config = default_catalog().to_configuration();
        let report = lint(tmp.path(), &config, None, &[]).unwrap();
        assert_eq!(report.files_checked, 1);
        assert!(report.zones["root"].is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let config = default_catalog().to_configuration();
        assert!(lint(Path::new("/nonexistent/project"), &config, None, &[]).is_err());
    }

    #[test]
    fn load_config_reads_project_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("zone-lint.toml");
        fs::write(&file, "[rules]\n\"No console.log\" = \"error\"\n").unwrap();

        let config = load_config(&ConfigSource::Project(file));
        assert_eq!(config.rule_names(), ["No console.log"]);
        assert_eq!(config.rules[0].severity(), Severity::Error);
        assert_eq!(load_config(&ConfigSource::Default).rules.len(), default_catalog().len());
    }
}
