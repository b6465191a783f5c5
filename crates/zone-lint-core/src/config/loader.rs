//! Configuration file loading: DTO → [`UserConfig`] conversion with validation.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::dto::{ConfigDto, ConfigFileDto, RuleDto, RulesDto, SelectionDto};
use super::{
    resolve, ConfigOverride, Configuration, DefaultCatalog, RuleOverride, Selection, UserConfig,
    ZoneConfig,
};
use crate::pattern::{PatternRule, ReportMode};
use crate::rule::RuleEntry;
use crate::types::{Category, Severity};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Syntax error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule definition failed validation.
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule {
        /// Rule name as written.
        rule: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Loads a configuration file, choosing the format by extension.
///
/// `.json` files are JSON; everything else is TOML.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_file(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    debug!("Loading configuration from {}", path.display());
    if is_json {
        parse_json(&content)
    } else {
        parse_toml(&content)
    }
}

/// Parses a TOML configuration.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or a rule fails validation.
pub fn parse_toml(content: &str) -> Result<UserConfig, ConfigError> {
    let dto: ConfigDto = toml::from_str(content).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;
    convert_object(dto)
}

/// Parses a JSON configuration; a top-level array is the append form.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or a rule fails validation.
pub fn parse_json(content: &str) -> Result<UserConfig, ConfigError> {
    let dto: ConfigFileDto = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;
    match dto {
        ConfigFileDto::Rules(rules) => Ok(UserConfig::Rules(convert_rules(rules)?)),
        ConfigFileDto::Object(object) => convert_object(object),
    }
}

/// Loads `path` fresh and resolves it against `catalog`.
///
/// Any failure (missing file, syntax error, invalid rule) is logged at warn
/// level and yields the unmodified default configuration.
#[must_use]
pub fn load_or_default(path: &Path, catalog: &DefaultCatalog) -> Configuration {
    match load_file(path) {
        Ok(user) => resolve(catalog, Some(user)),
        Err(e) => {
            warn!("{e}; using default configuration");
            catalog.to_configuration()
        }
    }
}

fn convert_object(dto: ConfigDto) -> Result<UserConfig, ConfigError> {
    let rules = match dto.rules {
        Some(RulesDto::List(rules)) => Some(RuleOverride::List(convert_rules(rules)?)),
        Some(RulesDto::Selection(map)) => Some(RuleOverride::Selection(
            map.into_iter()
                .map(|(name, value)| (name, convert_selection(value)))
                .collect(),
        )),
        None => None,
    };

    let zones = dto.zones.map(|zones| {
        zones
            .into_iter()
            .map(|(name, zone)| (name, ZoneConfig { paths: zone.paths }))
            .collect()
    });

    Ok(UserConfig::Object(ConfigOverride {
        merge: dto.merge,
        rules,
        extensions: dto.extensions.map(normalize_extensions),
        ignore_patterns: dto.ignore_patterns,
        zones,
        jobs: dto.jobs.filter(|&jobs| jobs > 0),
    }))
}

fn convert_selection(value: SelectionDto) -> Selection {
    match value {
        SelectionDto::Flag(true) => Selection::Enabled,
        SelectionDto::Flag(false) => Selection::Unrecognized("false".to_string()),
        SelectionDto::Level(level) => {
            Severity::parse(&level).map_or(Selection::Unrecognized(level), Selection::Severity)
        }
        SelectionDto::Other(_) => Selection::Unrecognized("<non-string value>".to_string()),
    }
}

fn convert_rules(rules: Vec<RuleDto>) -> Result<Vec<RuleEntry>, ConfigError> {
    rules.into_iter().map(convert_rule).collect()
}

fn convert_rule(dto: RuleDto) -> Result<RuleEntry, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidRule {
        rule: dto.name.clone(),
        reason,
    };

    if dto.name.trim().is_empty() {
        return Err(invalid("name must not be empty".to_string()));
    }
    let category = Category::parse(&dto.category)
        .ok_or_else(|| invalid(format!("unknown category `{}`", dto.category)))?;
    let severity = Severity::parse(&dto.severity).ok_or_else(|| {
        invalid(format!(
            "unknown severity `{}`, expected: error, warning, info",
            dto.severity
        ))
    })?;
    let report = match dto.report.as_deref() {
        None => ReportMode::Lines,
        Some(raw) => ReportMode::parse(raw)
            .ok_or_else(|| invalid(format!("unknown report mode `{raw}`, expected: lines, file")))?,
    };

    let mut rule = PatternRule::new(dto.name.clone(), category, dto.message, &dto.pattern)
        .map_err(|e| invalid(format!("invalid pattern: {e}")))?
        .with_severity(severity)
        .with_report(report);
    if let Some(extensions) = dto.extensions {
        rule = rule.with_extensions(normalize_extensions(extensions));
    }
    if let Some(description) = dto.description {
        rule = rule.with_description(description);
    }
    if dto.include_comments {
        rule = rule.include_comments();
    }

    Ok(RuleEntry::from_rule(rule))
}

/// Accepts `ts` as well as `.ts`.
fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|e| {
            if e.starts_with('.') {
                e
            } else {
                format!(".{e}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{CheckOutcome, Rule, RuleError};
    use std::io::Write;

    struct Named(&'static str);

    impl Rule for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn category(&self) -> Category {
            Category::Content
        }
        fn message(&self) -> &str {
            "message"
        }
        fn check(&self, _: &str, _: &Path) -> Result<CheckOutcome, RuleError> {
            Ok(CheckOutcome::Pass)
        }
    }

    fn catalog() -> DefaultCatalog {
        DefaultCatalog::new().with_category(
            Category::Content,
            [
                RuleEntry::from_rule(Named("No console.log")),
                RuleEntry::from_rule(Named("No debugger statements")),
            ],
        )
    }

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn toml_rule_list_becomes_pattern_rules() {
        let user = parse_toml(
            r#"
[[rules]]
name = "No alert"
category = "content"
severity = "error"
message = "Use the notification service"
pattern = 'alert\('
extensions = ["ts"]
"#,
        )
        .unwrap();

        let UserConfig::Object(ConfigOverride {
            rules: Some(RuleOverride::List(rules)),
            ..
        }) = user
        else {
            panic!("expected rule list");
        };
        assert_eq!(rules[0].name(), "No alert");
        assert_eq!(rules[0].severity(), Severity::Error);
        assert_eq!(
            rules[0]
                .rule()
                .check("alert(1)", Path::new("a.ts"))
                .unwrap(),
            CheckOutcome::Lines(vec![1])
        );
        assert_eq!(
            rules[0]
                .rule()
                .check("alert(1)", Path::new("a.js"))
                .unwrap(),
            CheckOutcome::Pass
        );
    }

    #[test]
    fn selection_values_are_classified() {
        let user = parse_toml(
            r#"
[rules]
"No console.log" = false
"No debugger statements" = "info"
"Other" = "loud"
"#,
        )
        .unwrap();
        let UserConfig::Object(ConfigOverride {
            rules: Some(RuleOverride::Selection(selection)),
            ..
        }) = user
        else {
            panic!("expected selection");
        };
        assert!(selection.contains(&(
            "No console.log".to_string(),
            Selection::Unrecognized("false".to_string())
        )));
        assert!(selection.contains(&(
            "No debugger statements".to_string(),
            Selection::Severity(Severity::Info)
        )));
        assert!(selection.contains(&(
            "Other".to_string(),
            Selection::Unrecognized("loud".to_string())
        )));
    }

    #[test]
    fn invalid_definitions_are_errors() {
        let bad_severity = r#"
[[rules]]
name = "x"
severity = "fatal"
message = "m"
pattern = "x"
"#;
        assert!(matches!(
            parse_toml(bad_severity),
            Err(ConfigError::InvalidRule { .. })
        ));

        let bad_pattern = r#"
[[rules]]
name = "x"
message = "m"
pattern = "("
"#;
        assert!(matches!(
            parse_toml(bad_pattern),
            Err(ConfigError::InvalidRule { .. })
        ));

        assert!(matches!(
            parse_toml("merge = "),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn json_array_appends() {
        let user =
            parse_json(r#"[{"name": "No alert", "message": "m", "pattern": "alert"}]"#).unwrap();
        assert!(matches!(user, UserConfig::Rules(ref r) if r.len() == 1));
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = load_or_default(Path::new("/nonexistent/zone-lint.toml"), &catalog());
        assert_eq!(config.rule_names(), ["No console.log", "No debugger statements"]);
    }

    #[test]
    fn load_or_default_falls_back_on_syntax_error() {
        let file = write_temp(".toml", "[rules\n");
        let config = load_or_default(file.path(), &catalog());
        assert_eq!(config.rules.len(), 2);
    }

    #[test]
    fn load_or_default_applies_file_settings() {
        let file = write_temp(
            ".toml",
            r#"
extensions = ["ts"]
jobs = 3

[rules]
"No console.log" = "error"
"#,
        );
        let config = load_or_default(file.path(), &catalog());
        assert_eq!(config.rule_names(), ["No console.log"]);
        assert_eq!(config.rules[0].severity(), Severity::Error);
        assert_eq!(config.extensions, [".ts"]);
        assert_eq!(config.jobs, Some(3));
    }

    #[test]
    fn load_file_reads_json_by_extension() {
        let file = write_temp(".json", r#"{"merge": false, "rules": []}"#);
        let config = load_or_default(file.path(), &catalog());
        assert!(config.rules.is_empty());
        assert!(!config.merge);
    }
}
