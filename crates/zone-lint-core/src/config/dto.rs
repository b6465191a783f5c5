//! Serde deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization of TOML and JSON
//! configuration files. They are converted to [`super::UserConfig`] by the
//! loader.

use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top level of a configuration file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ConfigFileDto {
    /// A bare array of rule definitions (JSON only): appended to defaults.
    Rules(Vec<RuleDto>),
    /// The object form.
    Object(ConfigDto),
}

/// Object-form configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDto {
    /// Merge user rules with the defaults (default: true).
    #[serde(default)]
    pub merge: Option<bool>,

    /// Rule list or per-name selection.
    #[serde(default)]
    pub rules: Option<RulesDto>,

    /// Dotted source extensions.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Gitignore-style globs.
    #[serde(default, alias = "ignorePatterns", alias = "ignore-patterns")]
    pub ignore_patterns: Option<Vec<String>>,

    /// Explicit zones.
    #[serde(default)]
    pub zones: Option<BTreeMap<String, ZoneDto>>,

    /// Worker count.
    #[serde(default)]
    pub jobs: Option<usize>,
}

/// The `rules` field: `[[rules]]` list or `[rules]` selection table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RulesDto {
    /// Declarative rule definitions.
    List(Vec<RuleDto>),
    /// `"Rule name" = true | "error" | "warning" | "info"`.
    Selection(BTreeMap<String, SelectionDto>),
}

/// A selection value as written.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SelectionDto {
    /// `true` / `false`.
    Flag(bool),
    /// Severity name or anything else textual.
    Level(String),
    /// Numbers, tables, arrays.
    Other(IgnoredAny),
}

/// A declarative, regex-backed rule definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDto {
    /// Unique rule name.
    pub name: String,
    /// Category (default: "content").
    #[serde(default = "default_category")]
    pub category: String,
    /// Severity (default: "warning").
    #[serde(default = "default_severity")]
    pub severity: String,
    /// Violation message.
    pub message: String,
    /// Regular expression searched for.
    pub pattern: String,
    /// `"lines"` (default) or `"file"`.
    #[serde(default)]
    pub report: Option<String>,
    /// Restrict the rule to these dotted extensions.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    /// Longer description for listings.
    #[serde(default)]
    pub description: Option<String>,
    /// Match inside comments too (default: false).
    #[serde(default)]
    pub include_comments: bool,
}

/// A zone as written.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneDto {
    /// Directories belonging to the zone.
    pub paths: Vec<PathBuf>,
}

fn default_category() -> String {
    "content".to_string()
}

fn default_severity() -> String {
    "warning".to_string()
}
