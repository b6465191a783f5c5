//! Layered rule configuration.
//!
//! # Architecture
//!
//! ```text
//! zone-lint.toml / zone-lint.json
//!   ↓ serde (dto)
//! ConfigFileDto
//!   ↓ validate + convert (loader)
//! UserConfig
//!   ↓ merge with DefaultCatalog (resolver)
//! Configuration
//!   ↓ RuleEngine::initialize
//! flat, de-duplicated rule list
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::rule::RuleEntry;
use crate::types::{Category, Severity};

pub mod dto;
pub mod loader;
pub mod resolver;

pub use loader::{load_file, load_or_default, parse_json, parse_toml, ConfigError};
pub use resolver::resolve;

/// Source extensions linted when the configuration does not say otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Ignore globs applied when the configuration does not say otherwise.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/coverage/**",
    "**/.next/**",
];

/// Paths making up one named zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Directories (relative to the project root) belonging to the zone.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// A fully resolved configuration.
///
/// `rules` may still contain duplicate names here; the engine collapses
/// them when it is initialized.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Active rules in execution order.
    pub rules: Vec<RuleEntry>,
    /// Whether user rules were merged with the defaults.
    pub merge: bool,
    /// Dotted source extensions to lint.
    pub extensions: Vec<String>,
    /// Gitignore-style globs excluded from enumeration.
    pub ignore_patterns: Vec<String>,
    /// Explicit zones, keyed by name.
    pub zones: BTreeMap<String, ZoneConfig>,
    /// Worker count; `None` means available parallelism.
    pub jobs: Option<usize>,
}

impl Configuration {
    /// Creates a configuration with the given rules and default settings.
    #[must_use]
    pub fn with_rules(rules: Vec<RuleEntry>) -> Self {
        Self {
            rules,
            merge: true,
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            zones: BTreeMap::new(),
            jobs: None,
        }
    }

    /// Names of the configured rules, in order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(RuleEntry::name).collect()
    }

    /// Finds a configured rule by name (first occurrence).
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.iter().find(|r| r.name() == name)
    }
}

/// The built-in rules, organized by category.
#[derive(Debug, Clone, Default)]
pub struct DefaultCatalog {
    categories: Vec<(Category, Vec<RuleEntry>)>,
}

impl DefaultCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds rules under a category; categories keep first-insertion order.
    #[must_use]
    pub fn with_category(
        mut self,
        category: Category,
        rules: impl IntoIterator<Item = RuleEntry>,
    ) -> Self {
        match self.categories.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => existing.extend(rules),
            None => self.categories.push((category, rules.into_iter().collect())),
        }
        self
    }

    /// Iterates over `(category, rules)` groups in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[RuleEntry])> {
        self.categories.iter().map(|(c, r)| (*c, r.as_slice()))
    }

    /// All rules in catalog order, category nesting removed.
    #[must_use]
    pub fn flatten(&self) -> Vec<RuleEntry> {
        self.categories
            .iter()
            .flat_map(|(_, rules)| rules.iter().cloned())
            .collect()
    }

    /// Finds a rule by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RuleEntry> {
        self.categories
            .iter()
            .flat_map(|(_, rules)| rules.iter())
            .find(|r| r.name() == name)
    }

    /// Total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|(_, r)| r.len()).sum()
    }

    /// Returns true if the catalog holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configuration used when nothing overrides the catalog.
    #[must_use]
    pub fn to_configuration(&self) -> Configuration {
        Configuration::with_rules(self.flatten())
    }
}

/// A user-supplied function over the flattened default rules.
pub type TransformFn = Arc<dyn Fn(Vec<RuleEntry>) -> TransformOutput + Send + Sync>;

/// What a [`TransformFn`] returns.
#[derive(Debug, Clone)]
pub enum TransformOutput {
    /// The complete rule set; other settings stay at their defaults.
    Rules(Vec<RuleEntry>),
    /// A complete configuration, used as-is.
    Config(Configuration),
}

/// A user override, in one of its three shapes.
#[derive(Clone)]
pub enum UserConfig {
    /// Function over the default rules.
    Transform(TransformFn),
    /// Rules appended after the defaults.
    Rules(Vec<RuleEntry>),
    /// Object form: settings plus optional rule list or selection.
    Object(ConfigOverride),
}

impl std::fmt::Debug for UserConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transform(_) => f.write_str("Transform(<fn>)"),
            Self::Rules(rules) => f.debug_tuple("Rules").field(rules).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(object).finish(),
        }
    }
}

/// Object-form override. Absent fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverride {
    /// `Some(false)` with a rule list replaces the defaults.
    pub merge: Option<bool>,
    /// Rule list or by-name selection.
    pub rules: Option<RuleOverride>,
    /// Replacement extension list.
    pub extensions: Option<Vec<String>>,
    /// Replacement ignore list.
    pub ignore_patterns: Option<Vec<String>>,
    /// Replacement zone map.
    pub zones: Option<BTreeMap<String, ZoneConfig>>,
    /// Worker count.
    pub jobs: Option<usize>,
}

/// The `rules` field of an object-form override.
#[derive(Debug, Clone)]
pub enum RuleOverride {
    /// Concrete rules, appended or replacing per `merge`.
    List(Vec<RuleEntry>),
    /// Catalog rules chosen by exact name.
    Selection(Vec<(String, Selection)>),
}

/// A per-name selection value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Keep the catalog rule verbatim (`true`).
    Enabled,
    /// Keep the catalog rule at this severity.
    Severity(Severity),
    /// Anything else, kept as written for the warning.
    Unrecognized(String),
}
