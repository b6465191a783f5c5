//! Merging a user override with the default catalog.

use tracing::{debug, warn};

use super::{
    ConfigOverride, Configuration, DefaultCatalog, RuleOverride, Selection, TransformOutput,
    UserConfig,
};
use crate::rule::RuleEntry;

/// Resolves the final configuration.
///
/// Precedence, first match wins:
///
/// 1. `Transform(f)`: `f` receives the flattened defaults. A returned rule
///    list becomes the whole rule set; a returned configuration is used as-is.
/// 2. `Rules(v)`: `v` is appended after the defaults.
/// 3. Object with `merge = false` and a rule list: the list replaces the
///    defaults.
/// 4. Object with a rule list: the list is appended after the defaults.
/// 5. Object with a selection: catalog rules picked by name, in catalog
///    order. Unknown names and unrecognized values are dropped with a warning.
/// 6. Any other object: the flattened defaults.
///
/// In cases 3 to 6, `extensions`, `ignore_patterns`, `zones` and `jobs`
/// replace the defaults when present.
#[must_use]
pub fn resolve(catalog: &DefaultCatalog, user: Option<UserConfig>) -> Configuration {
    let Some(user) = user else {
        debug!("No user configuration; using defaults");
        return catalog.to_configuration();
    };

    match user {
        UserConfig::Transform(transform) => match transform(catalog.flatten()) {
            TransformOutput::Rules(rules) => Configuration::with_rules(rules),
            TransformOutput::Config(config) => config,
        },
        UserConfig::Rules(rules) => {
            let mut config = catalog.to_configuration();
            config.rules.extend(rules);
            config
        }
        UserConfig::Object(object) => resolve_object(catalog, object),
    }
}

fn resolve_object(catalog: &DefaultCatalog, object: ConfigOverride) -> Configuration {
    let merge = object.merge.unwrap_or(true);

    let rules = match object.rules {
        Some(RuleOverride::List(list)) if !merge => list,
        Some(RuleOverride::List(list)) => {
            let mut rules = catalog.flatten();
            rules.extend(list);
            rules
        }
        Some(RuleOverride::Selection(selection)) => select(catalog, &selection),
        None => catalog.flatten(),
    };

    let mut config = Configuration::with_rules(rules);
    config.merge = merge;
    if let Some(extensions) = object.extensions {
        config.extensions = extensions;
    }
    if let Some(ignore_patterns) = object.ignore_patterns {
        config.ignore_patterns = ignore_patterns;
    }
    if let Some(zones) = object.zones {
        config.zones = zones;
    }
    config.jobs = object.jobs;
    config
}

fn select(catalog: &DefaultCatalog, selection: &[(String, Selection)]) -> Vec<RuleEntry> {
    for (name, value) in selection {
        if catalog.find(name).is_none() {
            warn!("Unknown rule '{name}' in configuration; ignoring");
        } else if let Selection::Unrecognized(raw) = value {
            warn!("Unrecognized value '{raw}' for rule '{name}'; rule not enabled");
        }
    }

    catalog
        .flatten()
        .into_iter()
        .filter_map(|entry| {
            // Last selection for a name wins.
            let value = selection
                .iter()
                .rev()
                .find(|(name, _)| name == entry.name())
                .map(|(_, value)| value)?;
            match value {
                Selection::Enabled => Some(entry),
                Selection::Severity(severity) => Some(entry.with_severity(*severity)),
                Selection::Unrecognized(_) => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoneConfig;
    use crate::rule::{CheckOutcome, Rule, RuleError};
    use crate::types::{Category, Severity};
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::sync::Arc;

    struct Named(&'static str, Category);

    impl Rule for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn category(&self) -> Category {
            self.1
        }
        fn message(&self) -> &str {
            "message"
        }
        fn check(&self, _: &str, _: &Path) -> Result<CheckOutcome, RuleError> {
            Ok(CheckOutcome::Pass)
        }
    }

    fn entry(name: &'static str, category: Category) -> RuleEntry {
        RuleEntry::from_rule(Named(name, category))
    }

    fn catalog() -> DefaultCatalog {
        DefaultCatalog::new()
            .with_category(
                Category::Naming,
                [entry("Component naming", Category::Naming)],
            )
            .with_category(
                Category::Content,
                [
                    entry("No console.log", Category::Content),
                    entry("No debugger statements", Category::Content),
                ],
            )
    }

    fn names(config: &Configuration) -> Vec<&str> {
        config.rule_names()
    }

    #[test]
    fn no_override_yields_defaults() {
        let config = resolve(&catalog(), None);
        assert_eq!(
            names(&config),
            ["Component naming", "No console.log", "No debugger statements"]
        );
        assert!(config.merge);
    }

    #[test]
    fn array_is_appended_after_defaults() {
        let user = UserConfig::Rules(vec![entry("Custom", Category::Content)]);
        let config = resolve(&catalog(), Some(user));
        assert_eq!(
            names(&config),
            [
                "Component naming",
                "No console.log",
                "No debugger statements",
                "Custom"
            ]
        );
    }

    #[test]
    fn array_does_not_special_case_names() {
        let user = UserConfig::Rules(vec![entry("No console.log", Category::Content)]);
        let config = resolve(&catalog(), Some(user));
        assert_eq!(config.rules.len(), 4);
    }

    #[test]
    fn merge_false_list_replaces_defaults_exactly() {
        let user = UserConfig::Object(ConfigOverride {
            merge: Some(false),
            rules: Some(RuleOverride::List(vec![
                entry("Only", Category::Content),
                entry("Second", Category::Style),
            ])),
            ..ConfigOverride::default()
        });
        let config = resolve(&catalog(), Some(user));
        assert_eq!(names(&config), ["Only", "Second"]);
        assert!(!config.merge);
    }

    #[test]
    fn object_list_is_concatenated_when_merging() {
        let user = UserConfig::Object(ConfigOverride {
            rules: Some(RuleOverride::List(vec![entry("Custom", Category::Content)])),
            ..ConfigOverride::default()
        });
        let config = resolve(&catalog(), Some(user));
        assert_eq!(names(&config).len(), 4);
        assert_eq!(names(&config)[3], "Custom");
    }

    #[test]
    fn selection_keeps_catalog_order_and_severity() {
        let user = UserConfig::Object(ConfigOverride {
            rules: Some(RuleOverride::Selection(vec![
                (
                    "No debugger statements".to_string(),
                    Selection::Severity(Severity::Error),
                ),
                ("Component naming".to_string(), Selection::Enabled),
            ])),
            ..ConfigOverride::default()
        });
        let config = resolve(&catalog(), Some(user));

        assert_eq!(names(&config), ["Component naming", "No debugger statements"]);
        assert_eq!(config.rules[0].severity(), Severity::Warning);
        assert_eq!(config.rules[1].severity(), Severity::Error);
    }

    #[test]
    fn selection_drops_false_and_unknown_names() {
        let user = UserConfig::Object(ConfigOverride {
            rules: Some(RuleOverride::Selection(vec![
                (
                    "No console.log".to_string(),
                    Selection::Unrecognized("false".to_string()),
                ),
                ("Does not exist".to_string(), Selection::Enabled),
            ])),
            ..ConfigOverride::default()
        });
        let config = resolve(&catalog(), Some(user));
        assert!(config.rules.is_empty());
    }

    #[test]
    fn spread_object_overrides_settings_and_keeps_default_rules() {
        let mut zones = BTreeMap::new();
        zones.insert(
            "web".to_string(),
            ZoneConfig {
                paths: vec!["apps/web".into()],
            },
        );
        let user = UserConfig::Object(ConfigOverride {
            extensions: Some(vec![".ts".to_string()]),
            ignore_patterns: Some(vec!["**/gen/**".to_string()]),
            zones: Some(zones),
            jobs: Some(2),
            ..ConfigOverride::default()
        });
        let config = resolve(&catalog(), Some(user));

        assert_eq!(config.rules.len(), 3);
        assert_eq!(config.extensions, [".ts"]);
        assert_eq!(config.ignore_patterns, ["**/gen/**"]);
        assert!(config.zones.contains_key("web"));
        assert_eq!(config.jobs, Some(2));
    }

    #[test]
    fn transform_receives_flattened_defaults() {
        let transform: crate::config::TransformFn = Arc::new(|rules: Vec<RuleEntry>| {
            TransformOutput::Rules(
                rules
                    .into_iter()
                    .filter(|r| r.category() == Category::Content)
                    .collect(),
            )
        });
        let config = resolve(&catalog(), Some(UserConfig::Transform(transform)));
        assert_eq!(names(&config), ["No console.log", "No debugger statements"]);
        assert_eq!(config.extensions.len(), 4);
    }

    #[test]
    fn transform_config_is_used_as_is() {
        let transform: crate::config::TransformFn = Arc::new(|_| {
            let mut config = Configuration::with_rules(Vec::new());
            config.extensions = vec![".mjs".to_string()];
            TransformOutput::Config(config)
        });
        let config = resolve(&catalog(), Some(UserConfig::Transform(transform)));
        assert!(config.rules.is_empty());
        assert_eq!(config.extensions, [".mjs"]);
    }
}
