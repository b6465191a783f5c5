//! List rules command implementation.

use std::fmt::Write;

use zone_lint_rules::{default_catalog, plugins};

/// Runs the list-rules command.
pub fn run() {
    print!("{}", render());
}

/// The default catalog grouped by category, then the plug-ins.
pub fn render() -> String {
    let mut out = String::from("Default rules:\n");

    for (category, rules) in default_catalog().categories() {
        let _ = writeln!(out, "\n[{category}]");
        for entry in rules {
            let _ = writeln!(
                out,
                "  {:<28} {:<8} {}",
                entry.name(),
                entry.severity(),
                entry.rule().description()
            );
        }
    }

    let _ = writeln!(out, "\nPlug-ins (always on):\n");
    for info in plugins::plugin_infos() {
        let _ = writeln!(
            out,
            "  {:<22} {:<10} {}",
            info.name, info.kind, info.description
        );
    }

    out.push_str("\nSelect rules in zone-lint.toml, e.g.:\n");
    out.push_str("  [rules]\n");
    out.push_str("  \"No console.log\" = \"error\"\n");
    out.push_str("  \"Component naming\" = true\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_catalog_rule_and_plugin() {
        let text = render();
        for (_, rules) in default_catalog().categories() {
            for entry in rules {
                assert!(text.contains(entry.name()), "{}", entry.name());
            }
        }
        for info in plugins::plugin_infos() {
            assert!(text.contains(info.name));
        }
        assert!(text.contains("[naming]"));
        assert!(text.contains("[quality]"));
    }

    #[test]
    fn categories_appear_in_catalog_order() {
        let text = render();
        let naming = text.find("[naming]").unwrap();
        let content = text.find("[content]").unwrap();
        let quality = text.find("[quality]").unwrap();
        assert!(naming < content && content < quality);
    }
}
