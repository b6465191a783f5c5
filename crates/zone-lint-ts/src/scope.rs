//! Flat declaration/usage tables over a syntax tree.
//!
//! The analysis is scope-insensitive: one table of declared
//! variables and one set of referenced names per file. A name used anywhere
//! in the file counts as used for every declaration of that name.

use std::collections::HashSet;

use tree_sitter::Node;
use zone_lint_core::UnusedDeclaration;

use crate::provider::SyntaxTree;

/// A `variable_declarator` with a plain identifier name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredVariable {
    /// Identifier name.
    pub name: String,
    /// Line of the name (1-indexed).
    pub line: usize,
    /// Declared inside an `export` statement or named by an export clause.
    pub exported: bool,
}

/// Finds variable declarations that are never referenced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeAnalyzer;

impl ScopeAnalyzer {
    /// Creates a new analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Declared, never referenced, not exported and not `_`-prefixed
    /// variables, in declaration order.
    #[must_use]
    pub fn find_unused_declarations(&self, tree: &SyntaxTree<'_>) -> Vec<UnusedDeclaration> {
        let nodes = tree.nodes();
        let exported = exported_names(tree, &nodes);
        let declared = declarations(tree, &nodes, &exported);
        let used = references(tree, &nodes);

        declared
            .into_iter()
            .filter(|d| !d.exported && !d.name.starts_with('_') && !used.contains(d.name.as_str()))
            .map(|d| UnusedDeclaration {
                name: d.name,
                line: d.line,
            })
            .collect()
    }

    /// Every declared variable, first occurrence per name.
    #[must_use]
    pub fn declarations(&self, tree: &SyntaxTree<'_>) -> Vec<DeclaredVariable> {
        let nodes = tree.nodes();
        let exported = exported_names(tree, &nodes);
        declarations(tree, &nodes, &exported)
    }
}

/// Local names exported by `export { a, b as c }` and `export default a`.
fn exported_names<'s>(tree: &SyntaxTree<'s>, nodes: &[Node<'_>]) -> HashSet<&'s str> {
    let mut exported = HashSet::new();

    for node in nodes.iter().filter(|n| n.kind() == "export_statement") {
        // `export { a } from './mod'` names another module's bindings.
        if node.child_by_field_name("source").is_some() {
            continue;
        }

        if let Some(value) = node.child_by_field_name("value") {
            if value.kind() == "identifier" {
                exported.insert(tree.text(value));
            }
        }

        let mut cursor = node.walk();
        for clause in node
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "export_clause")
        {
            let mut inner = clause.walk();
            for specifier in clause
                .named_children(&mut inner)
                .filter(|s| s.kind() == "export_specifier")
            {
                if let Some(name) = specifier.child_by_field_name("name") {
                    exported.insert(tree.text(name));
                }
            }
        }
    }

    exported
}

fn declarations(
    tree: &SyntaxTree<'_>,
    nodes: &[Node<'_>],
    exported: &HashSet<&str>,
) -> Vec<DeclaredVariable> {
    let mut declared: Vec<DeclaredVariable> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for node in nodes.iter().filter(|n| n.kind() == "variable_declarator") {
        let Some(name_node) = node.child_by_field_name("name") else {
            continue;
        };
        if name_node.kind() != "identifier" {
            continue;
        }
        let name = tree.text(name_node);
        if !seen.insert(name) {
            continue;
        }

        let inline_export = node
            .parent()
            .and_then(|declaration| declaration.parent())
            .is_some_and(|p| p.kind() == "export_statement");

        declared.push(DeclaredVariable {
            name: name.to_string(),
            line: name_node.start_position().row + 1,
            exported: inline_export || exported.contains(name),
        });
    }

    declared
}

fn references<'s>(tree: &SyntaxTree<'s>, nodes: &[Node<'_>]) -> HashSet<&'s str> {
    nodes
        .iter()
        .filter(|n| match n.kind() {
            "identifier" => !is_binding(**n),
            "shorthand_property_identifier" => true,
            _ => false,
        })
        .map(|n| tree.text(*n))
        .collect()
}

/// Whether an identifier introduces a name rather than referring to one.
fn is_binding(node: Node<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let is_field = |field: &str| {
        parent
            .child_by_field_name(field)
            .is_some_and(|child| child.id() == node.id())
    };

    match parent.kind() {
        "variable_declarator"
        | "function_declaration"
        | "generator_function_declaration"
        | "function_expression"
        | "generator_function"
        | "class_declaration"
        | "class" => is_field("name"),
        "required_parameter" | "optional_parameter" => is_field("pattern"),
        "arrow_function" => is_field("parameter"),
        "catch_clause" => is_field("parameter"),
        "import_specifier" | "import_clause" | "namespace_import" | "formal_parameters" => true,
        _ => false,
    }
}
