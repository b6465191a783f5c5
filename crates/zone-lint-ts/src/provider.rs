//! Syntax tree provider: source text to a tree-sitter tree.

use std::path::Path;

use tree_sitter::{Language, Node, Parser, Tree, TreeCursor};

/// Grammar used for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Plain TypeScript (`.ts`, `.mts`, `.cts`).
    TypeScript,
    /// TypeScript with JSX; also used for JavaScript files.
    Tsx,
}

impl Dialect {
    /// Picks the grammar from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" | "js" | "jsx" | "mjs" | "cjs" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn language(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeScript => write!(f, "typescript"),
            Self::Tsx => write!(f, "tsx"),
        }
    }
}

/// Errors from parsing source text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {dialect} grammar: {message}")]
    Language {
        /// Requested grammar.
        dialect: Dialect,
        /// Loader message.
        message: String,
    },

    /// The parser returned no tree.
    #[error("parser produced no tree")]
    NoTree,

    /// The source does not parse cleanly.
    #[error("syntax error at line {line}")]
    Syntax {
        /// First line (1-indexed) containing an error node.
        line: usize,
    },
}

/// A parsed file: the tree plus the text it was parsed from.
pub struct SyntaxTree<'s> {
    tree: Tree,
    source: &'s str,
    dialect: Dialect,
}

impl<'s> SyntaxTree<'s> {
    /// Root node of the tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Grammar the tree was parsed with.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Text covered by `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// All nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node<'_>> {
        Preorder::new(self.root()).collect()
    }
}

/// Parses TypeScript/JavaScript source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxTreeProvider;

impl SyntaxTreeProvider {
    /// Creates a new provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses `source` with the given grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the tree contains error or
    /// missing nodes, and the other variants when the parser itself fails.
    pub fn parse<'s>(&self, source: &'s str, dialect: Dialect) -> Result<SyntaxTree<'s>, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&dialect.language())
            .map_err(|e| ParseError::Language {
                dialect,
                message: e.to_string(),
            })?;

        let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();
        if root.has_error() {
            let line = Preorder::new(root)
                .find(|n| n.is_error() || n.is_missing())
                .map_or(1, |n| n.start_position().row + 1);
            return Err(ParseError::Syntax { line });
        }

        Ok(SyntaxTree {
            tree,
            source,
            dialect,
        })
    }

    /// Parses a file's content, picking the grammar from its path.
    ///
    /// Returns `None` for extensions no grammar covers.
    pub fn parse_path<'s>(
        &self,
        source: &'s str,
        path: &Path,
    ) -> Option<Result<SyntaxTree<'s>, ParseError>> {
        Dialect::from_path(path).map(|dialect| self.parse(source, dialect))
    }
}

/// Pre-order traversal without recursion.
struct Preorder<'t> {
    cursor: TreeCursor<'t>,
    done: bool,
}

impl<'t> Preorder<'t> {
    fn new(root: Node<'t>) -> Self {
        Self {
            cursor: root.walk(),
            done: false,
        }
    }
}

impl<'t> Iterator for Preorder<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        if self.done {
            return None;
        }
        let node = self.cursor.node();
        if self.cursor.goto_first_child() || self.cursor.goto_next_sibling() {
            return Some(node);
        }
        loop {
            if !self.cursor.goto_parent() {
                self.done = true;
                return Some(node);
            }
            if self.cursor.goto_next_sibling() {
                return Some(node);
            }
        }
    }
}
