//! Generic parse tree
//!
//! The tree is untyped: every node carries the chain of grammar rules that
//! produced it as a `|`-separated tag (for example `expr|number|integer|regex`),
//! the matched text for leaves, and its children in source order. The reader
//! classifies nodes by substring search on the tag, so the exact rule names
//! are part of the contract between the grammar and the evaluator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of the root node
pub const ROOT_TAG: &str = ">";

/// Rule names that appear in tags
pub mod rule {
    pub const EXPR: &str = "expr";
    pub const NUMBER: &str = "number";
    pub const INTEGER: &str = "integer";
    pub const DECIMAL: &str = "decimal";
    pub const SYMBOL: &str = "symbol";
    pub const SEXPR: &str = "sexpr";
    pub const QEXPR: &str = "qexpr";
    /// Leaf matched by a regular expression (also the start/end anchors of the root)
    pub const REGEX: &str = "regex";
    /// Leaf matched by a literal character (brackets)
    pub const CHAR: &str = "char";
}

/// A node of the parse tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNode {
    pub tag: String,
    pub contents: String,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Leaf node holding matched text
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Interior node
    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// Root node wrapping top-level expressions between start/end anchors
    pub fn root(exprs: Vec<ParseNode>) -> Self {
        let mut children = Vec::with_capacity(exprs.len() + 2);
        children.push(ParseNode::leaf(rule::REGEX, ""));
        children.extend(exprs);
        children.push(ParseNode::leaf(rule::REGEX, ""));
        Self::branch(ROOT_TAG, children)
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// Whether `rule` appears in this node's tag
    pub fn has_rule(&self, rule: &str) -> bool {
        self.tag.contains(rule)
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ParseNode::node_count).sum::<usize>()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented outline, one node per line
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
