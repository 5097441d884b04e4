//! The owned stylesheet tree.
//!
//! Nodes are plain values held in `Vec`s; mutation happens through the walk
//! entry points on [`Root`], which visit nodes in document order and splice
//! replacements in place.

use serde::{Deserialize, Serialize};

use crate::error::StylesheetError;

/// The root of a parsed stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
  pub nodes: Vec<Node>,
}

/// A single node in the stylesheet tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
  #[serde(rename = "atrule")]
  AtRule(AtRule),
  #[serde(rename = "rule")]
  Rule(Rule),
  #[serde(rename = "decl")]
  Declaration(Declaration),
}

/// An at-rule such as `@media screen { ... }` or `@import url(...)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AtRule {
  /// Rule name without the leading `@`.
  pub name: String,
  /// Raw prelude text between the name and the `;` or block, trimmed.
  pub params: String,
  /// Child nodes for the block form; `None` for the statement form.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nodes: Option<Vec<Node>>,
}

impl AtRule {
  /// Block-less at-rule statement (`@name params;`).
  pub fn statement(name: impl Into<String>, params: impl Into<String>) -> Self {
    AtRule {
      name: name.into(),
      params: params.into(),
      nodes: None,
    }
  }
}

/// A style rule: raw selector text plus a block of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
  pub selector: String,
  pub nodes: Vec<Node>,
}

/// A `prop: value` declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
  pub prop: String,
  pub value: String,
}

/// Outcome of visiting an at-rule during [`Root::walk_at_rules`].
#[derive(Debug)]
pub enum Visit {
  /// Leave the node as is and descend into its block, if any.
  Keep,
  /// Splice the node into the tree at the visited node's position. The walk
  /// does not descend into a replacement.
  Replace(Node),
}

impl Root {
  /// Parse stylesheet text into a tree.
  pub fn parse(css: &str) -> Result<Self, StylesheetError> {
    super::parser::parse(css)
  }

  /// Serialize the tree back to CSS text.
  pub fn to_css(&self) -> String {
    super::stringifier::stringify(self)
  }

  /// Depth-first, pre-order walk over every at-rule in the tree, including
  /// at-rules nested inside other blocks.
  ///
  /// The visitor decides per node whether to keep it or replace it; sibling
  /// order is preserved either way. An error aborts the walk immediately.
  pub fn walk_at_rules<E, F>(&mut self, mut visit: F) -> Result<(), E>
  where
    F: FnMut(&AtRule) -> Result<Visit, E>,
  {
    walk_nodes(&mut self.nodes, &mut visit)
  }
}

fn walk_nodes<E, F>(nodes: &mut [Node], visit: &mut F) -> Result<(), E>
where
  F: FnMut(&AtRule) -> Result<Visit, E>,
{
  for node in nodes.iter_mut() {
    if let Node::AtRule(rule) = &*node {
      if let Visit::Replace(replacement) = visit(rule)? {
        *node = replacement;
        continue;
      }
    }

    match node {
      Node::AtRule(AtRule {
        nodes: Some(children),
        ..
      }) => walk_nodes(children, visit)?,
      Node::Rule(rule) => walk_nodes(&mut rule.nodes, visit)?,
      _ => {}
    }
  }

  Ok(())
}
