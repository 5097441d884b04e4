//! [`Root`] back to CSS text.
//!
//! The tree stores no raw whitespace, so output is regenerated in canonical
//! form: one node per line, blocks indented two spaces per level.

use super::nodes::{AtRule, Declaration, Node, Root, Rule};

const INDENT: &str = "  ";

/// Serialize a tree to CSS text.
pub fn stringify(root: &Root) -> String {
  let mut output = String::new();
  write_nodes(&mut output, &root.nodes, 0);
  output
}

fn write_nodes(output: &mut String, nodes: &[Node], depth: usize) {
  for node in nodes {
    write_indent(output, depth);
    match node {
      Node::AtRule(rule) => write_at_rule(output, rule, depth),
      Node::Rule(rule) => write_rule(output, rule, depth),
      Node::Declaration(declaration) => write_declaration(output, declaration),
    }
  }
}

fn write_at_rule(output: &mut String, rule: &AtRule, depth: usize) {
  output.push('@');
  output.push_str(&rule.name);
  if !rule.params.is_empty() {
    output.push(' ');
    output.push_str(&rule.params);
  }
  match &rule.nodes {
    Some(children) => write_block(output, children, depth),
    None => output.push_str(";\n"),
  }
}

fn write_rule(output: &mut String, rule: &Rule, depth: usize) {
  output.push_str(&rule.selector);
  write_block(output, &rule.nodes, depth);
}

fn write_block(output: &mut String, nodes: &[Node], depth: usize) {
  output.push_str(" {\n");
  write_nodes(output, nodes, depth + 1);
  write_indent(output, depth);
  output.push_str("}\n");
}

fn write_declaration(output: &mut String, declaration: &Declaration) {
  output.push_str(&declaration.prop);
  output.push_str(": ");
  output.push_str(&declaration.value);
  output.push_str(";\n");
}

fn write_indent(output: &mut String, depth: usize) {
  for _ in 0..depth {
    output.push_str(INDENT);
  }
}
