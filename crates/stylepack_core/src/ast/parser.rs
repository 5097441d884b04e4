//! CSS text to [`Root`], driven directly off the `cssparser` tokenizer.
//!
//! The parser keeps at-rule preludes and selectors as raw source slices so
//! downstream tokenization sees exactly what the author wrote. Parsing is
//! strict: the first syntax error aborts with its source location.

use cssparser::{Delimiter, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use super::nodes::{AtRule, Declaration, Node, Root, Rule};
use crate::error::StylesheetError;

type Error<'i> = ParseError<'i, &'static str>;

/// Parse stylesheet text into a [`Root`].
pub fn parse(css: &str) -> Result<Root, StylesheetError> {
  let mut input = ParserInput::new(css);
  let mut parser = Parser::new(&mut input);

  let nodes = parse_nodes(&mut parser, true).map_err(from_parse_error)?;
  Ok(Root { nodes })
}

fn from_parse_error(error: Error<'_>) -> StylesheetError {
  let message = match error.kind {
    ParseErrorKind::Basic(kind) => kind.to_string(),
    ParseErrorKind::Custom(message) => message.to_string(),
  };
  // cssparser lines are zero-based.
  StylesheetError::parse(message, error.location.line + 1, error.location.column)
}

fn parse_nodes<'i>(parser: &mut Parser<'i, '_>, top_level: bool) -> Result<Vec<Node>, Error<'i>> {
  let mut nodes = Vec::new();

  loop {
    parser.skip_whitespace();
    if parser.is_exhausted() {
      break;
    }

    let state = parser.state();
    let token = parser.next()?.clone();
    match token {
      Token::AtKeyword(name) => {
        let name = name.to_string();
        nodes.push(parse_at_rule(parser, name)?);
      }
      Token::Semicolon => continue,
      _ => {
        parser.reset(&state);
        nodes.push(parse_rule_or_declaration(parser, top_level)?);
      }
    }
  }

  Ok(nodes)
}

/// Consume everything up to the next `;` or `{` at the current nesting level
/// and return it as a trimmed source slice.
fn parse_prelude<'i>(parser: &mut Parser<'i, '_>) -> Result<String, Error<'i>> {
  let start = parser.position();
  parser.parse_until_before(
    Delimiter::Semicolon | Delimiter::CurlyBracketBlock,
    |prelude| {
      while prelude.next().is_ok() {}
      Ok::<(), Error<'i>>(())
    },
  )?;

  Ok(parser.slice_from(start).trim().to_string())
}

/// True when the boundary token after a prelude opens a block.
fn enters_block(parser: &mut Parser<'_, '_>) -> bool {
  matches!(parser.next(), Ok(Token::CurlyBracketBlock))
}

fn parse_at_rule<'i>(parser: &mut Parser<'i, '_>, name: String) -> Result<Node, Error<'i>> {
  let params = parse_prelude(parser)?;
  let mut rule = AtRule::statement(name, params);

  // The boundary is `{`, `;`, or end of input; the latter two end the
  // statement form.
  if enters_block(parser) {
    rule.nodes = Some(parser.parse_nested_block(|block| parse_nodes(block, false))?);
  }

  Ok(Node::AtRule(rule))
}

fn parse_rule_or_declaration<'i>(
  parser: &mut Parser<'i, '_>,
  top_level: bool,
) -> Result<Node, Error<'i>> {
  let location = parser.current_source_location();
  let prelude = parse_prelude(parser)?;

  if enters_block(parser) {
    let nodes = parser.parse_nested_block(|block| parse_nodes(block, false))?;
    return Ok(Node::Rule(Rule {
      selector: prelude,
      nodes,
    }));
  }

  if top_level {
    return Err(location.new_custom_error("declaration outside of a block"));
  }

  let Some((prop, value)) = prelude.split_once(':') else {
    return Err(location.new_custom_error("expected `:` in declaration"));
  };

  Ok(Node::Declaration(Declaration {
    prop: prop.trim().to_string(),
    value: value.trim().to_string(),
  }))
}
