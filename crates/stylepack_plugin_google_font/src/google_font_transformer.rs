use anyhow::Error;
use serde_json::Value;
use stylepack_core::ast::{AtRule, Node, Root, Visit};
use stylepack_core::list;
use stylepack_core::plugin::{PluginContext, TransformerPlugin};

use crate::google_font_transformer_config::GoogleFontConfig;
use crate::google_font_url::{google_font_url, normalize_font_family, GoogleFontError};

/// The at-rule name this plugin rewrites.
const GOOGLE_FONT_RULE: &str = "google-font";

#[derive(Debug)]
pub struct StylepackGoogleFontTransformerPlugin {
  config: GoogleFontConfig,
}

impl StylepackGoogleFontTransformerPlugin {
  pub fn new(_ctx: &PluginContext, config: Option<Value>) -> Result<Self, Error> {
    let config = config
      .map(serde_json::from_value::<GoogleFontConfig>)
      .transpose()?
      .unwrap_or_default();

    Ok(StylepackGoogleFontTransformerPlugin { config })
  }
}

impl TransformerPlugin for StylepackGoogleFontTransformerPlugin {
  #[tracing::instrument(
    level = "debug",
    skip_all,
    fields(plugin = "StylepackGoogleFontTransformerPlugin")
  )]
  fn transform(&self, root: &mut Root) -> Result<(), Error> {
    tracing::trace!(config = ?self.config, "rewriting google font at-rules");
    rewrite_google_font_rules(root)?;
    Ok(())
  }
}

/// Replace every `@google-font` at-rule with a standard `@import` of the
/// generated font service URL.
///
/// Non-matching at-rules are visited but left untouched; matches nested in
/// other blocks are rewritten in place. The first rule that cannot produce a
/// URL fails the whole pass.
pub fn rewrite_google_font_rules(root: &mut Root) -> Result<(), GoogleFontError> {
  root.walk_at_rules(|rule| {
    if rule.name != GOOGLE_FONT_RULE {
      return Ok(Visit::Keep);
    }

    let params = font_parameters(rule);
    let family = params.first().ok_or_else(|| missing("family", rule))?;
    let styles = params.get(1).ok_or_else(|| missing("styles", rule))?;
    let subset = params.get(2).map(String::as_str);

    let url = google_font_url(family, styles, subset)?;
    tracing::debug!(family = %family, url = %url, "rewrote @google-font to @import");

    Ok(Visit::Replace(Node::AtRule(AtRule::statement(
      "import",
      format!("url({url})"),
    ))))
  })
}

fn missing(parameter: &'static str, rule: &AtRule) -> GoogleFontError {
  GoogleFontError::MissingRequiredParameter {
    parameter,
    params: rule.params.clone(),
  }
}

/// Whitespace-split the raw parameter list into `family`, `styles` and
/// optional `subset`, with the family token normalized in place.
///
/// One trailing `,` per token is dropped as the parameter separator; commas
/// inside a token (style and subset lists) are untouched. The result has
/// between zero and three entries and is never padded.
fn font_parameters(rule: &AtRule) -> Vec<String> {
  let mut params: Vec<String> = list::space(&rule.params)
    .into_iter()
    .map(|token| match token.strip_suffix(',') {
      Some(stripped) => stripped.to_string(),
      None => token,
    })
    .collect();

  if let Some(family) = params.first_mut() {
    *family = normalize_font_family(family);
  }

  params
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use indoc::indoc;
  use pretty_assertions::assert_eq;
  use serde_json::json;
  use stylepack_core::plugin::{PluginLogger, PluginOptions};

  use super::*;

  fn create_google_font_plugin() -> StylepackGoogleFontTransformerPlugin {
    StylepackGoogleFontTransformerPlugin::new(
      &PluginContext {
        logger: PluginLogger::default(),
        options: Arc::new(PluginOptions::default()),
      },
      None,
    )
    .unwrap()
  }

  fn rewrite(css: &str) -> Result<String, GoogleFontError> {
    let mut root = Root::parse(css).unwrap();
    rewrite_google_font_rules(&mut root)?;
    Ok(root.to_css())
  }

  #[test]
  fn rewrites_a_well_formed_rule() {
    assert_eq!(
      rewrite("@google-font \"Open Sans\", 400,700, latin;").unwrap(),
      "@import url(https://fonts.googleapis.com/css?family=Open+Sans:400,700&subset=latin);\n"
    );
  }

  #[test]
  fn omits_the_subset_key_when_no_subset_is_given() {
    let output = rewrite("@google-font \"Roboto\", 300;").unwrap();

    assert_eq!(
      output,
      "@import url(https://fonts.googleapis.com/css?family=Roboto:300);\n"
    );
    assert!(!output.contains("subset"));
  }

  #[test]
  fn quoting_a_single_word_family_changes_nothing() {
    assert_eq!(
      rewrite("@google-font Lato, 400;").unwrap(),
      rewrite("@google-font \"Lato\", 400;").unwrap()
    );
  }

  #[test]
  fn only_the_first_space_of_a_family_becomes_a_plus() {
    assert_eq!(
      rewrite("@google-font \"Open Sans Condensed\", 400;").unwrap(),
      "@import url(https://fonts.googleapis.com/css?family=Open+Sans Condensed:400);\n"
    );
  }

  #[test]
  fn leaves_other_at_rules_untouched() {
    let css = indoc! {r#"
      @import url(reset.css);
      @media screen {
        a {
          color: red;
        }
      }
      @font-face {
        font-family: Custom;
      }
    "#};

    let untouched = Root::parse(css).unwrap().to_css();
    assert_eq!(rewrite(css).unwrap(), untouched);
  }

  #[test]
  fn preserves_sibling_order_in_mixed_stylesheets() {
    let css = indoc! {r#"
      @charset "utf-8";
      @google-font "Roboto", 300;
      body {
        margin: 0;
      }
      @google-font Lato, 400, latin;
    "#};

    assert_eq!(
      rewrite(css).unwrap(),
      indoc! {r#"
        @charset "utf-8";
        @import url(https://fonts.googleapis.com/css?family=Roboto:300);
        body {
          margin: 0;
        }
        @import url(https://fonts.googleapis.com/css?family=Lato:400&subset=latin);
      "#}
    );
  }

  #[test]
  fn rewrites_rules_nested_in_other_blocks() {
    let css = indoc! {r#"
      @media print {
        @google-font "Merriweather", 400;
      }
    "#};

    assert_eq!(
      rewrite(css).unwrap(),
      indoc! {r#"
        @media print {
          @import url(https://fonts.googleapis.com/css?family=Merriweather:400);
        }
      "#}
    );
  }

  #[test]
  fn missing_styles_is_an_error() {
    assert_eq!(
      rewrite("@google-font \"Merriweather\";").unwrap_err(),
      GoogleFontError::MissingRequiredParameter {
        parameter: "styles",
        params: "\"Merriweather\"".into(),
      }
    );
  }

  #[test]
  fn missing_family_is_an_error() {
    assert_eq!(
      rewrite("@google-font;").unwrap_err(),
      GoogleFontError::MissingRequiredParameter {
        parameter: "family",
        params: String::new(),
      }
    );
  }

  #[test]
  fn transforms_through_the_plugin_boundary() {
    let plugin = create_google_font_plugin();
    let mut root = Root::parse("@google-font \"Open Sans\", 400,700, latin;").unwrap();

    plugin.transform(&mut root).unwrap();

    assert_eq!(
      root.to_css(),
      "@import url(https://fonts.googleapis.com/css?family=Open+Sans:400,700&subset=latin);\n"
    );
  }

  #[test]
  fn accepts_an_empty_options_object() {
    let context = PluginContext {
      logger: PluginLogger::default(),
      options: Arc::new(PluginOptions::default()),
    };

    assert!(StylepackGoogleFontTransformerPlugin::new(&context, Some(json!({}))).is_ok());
  }

  #[test]
  fn rejects_unrecognized_options() {
    let context = PluginContext {
      logger: PluginLogger::default(),
      options: Arc::new(PluginOptions::default()),
    };

    let result =
      StylepackGoogleFontTransformerPlugin::new(&context, Some(json!({ "families": [] })));

    assert!(result.is_err());
  }
}
