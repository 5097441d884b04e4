//! Family normalization and Google Fonts URL assembly.

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

const GOOGLE_FONTS_ENDPOINT: &str = "https://fonts.googleapis.com/css";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoogleFontError {
  /// A `@google-font` rule without enough parameters to build a URL.
  #[error("missing required parameter `{parameter}` in `@google-font {params}`")]
  MissingRequiredParameter {
    parameter: &'static str,
    params: String,
  },
  #[error("failed to assemble the font service URL: {0}")]
  InvalidEndpoint(#[from] url::ParseError),
}

/// Strip quote characters from a family name and join its first two words
/// with `+`.
///
/// Only the first space is replaced; any later spaces in a multi-word family
/// stay literal in the output.
pub fn normalize_font_family(font: &str) -> String {
  let unquoted: String = font.chars().filter(|ch| !matches!(ch, '\'' | '"')).collect();
  unquoted.replacen(' ', "+", 1)
}

/// Build the `fonts.googleapis.com` CSS URL for a family, its styles, and an
/// optional subset list.
///
/// The assembled URL is percent-decoded end to end so the emitted import
/// reads like the font service's own usage examples. The result is meant for
/// embedding as stylesheet text, not for re-parsing in a context that
/// requires percent-encoding.
pub fn google_font_url(
  family: &str,
  styles: &str,
  subset: Option<&str>,
) -> Result<String, GoogleFontError> {
  let mut query = format!("family={family}:{styles}");
  if let Some(subset) = subset.filter(|subset| !subset.is_empty()) {
    query.push_str("&subset=");
    query.push_str(subset);
  }

  let mut url = Url::parse(GOOGLE_FONTS_ENDPOINT)?;
  url.set_query(Some(&query));

  Ok(percent_decode_str(url.as_str()).decode_utf8_lossy().into_owned())
}
