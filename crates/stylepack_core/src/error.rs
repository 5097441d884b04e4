use thiserror::Error;

/// Errors produced by the stylesheet framework.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StylesheetError {
  /// The input text is not syntactically valid CSS.
  #[error("CSS parse error at {line}:{column}: {message}")]
  Parse {
    message: String,
    line: u32,
    column: u32,
  },
}

impl StylesheetError {
  /// Create a parse error.
  pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
    Self::Parse {
      message: message.into(),
      line,
      column,
    }
  }
}
