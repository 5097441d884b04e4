mod google_font_transformer;
mod google_font_transformer_config;
mod google_font_url;

pub use google_font_transformer::{rewrite_google_font_rules, StylepackGoogleFontTransformerPlugin};
pub use google_font_transformer_config::GoogleFontConfig;
pub use google_font_url::{google_font_url, normalize_font_family, GoogleFontError};
