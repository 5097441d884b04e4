use std::path::PathBuf;
use std::sync::Arc;

pub use transformer_plugin::*;

mod transformer_plugin;

/// Everything a plugin receives from the host pipeline at construction time.
pub struct PluginContext {
  pub logger: PluginLogger,
  pub options: Arc<PluginOptions>,
}

#[derive(Default)]
pub struct PluginLogger {}

#[derive(Debug, Default)]
pub struct PluginOptions {
  pub project_root: PathBuf,
}
