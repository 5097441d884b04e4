use std::fmt::Debug;

use crate::ast::Root;

/// Rewrite a parsed stylesheet in place.
///
/// Transformers run once per stylesheet, synchronously, and mutate the tree
/// directly; they have no result beyond failure.
pub trait TransformerPlugin: Debug + Send + Sync {
  fn transform(&self, root: &mut Root) -> Result<(), anyhow::Error>;
}
