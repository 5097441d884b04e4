use serde::Deserialize;

/// Options accepted by the Google Font transformer.
///
/// No keys are recognized today; the surface exists so hosts can pass a
/// configuration object now and pick up future keys without wiring changes.
/// Unknown keys are rejected at plugin construction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GoogleFontConfig {}
