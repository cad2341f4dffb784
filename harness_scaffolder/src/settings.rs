//!
//! The scaffolder settings.
//!

use std::fs;
use std::path::Path;

use serde::Deserialize;

///
/// The scaffolder settings, read-only to the merge engine.
///
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether to route handler calls through generated proxy contracts that
    /// classify reverts into expected and unexpected.
    #[serde(default)]
    pub fail_on_unexpected_error: bool,
    /// Whether to generate the extra force-send-ETH wrapper per contract.
    #[serde(rename = "forceSendETH", default)]
    pub force_send_eth: bool,
}

impl Settings {
    ///
    /// Loads the settings from a JSON file.
    ///
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).map_err(|error| {
            anyhow::anyhow!("Failed to read the settings file {path:?}: {error}")
        })?;
        serde_json::from_str(text.as_str()).map_err(|error| {
            anyhow::anyhow!("Failed to parse the settings file {path:?}: {error}")
        })
    }
}
