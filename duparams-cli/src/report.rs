//! YAML report of a derived parameter set

use anyhow::{Context, Result};
use serde::Serialize;

use duparams_common::DuConfig;
use duparams_rf::RfParameters;

/// Parameters together with the DU settings that are passed through untouched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParamsReport {
    pub gnb_name: String,
    pub use_three_quarter_sampling: bool,
    pub use_mimo: bool,
    #[serde(flatten)]
    pub parameters: RfParameters,
}

impl ParamsReport {
    pub fn new(config: &DuConfig, parameters: RfParameters) -> Self {
        Self {
            gnb_name: config.gnb_name.clone(),
            use_three_quarter_sampling: config.use_three_quarter_sampling,
            use_mimo: config.use_mimo,
            parameters,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize RF parameters")
    }
}
