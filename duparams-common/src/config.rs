//! DU RF configuration
//!
//! Raw, unvalidated RF settings of a Distributed Unit as written by the
//! operator. Keys are kebab-case:
//!
//! ```yaml
//! gnb-name: du-1
//! frequency-band: 77
//! bandwidth: 20              # MHz
//! sub-carrier-spacing: 30    # kHz
//! center-frequency: "3925"   # MHz
//! ```
//!
//! `center-frequency` is kept as text so fractional MHz values reach the
//! exact arithmetic untouched. Integer YAML values are accepted too; YAML
//! floats are rejected.

use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::Error;

fn default_gnb_name() -> String {
    "du".to_string()
}

/// RF configuration of a DU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DuConfig {
    /// Name of the gNB the DU belongs to
    #[serde(default = "default_gnb_name")]
    pub gnb_name: String,
    /// NR operating band number, e.g. 77 for n77
    pub frequency_band: u16,
    /// Channel bandwidth in MHz
    pub bandwidth: u32,
    /// Subcarrier spacing in kHz
    pub sub_carrier_spacing: u32,
    /// Carrier center frequency in MHz, as an exact decimal string
    #[serde(deserialize_with = "deserialize_decimal_text")]
    pub center_frequency: String,
    /// Use 3/4 sampling in the radio driver
    #[serde(default)]
    pub use_three_quarter_sampling: bool,
    /// Enable 2x2 MIMO
    #[serde(default)]
    pub use_mimo: bool,
}

impl DuConfig {
    /// Creates a configuration with default name and flags.
    pub fn new(
        frequency_band: u16,
        bandwidth: u32,
        sub_carrier_spacing: u32,
        center_frequency: impl Into<String>,
    ) -> Self {
        Self {
            gnb_name: default_gnb_name(),
            frequency_band,
            bandwidth,
            sub_carrier_spacing,
            center_frequency: center_frequency.into(),
            use_three_quarter_sampling: false,
            use_mimo: false,
        }
    }

    /// Parses a DU configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use duparams_common::DuConfig;
    ///
    /// let yaml = r#"
    /// frequency-band: 77
    /// bandwidth: 20
    /// sub-carrier-spacing: 30
    /// center-frequency: "3925.5"
    /// "#;
    ///
    /// let config = DuConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(config.center_frequency, "3925.5");
    /// assert_eq!(config.gnb_name, "du");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check_fields()?;
        Ok(config)
    }

    /// Loads a DU configuration from a YAML file.
    ///
    /// # Returns
    /// * `Ok(DuConfig)` - Successfully loaded configuration
    /// * `Err(Error)` - File I/O, YAML parsing or empty field error
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn check_fields(&self) -> Result<(), Error> {
        if self.gnb_name.trim().is_empty() {
            return Err(Error::Config("gnb-name must not be empty".to_string()));
        }
        if self.center_frequency.trim().is_empty() {
            return Err(Error::Config("center-frequency must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Accepts a string or an integer and keeps its decimal text.
fn deserialize_decimal_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct DecimalTextVisitor;

    impl Visitor<'_> for DecimalTextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("an integer or a quoted decimal number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Err(E::custom(format!(
                "binary floating point value {v} is not exact, quote it as a string"
            )))
        }
    }

    deserializer.deserialize_any(DecimalTextVisitor)
}
