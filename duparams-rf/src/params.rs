//! Full DU RF parameter set
//!
//! Runs every calculation once for validated [`RfSettings`] and collects the
//! values the DU configuration file needs. Unlike the best-effort SSB helper,
//! every step here is a hard failure so an invalid radio configuration is
//! never produced.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::arfcn::Arfcn;
use crate::carrier_bandwidth::{get_carrier_bandwidth, CarrierBandwidthError};
use crate::config::RfSettings;
use crate::coreset_zero::{get_coreset_zero_configuration_index, CoresetZeroConfigurationIndexError};
use crate::frequency::Frequency;
use crate::initial_bwp::{get_initial_bwp, InitialBwpError};
use crate::numerology::{Numerology, NumerologyError};
use crate::point_a::{get_dl_absolute_frequency_point_a, DlAbsoluteFrequencyPointAError};
use crate::ssb::{absolute_frequency_ssb, AbsoluteFrequencySsbError};
use crate::ssb_position::{
    get_dl_frequency, get_first_usable_subcarrier, get_k_ssb, get_offset_to_point_a,
    SsbPositionError,
};

/// Failure of one step of the parameter calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RfParametersError {
    #[error("numerology: {0}")]
    Numerology(#[from] NumerologyError),

    #[error("absoluteFrequencySSB: {0}")]
    AbsoluteFrequencySsb(#[from] AbsoluteFrequencySsbError),

    #[error("{0}")]
    PointA(#[from] DlAbsoluteFrequencyPointAError),

    #[error("carrier bandwidth: {0}")]
    CarrierBandwidth(#[from] CarrierBandwidthError),

    #[error("initial BWP: {0}")]
    InitialBwp(#[from] InitialBwpError),

    #[error("CORESET 0: {0}")]
    CoresetZero(#[from] CoresetZeroConfigurationIndexError),

    #[error("{0}")]
    SsbPosition(#[from] SsbPositionError),
}

/// Derived RF parameters of a DU cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfParameters {
    pub frequency_band: u16,
    /// mu of the subcarrier spacing
    pub numerology: Numerology,
    pub absolute_frequency_ssb: Arfcn,
    pub dl_absolute_frequency_point_a: Arfcn,
    /// Carrier bandwidth in RBs
    pub dl_carrier_bandwidth: u32,
    /// Same as the downlink for TDD
    pub ul_carrier_bandwidth: u32,
    pub initial_dl_bwp_location_and_bandwidth: i64,
    pub initial_ul_bwp_location_and_bandwidth: i64,
    pub coreset_zero_configuration_index: u8,
    pub offset_to_point_a: i64,
    pub k_ssb: i64,
    pub first_usable_subcarrier: i64,
    /// Downlink carrier frequency in Hz
    pub dl_frequency: Frequency,
}

impl RfParameters {
    /// Computes all parameters for `settings`.
    pub fn compute(settings: &RfSettings) -> Result<Self, RfParametersError> {
        let scs = settings.subcarrier_spacing;
        let numerology = Numerology::from_subcarrier_spacing(scs)?;

        let ssb = absolute_frequency_ssb(settings.center_frequency)?;
        let point_a =
            get_dl_absolute_frequency_point_a(settings.center_frequency, settings.bandwidth, Some(scs))?;
        let carrier_bandwidth = get_carrier_bandwidth(settings.bandwidth, scs)?;
        let initial_bwp = get_initial_bwp(carrier_bandwidth)?;

        let offset_to_point_a = get_offset_to_point_a(ssb, point_a, numerology);
        let coreset_zero_index =
            get_coreset_zero_configuration_index(settings.band, carrier_bandwidth, scs, offset_to_point_a)?;
        let k_ssb = get_k_ssb(ssb, point_a, numerology);
        let first_usable_subcarrier = get_first_usable_subcarrier(ssb, point_a, numerology);
        let dl_frequency = get_dl_frequency(carrier_bandwidth, scs, point_a)?;

        info!(
            "RF parameters for band n{}: SSB {}, Point A {}, {} RBs, CORESET 0 index {}",
            settings.band, ssb, point_a, carrier_bandwidth, coreset_zero_index
        );

        Ok(Self {
            frequency_band: settings.band,
            numerology,
            absolute_frequency_ssb: ssb,
            dl_absolute_frequency_point_a: point_a,
            dl_carrier_bandwidth: carrier_bandwidth,
            ul_carrier_bandwidth: carrier_bandwidth,
            initial_dl_bwp_location_and_bandwidth: initial_bwp,
            initial_ul_bwp_location_and_bandwidth: initial_bwp,
            coreset_zero_configuration_index: coreset_zero_index,
            offset_to_point_a,
            k_ssb,
            first_usable_subcarrier,
            dl_frequency,
        })
    }

    /// Renders the parameters as `key = value;` lines using the DU
    /// configuration file names.
    pub fn to_config_text(&self) -> String {
        let entries: [(&str, String); 13] = [
            ("band", self.frequency_band.to_string()),
            ("subcarrierSpacing", self.numerology.to_string()),
            ("absoluteFrequencySSB", self.absolute_frequency_ssb.to_string()),
            ("dl_absoluteFrequencyPointA", self.dl_absolute_frequency_point_a.to_string()),
            ("dl_carrierBandwidth", self.dl_carrier_bandwidth.to_string()),
            ("ul_carrierBandwidth", self.ul_carrier_bandwidth.to_string()),
            (
                "initialDLBWPlocationAndBandwidth",
                self.initial_dl_bwp_location_and_bandwidth.to_string(),
            ),
            (
                "initialULBWPlocationAndBandwidth",
                self.initial_ul_bwp_location_and_bandwidth.to_string(),
            ),
            (
                "initialDLBWPcontrolResourceSetZero",
                self.coreset_zero_configuration_index.to_string(),
            ),
            ("offsetToPointA", self.offset_to_point_a.to_string()),
            ("kssb", self.k_ssb.to_string()),
            ("firstUsableSubcarrier", self.first_usable_subcarrier.to_string()),
            ("dl_frequency", self.dl_frequency.to_string()),
        ];

        entries
            .iter()
            .map(|(key, value)| format!("{key} = {value};\n"))
            .collect()
    }
}
