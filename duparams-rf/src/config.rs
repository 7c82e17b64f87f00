//! Validated RF settings
//!
//! Turns the operator supplied [`DuConfig`] into typed [`Frequency`] values
//! after checking every key against the FR1 TDD band table.

use duparams_common::DuConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::fr1_bands::{tdd_band, BandError};
use crate::frequency::{Frequency, FrequencyError};

/// Subcarrier spacings (kHz) a DU can be configured with
pub const SUPPORTED_SUBCARRIER_SPACINGS_KHZ: [u32; 2] = [15, 30];
/// Channel bandwidths (MHz) a DU can be configured with
pub const SUPPORTED_BANDWIDTHS_MHZ: [u32; 13] = [5, 10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100];
/// Lowest FR1 frequency
pub const FR1_LOWER: Frequency = Frequency::mhz(410);
/// Highest FR1 frequency
pub const FR1_UPPER: Frequency = Frequency::mhz(7125);

/// Invalid RF configuration key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RfConfigError {
    #[error("sub-carrier-spacing: {0} kHz is not supported, expected one of {:?}", SUPPORTED_SUBCARRIER_SPACINGS_KHZ)]
    UnsupportedSubcarrierSpacing(u32),

    #[error("bandwidth: {0} MHz is not supported, expected one of {:?}", SUPPORTED_BANDWIDTHS_MHZ)]
    UnsupportedBandwidth(u32),

    #[error("frequency-band: {0}")]
    Band(#[from] BandError),

    #[error("bandwidth: {bandwidth} MHz is not allowed for band n{band} with {scs} kHz subcarrier spacing")]
    BandwidthNotAllowed { band: u16, bandwidth: u32, scs: u32 },

    #[error("center-frequency: {0}")]
    InvalidCenterFrequency(#[from] FrequencyError),

    #[error("center-frequency: {0} MHz is outside FR1 [410 MHz, 7125 MHz]")]
    CenterFrequencyOutsideFr1(String),

    #[error("center-frequency: {center} MHz is outside the usable range [{usable_start} Hz, {usable_end} Hz] of band n{band} for bandwidth {bandwidth} MHz")]
    CenterFrequencyOutsideBand {
        center: String,
        band: u16,
        bandwidth: u32,
        usable_start: Frequency,
        usable_end: Frequency,
    },
}

/// RF settings with every value checked and converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfSettings {
    /// NR band number
    pub band: u16,
    /// Channel bandwidth
    pub bandwidth: Frequency,
    pub subcarrier_spacing: Frequency,
    /// Carrier center frequency
    pub center_frequency: Frequency,
}

impl RfSettings {
    /// Validates a raw DU configuration.
    ///
    /// Checks run in key order: subcarrier spacing, bandwidth, band, then the
    /// center frequency against FR1 and the band's usable range.
    pub fn from_config(config: &DuConfig) -> Result<Self, RfConfigError> {
        Self::validate(config).map_err(|e| {
            error!("Invalid RF configuration: {}", e);
            e
        })
    }

    fn validate(config: &DuConfig) -> Result<Self, RfConfigError> {
        let scs_khz = config.sub_carrier_spacing;
        if !SUPPORTED_SUBCARRIER_SPACINGS_KHZ.contains(&scs_khz) {
            return Err(RfConfigError::UnsupportedSubcarrierSpacing(scs_khz));
        }
        let bandwidth_mhz = config.bandwidth;
        if !SUPPORTED_BANDWIDTHS_MHZ.contains(&bandwidth_mhz) {
            return Err(RfConfigError::UnsupportedBandwidth(bandwidth_mhz));
        }

        let subcarrier_spacing = Frequency::khz(i64::from(scs_khz));
        let bandwidth = Frequency::mhz(i64::from(bandwidth_mhz));
        let band = tdd_band(config.frequency_band)?;

        let allowed = band.allowed_bandwidths(subcarrier_spacing).unwrap_or(&[]);
        if !allowed.contains(&bandwidth_mhz) {
            return Err(RfConfigError::BandwidthNotAllowed {
                band: band.band,
                bandwidth: bandwidth_mhz,
                scs: scs_khz,
            });
        }

        let center_frequency = Frequency::from_mhz(config.center_frequency.trim())?;
        if center_frequency < FR1_LOWER || center_frequency > FR1_UPPER {
            return Err(RfConfigError::CenterFrequencyOutsideFr1(config.center_frequency.clone()));
        }

        let half_bandwidth = bandwidth / 2;
        let usable_start = band.lower + half_bandwidth;
        let usable_end = band.upper - half_bandwidth;
        if center_frequency < usable_start || center_frequency > usable_end {
            return Err(RfConfigError::CenterFrequencyOutsideBand {
                center: config.center_frequency.clone(),
                band: band.band,
                bandwidth: bandwidth_mhz,
                usable_start,
                usable_end,
            });
        }

        debug!(
            "RF settings: band n{}, bandwidth {} Hz, SCS {} Hz, center {} Hz",
            band.band, bandwidth, subcarrier_spacing, center_frequency
        );
        Ok(Self {
            band: band.band,
            bandwidth,
            subcarrier_spacing,
            center_frequency,
        })
    }
}
