//! CORESET 0 configuration index
//!
//! Picks `controlResourceSetZero` from the tables of TS 38.213 chapter 13
//! for FR1 with equal SSB and PDCCH subcarrier spacing. Selection criteria,
//! in order:
//! 1. largest CORESET 0 bandwidth not exceeding the BWP bandwidth
//! 2. CORESET 0 offset not above OffsetToPointA
//! 3. fewest CORESET 0 OFDM symbols
//!
//! Remaining ties go to the row listed first.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::fr1_bands::{allowed_channel_bandwidths, BandError};
use crate::frequency::Frequency;

/// CORESET 0 selection failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoresetZeroConfigurationIndexError {
    /// No channel bandwidths for the band / SCS pair
    #[error("Unable to find suitable CORESET 0 configuration search space: {0}")]
    Band(#[from] BandError),

    /// No table defined for SCS and minimum channel bandwidth
    #[error(
        "Unable to find suitable CORESET 0 configuration search space for band n{band} \
         (SCS={subcarrier_spacing} Hz, minimum channel bandwidth {min_bandwidth_mhz} MHz)"
    )]
    NoSearchSpace {
        band: u16,
        subcarrier_spacing: Frequency,
        min_bandwidth_mhz: u32,
    },

    /// No row matches the BWP bandwidth and OffsetToPointA
    #[error(
        "Unable to find CORESET 0 configuration index for BWP bandwidth = {bandwidth_rbs} \
         and OffsetToPointA = {offset_to_point_a}"
    )]
    NoMatchingIndex {
        bandwidth_rbs: u32,
        offset_to_point_a: i64,
    },
}

/// One row of a CORESET 0 configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoresetZeroIndex {
    pub index: u8,
    /// Number of RBs
    pub coreset_rbs: u32,
    /// Number of OFDM symbols
    pub coreset_ofdm_symbols: u8,
    /// Offset in RBs
    pub coreset_offset_rbs: i64,
}

const fn row(index: u8, coreset_rbs: u32, coreset_ofdm_symbols: u8, coreset_offset_rbs: i64) -> CoresetZeroIndex {
    CoresetZeroIndex {
        index,
        coreset_rbs,
        coreset_ofdm_symbols,
        coreset_offset_rbs,
    }
}

/// Table 13-1: 15 kHz SCS, minimum channel bandwidth 5 or 10 MHz
pub static TABLE_13_1: [CoresetZeroIndex; 15] = [
    row(0, 24, 2, 0),
    row(1, 24, 2, 2),
    row(2, 24, 2, 4),
    row(3, 24, 3, 0),
    row(4, 24, 3, 2),
    row(5, 24, 3, 4),
    row(6, 48, 1, 12),
    row(7, 48, 1, 16),
    row(8, 48, 2, 12),
    row(9, 48, 2, 16),
    row(10, 48, 3, 12),
    row(11, 48, 3, 16),
    row(12, 96, 1, 38),
    row(13, 96, 2, 38),
    row(14, 96, 3, 38),
];

/// Table 13-4: 30 kHz SCS, minimum channel bandwidth 5 or 10 MHz
pub static TABLE_13_4: [CoresetZeroIndex; 16] = [
    row(0, 24, 2, 0),
    row(1, 24, 2, 1),
    row(2, 24, 2, 2),
    row(3, 24, 2, 3),
    row(4, 24, 2, 4),
    row(5, 24, 3, 0),
    row(6, 24, 3, 1),
    row(7, 24, 3, 2),
    row(8, 24, 3, 3),
    row(9, 24, 3, 4),
    row(10, 48, 1, 12),
    row(11, 48, 1, 14),
    row(12, 48, 1, 16),
    row(13, 48, 2, 12),
    row(14, 48, 2, 14),
    row(15, 48, 2, 16),
];

/// Table 13-6: 30 kHz SCS, minimum channel bandwidth 40 MHz
pub static TABLE_13_6: [CoresetZeroIndex; 10] = [
    row(0, 24, 2, 0),
    row(1, 24, 2, 4),
    row(2, 24, 3, 0),
    row(3, 24, 3, 4),
    row(4, 48, 1, 0),
    row(5, 48, 1, 28),
    row(6, 48, 2, 0),
    row(7, 48, 2, 28),
    row(8, 48, 3, 0),
    row(9, 48, 3, 28),
];

/// Returns the table for a subcarrier spacing and minimum channel bandwidth (MHz).
fn search_space(subcarrier_spacing: Frequency, min_bandwidth_mhz: u32) -> Option<&'static [CoresetZeroIndex]> {
    if subcarrier_spacing == Frequency::khz(15) && matches!(min_bandwidth_mhz, 5 | 10) {
        Some(TABLE_13_1.as_slice())
    } else if subcarrier_spacing == Frequency::khz(30) && matches!(min_bandwidth_mhz, 5 | 10) {
        Some(TABLE_13_4.as_slice())
    } else if subcarrier_spacing == Frequency::khz(30) && min_bandwidth_mhz == 40 {
        Some(TABLE_13_6.as_slice())
    } else {
        None
    }
}

/// Returns the CORESET 0 configuration index for the RF configuration.
///
/// # Arguments
/// * `band` - NR band number
/// * `bandwidth_rbs` - BWP bandwidth in resource blocks
/// * `subcarrier_spacing` - SCS shared by SSB and PDCCH
/// * `offset_to_point_a` - OffsetToPointA in RBs
pub fn get_coreset_zero_configuration_index(
    band: u16,
    bandwidth_rbs: u32,
    subcarrier_spacing: Frequency,
    offset_to_point_a: i64,
) -> Result<u8, CoresetZeroConfigurationIndexError> {
    debug!(
        "Searching for CORESET 0 configuration index: band n{}, bandwidth {} RBs, OffsetToPointA {}",
        band, bandwidth_rbs, offset_to_point_a
    );
    match select_index(band, bandwidth_rbs, subcarrier_spacing, offset_to_point_a) {
        Ok(index) => {
            info!("CORESET 0 configuration index for band n{}: {}", band, index);
            Ok(index)
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}

fn select_index(
    band: u16,
    bandwidth_rbs: u32,
    subcarrier_spacing: Frequency,
    offset_to_point_a: i64,
) -> Result<u8, CoresetZeroConfigurationIndexError> {
    let min_bandwidth_mhz = allowed_channel_bandwidths(band, subcarrier_spacing)?
        .iter()
        .copied()
        .min()
        .ok_or(BandError::UnsupportedSubcarrierSpacing {
            band,
            subcarrier_spacing,
        })?;

    let table = search_space(subcarrier_spacing, min_bandwidth_mhz).ok_or(
        CoresetZeroConfigurationIndexError::NoSearchSpace {
            band,
            subcarrier_spacing,
            min_bandwidth_mhz,
        },
    )?;
    debug!("Found CORESET 0 configuration search space of {} rows", table.len());

    let no_match = CoresetZeroConfigurationIndexError::NoMatchingIndex {
        bandwidth_rbs,
        offset_to_point_a,
    };

    let max_coreset_rbs = table
        .iter()
        .map(|row| row.coreset_rbs)
        .filter(|rbs| *rbs <= bandwidth_rbs)
        .max()
        .ok_or_else(|| no_match.clone())?;
    debug!("Largest CORESET 0 bandwidth fitting the BWP: {} RBs", max_coreset_rbs);

    // min_by_key keeps the first of equal minima
    table
        .iter()
        .filter(|row| row.coreset_rbs == max_coreset_rbs && row.coreset_offset_rbs <= offset_to_point_a)
        .min_by_key(|row| row.coreset_ofdm_symbols)
        .map(|row| row.index)
        .ok_or(no_match)
}
