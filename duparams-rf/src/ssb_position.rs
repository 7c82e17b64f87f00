//! SSB position relative to Point A
//!
//! Derives `OffsetToPointA` and `k_SSB` (TS 38.211 7.4.3.1) from the SSB and
//! Point A ARFCNs, plus the values the DU software derives from them.

use thiserror::Error;
use tracing::{error, info};

use crate::arfcn::{Arfcn, ArfcnError};
use crate::carrier_bandwidth::SUBCARRIERS_PER_RB;
use crate::frequency::{Exact, Frequency};
use crate::numerology::Numerology;

/// Below this ARFCN the channel raster is 5 kHz instead of 15 kHz
const LOW_RANGE_ARFCN_LIMIT: u32 = 600_000;
/// RBs between Point A and the common RB grid origin for OffsetToPointA
const OFFSET_TO_POINT_A_BASE_RBS: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SsbPositionError {
    #[error("Failed to calculate DL frequency: {0}")]
    Arfcn(#[from] ArfcnError),
}

/// Channel raster steps per 15 kHz
fn raster_scaling(point_a: Arfcn) -> i64 {
    if point_a.value() < LOW_RANGE_ARFCN_LIMIT {
        3
    } else {
        1
    }
}

/// Returns OffsetToPointA in RBs of 15 kHz.
///
/// `trunc(((ssb - point_a) / (s * 2^mu) / 12 - 10) * 2^mu)` where `s` scales
/// the channel raster to 15 kHz.
pub fn get_offset_to_point_a(ssb: Arfcn, point_a: Arfcn, numerology: Numerology) -> i64 {
    let diff = Exact::from_integer(i128::from(ssb - point_a));
    let scaling = numerology.scaling();
    let scaled = diff / Exact::from_integer(i128::from(raster_scaling(point_a) * scaling));
    let offset = (scaled / Exact::from_integer(i128::from(SUBCARRIERS_PER_RB))
        - Exact::from_integer(i128::from(OFFSET_TO_POINT_A_BASE_RBS)))
        * Exact::from_integer(i128::from(scaling));
    // |offset| is bounded by the ARFCN span, far below i64::MAX
    offset.trunc().to_integer() as i64
}

/// Returns `k_SSB`, the subcarrier offset of the SSB from its RB.
pub fn get_k_ssb(ssb: Arfcn, point_a: Arfcn, numerology: Numerology) -> i64 {
    let diff = Exact::from_integer(i128::from(ssb - point_a));
    let scaled = diff / Exact::from_integer(i128::from(raster_scaling(point_a)));
    let limit = Exact::from_integer(if numerology.value() == 1 { 24 } else { 12 });
    let remainder = scaled - limit * (scaled / limit).floor();
    remainder.trunc().to_integer() as i64
}

/// Returns the first subcarrier of the SSB counted from Point A.
pub fn get_first_usable_subcarrier(ssb: Arfcn, point_a: Arfcn, numerology: Numerology) -> i64 {
    let mu = u32::from(numerology.value());
    let prb_offset = get_offset_to_point_a(ssb, point_a, numerology) >> mu;
    let sc_offset = get_k_ssb(ssb, point_a, numerology) >> mu;
    SUBCARRIERS_PER_RB * prb_offset + sc_offset
}

/// Returns the downlink carrier center frequency: Point A plus half the
/// occupied bandwidth, rounded down to whole kHz.
pub fn get_dl_frequency(
    carrier_bandwidth_rbs: u32,
    subcarrier_spacing: Frequency,
    point_a: Arfcn,
) -> Result<Frequency, SsbPositionError> {
    let occupied_khz = (subcarrier_spacing * (SUBCARRIERS_PER_RB * i64::from(carrier_bandwidth_rbs)))
        .as_khz()
        .trunc()
        .to_integer();
    let point_a_freq = point_a
        .to_frequency()
        .map_err(|e| {
            error!("Failed to convert Point A {} to frequency: {}", point_a, e);
            e
        })?;
    let dl_freq = Frequency::hz((occupied_khz >> 1) * crate::frequency::HZ_PER_KHZ) + point_a_freq;
    info!("DL frequency for Point A {}: {} Hz", point_a, dl_freq);
    Ok(dl_freq)
}
