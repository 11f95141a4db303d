use serde::{Deserialize, Serialize};

use super::level::{SegmentIndex, SEGMENT_COUNT};

const ENABLE_LOGS: bool = true;

/// Snapshot of the track's bounding box, taken at click time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackGeometry {
    /// Left edge of the track in viewport coordinates.
    #[serde(alias = "left")]
    pub origin_x: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(origin_x: f64, width: f64) -> Self {
        Self { origin_x, width }
    }
}

/// Edge-bias thresholds that widen the hit areas of the first and last
/// segments.
#[derive(Debug, Clone)]
pub struct EdgeBias {
    /// Clicks in the leftmost fraction of segment 1 go to segment 0.
    pub second_segment_lead_in: f64,
    /// Clicks past this fraction of segment 8 go to segment 9.
    pub penultimate_segment_lead_out: f64,
    /// Fraction of the whole track that always selects segment 0.
    pub left_guard: f64,
    /// Fraction of the whole track beyond which segment 9 is always selected.
    pub right_guard: f64,
    /// Fraction of one segment width, measured from the track origin, that
    /// always selects segment 0. Evaluated last.
    pub left_edge_reach: f64,
}

impl Default for EdgeBias {
    fn default() -> Self {
        Self {
            second_segment_lead_in: 0.2,
            penultimate_segment_lead_out: 0.8,
            left_guard: 0.1,
            right_guard: 0.9,
            left_edge_reach: 0.3,
        }
    }
}

/// Map a viewport X coordinate to the segment under it using the default
/// edge bias.
pub fn resolve(click_x: f64, geometry: TrackGeometry) -> SegmentIndex {
    resolve_with(click_x, geometry, &EdgeBias::default())
}

/// Map a viewport X coordinate to a segment. Total: coordinates outside the
/// track are clamped onto the nearest end, never rejected.
///
/// The rules are applied in a fixed order and each may override the one
/// before it. The last-segment rule depends on the raw floor index, not on
/// any earlier adjustment.
pub fn resolve_with(click_x: f64, geometry: TrackGeometry, bias: &EdgeBias) -> SegmentIndex {
    let width = geometry.width;
    let relative_x = click_x - geometry.origin_x;
    let segment_width = width / SEGMENT_COUNT as f64;

    // `as` saturates on overflow and maps NaN to 0.
    let raw_index = (relative_x / segment_width).floor() as i64;
    let position_in_segment = relative_x - raw_index as f64 * segment_width;
    let mut index = raw_index;

    if raw_index == 1 && position_in_segment < segment_width * bias.second_segment_lead_in {
        index = 0;
    }
    if raw_index == 8 && position_in_segment > segment_width * bias.penultimate_segment_lead_out {
        index = 9;
    }
    if relative_x <= width * bias.left_guard {
        index = 0;
    }
    if relative_x >= width * bias.right_guard {
        index = 9;
    }
    if relative_x <= segment_width * bias.left_edge_reach {
        crate::log_debug!("left edge of track clicked at {relative_x:.1}");
        index = 0;
    }

    SegmentIndex::clamped(index)
}
