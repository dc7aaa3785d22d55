//! Zone metrics — the single source of truth for inner padding math.
//!
//! Both the validator and the fitter derive usable space through this helper,
//! so the two can never disagree about how much of a zone text may occupy.

use serde::{Deserialize, Serialize};

use crate::layout::zones::SafeZone;

/// Zones narrower than this use the tighter inner padding.
const NARROW_ZONE_WIDTH: f32 = 300.0;
const NARROW_PADDING: f32 = 20.0;
const WIDE_PADDING: f32 = 40.0;

/// Usable space inside a zone after inner padding is subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    pub inner_padding: f32,
    pub max_width: f32,
    pub available_height: f32,
}

/// Derives padding and usable dimensions for a zone.
///
/// Padding is 20px for zones narrower than 300px, 40px otherwise. Usable
/// dimensions can go negative for degenerate zones; callers treat that as
/// "no room" rather than clamping it away.
pub fn zone_metrics(zone: &SafeZone) -> ZoneMetrics {
    let inner_padding = if zone.width < NARROW_ZONE_WIDTH {
        NARROW_PADDING
    } else {
        WIDE_PADDING
    };

    ZoneMetrics {
        inner_padding,
        max_width: zone.width - 2.0 * inner_padding,
        available_height: zone.height - 2.0 * inner_padding,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::zones::ZoneId;

    fn make_zone(width: f32, height: f32) -> SafeZone {
        SafeZone {
            id: ZoneId::Top,
            x: 40.0,
            y: 40.0,
            width,
            height,
            area: width * height,
        }
    }

    #[test]
    fn test_narrow_zone_gets_20px_padding() {
        let metrics = zone_metrics(&make_zone(299.0, 500.0));
        assert_eq!(metrics.inner_padding, 20.0);
        assert_eq!(metrics.max_width, 259.0);
        assert_eq!(metrics.available_height, 460.0);
    }

    #[test]
    fn test_300px_zone_gets_40px_padding() {
        // The boundary is exclusive: width 300 is no longer "narrow".
        let metrics = zone_metrics(&make_zone(300.0, 500.0));
        assert_eq!(metrics.inner_padding, 40.0);
        assert_eq!(metrics.max_width, 220.0);
        assert_eq!(metrics.available_height, 420.0);
    }

    #[test]
    fn test_wide_zone_dimensions() {
        let metrics = zone_metrics(&make_zone(1000.0, 880.0));
        assert_eq!(metrics.inner_padding, 40.0);
        assert_eq!(metrics.max_width, 920.0);
        assert_eq!(metrics.available_height, 800.0);
    }

    #[test]
    fn test_degenerate_zone_goes_negative() {
        // A zone smaller than twice its padding yields negative usable space.
        let metrics = zone_metrics(&make_zone(120.0, 30.0));
        assert_eq!(metrics.inner_padding, 20.0);
        assert!(metrics.available_height < 0.0);
    }
}
