//! Safe-zone calculation and selection.
//!
//! Given one image rectangle and the canvas config, up to four rectangular
//! regions that avoid the image (plus clearance) are computed. Zones are
//! ephemeral: recomputed fresh every time the image moves, never mutated.

use serde::{Deserialize, Serialize};

use crate::layout::canvas::{CanvasConfig, Rect};

/// A candidate zone is only emitted if both dimensions exceed this.
const MIN_ZONE_DIMENSION: f32 = 100.0;
/// Zones at least this wide are preferred by the selector.
const USABLE_ZONE_WIDTH: f32 = 400.0;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Which side of the image a zone sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZoneId {
    Top,
    Bottom,
    Left,
    Right,
}

/// An axis-aligned rectangle guaranteed not to overlap the placed image or
/// its clearance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub id: ZoneId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub area: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Zone calculator
// ────────────────────────────────────────────────────────────────────────────

/// Computes the 0–4 candidate zones around an image.
///
/// The image is clamped to the canvas first; only its visible extent excludes
/// space. Each candidate's defining dimension is measured from the visible
/// image edge minus margin and clearance, and the other dimension spans the
/// full usable canvas axis. An image covering the whole canvas legitimately
/// yields zero zones — callers handle that as "no room for text", not as an
/// error.
pub fn compute_safe_zones(image: &Rect, config: &CanvasConfig) -> Vec<SafeZone> {
    let visible = image.clamp_to_canvas(config);
    let margin = config.margin;
    let clearance = config.clearance;
    let usable_width = config.width - 2.0 * margin;
    let usable_height = config.height - 2.0 * margin;

    let candidates = [
        (
            ZoneId::Top,
            margin,
            margin,
            usable_width,
            visible.y - margin - clearance,
        ),
        (
            ZoneId::Bottom,
            margin,
            visible.bottom() + clearance,
            usable_width,
            config.height - visible.bottom() - margin - clearance,
        ),
        (
            ZoneId::Left,
            margin,
            margin,
            visible.x - margin - clearance,
            usable_height,
        ),
        (
            ZoneId::Right,
            visible.right() + clearance,
            margin,
            config.width - visible.right() - margin - clearance,
            usable_height,
        ),
    ];

    candidates
        .into_iter()
        .filter(|&(_, _, _, width, height)| {
            width > MIN_ZONE_DIMENSION && height > MIN_ZONE_DIMENSION
        })
        .map(|(id, x, y, width, height)| SafeZone {
            id,
            x,
            y,
            width,
            height,
            area: width * height,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Zone selector
// ────────────────────────────────────────────────────────────────────────────

/// Picks the best zone from a candidate list.
///
/// Prefers the largest zone among those at least 400px wide. When no zone is
/// that wide, falls back to the largest candidate overall — a degraded
/// placement beats no placement. Returns `None` only for an empty list.
/// First-seen wins area ties.
pub fn select_zone(zones: &[SafeZone]) -> Option<SafeZone> {
    let usable = zones.iter().filter(|z| z.width >= USABLE_ZONE_WIDTH);
    largest_by_area(usable).or_else(|| largest_by_area(zones.iter())).copied()
}

fn largest_by_area<'z>(zones: impl Iterator<Item = &'z SafeZone>) -> Option<&'z SafeZone> {
    let mut best: Option<&SafeZone> = None;
    for zone in zones {
        match best {
            Some(current) if zone.area <= current.area => {}
            _ => best = Some(zone),
        }
    }
    best
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
