//! Canvas geometry — the fixed design surface and rectangle math.
//!
//! Every constant the rendering layer depends on lives in `CanvasConfig` and is
//! threaded explicitly through all layout calls. Changing a field here changes
//! every downstream computation; there are no hidden module-level constants.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Canvas configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for the design surface.
///
/// `char_width_ratio` is the average-character-width heuristic: a character at
/// font size `s` is assumed to occupy `s × char_width_ratio` pixels. This is an
/// intentional approximation — exact glyph metrics would be more accurate but
/// tie the engine to a specific rendering backend. Calibrate the ratio against
/// the renderer's actual font rather than treating it as universal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    /// Outer margin between the canvas edge and any zone.
    pub margin: f32,
    /// Minimum empty band enforced between the image and any zone.
    pub clearance: f32,
    /// Multiplier applied to font size to get a line's vertical extent.
    pub line_height: f32,
    /// Average character width as a fraction of font size.
    pub char_width_ratio: f32,
}

/// Returns the contract default config: 1080×1440 canvas, 40px margin,
/// 80px image clearance, 1.2 line height, 0.56 em-equivalent char width.
///
/// These values must match the rendering collaborator exactly.
pub fn default_canvas_config() -> CanvasConfig {
    CanvasConfig {
        width: 1080.0,
        height: 1440.0,
        margin: 40.0,
        clearance: 80.0,
        line_height: 1.2,
        char_width_ratio: 0.56,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rectangles
// ────────────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in canvas coordinates.
///
/// Image bounds may extend partially or fully outside the canvas; only the
/// clamped, on-canvas portion affects zone geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Clamps this rectangle to the canvas, returning its visible extent.
    ///
    /// A rectangle fully outside the canvas collapses to a zero-size rect
    /// pinned to the nearest canvas edge, which is exactly what the zone
    /// calculator wants: the off-canvas side contributes no exclusion.
    pub fn clamp_to_canvas(&self, config: &CanvasConfig) -> Rect {
        let left = self.x.clamp(0.0, config.width);
        let top = self.y.clamp(0.0, config.height);
        let right = self.right().clamp(0.0, config.width);
        let bottom = self.bottom().clamp(0.0, config.height);

        Rect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
