//! Layout intents and the renderer-facing pixel layout.
//!
//! An intent is a *proposed* arrangement — a zone choice, an alignment, and an
//! ordered list of single-line text records. It carries no positions; those
//! only exist after validation and translation. The pixel layout is the final
//! artifact the renderer draws verbatim: one non-wrapping text element per
//! line at the given position and width.

use serde::{Deserialize, Serialize};

use crate::layout::canvas::Rect;
use crate::layout::zones::SafeZone;

// ────────────────────────────────────────────────────────────────────────────
// Intent types
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal alignment of text within a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// A per-character emphasis annotation over a line's own string.
///
/// The range is half-open `[start, end)`. The engine never inspects these —
/// they pass through from intent to pixel output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// One single-line text record. The renderer must not re-wrap it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentLine {
    pub text: String,
    pub font_size: f32,
    #[serde(default)]
    pub styles: Vec<StyleRange>,
}

/// A proposed, not-yet-validated text arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutIntent {
    pub zone: SafeZone,
    pub alignment: Alignment,
    pub lines: Vec<IntentLine>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pixel layout
// ────────────────────────────────────────────────────────────────────────────

/// An absolute, integer-rounded position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A line with its final pixel placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub font_size: f32,
    pub position: Position,
    pub alignment: Alignment,
    pub line_height_multiplier: f32,
    pub max_width: f32,
    #[serde(default)]
    pub styles: Vec<StyleRange>,
}

/// The margins echoed to the renderer alongside the placed lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMargins {
    pub outer: f32,
    pub clearance: f32,
}

/// The final, renderer-facing artifact. Produced once, wholesale, from a
/// validated intent — never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelLayout {
    pub lines: Vec<PlacedLine>,
    pub image: Rect,
    pub margins: LayoutMargins,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
