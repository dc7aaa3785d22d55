//! Intent translation — a validated arrangement becomes absolute pixels.
//!
//! This is the single place in the core that raises a hard error. Translating
//! an intent that fails validation is a precondition violation by the caller,
//! not a recoverable runtime state, and must not be silently patched up.

use thiserror::Error;

use crate::layout::canvas::{CanvasConfig, Rect};
use crate::layout::intent::{Alignment, LayoutIntent, LayoutMargins, PixelLayout, PlacedLine, Position};
use crate::layout::validator::validate_intent;

/// Hard failures in the layout core.
#[derive(Debug, Clone, Error)]
pub enum LayoutError {
    /// The translator received an intent that does not pass validation.
    #[error("intent failed validation: {0}")]
    UnvalidatedIntent(String),
}

/// Converts a validated intent into the renderer-facing pixel layout.
///
/// Validation is re-run here and an [`LayoutError::UnvalidatedIntent`] is
/// returned if it does not pass. Lines are walked top-to-bottom from
/// `zone.y + inner_padding`, each advancing the cursor by its own height plus
/// the dynamic gap, so the last line's bottom lands exactly on the padded
/// zone floor. Coordinates are rounded to whole pixels; style ranges pass
/// through untouched.
pub fn translate_intent(
    intent: &LayoutIntent,
    image: &Rect,
    config: &CanvasConfig,
) -> Result<PixelLayout, LayoutError> {
    let validation = validate_intent(intent, config);
    if !validation.ok {
        return Err(LayoutError::UnvalidatedIntent(
            validation.reasons.join("; "),
        ));
    }

    let computed = validation.computed;
    let zone = &intent.zone;

    let anchor_x = match intent.alignment {
        Alignment::Start => zone.x + computed.inner_padding,
        Alignment::Center => zone.x + zone.width / 2.0,
        Alignment::End => zone.x + zone.width - computed.inner_padding,
    };

    let mut cursor_y = zone.y + computed.inner_padding;
    let mut lines = Vec::with_capacity(intent.lines.len());

    for line in &intent.lines {
        lines.push(PlacedLine {
            text: line.text.clone(),
            font_size: line.font_size,
            position: Position {
                x: anchor_x.round() as i32,
                y: cursor_y.round() as i32,
            },
            alignment: intent.alignment,
            line_height_multiplier: config.line_height,
            max_width: computed.max_width,
            styles: line.styles.clone(),
        });
        cursor_y += line.font_size * config.line_height + computed.dynamic_gap;
    }

    Ok(PixelLayout {
        lines,
        image: *image,
        margins: LayoutMargins {
            outer: config.margin,
            clearance: config.clearance,
        },
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::default_canvas_config;
    use crate::layout::intent::{IntentLine, StyleRange};
    use crate::layout::zones::{SafeZone, ZoneId};

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

    fn make_line(text: &str, font_size: f32) -> IntentLine {
        IntentLine {
            text: text.to_string(),
            font_size,
            styles: vec![],
        }
    }

    fn make_image() -> Rect {
        Rect {
            x: 0.0,
            y: 1000.0,
            width: 1080.0,
            height: 440.0,
        }
    }

    // ── precondition ────────────────────────────────────────────────────────

    #[test]
    fn test_unvalidated_intent_is_a_hard_error() {
        let config = default_canvas_config();
        let intent = LayoutIntent {
            zone: make_zone(1000.0, 880.0),
            alignment: Alignment::Start,
            lines: vec![make_line("", 76.0)],
        };

        let err = translate_intent(&intent, &make_image(), &config);
        assert!(matches!(err, Err(LayoutError::UnvalidatedIntent(_))));
    }

    // ── placement ───────────────────────────────────────────────────────────

    #[test]
    fn test_start_alignment_anchors_at_padded_left_edge() {
        let config = default_canvas_config();
        let intent = LayoutIntent {
            zone: make_zone(1000.0, 880.0),
            alignment: Alignment::Start,
            lines: vec![make_line("A", 76.0), make_line("b", 48.0)],
        };

        let layout = translate_intent(&intent, &make_image(), &config).unwrap();
        assert_eq!(layout.lines.len(), 2);
        assert_eq!(layout.lines[0].position.x, 80); // 40 + 40 padding
        assert_eq!(layout.lines[0].position.y, 80);
        // second line: 80 + 76×1.2 + gap 651.2 = 822.4 → 822
        assert_eq!(layout.lines[1].position.y, 822);
    }

    #[test]
    fn test_center_and_end_anchors() {
        let config = default_canvas_config();
        let zone = make_zone(1000.0, 880.0);

        let centered = LayoutIntent {
            zone,
            alignment: Alignment::Center,
            lines: vec![make_line("A", 40.0)],
        };
        let layout = translate_intent(&centered, &make_image(), &config).unwrap();
        assert_eq!(layout.lines[0].position.x, 540); // 40 + 1000/2

        let ended = LayoutIntent {
            zone,
            alignment: Alignment::End,
            lines: vec![make_line("A", 40.0)],
        };
        let layout = translate_intent(&ended, &make_image(), &config).unwrap();
        assert_eq!(layout.lines[0].position.x, 1000); // 40 + 1000 − 40
        assert_eq!(layout.lines[0].alignment, Alignment::End);
    }

    #[test]
    fn test_lines_stay_inside_zone_vertically() {
        let config = default_canvas_config();
        let zone = make_zone(1000.0, 880.0);
        let intent = LayoutIntent {
            zone,
            alignment: Alignment::Start,
            lines: vec![
                make_line("one", 76.0),
                make_line("two", 48.0),
                make_line("three", 48.0),
            ],
        };

        let layout = translate_intent(&intent, &make_image(), &config).unwrap();
        let first = &layout.lines[0];
        assert!(first.position.y as f32 >= zone.y);

        for line in &layout.lines {
            let bottom = line.position.y as f32 + line.font_size * config.line_height;
            assert!(
                bottom <= zone.y + zone.height,
                "line bottom {bottom} exceeds zone floor {}",
                zone.y + zone.height
            );
        }
    }

    #[test]
    fn test_last_line_bottom_lands_on_padded_floor() {
        let config = default_canvas_config();
        let zone = make_zone(1000.0, 880.0);
        let intent = LayoutIntent {
            zone,
            alignment: Alignment::Start,
            lines: vec![make_line("head", 76.0), make_line("body", 48.0)],
        };

        let layout = translate_intent(&intent, &make_image(), &config).unwrap();
        let last = layout.lines.last().unwrap();
        let bottom = last.position.y as f32 + last.font_size * config.line_height;
        // zone floor minus padding = 40 + 880 − 40 = 880, within rounding.
        assert!((bottom - 880.0).abs() <= 1.0, "got {bottom}");
    }

    #[test]
    fn test_styles_and_image_pass_through() {
        let config = default_canvas_config();
        let styles = vec![StyleRange {
            start: 0,
            end: 4,
            font_weight: Some("bold".to_string()),
            font_style: None,
        }];
        let intent = LayoutIntent {
            zone: make_zone(1000.0, 880.0),
            alignment: Alignment::Start,
            lines: vec![IntentLine {
                text: "Bold lead".to_string(),
                font_size: 48.0,
                styles: styles.clone(),
            }],
        };

        let image = make_image();
        let layout = translate_intent(&intent, &image, &config).unwrap();
        assert_eq!(layout.lines[0].styles, styles);
        assert_eq!(layout.image, image);
        assert_eq!(layout.margins.outer, 40.0);
        assert_eq!(layout.margins.clearance, 80.0);
    }

    #[test]
    fn test_shared_max_width_on_every_line() {
        let config = default_canvas_config();
        let intent = LayoutIntent {
            zone: make_zone(1000.0, 880.0),
            alignment: Alignment::Start,
            lines: vec![make_line("a", 76.0), make_line("b", 48.0)],
        };

        let layout = translate_intent(&intent, &make_image(), &config).unwrap();
        assert!(layout.lines.iter().all(|l| l.max_width == 920.0));
    }
}
