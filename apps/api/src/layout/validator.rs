//! Intent validation — does a proposed arrangement physically fit its zone?
//!
//! Validation never fails hard. It returns structured, human-readable reasons
//! alongside the computed metrics, success or failure, so callers can compare
//! near-misses. The per-line capacity check is what guarantees the renderer's
//! non-wrapping text boxes never overflow or re-wrap — either of which would
//! desynchronize the vertical math.

use serde::{Deserialize, Serialize};

use crate::layout::canvas::CanvasConfig;
use crate::layout::intent::LayoutIntent;
use crate::layout::metrics::zone_metrics;

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// Metrics derived during validation. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedMetrics {
    pub max_width: f32,
    pub available_height: f32,
    pub total_line_heights: f32,
    /// The single inter-line spacing that makes lines plus gaps exactly fill
    /// the available height. May be negative here when validation fails —
    /// a validated intent never carries a negative gap.
    pub dynamic_gap: f32,
    pub total_lines: usize,
    pub inner_padding: f32,
}

/// Outcome of validating one intent against its zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub reasons: Vec<String>,
    pub computed: ComputedMetrics,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Checks whether an intent fits its zone without per-line wrapping and
/// without negative vertical spacing.
///
/// `ok` is true iff `reasons` is empty. Estimated line width uses the
/// average-character-width heuristic from `config`; a line is rejected when
/// the zone's character capacity at its font size is smaller than its
/// character count.
pub fn validate_intent(intent: &LayoutIntent, config: &CanvasConfig) -> ValidationResult {
    let metrics = zone_metrics(&intent.zone);
    let mut reasons: Vec<String> = Vec::new();

    if intent.lines.is_empty() {
        reasons.push("intent has no text lines".to_string());
    }

    let zone_too_narrow = metrics.max_width <= 0.0;
    if zone_too_narrow && !intent.lines.is_empty() {
        reasons.push("zone too narrow after padding".to_string());
    }

    let mut total_line_heights = 0.0_f32;

    for (index, line) in intent.lines.iter().enumerate() {
        let ordinal = index + 1;

        if line.text.is_empty() {
            reasons.push(format!("line {ordinal} is empty"));
        }

        if !(line.font_size.is_finite() && line.font_size > 0.0) {
            reasons.push(format!(
                "line {ordinal} font size {} is not a positive finite number",
                line.font_size
            ));
            continue;
        }

        total_line_heights += line.font_size * config.line_height;

        if !zone_too_narrow && !line.text.is_empty() {
            let capacity =
                (metrics.max_width / (line.font_size * config.char_width_ratio)).floor() as usize;
            let char_count = line.text.chars().count();
            if capacity < char_count {
                reasons.push(format!(
                    "line {ordinal} too long for max width: {char_count} chars > capacity {capacity}"
                ));
            }
        }
    }

    let total_lines = intent.lines.len();
    let leftover = metrics.available_height - total_line_heights;

    let dynamic_gap = if total_lines > 1 {
        leftover / (total_lines - 1) as f32
    } else {
        0.0
    };

    if !dynamic_gap.is_finite() {
        reasons.push("dynamic gap is not finite".to_string());
    } else if leftover < 0.0 {
        reasons.push("negative gap computed: lines are taller than the available height".to_string());
    }

    ValidationResult {
        ok: reasons.is_empty(),
        reasons,
        computed: ComputedMetrics {
            max_width: metrics.max_width,
            available_height: metrics.available_height,
            total_line_heights,
            dynamic_gap,
            total_lines,
            inner_padding: metrics.inner_padding,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::default_canvas_config;
    use crate::layout::intent::{Alignment, IntentLine};
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

    fn make_intent(zone: SafeZone, lines: Vec<IntentLine>) -> LayoutIntent {
        LayoutIntent {
            zone,
            alignment: Alignment::Start,
            lines,
        }
    }

    // ── success path ────────────────────────────────────────────────────────

    #[test]
    fn test_two_short_lines_in_wide_zone_validate() {
        let config = default_canvas_config();
        let intent = make_intent(
            make_zone(1000.0, 880.0),
            vec![make_line("Hello", 76.0), make_line("world", 48.0)],
        );

        let result = validate_intent(&intent, &config);
        assert!(result.ok, "unexpected reasons: {:?}", result.reasons);
        assert_eq!(result.computed.total_lines, 2);
        assert_eq!(result.computed.max_width, 920.0);
        assert_eq!(result.computed.available_height, 800.0);
        // 76×1.2 + 48×1.2 = 148.8; gap = (800 − 148.8) / 1
        assert!((result.computed.total_line_heights - 148.8).abs() < 1e-3);
        assert!((result.computed.dynamic_gap - 651.2).abs() < 1e-3);
    }

    #[test]
    fn test_lines_plus_gaps_exactly_fill_available_height() {
        let config = default_canvas_config();
        let intent = make_intent(
            make_zone(800.0, 600.0),
            vec![
                make_line("one", 40.0),
                make_line("two", 40.0),
                make_line("three", 30.0),
            ],
        );

        let result = validate_intent(&intent, &config);
        assert!(result.ok, "unexpected reasons: {:?}", result.reasons);

        let refilled = result.computed.total_line_heights
            + result.computed.dynamic_gap * (result.computed.total_lines - 1) as f32;
        assert!(
            (refilled - result.computed.available_height).abs() < 1e-3,
            "lines + gaps must exactly fill the zone: {refilled} vs {}",
            result.computed.available_height
        );
    }

    #[test]
    fn test_single_line_gap_is_zero() {
        let config = default_canvas_config();
        let intent = make_intent(make_zone(1000.0, 400.0), vec![make_line("Solo", 60.0)]);

        let result = validate_intent(&intent, &config);
        assert!(result.ok, "unexpected reasons: {:?}", result.reasons);
        assert_eq!(result.computed.dynamic_gap, 0.0);
    }

    // ── rejection reasons ───────────────────────────────────────────────────

    #[test]
    fn test_empty_intent_rejected() {
        let config = default_canvas_config();
        let intent = make_intent(make_zone(1000.0, 880.0), vec![]);

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert!(result.reasons.iter().any(|r| r.contains("no text lines")));
        assert_eq!(result.computed.total_lines, 0);
    }

    #[test]
    fn test_empty_line_rejected_with_ordinal() {
        let config = default_canvas_config();
        let intent = make_intent(
            make_zone(1000.0, 880.0),
            vec![make_line("ok", 40.0), make_line("", 40.0)],
        );

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert!(result.reasons.iter().any(|r| r == "line 2 is empty"));
    }

    #[test]
    fn test_nonfinite_and_nonpositive_font_sizes_rejected() {
        let config = default_canvas_config();
        for bad in [0.0, -12.0, f32::NAN, f32::INFINITY] {
            let intent = make_intent(make_zone(1000.0, 880.0), vec![make_line("text", bad)]);
            let result = validate_intent(&intent, &config);
            assert!(!result.ok, "font size {bad} should be rejected");
            assert!(result
                .reasons
                .iter()
                .any(|r| r.contains("font size") && r.starts_with("line 1")));
        }
    }

    #[test]
    fn test_line_exceeding_capacity_rejected() {
        let config = default_canvas_config();
        // max_width 920; at 76px the capacity is floor(920 / 42.56) = 21 chars.
        let text = "x".repeat(22);
        let intent = make_intent(make_zone(1000.0, 880.0), vec![make_line(&text, 76.0)]);

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("too long for max width")));
    }

    #[test]
    fn test_line_at_exact_capacity_validates() {
        let config = default_canvas_config();
        let text = "x".repeat(21);
        let intent = make_intent(make_zone(1000.0, 880.0), vec![make_line(&text, 76.0)]);

        let result = validate_intent(&intent, &config);
        assert!(result.ok, "unexpected reasons: {:?}", result.reasons);
    }

    #[test]
    fn test_overfull_zone_reports_negative_gap() {
        let config = default_canvas_config();
        // available_height = 200 − 80 = 120; two 60px lines need 144.
        let intent = make_intent(
            make_zone(1000.0, 200.0),
            vec![make_line("one", 60.0), make_line("two", 60.0)],
        );

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("negative gap computed")));
        assert!(result.computed.dynamic_gap < 0.0, "raw gap is reported");
    }

    #[test]
    fn test_single_line_taller_than_zone_rejected() {
        let config = default_canvas_config();
        // available_height = 140 − 80 = 60; one 60px line needs 72.
        let intent = make_intent(make_zone(1000.0, 140.0), vec![make_line("big", 60.0)]);

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert_eq!(result.computed.dynamic_gap, 0.0);
    }

    #[test]
    fn test_zone_narrower_than_padding_rejected() {
        let config = default_canvas_config();
        // width 30 < 2 × 20 padding → max_width < 0.
        let intent = make_intent(make_zone(30.0, 500.0), vec![make_line("text", 22.0)]);

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert!(result
            .reasons
            .iter()
            .any(|r| r == "zone too narrow after padding"));
    }

    #[test]
    fn test_computed_metrics_populated_on_failure() {
        let config = default_canvas_config();
        let intent = make_intent(make_zone(299.0, 500.0), vec![]);

        let result = validate_intent(&intent, &config);
        assert!(!result.ok);
        assert_eq!(result.computed.inner_padding, 20.0);
        assert_eq!(result.computed.max_width, 259.0);
        assert_eq!(result.computed.available_height, 460.0);
    }
}
