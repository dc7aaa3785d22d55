//! Best-effort emphasis annotation.
//!
//! Runs after translation, on finalized line text only, and never influences
//! line breaking, font size, or positioning. Any failure — LLM error, bad
//! JSON, out-of-bounds ranges — degrades to unstyled lines; nothing here is
//! fatal to a compose request.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::layout::intent::{PlacedLine, StyleRange};
use crate::llm_client::LlmClient;

pub mod prompts;

/// Intermediate type for deserializing the annotator's JSON response.
#[derive(Debug, Deserialize)]
struct EmphasisPayload {
    lines: Vec<AnnotatedLine>,
}

#[derive(Debug, Deserialize)]
struct AnnotatedLine {
    index: usize,
    #[serde(default)]
    ranges: Vec<RawRange>,
}

#[derive(Debug, Deserialize)]
struct RawRange {
    start: usize,
    end: usize,
    font_weight: Option<String>,
    font_style: Option<String>,
}

/// Annotates placed lines with bold/italic ranges, in place.
///
/// Unknown line indices and invalid ranges are dropped silently; an LLM
/// failure leaves every line unstyled.
pub async fn annotate_emphasis(lines: &mut [PlacedLine], llm: &LlmClient) {
    if lines.is_empty() {
        return;
    }

    let prompt = build_emphasis_prompt(lines);
    let payload: EmphasisPayload = match llm.call_json(&prompt, prompts::EMPHASIS_SYSTEM).await {
        Ok(payload) => payload,
        Err(error) => {
            warn!("emphasis annotation skipped: {error}");
            return;
        }
    };

    let mut applied = 0usize;
    for annotated in payload.lines {
        let Some(line) = lines.get_mut(annotated.index) else {
            continue;
        };
        let ranges = sanitize_ranges(&line.text, annotated.ranges);
        applied += ranges.len();
        line.styles = ranges;
    }
    debug!(ranges = applied, "emphasis annotation applied");
}

pub(crate) fn build_emphasis_prompt(lines: &[PlacedLine]) -> String {
    let numbered = lines
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{index}: {}", line.text))
        .collect::<Vec<_>>()
        .join("\n");
    prompts::EMPHASIS_PROMPT_TEMPLATE.replace("{numbered_lines}", &numbered)
}

/// Keeps only ranges that are well-formed for this text: non-empty, in
/// bounds, and carrying at least one style attribute.
fn sanitize_ranges(text: &str, ranges: Vec<RawRange>) -> Vec<StyleRange> {
    let char_count = text.chars().count();
    ranges
        .into_iter()
        .filter(|range| {
            range.start < range.end
                && range.end <= char_count
                && (range.font_weight.is_some() || range.font_style.is_some())
        })
        .map(|range| StyleRange {
            start: range.start,
            end: range.end,
            font_weight: range.font_weight,
            font_style: range.font_style,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::intent::{Alignment, Position};

    fn make_line(text: &str) -> PlacedLine {
        PlacedLine {
            text: text.to_string(),
            font_size: 48.0,
            position: Position { x: 80, y: 80 },
            alignment: Alignment::Start,
            line_height_multiplier: 1.2,
            max_width: 920.0,
            styles: vec![],
        }
    }

    fn make_range(start: usize, end: usize) -> RawRange {
        RawRange {
            start,
            end,
            font_weight: Some("bold".to_string()),
            font_style: None,
        }
    }

    // ── sanitize_ranges ─────────────────────────────────────────────────────

    #[test]
    fn test_valid_range_is_kept() {
        let kept = sanitize_ranges("Hello world", vec![make_range(0, 5)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].start, 0);
        assert_eq!(kept[0].end, 5);
    }

    #[test]
    fn test_out_of_bounds_range_is_dropped() {
        let kept = sanitize_ranges("Hello", vec![make_range(0, 6)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_inverted_and_empty_ranges_are_dropped() {
        let kept = sanitize_ranges("Hello", vec![make_range(3, 3), make_range(4, 2)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_range_without_any_style_is_dropped() {
        let bare = RawRange {
            start: 0,
            end: 3,
            font_weight: None,
            font_style: None,
        };
        assert!(sanitize_ranges("Hello", vec![bare]).is_empty());
    }

    #[test]
    fn test_range_bound_uses_character_count_not_bytes() {
        // "héllo" is 5 characters but 6 bytes.
        let kept = sanitize_ranges("héllo", vec![make_range(0, 5)]);
        assert_eq!(kept.len(), 1);
    }

    // ── prompt builder ──────────────────────────────────────────────────────

    #[test]
    fn test_prompt_numbers_every_line() {
        let lines = vec![make_line("First line"), make_line("Second line")];
        let prompt = build_emphasis_prompt(&lines);
        assert!(prompt.contains("0: First line"));
        assert!(prompt.contains("1: Second line"));
    }

    // ── payload parsing ─────────────────────────────────────────────────────

    #[test]
    fn test_payload_ranges_default_empty() {
        let payload: EmphasisPayload =
            serde_json::from_str(r#"{"lines": [{"index": 0}]}"#).unwrap();
        assert!(payload.lines[0].ranges.is_empty());
    }
}
