//! Deterministic text fitter — raw headline/body strings to a validated
//! intent, with no external dependency.
//!
//! The fitter picks base font sizes from a step table keyed on zone width,
//! then iteratively shrinks and greedily re-wraps until the arrangement
//! validates. Identical inputs always produce identical output: no randomness,
//! no hidden state, and every loop is bounded.

use serde::{Deserialize, Serialize};

use crate::layout::canvas::CanvasConfig;
use crate::layout::intent::{Alignment, IntentLine, LayoutIntent};
use crate::layout::metrics::zone_metrics;
use crate::layout::validator::{validate_intent, ComputedMetrics};
use crate::layout::zones::{SafeZone, ZoneId};

const MAX_ITERATIONS: u32 = 14;
const SHRINK_FACTOR: f32 = 0.92;
const MIN_HEADLINE_FONT: f32 = 22.0;
const MIN_BODY_FONT: f32 = 18.0;
/// Guards against pathological line explosion at tiny fonts in narrow zones.
const MAX_WRAPPED_LINES: usize = 28;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Base headline/body font sizes for a zone-width bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FontPair {
    headline: f32,
    body: f32,
}

/// A fitted arrangement, already validated against its zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSuccess {
    pub intent: LayoutIntent,
    pub computed: ComputedMetrics,
    /// Number of shrink iterations consumed (1 = base fonts fit unshrunk).
    pub iterations: u32,
}

/// The fitter ran out of iterations for this zone. An expected, recoverable
/// outcome — the ranker simply tries other zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitFailure {
    pub zone_id: ZoneId,
    pub reason: String,
}

/// Outcome of one fitter run against one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FitOutcome {
    Fitted(FitSuccess),
    Exhausted(FitFailure),
}

// ────────────────────────────────────────────────────────────────────────────
// Fitting
// ────────────────────────────────────────────────────────────────────────────

/// Produces a validated intent for raw headline/body text in a zone.
///
/// Up to 14 iterations of `scale = 0.92^i`, flooring at 22px headline / 18px
/// body. Each iteration wraps both strings at the zone's character budget and
/// validates the resulting intent; the first iteration that validates wins.
/// Alignment is always `start`. Exhausting the budget yields a tagged
/// [`FitOutcome::Exhausted`], never an error.
pub fn fit_text_to_zone(
    headline: &str,
    body: &str,
    zone: &SafeZone,
    config: &CanvasConfig,
) -> FitOutcome {
    let headline_words: Vec<&str> = headline.split_whitespace().collect();
    let body_words: Vec<&str> = body.split_whitespace().collect();

    if headline_words.is_empty() && body_words.is_empty() {
        return FitOutcome::Exhausted(FitFailure {
            zone_id: zone.id,
            reason: "no text to place".to_string(),
        });
    }

    let base = base_fonts_for_width(zone.width);
    let metrics = zone_metrics(zone);
    let mut last_reason = String::new();

    for iteration in 0..MAX_ITERATIONS {
        let scale = SHRINK_FACTOR.powi(iteration as i32);
        let headline_font = (base.headline * scale).round().max(MIN_HEADLINE_FONT);
        let body_font = (base.body * scale).round().max(MIN_BODY_FONT);

        let mut lines: Vec<IntentLine> = Vec::new();
        let mut budget_exhausted = false;

        for (words, font_size) in [(&headline_words, headline_font), (&body_words, body_font)] {
            if words.is_empty() {
                continue;
            }
            let budget = char_budget(metrics.max_width, font_size, config);
            if budget == 0 {
                budget_exhausted = true;
                break;
            }
            for text in wrap_words(words, budget) {
                lines.push(IntentLine {
                    text,
                    font_size,
                    styles: vec![],
                });
            }
        }

        if budget_exhausted {
            last_reason = "zone too narrow for any character".to_string();
            continue;
        }

        if lines.len() > MAX_WRAPPED_LINES {
            last_reason = format!(
                "{} wrapped lines exceed the cap of {MAX_WRAPPED_LINES}",
                lines.len()
            );
            continue;
        }

        let intent = LayoutIntent {
            zone: *zone,
            alignment: Alignment::Start,
            lines,
        };
        let validation = validate_intent(&intent, config);
        if validation.ok {
            return FitOutcome::Fitted(FitSuccess {
                intent,
                computed: validation.computed,
                iterations: iteration + 1,
            });
        }
        last_reason = validation.reasons.join("; ");
    }

    FitOutcome::Exhausted(FitFailure {
        zone_id: zone.id,
        reason: format!("no valid arrangement after {MAX_ITERATIONS} iterations: {last_reason}"),
    })
}

/// Base font sizes by zone width. Narrow zones start small so the shrink loop
/// has room to converge instead of burning iterations.
fn base_fonts_for_width(width: f32) -> FontPair {
    if width < 260.0 {
        FontPair {
            headline: 34.0,
            body: 22.0,
        }
    } else if width < 350.0 {
        FontPair {
            headline: 44.0,
            body: 26.0,
        }
    } else if width < 500.0 {
        FontPair {
            headline: 54.0,
            body: 32.0,
        }
    } else if width < 700.0 {
        FontPair {
            headline: 64.0,
            body: 40.0,
        }
    } else {
        FontPair {
            headline: 76.0,
            body: 48.0,
        }
    }
}

/// Characters that fit on one line at the given font size, via the same
/// heuristic the validator applies.
fn char_budget(max_width: f32, font_size: f32, config: &CanvasConfig) -> usize {
    let width_per_char = font_size * config.char_width_ratio;
    if max_width <= 0.0 || width_per_char <= 0.0 {
        return 0;
    }
    (max_width / width_per_char).floor() as usize
}

// ────────────────────────────────────────────────────────────────────────────
// Greedy wrapping
// ────────────────────────────────────────────────────────────────────────────

/// Packs words left-to-right into lines of at most `budget` characters.
///
/// Words longer than the budget are force-hyphenated first so every fragment
/// is guaranteed to fit on a line of its own.
fn wrap_words(words: &[&str], budget: usize) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    for word in words {
        if word.chars().count() > budget {
            fragments.extend(hyphenate(word, budget));
        } else {
            fragments.push((*word).to_string());
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for fragment in fragments {
        let fragment_chars = fragment.chars().count();
        if current.is_empty() {
            current = fragment;
            current_chars = fragment_chars;
        } else if current_chars + 1 + fragment_chars <= budget {
            current.push(' ');
            current.push_str(&fragment);
            current_chars += 1 + fragment_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current = fragment;
            current_chars = fragment_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits an over-budget word into fixed-size chunks, each marked with a
/// trailing hyphen except the last. A budget of 1 degrades to bare single
/// characters, since a hyphen would itself blow the budget.
fn hyphenate(word: &str, budget: usize) -> Vec<String> {
    let chunk_len = if budget >= 2 { budget - 1 } else { 1 };
    let chars: Vec<char> = word.chars().collect();
    let mut chunks: Vec<String> = chars
        .chunks(chunk_len)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect();

    if budget >= 2 {
        let last = chunks.len() - 1;
        for chunk in &mut chunks[..last] {
            chunk.push('-');
        }
    }
    chunks
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
