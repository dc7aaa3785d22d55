//! Zone ranking — the fitter run against every candidate zone, scored.
//!
//! Legibility (font size) dominates the score, followed by breathing room and
//! raw area, with a mild editorial bias toward top/bottom placement and a
//! penalty for unusably narrow columns.

use serde::{Deserialize, Serialize};

use crate::layout::canvas::CanvasConfig;
use crate::layout::fitter::{fit_text_to_zone, FitFailure, FitOutcome, FitSuccess};
use crate::layout::zones::{SafeZone, ZoneId};

const FONT_WEIGHT: f32 = 1000.0;
const GAP_WEIGHT: f32 = 20.0;
const AREA_DIVISOR: f32 = 1000.0;
const TOP_BOTTOM_BONUS: f32 = 150.0;
const NARROW_PENALTY: f32 = -200.0;
const TIGHT_PENALTY: f32 = -80.0;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// One successfully fitted zone with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFit {
    pub zone: SafeZone,
    pub fit: FitSuccess,
    pub score: f32,
}

/// The full ranking outcome: the winner, every ranked candidate for
/// diagnostics, and every zone that failed to fit with its reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOutcome {
    pub best: Option<RankedFit>,
    pub ranked: Vec<RankedFit>,
    pub failures: Vec<FitFailure>,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Runs the deterministic fitter against every candidate zone and ranks the
/// successes. Per-zone failures are aggregated, never discarded: when every
/// zone fails the caller gets the full set of reasons for diagnosis.
pub fn rank_zones(
    headline: &str,
    body: &str,
    zones: &[SafeZone],
    config: &CanvasConfig,
) -> RankOutcome {
    let mut ranked: Vec<RankedFit> = Vec::new();
    let mut failures: Vec<FitFailure> = Vec::new();

    for zone in zones {
        match fit_text_to_zone(headline, body, zone, config) {
            FitOutcome::Fitted(fit) => {
                let score = score_fit(zone, &fit);
                ranked.push(RankedFit {
                    zone: *zone,
                    fit,
                    score,
                });
            }
            FitOutcome::Exhausted(failure) => failures.push(failure),
        }
    }

    // Stable sort: first-seen order breaks score ties.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    RankOutcome {
        best: ranked.first().cloned(),
        ranked,
        failures,
    }
}

/// `avg_font×1000 + gap×20 + area/1000 + zone bonus + width penalty`.
fn score_fit(zone: &SafeZone, fit: &FitSuccess) -> f32 {
    let line_count = fit.intent.lines.len();
    let avg_font_size = if line_count == 0 {
        0.0
    } else {
        fit.intent.lines.iter().map(|l| l.font_size).sum::<f32>() / line_count as f32
    };

    let zone_bonus = match zone.id {
        ZoneId::Top | ZoneId::Bottom => TOP_BOTTOM_BONUS,
        ZoneId::Left | ZoneId::Right => 0.0,
    };

    let width_penalty = if zone.width < 260.0 {
        NARROW_PENALTY
    } else if zone.width < 350.0 {
        TIGHT_PENALTY
    } else {
        0.0
    };

    avg_font_size * FONT_WEIGHT
        + fit.computed.dynamic_gap * GAP_WEIGHT
        + zone.area / AREA_DIVISOR
        + zone_bonus
        + width_penalty
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
