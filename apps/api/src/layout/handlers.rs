//! Axum route handlers for the Layout API.
//!
//! The layout core is pure and CPU-bound, so ranking runs inside
//! `tokio::task::spawn_blocking`. The remote advisor, when configured, is
//! tried first; its candidate has already passed the Intent Validator by the
//! time it reaches this module, and any advisor failure falls back to the
//! deterministic path.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::emphasis::annotate_emphasis;
use crate::errors::AppError;
use crate::layout::canvas::Rect;
use crate::layout::fitter::FitFailure;
use crate::layout::intent::{LayoutIntent, PixelLayout};
use crate::layout::ranker::rank_zones;
use crate::layout::translator::translate_intent;
use crate::layout::validator::{validate_intent, ValidationResult};
use crate::layout::zones::{compute_safe_zones, select_zone, SafeZone, ZoneId};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ZonesRequest {
    pub image: Rect,
}

#[derive(Debug, Serialize)]
pub struct ZonesResponse {
    pub zones: Vec<SafeZone>,
    pub selected: Option<SafeZone>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub intent: LayoutIntent,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub result: ValidationResult,
}

#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    pub image: Rect,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub body: String,
}

/// Which strategy produced the final arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeStrategy {
    RemoteAdvisor,
    DeterministicFitter,
}

#[derive(Debug, Serialize)]
pub struct RankedZoneSummary {
    pub zone_id: ZoneId,
    pub score: f32,
    pub iterations: u32,
}

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub layout_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub strategy: ComposeStrategy,
    pub layout: PixelLayout,
    /// Every zone the fitter ranked, best first (empty on the advisor path).
    pub ranked_zones: Vec<RankedZoneSummary>,
    /// Zones the fitter could not fill, with reasons.
    pub failed_zones: Vec<FitFailure>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout/zones
///
/// Returns the candidate safe zones around an image, plus the selector's
/// pick. An empty list is a valid outcome, not an error.
pub async fn handle_zones(
    State(state): State<AppState>,
    Json(request): Json<ZonesRequest>,
) -> Result<Json<ZonesResponse>, AppError> {
    let zones = compute_safe_zones(&request.image, &state.canvas);
    let selected = select_zone(&zones);
    Ok(Json(ZonesResponse { zones, selected }))
}

/// POST /api/v1/layout/validate
///
/// Runs the Intent Validator on a caller-supplied intent. Always 200 — a
/// failed validation is data, not an HTTP error.
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let result = validate_intent(&request.intent, &state.canvas);
    Ok(Json(ValidateResponse { result }))
}

/// POST /api/v1/layout/compose
///
/// The full pipeline: zones → advisor or ranker → validate → translate →
/// best-effort emphasis → pixel layout.
pub async fn handle_compose(
    State(state): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, AppError> {
    if request.headline.trim().is_empty() && request.body.trim().is_empty() {
        return Err(AppError::Validation(
            "headline and body cannot both be empty".to_string(),
        ));
    }

    let zones = compute_safe_zones(&request.image, &state.canvas);
    if zones.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "image leaves no room for text".to_string(),
        ));
    }

    let (intent, strategy, ranked_zones, failed_zones) =
        produce_arrangement(&state, &request, &zones).await?;

    let mut layout = translate_intent(&intent, &request.image, &state.canvas)?;

    if let Some(llm) = &state.llm {
        annotate_emphasis(&mut layout.lines, llm).await;
    }

    info!(
        strategy = ?strategy,
        zone = ?intent.zone.id,
        lines = layout.lines.len(),
        "layout composed"
    );

    Ok(Json(ComposeResponse {
        layout_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        strategy,
        layout,
        ranked_zones,
        failed_zones,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Arrangement production
// ────────────────────────────────────────────────────────────────────────────

/// Tries the remote advisor against the selector's zone, then falls back to
/// ranking every zone with the deterministic fitter.
async fn produce_arrangement(
    state: &AppState,
    request: &ComposeRequest,
    zones: &[SafeZone],
) -> Result<
    (
        LayoutIntent,
        ComposeStrategy,
        Vec<RankedZoneSummary>,
        Vec<FitFailure>,
    ),
    AppError,
> {
    if let (Some(advisor), Some(zone)) = (&state.advisor, select_zone(zones)) {
        match advisor
            .produce_intent(&request.headline, &request.body, &zone)
            .await
        {
            Ok(intent) => {
                return Ok((intent, ComposeStrategy::RemoteAdvisor, vec![], vec![]));
            }
            Err(error) => {
                warn!("remote advisor unusable, falling back to fitter: {error}");
            }
        }
    }

    // CPU-bound ranking pass — keep it off the async executor.
    let headline = request.headline.clone();
    let body = request.body.clone();
    let zones_snapshot = zones.to_vec();
    let canvas = state.canvas.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        rank_zones(&headline, &body, &zones_snapshot, &canvas)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}")))?;

    let summaries: Vec<RankedZoneSummary> = outcome
        .ranked
        .iter()
        .map(|ranked| RankedZoneSummary {
            zone_id: ranked.zone.id,
            score: ranked.score,
            iterations: ranked.fit.iterations,
        })
        .collect();

    match outcome.best {
        Some(best) => Ok((
            best.fit.intent,
            ComposeStrategy::DeterministicFitter,
            summaries,
            outcome.failures,
        )),
        None => {
            let reasons = outcome
                .failures
                .iter()
                .map(|failure| format!("{:?}: {}", failure.zone_id, failure.reason))
                .collect::<Vec<_>>()
                .join("; ");
            Err(AppError::UnprocessableEntity(format!(
                "text does not fit any zone ({reasons})"
            )))
        }
    }
}
