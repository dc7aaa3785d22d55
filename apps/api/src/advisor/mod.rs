//! Arrangement advisor strategies.
#![allow(dead_code)]
//!
//! `ArrangementAdvisor` is the seam between the layout pipeline and whatever
//! proposes a text arrangement for a zone. Two implementations exist: a
//! remote, LLM-backed advisor with a bounded deadline, and the purely local
//! deterministic fitter. Both funnel their candidates through the same Intent
//! Validator — a remote proposal is never consumed unvalidated, and any
//! remote failure falls back to the local strategy, which always terminates.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::layout::canvas::CanvasConfig;
use crate::layout::fitter::{fit_text_to_zone, FitOutcome};
use crate::layout::intent::{Alignment, IntentLine, LayoutIntent};
use crate::layout::metrics::zone_metrics;
use crate::layout::validator::validate_intent;
use crate::layout::zones::SafeZone;
use crate::llm_client::{LlmClient, LlmError};

pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Strategy trait
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("advisor deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("advisor candidate failed validation: {0}")]
    InvalidCandidate(String),

    #[error("no arrangement found: {0}")]
    NoArrangement(String),
}

/// Produces a candidate arrangement for raw text in a zone.
#[async_trait]
pub trait ArrangementAdvisor: Send + Sync {
    async fn produce_intent(
        &self,
        headline: &str,
        body: &str,
        zone: &SafeZone,
    ) -> Result<LayoutIntent, AdvisorError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Remote (LLM-backed) advisor
// ────────────────────────────────────────────────────────────────────────────

/// Intermediate type for deserializing the advisor's JSON response.
#[derive(Debug, Deserialize)]
struct AdvisorPayload {
    #[serde(default = "default_alignment")]
    alignment: Alignment,
    lines: Vec<PayloadLine>,
}

#[derive(Debug, Deserialize)]
struct PayloadLine {
    text: String,
    font_size: f32,
}

fn default_alignment() -> Alignment {
    Alignment::Start
}

/// Asks the LLM for an arrangement, then validates it locally before
/// returning. The candidate is advisory only — an invalid one is an error
/// here, and the caller falls back to the deterministic strategy.
pub struct RemoteAdvisor {
    llm: LlmClient,
    canvas: CanvasConfig,
    deadline: Duration,
}

impl RemoteAdvisor {
    pub fn new(llm: LlmClient, canvas: CanvasConfig, deadline: Duration) -> Self {
        Self {
            llm,
            canvas,
            deadline,
        }
    }
}

#[async_trait]
impl ArrangementAdvisor for RemoteAdvisor {
    async fn produce_intent(
        &self,
        headline: &str,
        body: &str,
        zone: &SafeZone,
    ) -> Result<LayoutIntent, AdvisorError> {
        let prompt = build_advisor_prompt(headline, body, zone);

        let payload: AdvisorPayload = tokio::time::timeout(
            self.deadline,
            self.llm.call_json(&prompt, prompts::ADVISOR_SYSTEM),
        )
        .await
        .map_err(|_| AdvisorError::DeadlineExceeded(self.deadline))??;

        let intent = LayoutIntent {
            zone: *zone,
            alignment: payload.alignment,
            lines: payload
                .lines
                .into_iter()
                .map(|line| IntentLine {
                    text: line.text,
                    font_size: line.font_size,
                    styles: vec![],
                })
                .collect(),
        };

        let validation = validate_intent(&intent, &self.canvas);
        if !validation.ok {
            return Err(AdvisorError::InvalidCandidate(
                validation.reasons.join("; "),
            ));
        }

        debug!(
            zone = ?zone.id,
            lines = intent.lines.len(),
            "remote advisor produced a valid arrangement"
        );
        Ok(intent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local (deterministic) advisor
// ────────────────────────────────────────────────────────────────────────────

/// The always-available fallback: wraps the deterministic text fitter behind
/// the same strategy interface. Has no external dependency and always
/// terminates.
pub struct DeterministicAdvisor {
    canvas: CanvasConfig,
}

impl DeterministicAdvisor {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }
}

#[async_trait]
impl ArrangementAdvisor for DeterministicAdvisor {
    async fn produce_intent(
        &self,
        headline: &str,
        body: &str,
        zone: &SafeZone,
    ) -> Result<LayoutIntent, AdvisorError> {
        match fit_text_to_zone(headline, body, zone, &self.canvas) {
            FitOutcome::Fitted(fit) => Ok(fit.intent),
            FitOutcome::Exhausted(failure) => Err(AdvisorError::NoArrangement(failure.reason)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builder
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn build_advisor_prompt(headline: &str, body: &str, zone: &SafeZone) -> String {
    let metrics = zone_metrics(zone);
    prompts::ADVISOR_PROMPT_TEMPLATE
        .replace("{headline}", headline)
        .replace("{body}", body)
        .replace("{zone_id}", &format!("{:?}", zone.id).to_uppercase())
        .replace("{zone_width}", &format!("{:.0}", zone.width))
        .replace("{zone_height}", &format!("{:.0}", zone.height))
        .replace("{max_width}", &format!("{:.0}", metrics.max_width))
        .replace("{available_height}", &format!("{:.0}", metrics.available_height))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
