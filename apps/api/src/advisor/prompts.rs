//! LLM prompt constants for the remote arrangement advisor.
//!
//! The prompt teaches the model the same fit rules the Intent Validator
//! enforces, but the validator remains the gate: a candidate that breaks a
//! rule is rejected, never patched.

pub const ADVISOR_SYSTEM: &str = "\
You are a typographic layout advisor. Given a headline, body copy, and one \
rectangular text zone, you propose how to break the text into single lines \
and what font size each line gets. Lines are never re-wrapped downstream, so \
every line you emit must fit its zone at the size you choose.\n\
\n\
Respond with valid JSON only: \
{\"alignment\": \"start\", \"lines\": [{\"text\": \"...\", \"font_size\": 48}]}\n\
Do NOT use markdown code fences. Do NOT add any explanation outside the JSON object.";

pub const ADVISOR_PROMPT_TEMPLATE: &str = "\
Arrange this text inside one rectangular zone of a 1080x1440 poster canvas.\n\
\n\
HEADLINE: {headline}\n\
BODY: {body}\n\
ZONE: {zone_id}, {zone_width}x{zone_height}px\n\
USABLE WIDTH: {max_width}px\n\
USABLE HEIGHT: {available_height}px\n\
\n\
HARD RULES (violations are rejected):\n\
1. Every line is a single non-wrapping unit. A line at font size F may hold at \
most floor({max_width} / (F * 0.56)) characters.\n\
2. The sum of (font_size * 1.2) over all lines must not exceed {available_height}.\n\
3. Use one font size for all headline lines and one smaller size for all body \
lines. No line may be empty.\n\
4. alignment must be \"start\", \"center\", or \"end\".\n\
5. Cover the full headline and body text — do not drop or reword anything.\n\
\n\
Return JSON only: {\"alignment\": \"...\", \"lines\": [{\"text\": \"...\", \"font_size\": 0}]}";
