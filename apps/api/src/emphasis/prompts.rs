//! LLM prompt constants for emphasis annotation.

pub const EMPHASIS_SYSTEM: &str = "\
You annotate finished poster text with bold/italic emphasis. You never change \
the text itself — you only mark character ranges inside each line. Emphasis \
should be sparse: a key phrase, a number, a name. Most lines get no ranges.\n\
\n\
Respond with valid JSON only: \
{\"lines\": [{\"index\": 0, \"ranges\": [{\"start\": 0, \"end\": 4, \"font_weight\": \"bold\"}]}]}\n\
Do NOT use markdown code fences. Do NOT add any explanation outside the JSON object.";

pub const EMPHASIS_PROMPT_TEMPLATE: &str = "\
Mark emphasis ranges for these poster lines. Ranges are half-open [start, end) \
character offsets into the line's own text. Each range may carry \
\"font_weight\": \"bold\" and/or \"font_style\": \"italic\".\n\
\n\
LINES:\n\
{numbered_lines}\n\
\n\
RULES:\n\
1. Do not rewrite, trim, or reorder any line — annotate only.\n\
2. At most one range per line; omit lines that need no emphasis.\n\
3. Offsets must lie within the line's character count.\n\
\n\
Return JSON only: {\"lines\": [{\"index\": 0, \"ranges\": []}]}";
