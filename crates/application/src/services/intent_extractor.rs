//! Intent extraction - First pipeline stage
//!
//! Turns a free-text weather query into a structured [`QueryIntent`] via a
//! low-temperature language model call. This stage never fails outward:
//! transport errors and unparseable replies both resolve to the fallback
//! intent.

use std::{fmt, sync::Arc};

use domain::{QueryIntent, RelativeDay};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::ports::InferencePort;

/// Sampling temperature for extraction calls (low, for structured output)
const EXTRACTION_TEMPERATURE: f32 = 0.3;

/// Shape of the JSON object the model is asked to return
#[derive(Debug, Deserialize)]
struct RawIntent {
    location: String,
    time: String,
    #[serde(default)]
    concerns: Vec<String>,
}

/// Service turning free-text queries into structured intents
pub struct IntentExtractor {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for IntentExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentExtractor").finish_non_exhaustive()
    }
}

impl IntentExtractor {
    /// Create a new intent extractor
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Extract a structured intent from a user query
    ///
    /// Call and parse failures are logged and resolve to
    /// [`QueryIntent::fallback`], so this always returns an intent.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn extract(&self, query: &str) -> QueryIntent {
        let prompt = Self::build_prompt(query);

        let response = match self.inference.complete(&prompt, EXTRACTION_TEMPERATURE).await {
            Ok(result) => {
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = result.latency_ms,
                    "Extraction reply received"
                );
                result.content
            },
            Err(e) => {
                warn!(error = %e, "Intent extraction call failed, using fallback intent");
                return QueryIntent::fallback();
            },
        };

        match Self::parse_intent(&response) {
            Some(intent) => {
                debug!(location = %intent.location, day = %intent.day, "Intent extracted");
                intent
            },
            None => {
                warn!(response = %response, "Unparseable intent reply, using fallback intent");
                QueryIntent::fallback()
            },
        }
    }

    /// Build the extraction prompt for a query
    fn build_prompt(query: &str) -> String {
        format!(
            "分析以下用户查询，提取关键信息：\n\
             查询：{query}\n\n\
             请以JSON格式返回以下信息：\n\
             - location: 地点\n\
             - time: 时间（今天/明天/后天）\n\
             - concerns: 用户关心的天气要素（如：温度、降水、风力等）"
        )
    }

    /// Parse the model reply into an intent
    ///
    /// Tries a strict parse of the whole reply first, then of the
    /// brace-delimited substring. Returns `None` when neither is valid JSON
    /// with the expected keys. Unrecognized `time` values resolve to today.
    fn parse_intent(response: &str) -> Option<QueryIntent> {
        let raw: RawIntent = serde_json::from_str(response.trim())
            .ok()
            .or_else(|| {
                Self::extract_braced(response).and_then(|json| serde_json::from_str(json).ok())
            })?;

        let day: RelativeDay = raw.time.parse().unwrap_or_default();
        Some(QueryIntent::new(raw.location, day).with_concerns(raw.concerns))
    }

    /// Substring spanning the first `{` to the last `}` of the reply
    ///
    /// Recovers JSON embedded in prose or markdown code fences.
    fn extract_braced(response: &str) -> Option<&str> {
        let start = response.find('{')?;
        let end = response.rfind('}')?;
        (start <= end).then(|| &response[start..=end])
    }
}
