//! Response synthesis - Final pipeline stage
//!
//! Renders the selected forecast into the localized summary, embeds it in
//! the synthesis prompt, and asks the language model for a short
//! recommendation. Error inputs and model failures resolve to fixed
//! apology strings.

use std::{fmt, sync::Arc};

use domain::{DayForecast, QueryIntent, WeatherSummary};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::InferencePort};

/// Sampling temperature for synthesis calls (higher, for conversational output)
const SYNTHESIS_TEMPERATURE: f32 = 0.7;

/// Reply used when the language model call fails or returns nothing
const MODEL_FALLBACK_REPLY: &str = "抱歉，我暂时无法生成回复。请稍后再试。";

/// Service turning a selected forecast into a natural-language reply
pub struct ResponseSynthesizer {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for ResponseSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSynthesizer").finish_non_exhaustive()
    }
}

impl ResponseSynthesizer {
    /// Create a new response synthesizer
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Produce the reply for a forecast lookup outcome
    ///
    /// An error input short-circuits to the data apology without a model
    /// call. A model failure yields the fixed fallback reply. The one
    /// fallible path left is summary serialization.
    #[instrument(skip(self, forecast, intent), fields(location = %intent.location, day = %intent.day))]
    pub async fn synthesize(
        &self,
        forecast: Result<DayForecast, ApplicationError>,
        intent: &QueryIntent,
    ) -> Result<String, ApplicationError> {
        let day = match forecast {
            Ok(day) => day,
            Err(e) => {
                debug!(error = %e, "Forecast unavailable, replying with data apology");
                return Ok(format!("抱歉，获取天气数据时出现错误：{e}"));
            },
        };

        let summary = WeatherSummary::from_forecast(&day);
        let summary_json = serde_json::to_string(&summary).map_err(|e| {
            ApplicationError::Internal(format!("summary serialization failed: {e}"))
        })?;
        let prompt = Self::build_prompt(intent, &summary_json);

        match self.inference.complete(&prompt, SYNTHESIS_TEMPERATURE).await {
            Ok(result) if result.content.trim().is_empty() => {
                warn!("Model returned an empty reply, using fallback reply");
                Ok(MODEL_FALLBACK_REPLY.to_string())
            },
            Ok(result) => {
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = result.latency_ms,
                    "Synthesis reply received"
                );
                Ok(result.content)
            },
            Err(e) => {
                warn!(error = %e, "Synthesis call failed, using fallback reply");
                Ok(MODEL_FALLBACK_REPLY.to_string())
            },
        }
    }

    /// Build the synthesis prompt from the intent and the summary JSON
    ///
    /// The location is the user's original phrasing, not the provider form.
    fn build_prompt(intent: &QueryIntent, summary_json: &str) -> String {
        format!(
            "地点：{}\n时间：{}\n天气：{}\n\n请根据以上天气信息，生成一个简短的建议。",
            intent.location, intent.day, summary_json
        )
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::ports::InferenceResult;
    use domain::RelativeDay;

    mock! {
        pub InferenceEngine {}

        #[async_trait::async_trait]
        impl InferencePort for InferenceEngine {
            async fn complete(&self, prompt: &str, temperature: f32) -> Result<InferenceResult, ApplicationError>;
            async fn is_healthy(&self) -> bool;
            fn current_model(&self) -> &str;
        }
    }

    fn reply(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "test-model".to_string(),
            tokens_used: Some(35),
            latency_ms: 120,
        }
    }

    fn sunny_day() -> DayForecast {
        DayForecast::new(25.0, "晴", 30.0, 10.0)
    }

    #[test]
    fn synthesizer_debug() {
        let synthesizer = ResponseSynthesizer::new(Arc::new(MockInferenceEngine::new()));
        assert!(format!("{synthesizer:?}").contains("ResponseSynthesizer"));
    }

    #[tokio::test]
    async fn error_input_replies_without_model_call() {
        // No expectations set: a model call would panic the mock
        let synthesizer = ResponseSynthesizer::new(Arc::new(MockInferenceEngine::new()));
        let intent = QueryIntent::new("上海", RelativeDay::Today);
        let lookup = Err(ApplicationError::Weather(
            "HTTP 400: No matching location found.".to_string(),
        ));

        let text = synthesizer.synthesize(lookup, &intent).await.unwrap();

        assert!(text.starts_with("抱歉，获取天气数据时出现错误："));
        assert!(text.contains("No matching location found"));
    }

    #[tokio::test]
    async fn forecast_input_returns_model_reply() {
        let mut mock = MockInferenceEngine::new();
        mock.expect_complete()
            .returning(|_, _| Ok(reply("今天晴天，适合出门，注意防晒。")));
        let synthesizer = ResponseSynthesizer::new(Arc::new(mock));
        let intent = QueryIntent::new("上海", RelativeDay::Today);

        let text = synthesizer.synthesize(Ok(sunny_day()), &intent).await.unwrap();

        assert_eq!(text, "今天晴天，适合出门，注意防晒。");
    }

    #[tokio::test]
    async fn prompt_embeds_location_day_and_summary() {
        let mut mock = MockInferenceEngine::new();
        mock.expect_complete()
            .withf(|prompt, temperature| {
                prompt.contains("地点：北京")
                    && prompt.contains("时间：明天")
                    && prompt.contains("25°C")
                    && prompt.contains("温度")
                    && prompt.contains("生成一个简短的建议")
                    && (*temperature - 0.7).abs() < 1e-6
            })
            .returning(|_, _| Ok(reply("建议")));
        let synthesizer = ResponseSynthesizer::new(Arc::new(mock));
        let intent = QueryIntent::new("北京", RelativeDay::Tomorrow);

        let text = synthesizer.synthesize(Ok(sunny_day()), &intent).await.unwrap();

        assert_eq!(text, "建议");
    }

    #[tokio::test]
    async fn prompt_keeps_original_location_phrasing() {
        let mut mock = MockInferenceEngine::new();
        mock.expect_complete()
            .withf(|prompt, _| prompt.contains("地点：上海") && !prompt.contains("Shanghai"))
            .returning(|_, _| Ok(reply("好的")));
        let synthesizer = ResponseSynthesizer::new(Arc::new(mock));
        let intent = QueryIntent::new("上海", RelativeDay::Today);

        assert!(synthesizer.synthesize(Ok(sunny_day()), &intent).await.is_ok());
    }

    #[tokio::test]
    async fn missing_metrics_render_unknown_sentinel() {
        let mut mock = MockInferenceEngine::new();
        mock.expect_complete()
            .withf(|prompt, _| prompt.contains("未知°C") && prompt.contains("未知%"))
            .returning(|_, _| Ok(reply("数据有限，建议出门前再确认。")));
        let synthesizer = ResponseSynthesizer::new(Arc::new(mock));
        let intent = QueryIntent::new("上海", RelativeDay::Today);

        let text = synthesizer
            .synthesize(Ok(DayForecast::default()), &intent)
            .await
            .unwrap();

        assert!(!text.is_empty());
    }

    #[tokio::test]
    async fn model_failure_returns_fallback_reply() {
        let mut mock = MockInferenceEngine::new();
        mock.expect_complete()
            .returning(|_, _| Err(ApplicationError::Inference("timeout".to_string())));
        let synthesizer = ResponseSynthesizer::new(Arc::new(mock));
        let intent = QueryIntent::new("上海", RelativeDay::Today);

        let text = synthesizer.synthesize(Ok(sunny_day()), &intent).await.unwrap();

        assert_eq!(text, "抱歉，我暂时无法生成回复。请稍后再试。");
    }

    #[tokio::test]
    async fn empty_model_reply_returns_fallback_reply() {
        let mut mock = MockInferenceEngine::new();
        mock.expect_complete().returning(|_, _| Ok(reply("  \n")));
        let synthesizer = ResponseSynthesizer::new(Arc::new(mock));
        let intent = QueryIntent::new("上海", RelativeDay::Today);

        let text = synthesizer.synthesize(Ok(sunny_day()), &intent).await.unwrap();

        assert_eq!(text, "抱歉，我暂时无法生成回复。请稍后再试。");
    }
}
