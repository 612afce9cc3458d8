//! Weather agent - Pipeline orchestration
//!
//! Runs extract, select, and synthesize in sequence. `process` is total:
//! the stages absorb their own failures, and anything that still escapes
//! is logged and converted to a generic apology.

use std::{fmt, sync::Arc};

use domain::CityDirectory;
use tracing::{error, instrument};

use crate::{
    error::ApplicationError,
    ports::{ForecastPort, InferencePort},
    services::{ForecastSelector, IntentExtractor, ResponseSynthesizer},
};

/// Reply for failures not absorbed by the pipeline stages
const GENERIC_APOLOGY: &str = "抱歉，处理您的查询时出现错误。请稍后再试。";

/// Orchestrates the three pipeline stages into one total operation
pub struct WeatherAgentService {
    extractor: IntentExtractor,
    selector: ForecastSelector,
    synthesizer: ResponseSynthesizer,
}

impl fmt::Debug for WeatherAgentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherAgentService").finish_non_exhaustive()
    }
}

impl WeatherAgentService {
    /// Create an agent with the built-in city directory
    pub fn new(inference: Arc<dyn InferencePort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self::with_cities(inference, forecast, CityDirectory::default())
    }

    /// Create an agent with a configured city directory
    pub fn with_cities(
        inference: Arc<dyn InferencePort>,
        forecast: Arc<dyn ForecastPort>,
        cities: CityDirectory,
    ) -> Self {
        Self {
            extractor: IntentExtractor::new(Arc::clone(&inference)),
            selector: ForecastSelector::with_cities(forecast, cities),
            synthesizer: ResponseSynthesizer::new(inference),
        }
    }

    /// Answer a weather query
    ///
    /// Total: every failure path resolves to a non-empty reply string.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn process(&self, query: &str) -> String {
        match self.try_process(query).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Query processing failed");
                GENERIC_APOLOGY.to_string()
            },
        }
    }

    async fn try_process(&self, query: &str) -> Result<String, ApplicationError> {
        let intent = self.extractor.extract(query).await;
        let forecast = self.selector.select(&intent).await;
        self.synthesizer.synthesize(forecast, &intent).await
    }
}
