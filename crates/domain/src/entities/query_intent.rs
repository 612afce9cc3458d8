//! Structured query intent

use serde::{Deserialize, Serialize};

use crate::value_objects::RelativeDay;

/// What the user asked for, extracted from a free-text query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    /// Place name exactly as the user phrased it
    pub location: String,
    /// Which of the three forecast days the question is about
    pub day: RelativeDay,
    /// Weather aspects the user cares about (informational only)
    pub concerns: Vec<String>,
}

impl QueryIntent {
    /// Create an intent for a location and day
    #[must_use]
    pub fn new(location: impl Into<String>, day: RelativeDay) -> Self {
        Self {
            location: location.into(),
            day,
            concerns: Vec::new(),
        }
    }

    /// Attach the extracted concerns
    #[must_use]
    pub fn with_concerns(mut self, concerns: Vec<String>) -> Self {
        self.concerns = concerns;
        self
    }

    /// The intent used whenever extraction fails
    ///
    /// Literals match the assistant's home market: Shanghai, today,
    /// general weather.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            location: "上海".to_string(),
            day: RelativeDay::Today,
            concerns: vec!["天气".to_string()],
        }
    }
}

impl Default for QueryIntent {
    fn default() -> Self {
        Self::fallback()
    }
}
