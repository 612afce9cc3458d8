//! Relative day value object
//!
//! The assistant answers questions about exactly three days: today, tomorrow,
//! and the day after tomorrow. Each maps to a fixed offset into a 3-day
//! forecast.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::RelativeDay;
//!
//! let day: RelativeDay = "明天".parse().expect("known day");
//! assert_eq!(day, RelativeDay::Tomorrow);
//! assert_eq!(day.forecast_index(), 1);
//!
//! // Unrecognized values are an error; callers that need leniency
//! // fall back to the default (today).
//! let day: RelativeDay = "下周".parse().unwrap_or_default();
//! assert_eq!(day, RelativeDay::Today);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a relative day string is not recognized
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized relative day: {0}")]
pub struct InvalidRelativeDay(String);

/// One of the three days covered by a forecast request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDay {
    /// Today (forecast offset 0)
    #[default]
    Today,
    /// Tomorrow (forecast offset 1)
    Tomorrow,
    /// The day after tomorrow (forecast offset 2)
    DayAfter,
}

impl RelativeDay {
    /// Number of days a forecast must cover to answer any relative day
    pub const FORECAST_DAYS: u8 = 3;

    /// Index of this day within a 3-day forecast array
    #[must_use]
    pub const fn forecast_index(self) -> usize {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::DayAfter => 2,
        }
    }

    /// The localized label used in prompts and replies
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "今天",
            Self::Tomorrow => "明天",
            Self::DayAfter => "后天",
        }
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RelativeDay {
    type Err = InvalidRelativeDay;

    /// Parse a relative day from its localized label or English gloss.
    ///
    /// Accepts `今天`/`today`, `明天`/`tomorrow`, `后天`/`day_after`.
    /// Latin forms are matched case-insensitively; surrounding whitespace
    /// is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "今天" | "today" => Ok(Self::Today),
            "明天" | "tomorrow" => Ok(Self::Tomorrow),
            "后天" | "day_after" => Ok(Self::DayAfter),
            _ => Err(InvalidRelativeDay(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_localized_labels() {
        assert_eq!("今天".parse::<RelativeDay>(), Ok(RelativeDay::Today));
        assert_eq!("明天".parse::<RelativeDay>(), Ok(RelativeDay::Tomorrow));
        assert_eq!("后天".parse::<RelativeDay>(), Ok(RelativeDay::DayAfter));
    }

    #[test]
    fn test_parse_english_glosses() {
        assert_eq!("today".parse::<RelativeDay>(), Ok(RelativeDay::Today));
        assert_eq!("Tomorrow".parse::<RelativeDay>(), Ok(RelativeDay::Tomorrow));
        assert_eq!("DAY_AFTER".parse::<RelativeDay>(), Ok(RelativeDay::DayAfter));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 明天 ".parse::<RelativeDay>(), Ok(RelativeDay::Tomorrow));
    }

    #[test]
    fn test_parse_unrecognized_is_error() {
        let err = "下周".parse::<RelativeDay>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized relative day: 下周");
        assert!("".parse::<RelativeDay>().is_err());
        assert!("yesterday".parse::<RelativeDay>().is_err());
    }

    #[test]
    fn test_unrecognized_defaults_to_today() {
        let day: RelativeDay = "someday".parse().unwrap_or_default();
        assert_eq!(day, RelativeDay::Today);
        assert_eq!(day.forecast_index(), 0);
    }

    #[test]
    fn test_forecast_index_mapping() {
        assert_eq!(RelativeDay::Today.forecast_index(), 0);
        assert_eq!(RelativeDay::Tomorrow.forecast_index(), 1);
        assert_eq!(RelativeDay::DayAfter.forecast_index(), 2);
    }

    #[test]
    fn test_index_within_forecast_window() {
        for day in [
            RelativeDay::Today,
            RelativeDay::Tomorrow,
            RelativeDay::DayAfter,
        ] {
            assert!(day.forecast_index() < RelativeDay::FORECAST_DAYS as usize);
        }
    }

    #[test]
    fn test_display_is_localized_label() {
        assert_eq!(RelativeDay::Today.to_string(), "今天");
        assert_eq!(RelativeDay::Tomorrow.to_string(), "明天");
        assert_eq!(RelativeDay::DayAfter.to_string(), "后天");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for day in [
            RelativeDay::Today,
            RelativeDay::Tomorrow,
            RelativeDay::DayAfter,
        ] {
            assert_eq!(day.to_string().parse::<RelativeDay>(), Ok(day));
        }
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&RelativeDay::DayAfter).expect("serialize"),
            "\"day_after\""
        );
        let day: RelativeDay = serde_json::from_str("\"tomorrow\"").expect("deserialize");
        assert_eq!(day, RelativeDay::Tomorrow);
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            // Parsing arbitrary input must never panic
            #[test]
            fn parse_never_panics(input in ".*") {
                let _ = input.parse::<RelativeDay>();
            }

            // Lenient fallback always lands on a valid forecast index
            #[test]
            fn lenient_parse_index_in_range(input in ".*") {
                let day: RelativeDay = input.parse().unwrap_or_default();
                prop_assert!(day.forecast_index() <= 2);
            }
        }
    }
}
