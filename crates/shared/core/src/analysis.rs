//! Analysis results handed back to the caller

use crate::trend::TrendTarget;
use serde::{Deserialize, Serialize};

/// Which rule produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// Not enough history to analyze
    Waiting,
    /// The active trend just broke
    BreakConfirmed { target: TrendTarget },
    /// Still waiting for a broken trend to reassert itself
    ReturnSeeking { target: TrendTarget, attempt: u32 },
    /// The broken trend reasserted itself
    ReturnConfirmed { target: TrendTarget },
    /// The recovery window ran out of attempts
    ReturnFailed { target: TrendTarget },
    /// Dozen A, B, B pattern pointing back at dozen A
    DozenRebound { dozen: u8 },
    /// Two ascending consecutive numbers under an active trend
    Sequence { first: u8, last: u8 },
    /// Trend repeated so often it is expected to break
    Saturation { target: TrendTarget },
    /// Trend with group members still missing from the window
    Precision { target: TrendTarget },
    /// Plain trend guidance
    Trend { target: TrendTarget },
    /// Nothing qualified
    NoPattern,
}

/// Diagnosis plus betting guidance for the current history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub signal: Signal,
    pub diagnosis: String,
    pub strategy: String,
    /// Ordered, duplicate-free numbers to cover, when the rule names any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_numbers: Option<Vec<u8>>,
}

impl AnalysisResult {
    /// Result without a recommended-numbers list
    pub fn new(signal: Signal, diagnosis: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            signal,
            diagnosis: diagnosis.into(),
            strategy: strategy.into(),
            recommended_numbers: None,
        }
    }

    /// Attach recommended numbers
    pub fn with_numbers(mut self, numbers: Vec<u8>) -> Self {
        self.recommended_numbers = Some(numbers);
        self
    }

    pub fn recommended(&self) -> &[u8] {
        self.recommended_numbers.as_deref().unwrap_or(&[])
    }

    /// Not enough draws yet
    pub fn waiting(min_history: usize) -> Self {
        Self::new(
            Signal::Waiting,
            "Waiting for more numbers...",
            format!("Enter at least {min_history} numbers to start the analysis."),
        )
    }

    /// No rule fired
    pub fn no_pattern() -> Self {
        Self::new(
            Signal::NoPattern,
            "No clear pattern identified.",
            "Wait for a trend or a trigger to form.",
        )
    }
}
