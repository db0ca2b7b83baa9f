//! Analyzer configuration
//!
//! Window sizes and thresholds used by the detectors. Every field has a
//! default, so a JSON file only needs to name the values it overrides.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds and window sizes for one analyzer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Draws kept in history
    pub history_capacity: usize,
    /// Below this many draws the analyzer only asks for more input
    pub min_history: usize,
    /// Draws inspected by trend identification
    pub trend_window: usize,
    /// Minimum draws before a trend can be identified
    pub min_trend_window: usize,
    /// Occurrences inside the window needed for a trend
    pub trend_threshold: usize,
    /// Occurrences at which a trend is considered saturated
    pub saturation_threshold: usize,
    /// Non-matching draws tolerated while seeking a return
    pub max_return_attempts: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            min_history: 3,
            trend_window: 10,
            min_trend_window: 5,
            trend_threshold: 4,   // 40% of the window
            saturation_threshold: 6,
            max_return_attempts: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the relationships between windows and thresholds
    pub fn validate(&self) -> Result<()> {
        if self.min_trend_window == 0 {
            return Err(ConfigError::Invalid("min_trend_window must be at least 1".to_string()));
        }
        if self.trend_window < self.min_trend_window {
            return Err(ConfigError::Invalid(format!(
                "trend_window ({}) must not be smaller than min_trend_window ({})",
                self.trend_window, self.min_trend_window
            )));
        }
        if self.history_capacity < self.trend_window {
            return Err(ConfigError::Invalid(format!(
                "history_capacity ({}) must hold the whole trend_window ({})",
                self.history_capacity, self.trend_window
            )));
        }
        // The dozen rebound looks three draws back
        if self.min_history < 3 {
            return Err(ConfigError::Invalid(format!(
                "min_history ({}) must be at least 3",
                self.min_history
            )));
        }
        if self.trend_threshold == 0 {
            return Err(ConfigError::Invalid("trend_threshold must be at least 1".to_string()));
        }
        if self.saturation_threshold <= self.trend_threshold {
            return Err(ConfigError::Invalid(format!(
                "saturation_threshold ({}) must exceed trend_threshold ({})",
                self.saturation_threshold, self.trend_threshold
            )));
        }
        if self.max_return_attempts == 0 {
            return Err(ConfigError::Invalid("max_return_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}
