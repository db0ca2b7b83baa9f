//! Detector trait and per-call analysis context
//!
//! An analysis call runs an ordered list of detectors. Each one either
//! produces a result, which ends the call, or passes.

use crate::config::AnalyzerConfig;
use crate::lifecycle::LifecycleState;
use crate::trend::identify_trend;
use roleta_core::{AnalysisResult, HistoryBuffer, TrendState, WheelTopology};

/// Everything a detector may read, plus the lifecycle state it may change
pub struct AnalysisContext<'a> {
    pub config: &'a AnalyzerConfig,
    pub wheel: &'a WheelTopology,
    pub history: &'a HistoryBuffer,
    pub state: &'a mut LifecycleState,
    /// Trend identified over the current window, computed on first use
    candidate: Option<Option<TrendState>>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        config: &'a AnalyzerConfig,
        wheel: &'a WheelTopology,
        history: &'a HistoryBuffer,
        state: &'a mut LifecycleState,
    ) -> Self {
        Self {
            config,
            wheel,
            history,
            state,
            candidate: None,
        }
    }

    /// Trend that currently qualifies over the window, if any
    pub fn candidate(&mut self) -> Option<&TrendState> {
        let (config, wheel, history) = (self.config, self.wheel, self.history);
        self.candidate
            .get_or_insert_with(|| identify_trend(config, wheel, history))
            .as_ref()
    }

    /// Take ownership of the candidate trend
    pub fn take_candidate(&mut self) -> Option<TrendState> {
        self.candidate();
        self.candidate.replace(None).flatten()
    }
}

/// One rule in the analysis cascade
pub trait Detector: Send + Sync {
    /// Detector name for logging
    fn name(&self) -> &str;

    /// Produce a result to end the call, or `None` to pass
    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> Option<AnalysisResult>;
}

/// Stops the cascade until there is enough history to look at
pub struct WaitingGate;

impl Detector for WaitingGate {
    fn name(&self) -> &str {
        "WaitingGate"
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> Option<AnalysisResult> {
        if ctx.history.len() < ctx.config.min_history {
            return Some(AnalysisResult::waiting(ctx.config.min_history));
        }
        None
    }
}
