//! Analyzer session
//!
//! One `Analyzer` per user or table. It owns the draw history and the
//! lifecycle state, and runs the detector cascade on demand:
//!
//! ```text
//! WaitingGate ─► LifecycleManager ─► DozenRebound ─► SequenceTrigger ─► TrendRefiner ─► no pattern
//! ```
//!
//! The first detector that produces a result ends the call.

use crate::config::AnalyzerConfig;
use crate::detector::{AnalysisContext, Detector, WaitingGate};
use crate::error::Result;
use crate::lifecycle::{LifecycleManager, LifecyclePhase, LifecycleState};
use crate::trend::TrendRefiner;
use crate::triggers::{DozenRebound, SequenceTrigger};
use roleta_core::{AnalysisResult, HistoryBuffer, ReturnSeekState, TrendState, WheelTopology};
use std::sync::Arc;
use uuid::Uuid;

/// Build the detector cascade in priority order
fn detectors(config: &AnalyzerConfig) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(WaitingGate),
        Box::new(LifecycleManager::new(config.max_return_attempts)),
        Box::new(DozenRebound),
        Box::new(SequenceTrigger),
        Box::new(TrendRefiner::new(config.saturation_threshold)),
    ]
}

/// Trend analyzer for a single session
pub struct Analyzer {
    id: Uuid,
    config: AnalyzerConfig,
    wheel: Arc<WheelTopology>,
    history: HistoryBuffer,
    state: LifecycleState,
    detectors: Vec<Box<dyn Detector>>,
    /// Accepted draws since the session started
    sequence: u64,
    /// Last result and the draw sequence it was computed for
    cached: Option<(u64, AnalysisResult)>,
}

impl Analyzer {
    /// Create a session with a validated configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Arc::new(WheelTopology::new())))
    }

    fn build(config: AnalyzerConfig, wheel: Arc<WheelTopology>) -> Self {
        let id = Uuid::new_v4();
        log::debug!("[Analyzer {id}] session started");
        Self {
            id,
            history: HistoryBuffer::new(config.history_capacity),
            state: LifecycleState::default(),
            detectors: detectors(&config),
            sequence: 0,
            cached: None,
            config,
            wheel,
        }
    }

    /// Record an observed draw.
    ///
    /// Numbers outside 0-36 are dropped without touching any state; the
    /// return value tells whether the draw was kept.
    pub fn add_number(&mut self, n: i32) -> bool {
        match self.history.push(n) {
            Ok(()) => {
                self.sequence += 1;
                log::debug!("[Analyzer {}] draw {n} recorded", self.id);
                true
            }
            Err(e) => {
                log::debug!("[Analyzer {}] draw dropped: {e}", self.id);
                false
            }
        }
    }

    /// Diagnosis for the current history.
    ///
    /// Lifecycle transitions happen on the first call after each accepted
    /// draw; later calls return the same result until the next draw.
    pub fn analyze(&mut self) -> AnalysisResult {
        if let Some((sequence, result)) = &self.cached {
            if *sequence == self.sequence {
                return result.clone();
            }
        }

        let mut ctx =
            AnalysisContext::new(&self.config, &self.wheel, &self.history, &mut self.state);
        let result = self
            .detectors
            .iter()
            .find_map(|detector| {
                let result = detector.detect(&mut ctx)?;
                log::debug!(
                    "[Analyzer {}] {} fired: {:?}",
                    self.id,
                    detector.name(),
                    result.signal
                );
                Some(result)
            })
            .unwrap_or_else(AnalysisResult::no_pattern);

        self.cached = Some((self.sequence, result.clone()));
        result
    }

    /// Discard all state and start a fresh session
    pub fn reset(&mut self) {
        log::info!("[Analyzer {}] reset", self.id);
        *self = Self::build(self.config.clone(), Arc::clone(&self.wheel));
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn topology(&self) -> &WheelTopology {
        &self.wheel
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Active trend, if any
    pub fn trend(&self) -> Option<&TrendState> {
        self.state.trend.as_ref()
    }

    /// Open recovery window, if any
    pub fn return_seek(&self) -> Option<&ReturnSeekState> {
        self.state.return_seek.as_ref()
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.state.phase()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::build(AnalyzerConfig::default(), Arc::new(WheelTopology::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleta_core::{Signal, TrendTarget};

    fn analyzer_with(draws: &[i32]) -> Analyzer {
        let mut analyzer = Analyzer::default();
        for &n in draws {
            analyzer.add_number(n);
        }
        analyzer
    }

    #[test]
    fn test_waiting_for_numbers() {
        let mut analyzer = analyzer_with(&[5, 9]);
        assert_eq!(analyzer.analyze().signal, Signal::Waiting);
    }

    #[test]
    fn test_out_of_range_is_dropped() {
        let mut analyzer = analyzer_with(&[5, 9, 11]);
        assert!(!analyzer.add_number(37));
        assert!(!analyzer.add_number(-3));
        assert_eq!(analyzer.history().to_vec(), vec![5, 9, 11]);
    }

    #[test]
    fn test_no_pattern() {
        let mut analyzer = analyzer_with(&[5, 19, 30]);
        assert_eq!(analyzer.analyze(), AnalysisResult::no_pattern());
    }

    #[test]
    fn test_dozen_rebound_beats_trend() {
        // Terminal 7 qualifies, but the dozen tail 1, 2, 2 fires first
        let mut analyzer = analyzer_with(&[17, 27, 7, 15, 17]);
        let result = analyzer.analyze();
        assert_eq!(result.signal, Signal::DozenRebound { dozen: 1 });
        assert_eq!(result.recommended(), (1..=12).collect::<Vec<u8>>().as_slice());
        assert!(analyzer.trend().is_none());
    }

    #[test]
    fn test_trend_becomes_active() {
        let mut analyzer = analyzer_with(&[7, 1, 17, 2, 27, 3, 7, 5, 9, 36]);
        let result = analyzer.analyze();

        assert_eq!(analyzer.phase(), LifecyclePhase::TrendActive);
        let trend = analyzer.trend().unwrap();
        assert_eq!(trend.target, TrendTarget::terminal(7));
        assert_eq!(trend.count, 4);
        assert_eq!(result.signal, Signal::Trend { target: trend.target });
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let mut analyzer = analyzer_with(&[4, 14, 24, 34, 1]);
        analyzer.analyze();

        analyzer.add_number(9);
        let first = analyzer.analyze();
        let second = analyzer.analyze();
        assert_eq!(first, second);
        assert_eq!(analyzer.return_seek().map(|s| s.attempts), Some(1));
    }

    #[test]
    fn test_rejected_draw_keeps_cached_result() {
        let mut analyzer = analyzer_with(&[4, 14, 24, 34, 1]);
        analyzer.analyze();
        analyzer.add_number(9);
        let first = analyzer.analyze();

        analyzer.add_number(99);
        assert_eq!(analyzer.analyze(), first);
        assert_eq!(analyzer.return_seek().map(|s| s.attempts), Some(1));
    }

    #[test]
    fn test_reset_replaces_session() {
        let mut analyzer = analyzer_with(&[4, 14, 24, 34, 1]);
        analyzer.analyze();
        let old_id = analyzer.id();

        analyzer.reset();
        assert_ne!(analyzer.id(), old_id);
        assert!(analyzer.history().is_empty());
        assert_eq!(analyzer.phase(), LifecyclePhase::Idle);
        assert_eq!(analyzer.analyze().signal, Signal::Waiting);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AnalyzerConfig {
            max_return_attempts: 0,
            ..Default::default()
        };
        assert!(Analyzer::new(config).is_err());
    }
}
