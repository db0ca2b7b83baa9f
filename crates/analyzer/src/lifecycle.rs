//! Trend Lifecycle Manager
//!
//! Highest-priority stage of every analysis call. Tracks the active trend
//! and the recovery window opened when it breaks:
//!
//! ```text
//!   Idle ──(trend identified)──► TrendActive
//!                                   │ latest draw misses the trend
//!                                   ▼
//!                             BreakConfirmed ──► ReturnSeeking ◄─┐
//!                                                   │   │        │ miss, attempts <= max
//!                                  hit ◄────────────┘   └────────┘
//!                                   ▼                   miss, attempts > max
//!                             ReturnConfirmed ──► Idle ◄── ReturnFailed
//! ```
//!
//! `BreakConfirmed`, `ReturnConfirmed` and `ReturnFailed` are transient:
//! they are reported once, as a [`LifecycleEvent`], and never stored.

use crate::detector::{AnalysisContext, Detector};
use roleta_core::{
    AnalysisResult, ReturnSeekState, Signal, TrendState, TrendTarget, WheelTopology,
};
use serde::{Deserialize, Serialize};

/// Persistent lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// No trend and no recovery window
    Idle,
    /// A trend is being tracked
    TrendActive,
    /// A broken trend is expected to return
    ReturnSeeking,
}

/// Trend and return-seek bookkeeping owned by one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleState {
    pub trend: Option<TrendState>,
    pub return_seek: Option<ReturnSeekState>,
}

impl LifecycleState {
    pub fn phase(&self) -> LifecyclePhase {
        if self.trend.is_some() {
            LifecyclePhase::TrendActive
        } else if self.return_seek.is_some() {
            LifecyclePhase::ReturnSeeking
        } else {
            LifecyclePhase::Idle
        }
    }
}

/// Transition reported by the lifecycle manager for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    BreakConfirmed { target: TrendTarget, number: u8 },
    StillSeeking { target: TrendTarget, attempt: u32, number: u8 },
    ReturnConfirmed { target: TrendTarget, number: u8 },
    ReturnFailed { target: TrendTarget },
}

impl LifecycleEvent {
    /// Render the event for the caller
    pub fn to_result(&self, wheel: &WheelTopology, max_attempts: u32) -> AnalysisResult {
        match *self {
            LifecycleEvent::BreakConfirmed { target, number } => AnalysisResult::new(
                Signal::BreakConfirmed { target },
                format!("BREAK CONFIRMED! The {target} trend was broken by number {number}."),
                format!(
                    "Start seeking the RETURN. Bet on the numbers of {target}; \
                     the table tends to go back to the original pattern."
                ),
            )
            .with_numbers(target.group(wheel)),
            LifecycleEvent::StillSeeking {
                target,
                attempt,
                number,
            } => AnalysisResult::new(
                Signal::ReturnSeeking { target, attempt },
                format!(
                    "Seeking return (attempt {attempt}/{max_attempts}). \
                     The break persists with number {number}."
                ),
                format!("Keep betting on {target} to catch the return."),
            )
            .with_numbers(target.group(wheel)),
            LifecycleEvent::ReturnConfirmed { target, number } => AnalysisResult::new(
                Signal::ReturnConfirmed { target },
                format!("RETURN CONFIRMED! Number {number} confirmed the return to {target}."),
                "Return succeeded. Wait for a new pattern to form.",
            ),
            LifecycleEvent::ReturnFailed { target } => AnalysisResult::new(
                Signal::ReturnFailed { target },
                format!(
                    "ATTEMPT LIMIT REACHED. The search for the return failed after \
                     {max_attempts} attempts."
                ),
                "The pattern has dissolved. Stop betting and wait for a clear new trend.",
            ),
        }
    }
}

/// Breakage and return-seek state machine
#[derive(Debug, Clone, Copy)]
pub struct LifecycleManager {
    max_attempts: u32,
}

impl LifecycleManager {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Advance the state machine with the latest draw.
    ///
    /// Returns `None` when neither a trend nor a recovery window is active,
    /// or when the active trend continued.
    pub fn step(
        &self,
        state: &mut LifecycleState,
        wheel: &WheelTopology,
        number: u8,
    ) -> Option<LifecycleEvent> {
        let info = wheel.info(number);

        if let Some(trend) = &state.trend {
            let target = trend.target;
            if !target.matches(info) {
                log::info!("[Lifecycle] {target} broken by {number}, seeking return");
                state.trend = None;
                state.return_seek = Some(ReturnSeekState::open(target));
                return Some(LifecycleEvent::BreakConfirmed { target, number });
            }
        }

        let seek = state.return_seek.as_mut()?;
        let target = seek.target;

        if target.matches(info) {
            log::info!("[Lifecycle] {target} returned with {number}");
            state.return_seek = None;
            return Some(LifecycleEvent::ReturnConfirmed { target, number });
        }

        seek.attempts += 1;
        if seek.attempts > self.max_attempts {
            log::info!(
                "[Lifecycle] {target} did not return within {} attempts",
                self.max_attempts
            );
            state.return_seek = None;
            return Some(LifecycleEvent::ReturnFailed { target });
        }

        log::debug!(
            "[Lifecycle] still seeking {target}: attempt {}/{}",
            seek.attempts,
            self.max_attempts
        );
        Some(LifecycleEvent::StillSeeking {
            target,
            attempt: seek.attempts,
            number,
        })
    }
}

impl Detector for LifecycleManager {
    fn name(&self) -> &str {
        "LifecycleManager"
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> Option<AnalysisResult> {
        let number = ctx.history.last()?;
        let event = self.step(ctx.state, ctx.wheel, number)?;
        Some(event.to_result(ctx.wheel, self.max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn terminal_trend(digit: u8) -> LifecycleState {
        LifecycleState {
            trend: Some(TrendState {
                target: TrendTarget::terminal(digit),
                count: 4,
                seen: BTreeSet::from([digit]),
            }),
            return_seek: None,
        }
    }

    #[test]
    fn test_idle_emits_nothing() {
        let wheel = WheelTopology::new();
        let mut state = LifecycleState::default();
        let manager = LifecycleManager::new(3);

        assert!(manager.step(&mut state, &wheel, 17).is_none());
        assert_eq!(state.phase(), LifecyclePhase::Idle);
    }

    #[test]
    fn test_trend_continues() {
        let wheel = WheelTopology::new();
        let mut state = terminal_trend(4);
        let manager = LifecycleManager::new(3);

        assert!(manager.step(&mut state, &wheel, 24).is_none());
        assert_eq!(state.phase(), LifecyclePhase::TrendActive);
    }

    #[test]
    fn test_break_opens_return_seek() {
        let wheel = WheelTopology::new();
        let mut state = terminal_trend(4);
        let manager = LifecycleManager::new(3);

        let event = manager.step(&mut state, &wheel, 7).unwrap();
        assert_eq!(
            event,
            LifecycleEvent::BreakConfirmed {
                target: TrendTarget::terminal(4),
                number: 7
            }
        );
        assert!(state.trend.is_none());
        assert_eq!(
            state.return_seek,
            Some(ReturnSeekState {
                attempts: 1,
                target: TrendTarget::terminal(4)
            })
        );

        let result = event.to_result(&wheel, 3);
        assert_eq!(result.recommended(), &[4, 14, 24, 34]);
    }

    #[test]
    fn test_tens_break_recommends_tens_group() {
        let wheel = WheelTopology::new();
        let mut state = LifecycleState {
            trend: Some(TrendState {
                target: TrendTarget::tens(30),
                count: 5,
                seen: BTreeSet::from([30, 31]),
            }),
            return_seek: None,
        };
        let manager = LifecycleManager::new(3);

        let result = manager
            .step(&mut state, &wheel, 0)
            .unwrap()
            .to_result(&wheel, 3);
        assert_eq!(result.recommended(), &[30, 31, 32, 33, 34, 35, 36]);
    }

    #[test]
    fn test_return_confirmed() {
        let wheel = WheelTopology::new();
        let mut state = LifecycleState {
            trend: None,
            return_seek: Some(ReturnSeekState::open(TrendTarget::terminal(4))),
        };
        let manager = LifecycleManager::new(3);

        let event = manager.step(&mut state, &wheel, 14).unwrap();
        assert!(matches!(event, LifecycleEvent::ReturnConfirmed { number: 14, .. }));
        assert!(state.return_seek.is_none());
        assert!(event.to_result(&wheel, 3).recommended_numbers.is_none());
    }

    #[test]
    fn test_return_fails_after_limit() {
        let wheel = WheelTopology::new();
        let mut state = LifecycleState {
            trend: None,
            return_seek: Some(ReturnSeekState::open(TrendTarget::terminal(4))),
        };
        let manager = LifecycleManager::new(3);

        for expected in [2, 3] {
            let event = manager.step(&mut state, &wheel, 9).unwrap();
            assert!(matches!(
                event,
                LifecycleEvent::StillSeeking { attempt, .. } if attempt == expected
            ));
        }

        let event = manager.step(&mut state, &wheel, 9).unwrap();
        assert!(matches!(event, LifecycleEvent::ReturnFailed { .. }));
        assert_eq!(state.phase(), LifecyclePhase::Idle);

        // Nothing left to count
        assert!(manager.step(&mut state, &wheel, 9).is_none());
    }
}
