//! Trend identification and refinement
//!
//! Lowest-priority stage. Looks for a terminal digit, then a tens group,
//! that dominates the recent window, makes it the active trend and turns
//! it into guidance (saturation, missing numbers, or plain trend).

use crate::config::AnalyzerConfig;
use crate::detector::{AnalysisContext, Detector};
use indexmap::IndexMap;
use roleta_core::{
    AnalysisResult, HistoryBuffer, Signal, TrendKind, TrendState, TrendTarget, WheelTopology,
};
use std::collections::BTreeSet;

/// Most frequent key; ties go to the key seen first
fn most_common(values: impl Iterator<Item = u8>) -> Option<(u8, usize)> {
    let mut counts: IndexMap<u8, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(u8, usize)> = None;
    for (&value, &count) in &counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best
}

/// Trend qualifying over the configured window, if any.
///
/// Terminal digits are checked first; tens groups (ignoring 0-9) only when
/// no terminal qualifies.
pub fn identify_trend(
    config: &AnalyzerConfig,
    wheel: &WheelTopology,
    history: &HistoryBuffer,
) -> Option<TrendState> {
    let window = history.tail(config.trend_window);
    if window.len() < config.min_trend_window {
        return None;
    }

    let terminal = most_common(window.iter().map(|&n| wheel.info(n).terminal))
        .filter(|&(_, count)| count >= config.trend_threshold)
        .map(|(digit, count)| (TrendTarget::terminal(digit), count));

    let (target, count) = terminal.or_else(|| {
        let tens = window
            .iter()
            .map(|&n| wheel.info(n).tens_group)
            .filter(|&tens| tens != 0);
        most_common(tens)
            .filter(|&(_, count)| count >= config.trend_threshold)
            .map(|(tens, count)| (TrendTarget::tens(tens), count))
    })?;

    let seen: BTreeSet<u8> = window
        .iter()
        .copied()
        .filter(|&n| target.matches(wheel.info(n)))
        .collect();

    Some(TrendState {
        target,
        count,
        seen,
    })
}

/// Adopts the window's trend as the active one and reports on it
#[derive(Debug, Clone, Copy)]
pub struct TrendRefiner {
    saturation_threshold: usize,
}

impl TrendRefiner {
    pub fn new(saturation_threshold: usize) -> Self {
        Self {
            saturation_threshold,
        }
    }

    fn refine(&self, trend: &TrendState, wheel: &WheelTopology) -> AnalysisResult {
        let target = trend.target;

        if trend.count >= self.saturation_threshold {
            // No numbers: the caller bets against the trend
            return AnalysisResult::new(
                Signal::Saturation { target },
                format!(
                    "SATURATION ALERT! The {target} has already appeared {} times recently.",
                    trend.count
                ),
                format!(
                    "Bet on the BREAK. The trend is saturated and may break at any moment. \
                     Focus on regions away from the {target}."
                ),
            );
        }

        let group_len = target.group(wheel).len();
        let missing = trend.missing(wheel);
        if !missing.is_empty() && missing.len() < group_len {
            let listed = missing
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return AnalysisResult::new(
                Signal::Precision { target },
                format!("Precision trend! The {target} pattern is active."),
                format!("Focus on the missing numbers of the trend: {listed}."),
            )
            .with_numbers(missing);
        }

        // Terminals widen to wheel neighbors, tens groups stay as they are
        let numbers = match target.kind {
            TrendKind::Terminal => wheel.terminal_region(target.value).to_vec(),
            TrendKind::Tens => target.group(wheel),
        };
        AnalysisResult::new(
            Signal::Trend { target },
            format!("Trend identified: {target} pattern."),
            format!("Follow the trend. Bet on the numbers and regions of the {target}."),
        )
        .with_numbers(numbers)
    }
}

impl Detector for TrendRefiner {
    fn name(&self) -> &str {
        "TrendRefiner"
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> Option<AnalysisResult> {
        let candidate = ctx.take_candidate();
        if ctx.state.trend != candidate {
            log::debug!(
                "[Trend] active trend {:?} -> {:?}",
                ctx.state.trend.as_ref().map(|t| t.target),
                candidate.as_ref().map(|t| t.target)
            );
        }
        ctx.state.trend = candidate;

        let trend = ctx.state.trend.as_ref()?;
        Some(self.refine(trend, ctx.wheel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(draws: &[i32]) -> HistoryBuffer {
        let mut history = HistoryBuffer::default();
        for &n in draws {
            history.push(n).unwrap();
        }
        history
    }

    fn identify(draws: &[i32]) -> Option<TrendState> {
        identify_trend(
            &AnalyzerConfig::default(),
            &WheelTopology::new(),
            &history_of(draws),
        )
    }

    #[test]
    fn test_most_common_prefers_first_seen() {
        assert_eq!(most_common([3, 5, 5, 3].into_iter()), Some((3, 2)));
        assert_eq!(most_common([5, 3, 3, 5, 1].into_iter()), Some((5, 2)));
        assert_eq!(most_common(std::iter::empty()), None);
    }

    #[test]
    fn test_needs_min_window() {
        assert!(identify(&[7, 17, 27, 7]).is_none());
        assert!(identify(&[7, 17, 27, 7, 1]).is_some());
    }

    #[test]
    fn test_terminal_trend_of_four() {
        let trend = identify(&[7, 1, 17, 2, 27, 3, 7, 5, 9, 36]).unwrap();
        assert_eq!(trend.target, TrendTarget::terminal(7));
        assert_eq!(trend.count, 4);
        assert_eq!(trend.seen, BTreeSet::from([7, 17, 27]));
    }

    #[test]
    fn test_only_last_ten_counted() {
        // Four 7-terminals, but the first one falls out of the window
        let trend = identify(&[7, 1, 17, 2, 27, 3, 7, 5, 9, 36, 11]);
        assert!(trend.is_none());
    }

    #[test]
    fn test_terminal_tie_goes_to_first_seen() {
        let trend = identify(&[3, 5, 13, 15, 23, 25, 33, 35, 0, 11]).unwrap();
        assert_eq!(trend.target, TrendTarget::terminal(3));
    }

    #[test]
    fn test_tens_trend_when_no_terminal() {
        let trend = identify(&[21, 22, 23, 24, 5, 6]).unwrap();
        assert_eq!(trend.target, TrendTarget::tens(20));
        assert_eq!(trend.count, 4);
        assert_eq!(trend.seen, BTreeSet::from([21, 22, 23, 24]));
    }

    #[test]
    fn test_tens_ignores_low_numbers() {
        assert!(identify(&[1, 2, 3, 4, 5, 6]).is_none());
    }

    #[test]
    fn test_refine_saturation() {
        let wheel = WheelTopology::new();
        let trend = TrendState {
            target: TrendTarget::terminal(4),
            count: 6,
            seen: BTreeSet::from([4, 14]),
        };
        let result = TrendRefiner::new(6).refine(&trend, &wheel);
        assert_eq!(result.signal, Signal::Saturation { target: trend.target });
        assert!(result.recommended_numbers.is_none());
    }

    #[test]
    fn test_refine_precision() {
        let wheel = WheelTopology::new();
        let trend = TrendState {
            target: TrendTarget::terminal(4),
            count: 4,
            seen: BTreeSet::from([4, 24]),
        };
        let result = TrendRefiner::new(6).refine(&trend, &wheel);
        assert_eq!(result.signal, Signal::Precision { target: trend.target });
        assert_eq!(result.recommended(), &[14, 34]);
        assert!(result.strategy.contains("14, 34"));
    }

    #[test]
    fn test_refine_default_terminal_uses_region() {
        let wheel = WheelTopology::new();
        let trend = TrendState {
            target: TrendTarget::terminal(7),
            count: 4,
            seen: BTreeSet::from([7, 17, 27]),
        };
        let result = TrendRefiner::new(6).refine(&trend, &wheel);
        assert_eq!(result.signal, Signal::Trend { target: trend.target });
        assert_eq!(result.recommended(), wheel.terminal_region(7));
    }

    #[test]
    fn test_refine_default_tens_uses_raw_group() {
        let wheel = WheelTopology::new();
        let trend = TrendState {
            target: TrendTarget::tens(30),
            count: 5,
            seen: (30..=36).collect(),
        };
        let result = TrendRefiner::new(6).refine(&trend, &wheel);
        assert_eq!(result.recommended(), &[30, 31, 32, 33, 34, 35, 36]);
    }
}
