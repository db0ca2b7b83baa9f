//! Short-window triggers
//!
//! Pattern triggers over the last few draws. They run after the lifecycle
//! manager and before trend identification; the dozen rebound is checked
//! first.

use crate::detector::{AnalysisContext, Detector};
use roleta_core::{AnalysisResult, MAX_NUMBER, Signal};

/// Dozen A, B, B: expect the wheel to come back to dozen A
pub struct DozenRebound;

impl Detector for DozenRebound {
    fn name(&self) -> &str {
        "DozenRebound"
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> Option<AnalysisResult> {
        let dozen_back = |k| ctx.history.nth_back(k).map(|n| ctx.wheel.info(n).dozen);
        let (a, b1, b2) = (dozen_back(3)?, dozen_back(2)?, dozen_back(1)?);

        if b1 != b2 || b2 == 0 || a == 0 {
            return None;
        }

        Some(
            AnalysisResult::new(
                Signal::DozenRebound { dozen: a },
                format!("Dozen trigger (A, B, B)! Pattern {a}, {b1}, {b2} detected."),
                format!("Bet on the rebound dozen: dozen {a}."),
            )
            .with_numbers(ctx.wheel.dozen_group(a).to_vec()),
        )
    }
}

/// Two ascending consecutive numbers while a trend qualifies: cover the
/// continuation and the inversion
pub struct SequenceTrigger;

impl Detector for SequenceTrigger {
    fn name(&self) -> &str {
        "SequenceTrigger"
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> Option<AnalysisResult> {
        let first = ctx.history.nth_back(2)?;
        let last = ctx.history.nth_back(1)?;
        if first + 1 != last {
            return None;
        }
        ctx.candidate()?;

        // Either side may fall off the wheel (0, 1 or 35, 36)
        let up = (last < MAX_NUMBER).then(|| last + 1);
        let down = first.checked_sub(1);

        let wheel = ctx.wheel;
        let mut numbers: Vec<u8> = [up, down]
            .into_iter()
            .flatten()
            .flat_map(|n| wheel.neighbors(n).iter().copied())
            .collect();
        numbers.sort_unstable();
        numbers.dedup();

        let strategy = match (up, down) {
            (Some(up), Some(down)) => format!(
                "Bet on the sequence continuing (region of {up}) or inverting into the break \
                 (region of {down})."
            ),
            (Some(up), None) => format!("Bet on the sequence continuing (region of {up})."),
            (None, Some(down)) => {
                format!("Bet on the sequence inverting into the break (region of {down}).")
            }
            (None, None) => return None,
        };

        Some(
            AnalysisResult::new(
                Signal::Sequence { first, last },
                format!("Sequence trigger! Pattern {first}, {last} detected."),
                strategy,
            )
            .with_numbers(numbers),
        )
    }
}
