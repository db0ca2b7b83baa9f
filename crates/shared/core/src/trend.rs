//! Trend and return-seek state

use crate::wheel::{NumberInfo, WheelTopology};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which attribute a trend is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendKind {
    /// Shared last digit
    Terminal,
    /// Shared tens group (10, 20, 30)
    Tens,
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendKind::Terminal => write!(f, "terminal"),
            TrendKind::Tens => write!(f, "tens group"),
        }
    }
}

/// A trend's identity: kind plus value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrendTarget {
    pub kind: TrendKind,
    pub value: u8,
}

impl TrendTarget {
    pub fn terminal(digit: u8) -> Self {
        Self {
            kind: TrendKind::Terminal,
            value: digit,
        }
    }

    pub fn tens(tens_group: u8) -> Self {
        Self {
            kind: TrendKind::Tens,
            value: tens_group,
        }
    }

    /// Whether a number carries this target's attribute
    pub fn matches(&self, info: NumberInfo) -> bool {
        match self.kind {
            TrendKind::Terminal => info.terminal == self.value,
            TrendKind::Tens => info.tens_group == self.value,
        }
    }

    /// Every number carrying this target's attribute, ascending
    pub fn group(&self, wheel: &WheelTopology) -> Vec<u8> {
        match self.kind {
            TrendKind::Terminal => wheel.terminal_group(self.value).to_vec(),
            TrendKind::Tens => wheel.tens_group(self.value),
        }
    }
}

impl fmt::Display for TrendTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}

/// The currently dominant pattern over the trend window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendState {
    pub target: TrendTarget,
    /// Occurrences inside the window
    pub count: usize,
    /// Members of the target's group that appeared inside the window
    pub seen: BTreeSet<u8>,
}

impl TrendState {
    /// Group members not yet seen inside the window, ascending
    pub fn missing(&self, wheel: &WheelTopology) -> Vec<u8> {
        self.target
            .group(wheel)
            .into_iter()
            .filter(|n| !self.seen.contains(n))
            .collect()
    }
}

/// An open recovery window after a trend broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnSeekState {
    /// 1 when opened, incremented on every non-matching draw
    pub attempts: u32,
    pub target: TrendTarget,
}

impl ReturnSeekState {
    pub fn open(target: TrendTarget) -> Self {
        Self {
            attempts: 1,
            target,
        }
    }
}
