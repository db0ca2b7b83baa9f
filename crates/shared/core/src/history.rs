//! Bounded draw history

use crate::wheel::is_valid;
use std::collections::VecDeque;
use thiserror::Error;

/// Default number of draws kept
pub const DEFAULT_CAPACITY: usize = 20;

/// Errors raised when recording a draw
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Number {0} is not a pocket on the wheel (expected 0-36)")]
    OutOfRange(i32),
}

pub type HistoryResult<T> = std::result::Result<T, HistoryError>;

/// Insertion-ordered FIFO of observed numbers, oldest first
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    draws: VecDeque<u8>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer holding at most `capacity` draws
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            draws: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a draw, evicting from the front once over capacity.
    ///
    /// Out-of-range numbers leave the buffer untouched.
    pub fn push(&mut self, n: i32) -> HistoryResult<()> {
        if !is_valid(n) {
            return Err(HistoryError::OutOfRange(n));
        }
        self.draws.push_back(n as u8);
        while self.draws.len() > self.capacity {
            self.draws.pop_front();
        }
        Ok(())
    }

    /// Most recent draw
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.draws.back().copied()
    }

    /// The `k`-th most recent draw, 1-based (`nth_back(1)` is the latest)
    pub fn nth_back(&self, k: usize) -> Option<u8> {
        if k == 0 || k > self.draws.len() {
            return None;
        }
        self.draws.get(self.draws.len() - k).copied()
    }

    /// Up to `n` most recent draws, oldest first
    pub fn tail(&self, n: usize) -> Vec<u8> {
        let skip = self.draws.len().saturating_sub(n);
        self.draws.iter().skip(skip).copied().collect()
    }

    /// Full contents, oldest first
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.draws.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        let mut history = HistoryBuffer::default();
        history.push(5).unwrap();

        for n in [-1, 37, 100, i32::MIN, i32::MAX] {
            assert_eq!(history.push(n), Err(HistoryError::OutOfRange(n)));
        }
        assert_eq!(history.to_vec(), vec![5]);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = HistoryBuffer::default();
        for n in 0..25 {
            history.push(n).unwrap();
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.to_vec(), (5..25).collect::<Vec<u8>>());
        assert_eq!(history.last(), Some(24));
    }

    #[test]
    fn test_tail_and_nth_back() {
        let mut history = HistoryBuffer::new(20);
        for n in [7, 15, 17] {
            history.push(n).unwrap();
        }

        assert_eq!(history.nth_back(1), Some(17));
        assert_eq!(history.nth_back(3), Some(7));
        assert_eq!(history.nth_back(4), None);
        assert_eq!(history.nth_back(0), None);

        assert_eq!(history.tail(2), vec![15, 17]);
        assert_eq!(history.tail(10), vec![7, 15, 17]);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut history = HistoryBuffer::new(0);
        history.push(1).unwrap();
        history.push(2).unwrap();
        assert_eq!(history.to_vec(), vec![2]);
    }
}
