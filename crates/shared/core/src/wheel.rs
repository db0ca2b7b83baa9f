//! Wheel topology
//!
//! Precomputed relationships over the 37 pockets of a single-zero wheel.
//! Every table is derived from [`WHEEL_ORDER`] once and never mutated.

use serde::{Deserialize, Serialize};

/// Number of pockets on the wheel (0..=36)
pub const POCKETS: usize = 37;

/// Highest valid pocket number
pub const MAX_NUMBER: u8 = 36;

/// Physical pocket order of the single-zero wheel, clockwise from zero
pub const WHEEL_ORDER: [u8; POCKETS] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// Pockets on each side of a number that belong to its neighbor region
const NEIGHBOR_SPAN: usize = 2;

/// Static attributes of a single pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberInfo {
    /// Last decimal digit (0-9)
    pub terminal: u8,
    /// Dozen 1, 2 or 3; 0 only for the zero pocket
    pub dozen: u8,
    /// Tens group 0, 10, 20 or 30
    pub tens_group: u8,
}

impl NumberInfo {
    fn of(num: u8) -> Self {
        let dozen = match num {
            1..=12 => 1,
            13..=24 => 2,
            25..=36 => 3,
            _ => 0,
        };
        Self {
            terminal: num % 10,
            dozen,
            tens_group: (num / 10) * 10,
        }
    }
}

/// Immutable lookup tables over the wheel
#[derive(Debug, Clone)]
pub struct WheelTopology {
    info: [NumberInfo; POCKETS],
    neighbors: [[u8; 2 * NEIGHBOR_SPAN + 1]; POCKETS],
    terminal_groups: [Vec<u8>; 10],
    dozen_groups: [Vec<u8>; 3],
    terminal_regions: [Vec<u8>; 10],
}

impl WheelTopology {
    /// Build every table from [`WHEEL_ORDER`]
    pub fn new() -> Self {
        let mut info = [NumberInfo::of(0); POCKETS];
        for num in 0..=MAX_NUMBER {
            info[num as usize] = NumberInfo::of(num);
        }

        let mut neighbors = [[0u8; 2 * NEIGHBOR_SPAN + 1]; POCKETS];
        for (pos, &num) in WHEEL_ORDER.iter().enumerate() {
            let window = &mut neighbors[num as usize];
            for (slot, offset) in (0..=2 * NEIGHBOR_SPAN).enumerate() {
                let idx = (pos + POCKETS + offset - NEIGHBOR_SPAN) % POCKETS;
                window[slot] = WHEEL_ORDER[idx];
            }
        }

        let terminal_groups: [Vec<u8>; 10] = std::array::from_fn(|digit| {
            (0..=MAX_NUMBER).filter(|n| (n % 10) as usize == digit).collect()
        });

        let dozen_groups: [Vec<u8>; 3] = std::array::from_fn(|i| {
            let start = (i as u8) * 12 + 1;
            (start..start + 12).collect()
        });

        let terminal_regions: [Vec<u8>; 10] = std::array::from_fn(|digit| {
            let mut region: Vec<u8> = terminal_groups[digit]
                .iter()
                .flat_map(|&n| neighbors[n as usize])
                .collect();
            region.sort_unstable();
            region.dedup();
            region
        });

        Self {
            info,
            neighbors,
            terminal_groups,
            dozen_groups,
            terminal_regions,
        }
    }

    /// Attributes of a pocket
    ///
    /// # Panics
    /// If `num` is above [`MAX_NUMBER`]. Callers only hand in numbers that
    /// already passed [`is_valid`].
    #[inline]
    pub fn info(&self, num: u8) -> NumberInfo {
        self.info[num as usize]
    }

    /// The 5-pocket window centered on `num`, in wheel order
    pub fn neighbors(&self, num: u8) -> &[u8] {
        &self.neighbors[num as usize]
    }

    /// All numbers ending in `digit`
    pub fn terminal_group(&self, digit: u8) -> &[u8] {
        self.terminal_groups
            .get(digit as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Numbers of dozen 1, 2 or 3. Empty for any other value.
    pub fn dozen_group(&self, dozen: u8) -> &[u8] {
        match dozen {
            1..=3 => &self.dozen_groups[dozen as usize - 1],
            _ => &[],
        }
    }

    /// Numbers sharing a tens group (0, 10, 20, 30).
    ///
    /// Group 0 holds 1..=9 and the zero pocket; trend detection never
    /// targets it.
    pub fn tens_group(&self, tens: u8) -> Vec<u8> {
        (0..=MAX_NUMBER)
            .filter(|&n| self.info(n).tens_group == tens)
            .collect()
    }

    /// Union of the neighbor windows of every number ending in `digit`,
    /// sorted and deduplicated
    pub fn terminal_region(&self, digit: u8) -> &[u8] {
        self.terminal_regions
            .get(digit as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for WheelTopology {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `n` is a pocket on the wheel
#[inline]
pub fn is_valid(n: i32) -> bool {
    (0..=MAX_NUMBER as i32).contains(&n)
}
