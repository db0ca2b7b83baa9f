//! Roleta Core Domain
//!
//! Pure domain types for the Roleta trend analyzer.
//! This crate contains no I/O and no logging, and is 100% unit testable.

pub mod analysis;
pub mod history;
pub mod trend;
pub mod wheel;

// Re-export commonly used types at crate root
pub use analysis::{AnalysisResult, Signal};
pub use history::{DEFAULT_CAPACITY, HistoryBuffer, HistoryError, HistoryResult};
pub use trend::{ReturnSeekState, TrendKind, TrendState, TrendTarget};
pub use wheel::{MAX_NUMBER, NumberInfo, POCKETS, WHEEL_ORDER, WheelTopology, is_valid};
