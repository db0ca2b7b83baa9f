//! Roleta Analyzer
//!
//! Tracks a rolling window of wheel outcomes and turns it into a diagnosis
//! and a recommended set of numbers:
//! - Lifecycle manager: trend breakage, return seeking, return outcome
//! - Triggers: dozen rebound (A, B, B) and ascending sequences
//! - Trend identification: dominant terminal digit or tens group, refined
//!   into saturation, missing-number or plain trend guidance
//!
//! ## Usage
//!
//! ```rust
//! use roleta_analyzer::Analyzer;
//!
//! let mut analyzer = Analyzer::default();
//! for n in [7, 15, 17] {
//!     analyzer.add_number(n);
//! }
//! let result = analyzer.analyze();
//! assert_eq!(result.recommended().len(), 12);
//! ```

pub mod analyzer;
pub mod config;
pub mod detector;
pub mod error;
pub mod lifecycle;
pub mod trend;
pub mod triggers;

// Re-export main types
pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use detector::{AnalysisContext, Detector, WaitingGate};
pub use error::{ConfigError, Result};
pub use lifecycle::{LifecycleEvent, LifecycleManager, LifecyclePhase, LifecycleState};
pub use trend::{TrendRefiner, identify_trend};
pub use triggers::{DozenRebound, SequenceTrigger};

// Re-export domain types for convenience
pub use roleta_core::{AnalysisResult, Signal, TrendKind, TrendTarget};
