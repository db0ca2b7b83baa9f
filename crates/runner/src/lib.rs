//! Roleta Runner - command-line front end
//!
//! Feeds draws into an [`roleta_analyzer::Analyzer`] and prints the
//! diagnosis after each one:
//!
//! - **Command**: parsing of input lines (draws, reset, history, quit)
//! - **Session**: one analyzer driven by a command stream
//! - **Report**: text and JSON rendering

pub mod command;
pub mod error;
pub mod report;
pub mod session;

// Re-export main types
pub use command::Command;
pub use error::{CommandError, Error, Result};
pub use report::{OutputFormat, history_line, render_json, render_text};
pub use session::{Outcome, Session};
