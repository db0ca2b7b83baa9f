//! Input commands

use crate::error::CommandError;
use std::str::FromStr;

/// One line of runner input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// An observed draw; range is checked by the analyzer
    Draw(i32),
    /// Discard the session and start over
    Reset,
    /// Print the history line
    History,
    /// Stop reading input
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CommandError::Empty);
        }
        if let Ok(n) = s.parse::<i32>() {
            return Ok(Command::Draw(n));
        }
        match s.to_ascii_lowercase().as_str() {
            "reset" | "clear" => Ok(Command::Reset),
            "history" | "h" => Ok(Command::History),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draws() {
        assert_eq!("17".parse::<Command>(), Ok(Command::Draw(17)));
        assert_eq!("  0 ".parse::<Command>(), Ok(Command::Draw(0)));
        assert_eq!("-4".parse::<Command>(), Ok(Command::Draw(-4)));
        assert_eq!("99".parse::<Command>(), Ok(Command::Draw(99)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("CLEAR".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("history".parse::<Command>(), Ok(Command::History));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "spin".parse::<Command>(),
            Err(CommandError::Unknown("spin".to_string()))
        );
        assert!(matches!(
            "99999999999".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
