//! Error handling and diagnostics for the Ravenfall lexer
//!
//! Every failure aborts the scan; there is no partial result and no warning
//! channel. Each condition is a distinct variant so callers can match on it.

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// Main error type for the Ravenfall lexer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character matched none of the dispatch rules
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),

    /// Indentation grew by more than one unit on a single line
    #[error("indentation jumped from level {current} to level {found}")]
    Indentation { current: usize, found: usize },

    /// Input ended inside a string literal
    #[error("unterminated string literal, expected closing {quote}")]
    UnterminatedLiteral { quote: char },

    /// A closing bracket with no open bracket to close (strict mode only)
    #[error("unmatched closing bracket {0:?}")]
    UnmatchedBracket(char),

    /// Brackets still open at end of input (strict mode only)
    #[error("{depth} bracket(s) left open at end of input")]
    UnclosedBracket { depth: usize },
}

impl LexError {
    /// Get the error kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter(_) => "Unrecognized Character",
            Self::Indentation { .. } => "Indentation Error",
            Self::UnterminatedLiteral { .. } => "Unterminated Literal",
            Self::UnmatchedBracket(_) | Self::UnclosedBracket { .. } => "Bracket Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LexError::UnrecognizedCharacter('@').to_string(),
            "unrecognized character '@'"
        );
        assert_eq!(
            LexError::Indentation { current: 0, found: 2 }.to_string(),
            "indentation jumped from level 0 to level 2"
        );
        assert_eq!(
            LexError::UnterminatedLiteral { quote: '"' }.to_string(),
            "unterminated string literal, expected closing \""
        );
        assert_eq!(
            LexError::UnclosedBracket { depth: 2 }.to_string(),
            "2 bracket(s) left open at end of input"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(LexError::UnrecognizedCharacter('\t').kind(), "Unrecognized Character");
        assert_eq!(LexError::Indentation { current: 1, found: 3 }.kind(), "Indentation Error");
        assert_eq!(LexError::UnterminatedLiteral { quote: '\'' }.kind(), "Unterminated Literal");
        assert_eq!(LexError::UnmatchedBracket(')').kind(), "Bracket Error");
    }
}
