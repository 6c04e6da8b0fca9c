//! Diagnostic formatting for better error messages
//!
//! Renders a lexer error as a colored headline followed by a hint on how
//! to fix the offending source.

use super::LexError;
use colored::Colorize;

/// Diagnostic information for displaying errors
pub struct Diagnostic {
    error: LexError,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LexError) -> Self {
        Self { error }
    }

    pub fn error(&self) -> &LexError {
        &self.error
    }

    /// Format the diagnostic with color
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error));

        if let Some(help) = self.help() {
            output.push_str(&format!("  {} {}\n", "= help:".blue().bold(), help));
        }

        output
    }

    fn help(&self) -> Option<String> {
        match &self.error {
            LexError::UnrecognizedCharacter('\t') => {
                Some("indent with 4 spaces; tabs are not allowed outside strings".to_string())
            }
            LexError::UnrecognizedCharacter('\r') => {
                Some("use '\\n' line endings".to_string())
            }
            LexError::UnrecognizedCharacter(_) => None,
            LexError::Indentation { current, .. } => Some(format!(
                "indent by a single 4-space unit, at most to level {}",
                current + 1
            )),
            LexError::UnterminatedLiteral { quote } => {
                Some(format!("add a closing {} to end the string", quote))
            }
            LexError::UnmatchedBracket(_) => {
                Some("remove the bracket or add its opening counterpart".to_string())
            }
            LexError::UnclosedBracket { .. } => {
                Some("close every '(', '[' and '{' before the end of input".to_string())
            }
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Self::new(error)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
