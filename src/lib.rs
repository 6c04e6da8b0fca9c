//! # Ravenfall Lexer
//!
//! Tokenizer for Ravenfall, a small indentation-sensitive language.
//!
//! ## Architecture
//!
//! - `lexer`: token definitions, lexer options and the scanner
//! - `error`: error kinds and diagnostic formatting
//!
//! The scanner turns source text into a flat stream of [`Token`]s. Leading
//! indentation (4 spaces per level) becomes `NEWLINE`/`INDENT`/`DEDENT`
//! tokens, which are suppressed while any bracket is open. The stream always
//! ends with a single `EOF` token.
//!
//! ```
//! use ravenfall::{tokenize, TokenType};
//!
//! let tokens = tokenize("let x = 5").unwrap();
//! let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
//! assert_eq!(
//!     types,
//!     [TokenType::Let, TokenType::Identifier, TokenType::Equals, TokenType::Int, TokenType::Eof]
//! );
//! ```

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexResult};
pub use lexer::{Lexer, LexerOptions, Token, TokenType};

/// Version of the Ravenfall lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize source text with the default options
///
/// Returns the complete token stream, or the first error encountered.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    tokenize_with(source, LexerOptions::default())
}

/// Tokenize source text with explicit options
pub fn tokenize_with(source: &str, options: LexerOptions) -> LexResult<Vec<Token>> {
    Lexer::with_options(source, options).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_tokenize_with_strict_options() {
        assert!(tokenize("(").is_ok());
        assert_eq!(
            tokenize_with("(", LexerOptions::strict()),
            Err(LexError::UnclosedBracket { depth: 1 })
        );
    }
}
