//! Lexical analysis module
//!
//! This module handles tokenization of Ravenfall source code.

pub mod options;
pub mod scanner;
pub mod token;

pub use options::LexerOptions;
pub use scanner::Lexer;
pub use token::{keyword, Token, TokenType, KEYWORDS};
