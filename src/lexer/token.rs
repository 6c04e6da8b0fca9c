//! Token definitions for the Ravenfall language
//!
//! This module defines the closed set of token types, the single-character
//! symbol table and the keyword table used during lexical analysis.

use std::fmt;

/// A token in the Ravenfall language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Exact source text consumed, or empty for synthetic tokens.
    pub value: String,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
        }
    }

    /// The end-of-input marker
    pub fn eof() -> Self {
        Self::new(TokenType::Eof, "")
    }

    /// Whether this token encodes block structure rather than source text
    pub fn is_structural(&self) -> bool {
        self.token_type.is_structural()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.token_type, self.value)
    }
}

/// Token types in the Ravenfall language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Literals
    Int,
    Float,
    String,
    Boolean,

    // Operators
    Equals,     // =
    Add,        // +
    Subtract,   // -
    Multiply,   // *
    Divide,     // /
    Modulo,     // %

    // Delimiters
    OpenParen,      // (
    CloseParen,     // )
    OpenBrace,      // {
    CloseBrace,     // }
    OpenBracket,    // [
    CloseBracket,   // ]
    Period,         // .
    Comma,          // ,
    Colon,          // :

    // Structure
    Indent,
    Dedent,
    Newline,

    Identifier,
    Let,
    Mut,
    Eof,
}

impl TokenType {
    /// Look up a character in the single-character symbol table
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equals),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '.' => Some(Self::Period),
            ',' => Some(Self::Comma),
            ':' => Some(Self::Colon),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '{' => Some(Self::OpenBrace),
            '}' => Some(Self::CloseBrace),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            _ => None,
        }
    }

    /// Stable catalog name, as seen by downstream consumers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Equals => "EQUALS",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Modulo => "MODULO",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::OpenBrace => "OPEN_BRACE",
            Self::CloseBrace => "CLOSE_BRACE",
            Self::OpenBracket => "OPEN_BRACKET",
            Self::CloseBracket => "CLOSE_BRACKET",
            Self::Period => "PERIOD",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Indent => "INDENT",
            Self::Dedent => "DEDENT",
            Self::Newline => "NEWLINE",
            Self::Identifier => "IDENTIFIER",
            Self::Let => "LET",
            Self::Mut => "MUT",
            Self::Eof => "EOF",
        }
    }

    pub fn is_opening_bracket(&self) -> bool {
        matches!(self, Self::OpenParen | Self::OpenBrace | Self::OpenBracket)
    }

    pub fn is_closing_bracket(&self) -> bool {
        matches!(self, Self::CloseParen | Self::CloseBrace | Self::CloseBracket)
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Indent | Self::Dedent | Self::Newline)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words and the token types they produce
pub const KEYWORDS: &[(&str, TokenType)] = &[("let", TokenType::Let), ("mut", TokenType::Mut)];

/// Get the keyword token type for a word, if it is reserved
pub fn keyword(word: &str) -> Option<TokenType> {
    KEYWORDS
        .iter()
        .find(|(reserved, _)| *reserved == word)
        .map(|(_, token_type)| *token_type)
}
