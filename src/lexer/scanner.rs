//! Lexer/Scanner implementation for the Ravenfall language
//!
//! This module converts source text into a flat token stream. Block structure
//! is derived from leading indentation (one unit per 4 spaces) and reported as
//! `NEWLINE`, `INDENT` and `DEDENT` tokens, except inside brackets where
//! expressions may span lines freely.

use tracing::{debug, trace};

use super::options::LexerOptions;
use super::token::{keyword, Token, TokenType};
use crate::error::{LexError, LexResult};

/// One level of indentation
const INDENT_UNIT: &str = "    ";

/// Lexer for Ravenfall source code
pub struct Lexer<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    /// Open minus closed brackets; may go negative unless strict.
    bracket_depth: i64,
    indent_level: usize,
    options: LexerOptions,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Create a lexer with explicit options
    pub fn with_options(source: &'src str, options: LexerOptions) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            bracket_depth: 0,
            indent_level: 0,
            options,
        }
    }

    /// Tokenize the source code
    ///
    /// Consumes the lexer, so every scan starts from fresh state. The returned
    /// stream always ends with a single `EOF` token. Indentation still open at
    /// end of input is left open.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        debug!(bytes = self.source.len(), "tokenizing");

        while let Some(c) = self.peek() {
            self.start = self.current;
            self.scan_token(c)?;
        }

        if self.options.strict_brackets && self.bracket_depth > 0 {
            let depth = self.bracket_depth.unsigned_abs() as usize;
            return Err(self.error(LexError::UnclosedBracket { depth }));
        }

        self.tokens.push(Token::eof());

        debug!(
            tokens = self.tokens.len(),
            indent_level = self.indent_level,
            "tokenized"
        );
        Ok(self.tokens)
    }

    /// Scan a single token
    fn scan_token(&mut self, c: char) -> LexResult<()> {
        match c {
            ' ' => {
                self.advance();
                Ok(())
            }
            '\n' => self.scan_newline(),
            '\'' | '"' => self.scan_string(c),
            _ => {
                if let Some(token_type) = TokenType::from_symbol(c) {
                    self.scan_symbol(token_type)
                } else if c.is_numeric() {
                    self.scan_number()
                } else if c.is_alphabetic() || c == '_' {
                    self.scan_word()
                } else {
                    Err(self.error(LexError::UnrecognizedCharacter(c)))
                }
            }
        }
    }

    /// Scan a newline and the indentation that follows it
    fn scan_newline(&mut self) -> LexResult<()> {
        self.advance();

        let mut candidate = 0;
        while self.rest().starts_with(INDENT_UNIT) {
            self.current += INDENT_UNIT.len();
            candidate += 1;
        }

        if self.bracket_depth > 0 {
            trace!(depth = self.bracket_depth, "newline inside brackets ignored");
            return Ok(());
        }

        self.tokens.push(Token::new(TokenType::Newline, "\n"));

        if candidate > self.indent_level {
            if candidate - self.indent_level != 1 {
                return Err(self.error(LexError::Indentation {
                    current: self.indent_level,
                    found: candidate,
                }));
            }
            trace!(level = candidate, "indent");
            self.indent_level = candidate;
            self.tokens.push(Token::new(TokenType::Indent, ""));
        }

        // Dedenting may close several levels at once.
        while candidate < self.indent_level {
            self.indent_level -= 1;
            trace!(level = self.indent_level, "dedent");
            self.tokens.push(Token::new(TokenType::Dedent, ""));
        }

        Ok(())
    }

    /// Scan a single-character operator or delimiter
    fn scan_symbol(&mut self, token_type: TokenType) -> LexResult<()> {
        let c = self.advance();

        if token_type.is_opening_bracket() {
            self.bracket_depth += 1;
        } else if token_type.is_closing_bracket() {
            if self.options.strict_brackets && self.bracket_depth <= 0 {
                return Err(self.error(LexError::UnmatchedBracket(c)));
            }
            self.bracket_depth -= 1;
        }

        self.add_token(token_type);
        Ok(())
    }

    /// Scan a string literal
    ///
    /// The body is taken verbatim up to the next matching quote: no escapes,
    /// and the other quote style is an ordinary character.
    fn scan_string(&mut self, quote: char) -> LexResult<()> {
        self.advance();

        let Some(length) = self.rest().find(quote) else {
            return Err(self.error(LexError::UnterminatedLiteral { quote }));
        };

        let value = &self.rest()[..length];
        self.current += length + quote.len_utf8();
        self.tokens.push(Token::new(TokenType::String, value));
        Ok(())
    }

    /// Scan a number literal (integer or float)
    fn scan_number(&mut self) -> LexResult<()> {
        let mut seen_point = false;

        while let Some(c) = self.peek() {
            if c.is_numeric() {
                self.advance();
            } else if c == '.' && !seen_point {
                seen_point = true;
                self.advance();
            } else {
                break;
            }
        }

        let token_type = if seen_point {
            TokenType::Float
        } else {
            TokenType::Int
        };
        self.add_token(token_type);
        Ok(())
    }

    /// Scan an identifier, keyword or boolean literal
    fn scan_word(&mut self) -> LexResult<()> {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let word = self.lexeme();
        let token_type = match word {
            "true" | "false" => TokenType::Boolean,
            _ => keyword(word).unwrap_or(TokenType::Identifier),
        };

        self.add_token(token_type);
        Ok(())
    }

    /// Add a token spanning the current lexeme
    fn add_token(&mut self, token_type: TokenType) {
        let value = self.lexeme();
        self.tokens.push(Token::new(token_type, value));
    }

    /// Advance past the current character
    fn advance(&mut self) -> char {
        let c = self.peek().unwrap_or('\0');
        self.current += c.len_utf8();
        c
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Unconsumed input
    fn rest(&self) -> &'src str {
        &self.source[self.current..]
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn error(&self, error: LexError) -> LexError {
        debug!(%error, offset = self.current, "lexing failed");
        error
    }
}
