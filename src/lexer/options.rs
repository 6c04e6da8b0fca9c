//! Lexer configuration

/// Options controlling how strictly the lexer treats bracket nesting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerOptions {
    /// Reject unmatched closing brackets and brackets left open at end of input.
    pub strict_brackets: bool,
}

impl LexerOptions {
    /// Options that accept any bracket nesting (the default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with bracket balance enforced
    pub fn strict() -> Self {
        Self::new().with_strict_brackets(true)
    }

    pub fn with_strict_brackets(mut self, enabled: bool) -> Self {
        self.strict_brackets = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert!(!LexerOptions::default().strict_brackets);
        assert_eq!(LexerOptions::new(), LexerOptions::default());
    }

    #[test]
    fn test_strict() {
        assert!(LexerOptions::strict().strict_brackets);
        assert!(!LexerOptions::strict().with_strict_brackets(false).strict_brackets);
    }
}
