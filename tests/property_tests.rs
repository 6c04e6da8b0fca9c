//! Property-based tests for the Ravenfall lexer

use proptest::prelude::*;
use ravenfall::{tokenize, LexError, Token, TokenType};

fn count(tokens: &[Token], token_type: TokenType) -> usize {
    tokens.iter().filter(|t| t.token_type == token_type).count()
}

/// Indentation levels for a sequence of lines, each at most one deeper than the last.
///
/// The first line is always at level zero: no newline precedes it, so its
/// leading spaces never open an indentation level.
fn indent_levels() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..4, 0..24).prop_map(|raw| {
        let mut levels = Vec::with_capacity(raw.len() + 1);
        levels.push(0);
        let mut previous = 0;
        for wanted in raw {
            let level = wanted.min(previous + 1);
            levels.push(level);
            previous = level;
        }
        levels
    })
}

fn render_lines(levels: &[usize]) -> String {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| format!("{}x{}", "    ".repeat(*level), i))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Any input either fails cleanly or ends with exactly one empty EOF token.
    #[test]
    fn prop_stream_ends_with_single_eof(source in any::<String>()) {
        if let Ok(tokens) = tokenize(&source) {
            let last = tokens.last().expect("stream is never empty");
            prop_assert_eq!(last, &Token::eof());
            prop_assert_eq!(count(&tokens, TokenType::Eof), 1);
        }
    }

    #[test]
    fn prop_flat_input_has_no_structure(source in "[a-z0-9_ .,:=+*/%-]{0,64}") {
        let tokens = tokenize(&source).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.is_structural()));
    }

    #[test]
    fn prop_words_are_identifiers(word in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        prop_assume!(!matches!(word.as_str(), "true" | "false" | "let" | "mut"));
        let tokens = tokenize(&word).unwrap();
        prop_assert_eq!(tokens, vec![Token::new(TokenType::Identifier, word.clone()), Token::eof()]);
    }

    #[test]
    fn prop_string_body_is_verbatim(body in "[^']{0,64}") {
        let tokens = tokenize(&format!("'{}'", body)).unwrap();
        prop_assert_eq!(tokens, vec![Token::new(TokenType::String, body.clone()), Token::eof()]);
    }

    #[test]
    fn prop_unterminated_string_fails(body in "[^\"]{0,32}") {
        prop_assert_eq!(
            tokenize(&format!("x = \"{}", body)),
            Err(LexError::UnterminatedLiteral { quote: '"' })
        );
    }

    #[test]
    fn prop_brackets_suppress_structure(levels in prop::collection::vec(0usize..6, 0..12)) {
        let mut source = String::from("(");
        for (i, level) in levels.iter().enumerate() {
            source.push('\n');
            source.push_str(&"    ".repeat(*level));
            source.push_str(&format!("item{},", i));
        }
        source.push_str("\n)");

        let tokens = tokenize(&source).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.is_structural()));
        prop_assert_eq!(tokens.first().map(|t| t.token_type), Some(TokenType::OpenParen));
        prop_assert_eq!(tokens[tokens.len() - 2].token_type, TokenType::CloseParen);
    }

    /// Indentation is never closed implicitly at end of input.
    #[test]
    fn prop_indent_balance_matches_final_level(levels in indent_levels()) {
        let tokens = tokenize(&render_lines(&levels)).unwrap();
        let indents = count(&tokens, TokenType::Indent);
        let dedents = count(&tokens, TokenType::Dedent);
        prop_assert_eq!(indents - dedents, *levels.last().unwrap());
        prop_assert_eq!(count(&tokens, TokenType::Newline), levels.len() - 1);
    }

    #[test]
    fn prop_indent_jump_fails(base in 0usize..3, jump in 2usize..5) {
        let mut levels: Vec<usize> = (0..=base).collect();
        levels.push(base + jump);
        prop_assert_eq!(
            tokenize(&render_lines(&levels)),
            Err(LexError::Indentation { current: base, found: base + jump })
        );
    }
}
