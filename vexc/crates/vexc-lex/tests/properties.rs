//! Property tests for the lexer.

use proptest::prelude::*;
use vexc_lex::{keyword_from_ident, tokenize, Lexer, TokenKind};

proptest! {
    #[test]
    fn always_ends_with_exactly_one_eof(source in "\\PC{0,200}") {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn positions_never_go_backwards(source in "[ -~\\n\\t]{0,200}") {
        let tokens = tokenize(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start);
            prop_assert!(pair[0].span.end <= pair[1].span.start);
            prop_assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
        }
    }

    #[test]
    fn spans_stay_inside_source(source in "\\PC{0,120}") {
        for token in tokenize(&source) {
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(token.span.end <= source.len());
            prop_assert!(source.is_char_boundary(token.span.start));
            prop_assert!(source.is_char_boundary(token.span.end));
        }
    }

    #[test]
    fn identifiers_round_trip(name in "[A-Za-z][A-Za-z0-9_]{0,30}") {
        let tokens = tokenize(&name);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].lexeme, &name);
        let expected = keyword_from_ident(&name).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn integers_round_trip(value in 0i64..=i64::MAX) {
        let tokens = tokenize(&value.to_string());
        prop_assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        prop_assert_eq!(tokens[0].int_value(), Some(value));
    }

    #[test]
    fn error_tokens_match_diagnostics(source in "[ -~\\n]{0,120}") {
        let mut lexer = Lexer::new(&source);
        let errors = lexer.tokenize().iter().filter(|t| t.is_error()).count();
        prop_assert_eq!(lexer.handler().error_count(), errors);
    }

    #[test]
    fn lexemes_of_plain_tokens_are_source_text(source in "[A-Za-z0-9_+\\-*/%=!<>&|^~.?:;,#@(){}\\[\\] ]{0,120}") {
        for token in tokenize(&source) {
            if token.kind != TokenKind::Unknown {
                prop_assert_eq!(token.span.text(&source).unwrap(), token.lexeme.as_str());
            }
        }
    }
}
