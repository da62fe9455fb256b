//! Edge case tests for vexc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("Var {} = 1;", name));
        assert_eq!(t[1].lexeme, name);
        assert_eq!(t[2].column, 10006);
    }

    #[test]
    fn test_edge_no_whitespace() {
        assert_eq!(
            kinds("a+=b*c"),
            vec![
                TokenKind::Identifier,
                TokenKind::PlusAssign,
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::LeftParen).count(), 3);
        assert_eq!(t.iter().filter(|k| **k == TokenKind::RightParen).count(), 3);
    }

    #[test]
    fn test_edge_bools_and_null() {
        assert_eq!(
            kinds("true false null"),
            vec![TokenKind::True, TokenKind::False, TokenKind::Null]
        );
    }

    #[test]
    fn test_edge_hash_and_at() {
        assert_eq!(kinds("#@"), vec![TokenKind::Hash, TokenKind::At]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("Define\r\nPlayer\r\n");
        assert_eq!((t[1].line, t[1].column), (2, 1));
    }

    #[test]
    fn test_edge_tabs_count_as_one_column() {
        let t = lex_all("\tx");
        assert_eq!(t[0].column, 2);
    }

    #[test]
    fn test_edge_comment_directly_after_token() {
        assert_eq!(
            kinds("a//b\nc/**/d"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_float_then_dot_dot() {
        assert_eq!(
            kinds("1.5..2"),
            vec![TokenKind::FloatLiteral, TokenKind::DoubleDot, TokenKind::IntegerLiteral]
        );
    }

    #[test]
    fn test_edge_bom() {
        let t = lex_all("\u{FEFF}Using");
        assert_eq!(t[0].kind, TokenKind::Using);
        assert_eq!(t[0].column, 1);
        assert_eq!(t[0].span.start, 3);
    }

    #[test]
    fn test_edge_string_with_comment_markers() {
        let t = lex_all("\"// not /* a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme, "// not /* a comment");
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unexpected_chars() {
        let mut lexer = Lexer::new("$ ` \\");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[..3].iter().all(Token::is_error));
        let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, vec![1, 3, 5, 6]);
        assert_eq!(lexer.handler().error_count(), 3);
    }

    #[test]
    fn test_err_non_ascii_is_one_error_per_char() {
        let mut lexer = Lexer::new("é→");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].column, 2);
        assert_eq!(tokens[1].span.start, 2);
    }

    #[test]
    fn test_err_nul_byte() {
        let tokens = Lexer::new("a\0b").tokenize();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_err_recovery_continues() {
        let t = kinds("Set $ Health");
        assert_eq!(
            t,
            vec![TokenKind::Set, TokenKind::Unknown, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_err_diagnostics_in_source_order() {
        let mut lexer = Lexer::new("$\n'ab\n\"open");
        lexer.tokenize();
        let lines: Vec<_> = lexer
            .into_diagnostics()
            .iter()
            .map(|d| (d.span.line, d.message.clone()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (1, "Unexpected character".to_string()),
                (2, "Unterminated Character Literal".to_string()),
                (3, "Unterminated String".to_string()),
            ]
        );
    }
}
