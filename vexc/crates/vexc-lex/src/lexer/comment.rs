//! Whitespace and comment skipping.

use vexc_util::{DiagnosticBuilder, DiagnosticCode};

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Skips spaces, tabs, carriage returns, newlines, `//` line comments
    /// and `/* */` block comments. Called before lexing each token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.next_char() == '/' => self.skip_line_comment(),
                '/' if self.cursor.next_char() == '*' => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment, leaving the newline for the caller.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment up to and including the first `*/`.
    ///
    /// Block comments do not nest. A comment that reaches end of input is
    /// skipped anyway and reported as a warning.
    fn skip_block_comment(&mut self) {
        self.mark_token_start();
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.next_char() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }

        tracing::debug!("block comment runs to end of input");
        self.warn(
            DiagnosticBuilder::warning("Unterminated block comment")
                .code(DiagnosticCode::W_LEXER_UNTERMINATED_COMMENT)
                .help("close the comment with `*/`"),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use vexc_util::{Level, Span};

    #[test]
    fn test_whitespace_only() {
        let tokens = Lexer::new(" \t\r\n  \n").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_comments_only() {
        let tokens = Lexer::new("// one\n/* two\nthree */ // four").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_line_comment_at_eof() {
        let tokens = Lexer::new("Set // trailing").tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Set);
    }

    #[test]
    fn test_block_comment_tracks_lines() {
        let tokens: Vec<_> = Lexer::new("/* line1\nline2 */ Player").collect();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[0].column, 10);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let kinds: Vec<_> = Lexer::new("/* a /* b */ c */").map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Star, TokenKind::Slash]);
    }

    #[test]
    fn test_slash_is_not_a_comment() {
        let kinds: Vec<_> = Lexer::new("a / b /= c").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::SlashAssign,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_warns() {
        let mut lexer = Lexer::new("Set /* never closed\n");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::EndOfFile);

        let diags = lexer.into_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].level, Level::Warning);
        assert_eq!(diags[0].span, Span::new(4, 20, 1, 5));
        assert_eq!(
            diags[0].snippets[0].format(),
            "  1 | Set /* never closed\n    |     ^^^^^^^^^^^^^^^"
        );
    }

    #[test]
    fn test_unterminated_comment_is_not_an_error_token() {
        let mut lexer = Lexer::new("/*/");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 1);
        assert!(!lexer.handler().has_errors());
        assert_eq!(lexer.handler().warning_count(), 1);
    }
}
