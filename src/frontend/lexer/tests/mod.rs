//! Lexer unit tests

use crate::frontend::lexer::lex;
use crate::frontend::lexer::tokens::TokenKind;
use crate::util::span::{SourceFile, Span};

fn lex_text(text: &str) -> (Vec<crate::frontend::lexer::tokens::Token>, Vec<crate::util::diagnostic::Diagnostic>) {
    lex(&SourceFile::new("<test>", text))
}

mod basic_tests {
    use super::*;

    #[test]
    fn empty_source_yields_only_eof() {
        let (tokens, diagnostics) = lex_text("");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn whitespace_is_skipped() {
        let (tokens, diagnostics) = lex_text("   \t\r\n   ");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn eof_is_always_last() {
        let (tokens, _) = lex_text("let x = 1;");
        assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));
        assert_eq!(
            tokens.iter().filter(|t| matches!(t.kind, TokenKind::Eof)).count(),
            1
        );
    }

    #[test]
    fn identifiers() {
        let (tokens, _) = lex_text("amogus _private foo_bar2");
        assert_eq!(tokens.len(), 4);
        for (token, name) in tokens.iter().zip(["amogus", "_private", "foo_bar2"]) {
            match &token.kind {
                TokenKind::Identifier(n) => assert_eq!(n, name),
                kind => panic!("expected identifier, got {:?}", kind),
            }
        }
    }

    #[test]
    fn line_comment_is_skipped() {
        let (tokens, diagnostics) = lex_text("1 // the rest is gone + 2\n3");
        assert_eq!(tokens.len(), 3);
        assert!(matches!(tokens[0].kind, TokenKind::Int64(1)));
        assert!(matches!(tokens[1].kind, TokenKind::Int64(3)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn comment_at_end_of_input() {
        let (tokens, diagnostics) = lex_text("// nothing after this");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
        assert!(diagnostics.is_empty());
    }
}

mod keyword_tests {
    use super::*;

    #[test]
    fn keywords_are_classified() {
        let (tokens, _) = lex_text("def let omg");
        assert!(matches!(tokens[0].kind, TokenKind::KwDef));
        assert!(matches!(tokens[1].kind, TokenKind::KwLet));
        assert!(matches!(tokens[2].kind, TokenKind::KwOmg));
    }

    #[test]
    fn keyword_prefix_is_still_identifier() {
        let (tokens, _) = lex_text("definition letter omgwow");
        for token in &tokens[..3] {
            assert!(matches!(token.kind, TokenKind::Identifier(_)));
        }
    }

    #[test]
    fn classification_predicates() {
        assert!(TokenKind::KwDef.is_keyword());
        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::StarStar.is_operator());
        assert!(TokenKind::Semicolon.is_symbol());
        assert!(TokenKind::Arrow.is_symbol());
        assert!(!TokenKind::Identifier("x".into()).is_keyword());
        assert!(!TokenKind::Eof.is_operator());
        assert!(TokenKind::Int64(1).is_literal());
    }
}

mod number_tests {
    use super::*;

    #[test]
    fn int64_literal() {
        let (tokens, diagnostics) = lex_text("69420");
        assert!(matches!(tokens[0].kind, TokenKind::Int64(69420)));
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn uint64_literal_with_suffix() {
        let (tokens, _) = lex_text("4u 8U");
        assert!(matches!(tokens[0].kind, TokenKind::UInt64(4)));
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert!(matches!(tokens[1].kind, TokenKind::UInt64(8)));
    }

    #[test]
    fn float64_literal() {
        let (tokens, _) = lex_text("3.25");
        match tokens[0].kind {
            TokenKind::Float64(v) => assert_eq!(v, 3.25),
            ref kind => panic!("expected float64, got {:?}", kind),
        }
    }

    #[test]
    fn dot_without_digits_is_not_a_float() {
        let (tokens, _) = lex_text("4.");
        assert!(matches!(tokens[0].kind, TokenKind::Int64(4)));
        assert!(matches!(tokens[1].kind, TokenKind::Dot));
    }

    #[test]
    fn int64_overflow_emits_invalid_token_and_diagnostic() {
        let (tokens, diagnostics) = lex_text("99999999999999999999");
        assert!(matches!(tokens[0].kind, TokenKind::Invalid));
        assert_eq!(tokens[0].span, Span::new(0, 20));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Value too large to store in an int64"
        );
    }

    #[test]
    fn uint64_overflow_emits_invalid_token_and_diagnostic() {
        let (tokens, diagnostics) = lex_text("99999999999999999999u");
        assert!(matches!(tokens[0].kind, TokenKind::Invalid));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Value too large to store in a uint64"
        );
    }

    #[test]
    fn lexing_continues_after_overflow() {
        let (tokens, diagnostics) = lex_text("99999999999999999999 + 1");
        assert!(matches!(tokens[0].kind, TokenKind::Invalid));
        assert!(matches!(tokens[1].kind, TokenKind::Plus));
        assert!(matches!(tokens[2].kind, TokenKind::Int64(1)));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn int64_max_fits() {
        let (tokens, diagnostics) = lex_text("9223372036854775807");
        assert!(matches!(tokens[0].kind, TokenKind::Int64(i64::MAX)));
        assert!(diagnostics.is_empty());
    }
}

mod string_tests {
    use super::*;

    #[test]
    fn simple_string() {
        let (tokens, diagnostics) = lex_text("\"hello world\"");
        match &tokens[0].kind {
            TokenKind::Str(v) => assert_eq!(v, "hello world"),
            kind => panic!("expected string, got {:?}", kind),
        }
        assert_eq!(tokens[0].span, Span::new(0, 13));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn escape_sequences_are_decoded() {
        let (tokens, diagnostics) = lex_text(r#""a\nb\tc\"d\\e\a\b\e\f\r""#);
        match &tokens[0].kind {
            TokenKind::Str(v) => {
                assert_eq!(v, "a\nb\tc\"d\\e\x07\x08\x1b\x0c\r");
            }
            kind => panic!("expected string, got {:?}", kind),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unknown_escape_keeps_character() {
        let (tokens, diagnostics) = lex_text(r#""\q""#);
        match &tokens[0].kind {
            TokenKind::Str(v) => assert_eq!(v, "q"),
            kind => panic!("expected string, got {:?}", kind),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unterminated_string_is_anchored_at_opening_quote() {
        let (tokens, diagnostics) = lex_text("let s = \"never closed");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unterminated string");
        assert_eq!(diagnostics[0].token.column, 9);
        assert_eq!(diagnostics[0].token.span.beg, 8);
        // Lexing still terminates with Eof
        assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));
    }

    #[test]
    fn unterminated_string_ending_in_backslash() {
        let (tokens, diagnostics) = lex_text("\"oops\\");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unterminated string");
        assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));
    }

    #[test]
    fn string_may_span_lines() {
        let (tokens, diagnostics) = lex_text("\"two\nlines\"");
        match &tokens[0].kind {
            TokenKind::Str(v) => assert_eq!(v, "two\nlines"),
            kind => panic!("expected string, got {:?}", kind),
        }
        assert!(diagnostics.is_empty());
    }
}

mod operator_tests {
    use super::*;

    #[test]
    fn single_character_operators() {
        let (tokens, _) = lex_text("+ - * / % & | ~ =");
        let expected = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Amp,
            TokenKind::Pipe,
            TokenKind::Tilde,
            TokenKind::Eq,
        ];
        for (token, kind) in tokens.iter().zip(&expected) {
            assert_eq!(&token.kind, kind);
        }
    }

    #[test]
    fn symbols() {
        let (tokens, _) = lex_text("( ) [ ] { } -> . , : ;");
        let expected = [
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Arrow,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
        ];
        for (token, kind) in tokens.iter().zip(&expected) {
            assert_eq!(&token.kind, kind);
        }
    }

    #[test]
    fn double_star_binds_as_one_token() {
        let (tokens, _) = lex_text("2 ** 3 * 4");
        assert!(matches!(tokens[1].kind, TokenKind::StarStar));
        assert!(matches!(tokens[3].kind, TokenKind::Star));
    }

    #[test]
    fn arrow_is_disambiguated_from_minus() {
        let (tokens, _) = lex_text("-> - >");
        assert!(matches!(tokens[0].kind, TokenKind::Arrow));
        assert!(matches!(tokens[1].kind, TokenKind::Minus));
        assert!(matches!(tokens[2].kind, TokenKind::Invalid));
    }

    #[test]
    fn invalid_character_is_tokenized_and_reported() {
        let (tokens, diagnostics) = lex_text("1 @ 2");
        assert!(matches!(tokens[0].kind, TokenKind::Int64(1)));
        assert!(matches!(tokens[1].kind, TokenKind::Invalid));
        assert_eq!(tokens[1].span.len(), 1);
        assert!(matches!(tokens[2].kind, TokenKind::Int64(2)));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Invalid character '@'");
    }
}

mod position_tests {
    use super::*;

    #[test]
    fn tokens_carry_line_and_column() {
        let (tokens, _) = lex_text("let x = 1;\nlet y = 2;");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
        assert_eq!((tokens[5].line, tokens[5].column), (2, 1));
        assert_eq!((tokens[6].line, tokens[6].column), (2, 5));
    }

    #[test]
    fn eof_is_positioned_past_the_last_token() {
        let (tokens, _) = lex_text("ab\ncd");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.span, Span::new(5, 5));
        assert_eq!((eof.line, eof.column), (2, 3));
    }

    #[test]
    fn diagnostic_line_text_matches_source_line() {
        let (_, diagnostics) = lex_text("let a = 1;\nlet b = 99999999999999999999;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].token.line, 2);
        assert_eq!(diagnostics[0].line_text, "let b = 99999999999999999999;");
    }
}

mod round_trip_tests {
    use super::*;

    /// Re-lexing the exact substring spanned by a literal token yields a
    /// token of the same kind and payload
    #[test]
    fn literal_tokens_round_trip() {
        let text = "let a = 42 + 3.5 * 7u; omg \"hi\\n\" ; foo(1, 2)";
        let source = SourceFile::new("<test>", text);
        let (tokens, diagnostics) = lex(&source);
        assert!(diagnostics.is_empty());

        for token in &tokens {
            if !token.kind.is_literal() {
                continue;
            }
            let substring = source.slice(token.span);
            let (relexed, rediags) = lex_text(substring);
            assert!(rediags.is_empty(), "re-lex of {:?} errored", substring);
            assert_eq!(
                relexed[0].kind, token.kind,
                "round trip failed for {:?}",
                substring
            );
        }
    }
}
