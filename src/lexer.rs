//! Character-level tokenizer.
//!
//! Walks the input by Unicode scalar value and coalesces runs of identical
//! runnable kinds (whitespace, tabs, `#`, `*`, `_`, digits, `-`, backticks and
//! plain text) into single tokens carrying a repeat count.

use crate::token::{Token, TokenKind};

const NULL_REPLACEMENT: char = '\u{FFFD}';

/// Tokenize `text`. Never fails: every character lands in some kind.
pub fn lex(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(8 + text.len() / 4);
    // Newline character that may still fold with its CR/LF partner
    let mut pending_newline: Option<char> = None;

    for c in text.chars() {
        if c == '\r' || c == '\n' {
            match pending_newline {
                Some(prev) if prev != c => {
                    // CR LF or LF CR
                    pending_newline = None;
                }
                _ => {
                    tokens.push(Token {
                        kind: TokenKind::LineEnd,
                        text: "\n".to_string(),
                        count: 1,
                    });
                    pending_newline = Some(c);
                }
            }
            continue;
        }
        pending_newline = None;

        let c = if c == '\0' { NULL_REPLACEMENT } else { c };
        let kind = TokenKind::classify(c);

        if kind.is_runnable()
            && let Some(last) = tokens.last_mut()
            && last.kind == kind
        {
            last.push(c);
            continue;
        }

        tokens.push(Token::new(kind, c));
    }

    log::trace!("Lexed {} chars into {} tokens", text.len(), tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        lex(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_whitespace_run_is_coalesced() {
        let tokens = lex("    x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[0].count, 4);
        assert_eq!(tokens[0].text, " ");
    }

    #[test]
    fn test_digits_accumulate() {
        let tokens = lex("2024.");
        assert_eq!(tokens[0].kind, TokenKind::Digit);
        assert_eq!(tokens[0].text, "2024");
        assert_eq!(tokens[0].count, 4);
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_text_catch_all_accumulates() {
        let tokens = lex("héllo");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "héllo");
        assert_eq!(tokens[0].count, 5);
    }

    #[test]
    fn test_non_runnable_kinds_are_not_merged() {
        assert_eq!(
            kinds("[[.."),
            vec![
                TokenKind::LeftBracket,
                TokenKind::LeftBracket,
                TokenKind::Dot,
                TokenKind::Dot
            ]
        );
    }

    #[test]
    fn test_crlf_folds_into_one_line_end() {
        assert_eq!(
            kinds("a\r\nb"),
            vec![TokenKind::Text, TokenKind::LineEnd, TokenKind::Text]
        );
        assert_eq!(
            kinds("a\n\rb"),
            vec![TokenKind::Text, TokenKind::LineEnd, TokenKind::Text]
        );
    }

    #[test]
    fn test_repeated_newlines_stay_separate() {
        assert_eq!(
            kinds("\n\n"),
            vec![TokenKind::LineEnd, TokenKind::LineEnd]
        );
        assert_eq!(
            kinds("\r\n\r\n"),
            vec![TokenKind::LineEnd, TokenKind::LineEnd]
        );
    }

    #[test]
    fn test_pending_newline_cleared_by_other_char() {
        assert_eq!(
            kinds("\nx\r"),
            vec![TokenKind::LineEnd, TokenKind::Text, TokenKind::LineEnd]
        );
    }

    #[test]
    fn test_null_byte_becomes_replacement_text() {
        let tokens = lex("a\0b");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "a\u{FFFD}b");
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            kinds("## Title\n"),
            vec![
                TokenKind::Hash,
                TokenKind::Whitespace,
                TokenKind::Text,
                TokenKind::LineEnd
            ]
        );
    }
}
