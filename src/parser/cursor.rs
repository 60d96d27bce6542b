//! Lookahead and lookbehind over the token sequence.

use crate::token::{Token, TokenKind};

/// True when only whitespace/tabs separate `index` from the start of input or
/// the previous line end.
pub(crate) fn is_beginning_of_line(tokens: &[Token], index: usize) -> bool {
    tokens[..index]
        .iter()
        .rev()
        .find(|t| !t.is_blank())
        .is_none_or(|t| t.kind == TokenKind::LineEnd)
}

/// Width of the whitespace/tab run directly before `index`. Tabs count as one
/// column each.
pub(crate) fn leading_width(tokens: &[Token], index: usize) -> usize {
    tokens[..index]
        .iter()
        .rev()
        .take_while(|t| t.is_blank())
        .map(|t| t.count)
        .sum()
}

pub(crate) fn previous_kind(tokens: &[Token], index: usize) -> Option<TokenKind> {
    index.checked_sub(1).map(|i| tokens[i].kind)
}

pub(crate) fn next_kind(tokens: &[Token], index: usize) -> Option<TokenKind> {
    tokens.get(index + 1).map(|t| t.kind)
}

/// First token after `index` that is not whitespace/tab.
pub(crate) fn next_non_blank(tokens: &[Token], index: usize) -> Option<(usize, TokenKind)> {
    tokens
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, t)| !t.is_blank())
        .map(|(i, t)| (i, t.kind))
}

/// Whether a list marker (`-`, or digits followed by `.`) is the first
/// non-blank token at or after `index`.
pub(crate) fn starts_list_item(tokens: &[Token], index: usize) -> bool {
    let Some((i, t)) = tokens
        .iter()
        .enumerate()
        .skip(index)
        .find(|(_, t)| !t.is_blank())
    else {
        return false;
    };
    match t.kind {
        TokenKind::Dash => true,
        TokenKind::Digit => next_kind(tokens, i) == Some(TokenKind::Dot),
        _ => false,
    }
}

/// Emphasis runs do not open before, or close after, a space or tab.
pub(crate) fn is_blank_kind(kind: Option<TokenKind>) -> bool {
    matches!(kind, Some(TokenKind::Whitespace | TokenKind::Tab))
}

/// Strikethrough dashes only look at spaces; tabs and line ends flank.
pub(crate) fn is_space_run(kind: Option<TokenKind>) -> bool {
    kind == Some(TokenKind::Whitespace)
}
