//! Inline spans: emphasis/strong, links and strikethrough.

use super::MarkupParser;
use super::cursor::{is_blank_kind, is_space_run, next_kind, previous_kind};
use crate::element::{Element, Tag};
use crate::token::TokenKind;

/// Tags toggled by an `*`/`_` run of the given length, outermost first.
fn emphasis_tags(count: usize) -> &'static [Tag] {
    match count {
        1 => &[Tag::Emphasis],
        2 => &[Tag::Strong],
        _ => &[Tag::Strong, Tag::Emphasis],
    }
}

impl MarkupParser<'_> {
    pub(super) fn try_parse_emphasis(&mut self) -> bool {
        let token = self.token();
        if !matches!(token.kind, TokenKind::Asterisk | TokenKind::Underscore)
            || self.open.in_preformatted()
        {
            return false;
        }

        let tags = emphasis_tags(token.count);
        let prev = previous_kind(self.tokens, self.pos);
        let next = next_kind(self.tokens, self.pos);

        let any_open = tags.iter().any(|&tag| self.open.inlines.is_open(tag));
        if any_open && !is_blank_kind(prev) {
            for &tag in tags.iter().rev() {
                if self.open.inlines.is_open(tag) {
                    self.open.inlines.set(tag, false);
                    self.emit(Element::close(tag));
                }
            }
            return true;
        }

        let any_closed = tags.iter().any(|&tag| !self.open.inlines.is_open(tag));
        if any_closed && next.is_some() && !is_blank_kind(next) {
            for &tag in tags {
                if !self.open.inlines.is_open(tag) {
                    self.open.inlines.set(tag, true);
                    self.emit(Element::open(tag));
                }
            }
            return true;
        }

        log::trace!("Dropping unflanked {} run at token {}", token.kind, self.pos);
        true
    }

    /// `[caption](url)`. The caption and URL are emitted as separate spans;
    /// pairing them is left to the consumer.
    pub(super) fn try_parse_link(&mut self) -> bool {
        let inlines = &mut self.open.inlines;
        let element = match self.tokens[self.pos].kind {
            TokenKind::LeftBracket if !inlines.caption => {
                inlines.caption = true;
                Element::open(Tag::LinkCaption).with_value("[")
            }
            TokenKind::RightBracket if inlines.caption => {
                inlines.caption = false;
                inlines.expect_url = true;
                Element::close(Tag::LinkCaption).with_value("]")
            }
            TokenKind::LeftParen if inlines.expect_url && !inlines.url => {
                inlines.url = true;
                inlines.expect_url = false;
                Element::open(Tag::LinkUrl).with_value("(")
            }
            TokenKind::RightParen if inlines.url => {
                inlines.url = false;
                Element::close(Tag::LinkUrl).with_value(")")
            }
            _ => return false,
        };
        self.emit(element);
        true
    }

    /// `-` delimited span. Dashes inside table cells are always text.
    pub(super) fn try_parse_strikethrough(&mut self) -> bool {
        if self.token().kind != TokenKind::Dash || self.open.cell_open() {
            return false;
        }

        let open = self.open.inlines.strikethrough;
        if !open {
            let next = next_kind(self.tokens, self.pos);
            if next.is_none() || is_space_run(next) {
                return false;
            }
            self.open.inlines.strikethrough = true;
            self.emit(Element::open(Tag::Strikethrough));
            return true;
        }

        if is_space_run(previous_kind(self.tokens, self.pos)) {
            return false;
        }
        self.open.inlines.strikethrough = false;
        self.emit(Element::close(Tag::Strikethrough));
        true
    }
}
