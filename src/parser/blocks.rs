//! Line-oriented constructs: list items, headers, quotes, preformatted blocks
//! and the line end that closes them.

use super::MarkupParser;
use super::context::LineBlock;
use super::cursor::{leading_width, next_kind, next_non_blank, starts_list_item};
use crate::element::{Element, Tag};
use crate::token::TokenKind;

const MAX_HEADER_LEVEL: usize = 6;

impl MarkupParser<'_> {
    /// `-` at the start of a line.
    pub(super) fn try_parse_unordered_item(&mut self) -> bool {
        if self.token().kind != TokenKind::Dash || !self.at_beginning_of_line() {
            return false;
        }

        let width = leading_width(self.tokens, self.pos);
        if self.open.close_item() {
            self.emit(Element::close(Tag::ListItem));
        }
        if self.open.open_unordered(width) {
            log::debug!("Opening unordered list at indent {}", width);
            self.emit(Element::open(Tag::UnorderedList).with_level(width));
        }
        self.open.open_item();
        self.emit(Element::open(Tag::ListItem).with_level(width));
        true
    }

    /// Digits followed by `.` at the start of a line.
    pub(super) fn try_parse_ordered_item(&mut self) -> bool {
        if self.token().kind != TokenKind::Digit
            || !self.at_beginning_of_line()
            || next_kind(self.tokens, self.pos) != Some(TokenKind::Dot)
        {
            return false;
        }

        let width = leading_width(self.tokens, self.pos);
        if self.open.close_item() {
            self.emit(Element::close(Tag::ListItem));
        }
        if self.open.open_ordered() {
            log::debug!("Opening ordered list at indent {}", width);
            self.emit(Element::open(Tag::OrderedList));
        }
        self.open.open_item();
        self.emit(Element::open(Tag::ListItem).with_level(width));

        // Skip the dot
        self.pos += 1;
        true
    }

    /// ATX header: 1-6 `#` at the start of a line followed by a space.
    pub(super) fn try_parse_header(&mut self) -> bool {
        let token = self.token();
        if token.kind != TokenKind::Hash
            || token.count > MAX_HEADER_LEVEL
            || self.open.line_block.is_some()
            || !self.at_beginning_of_line()
            || next_kind(self.tokens, self.pos) != Some(TokenKind::Whitespace)
        {
            return false;
        }

        let level = token.count;
        self.open.line_block = Some(LineBlock::Header(level));
        self.emit(Element::open(Tag::Header).with_level(level));

        // Trim whitespace after the marker
        while next_kind(self.tokens, self.pos) == Some(TokenKind::Whitespace) {
            self.pos += 1;
        }
        true
    }

    /// `>` at the start of a line. A quote directly following a quoted line
    /// continues the same block.
    pub(super) fn try_parse_quote(&mut self) -> bool {
        if self.token().kind != TokenKind::GreaterThan
            || self.open.line_block.is_some()
            || !self.at_beginning_of_line()
        {
            return false;
        }

        self.reopen_line_block(LineBlock::Quote);
        true
    }

    /// Indented line outside of lists. Indentation past the block indent is
    /// kept as text.
    pub(super) fn try_parse_preformatted(&mut self) -> bool {
        let indent = self.config.preformatted_indent.max(1);
        let token = self.token();
        if token.kind != TokenKind::Whitespace
            || token.count < indent
            || self.open.lists.is_some()
            || self.open.line_block.is_some()
            || !self.at_beginning_of_line()
            || starts_list_item(self.tokens, self.pos + 1)
        {
            return false;
        }

        let extra = token.count - indent;
        self.reopen_line_block(LineBlock::Preformatted);
        if extra > 0 {
            self.emit(Element::text(" ".repeat(extra)));
        }
        true
    }

    /// Open a quote/preformatted block, or continue the one closed by the
    /// previous line end by turning its closing marker into a line break.
    fn reopen_line_block(&mut self, block: LineBlock) {
        let tag = block.tag();
        self.open.line_block = Some(block);
        match self.out.last_mut() {
            Some(last) if last.is_close(tag) => {
                log::trace!("Continuing {} block", tag);
                *last = Element::open(Tag::LineBreak);
            }
            _ => self.emit(Element::open(tag)),
        }
    }

    pub(super) fn try_parse_line_end(&mut self) -> bool {
        if self.token().kind != TokenKind::LineEnd {
            return false;
        }

        if let Some(block) = self.open.line_block.take() {
            self.emit(Element::close(block.tag()).with_level(block.level()));
            return true;
        }
        if self.open.close_item() {
            self.emit(Element::close(Tag::ListItem));
            return true;
        }
        if self.open.close_unordered() {
            self.emit(Element::close(Tag::UnorderedList));
            return true;
        }
        if self.open.close_ordered() {
            self.emit(Element::close(Tag::OrderedList));
            return true;
        }

        if self.open.table.is_some() {
            match next_non_blank(self.tokens, self.pos) {
                Some((pipe, TokenKind::Pipe)) => {
                    self.continue_table();
                    self.pos = pipe;
                }
                _ => self.end_table(),
            }
            return true;
        }

        match self.out.last_mut() {
            Some(last) if matches!(last.tag, Tag::ListItem | Tag::UnorderedList | Tag::OrderedList) => {}
            Some(last) if last.tag == Tag::LineBreak => {
                // Two line ends in a row: paragraph break
                last.tag = Tag::EmptyLine;
            }
            Some(last) if last.tag == Tag::EmptyLine => {}
            _ => self.emit(Element::open(Tag::LineBreak)),
        }
        true
    }
}
