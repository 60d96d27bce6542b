//! Markup parser: turns the token sequence into a flat element stream.
//!
//! A single left-to-right pass tries each construct in a fixed order; the
//! first one that claims the token wins and anything left over becomes text.
//! Some decisions rewrite the tail of the output after the fact (blank lines,
//! continued quote/preformatted blocks, table header rows).

use crate::config::Config;
use crate::element::{Element, Tag};
use crate::token::Token;

mod blocks;
mod context;
mod cursor;
mod inlines;
mod list_levels;
mod tables;

use context::OpenContexts;

pub use list_levels::normalize_list_levels;

pub struct MarkupParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    out: Vec<Element>,
    open: OpenContexts,
    config: &'a Config,
}

impl<'a> MarkupParser<'a> {
    pub fn new(tokens: &'a [Token], config: &'a Config) -> Self {
        Self {
            tokens,
            pos: 0,
            out: Vec::with_capacity(tokens.len()),
            open: OpenContexts::default(),
            config,
        }
    }

    pub fn parse(mut self) -> Vec<Element> {
        log::debug!("Starting parse of {} tokens", self.tokens.len());

        while self.pos < self.tokens.len() {
            self.parse_token();
            self.pos += 1;
        }

        if self.config.close_unterminated {
            self.close_unterminated();
        }

        let mut elements = self.out;
        if self.config.normalize_list_levels {
            normalize_list_levels(&mut elements);
        }

        log::debug!("Parsed {} elements", elements.len());
        elements
    }

    fn parse_token(&mut self) {
        log::trace!("Token {}: {}", self.pos, self.token());

        if self.try_parse_unordered_item() {
            return;
        }
        if self.try_parse_ordered_item() {
            return;
        }
        if self.try_parse_table_start() {
            return;
        }
        if self.try_parse_table_pipe() {
            return;
        }
        if self.try_parse_header() {
            return;
        }
        if self.try_parse_emphasis() {
            return;
        }
        if self.try_parse_quote() {
            return;
        }
        if self.try_parse_preformatted() {
            return;
        }
        if self.try_parse_line_end() {
            return;
        }
        if self.try_parse_link() {
            return;
        }
        if self.try_parse_strikethrough() {
            return;
        }
        self.emit_text();
    }

    fn token(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    fn at_beginning_of_line(&self) -> bool {
        cursor::is_beginning_of_line(self.tokens, self.pos)
    }

    fn emit(&mut self, element: Element) {
        self.out.push(element);
    }

    fn last_tag(&self) -> Option<Tag> {
        self.out.last().map(|e| e.tag)
    }

    /// Fallback: the token becomes literal text. Whitespace right after a list
    /// item marker, or indenting one, is dropped.
    fn emit_text(&mut self) {
        let literal = self.token().literal();
        if literal.chars().all(char::is_whitespace)
            && (self.last_tag() == Some(Tag::ListItem) || self.indents_list_marker())
        {
            return;
        }
        self.emit(Element::text(literal));
    }

    fn indents_list_marker(&self) -> bool {
        self.token().is_blank()
            && self.at_beginning_of_line()
            && cursor::starts_list_item(self.tokens, self.pos + 1)
    }

    /// Emit closing markers for every context still open at end of input.
    fn close_unterminated(&mut self) {
        for tag in self.open.inlines.open_tags() {
            self.open.inlines.set(tag, false);
            self.emit(Element::close(tag));
        }
        if let Some(block) = self.open.line_block.take() {
            self.emit(Element::close(block.tag()).with_level(block.level()));
        }
        if self.open.close_item() {
            self.emit(Element::close(Tag::ListItem));
        }
        if self.open.close_unordered() {
            self.emit(Element::close(Tag::UnorderedList));
        }
        if self.open.close_ordered() {
            self.emit(Element::close(Tag::OrderedList));
        }
        if self.open.table.is_some() {
            self.end_table();
        }
        self.open.inlines.expect_url = false;
    }
}
