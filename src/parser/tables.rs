//! Pipe tables.
//!
//! Rows are written out as they are read. A delimiter row (`|---|:--:|`) is
//! only recognised once it has been fully emitted, at which point it is
//! removed again and the row above it is relabelled as the header row.

use super::MarkupParser;
use super::context::TableParts;
use super::cursor::next_non_blank;
use crate::element::{Element, Tag};
use crate::token::TokenKind;

impl MarkupParser<'_> {
    /// `|` at the start of a line opens a table.
    pub(super) fn try_parse_table_start(&mut self) -> bool {
        if self.token().kind != TokenKind::Pipe
            || self.open.table.is_some()
            || !self.at_beginning_of_line()
        {
            return false;
        }

        log::debug!("Opening table at token {}", self.pos);
        self.open.table = Some(TableParts {
            row: true,
            cell: true,
        });
        self.emit(Element::open(Tag::Table));
        self.emit(Element::open(Tag::TableRow));
        self.emit(Element::open(Tag::TableCell));
        true
    }

    /// `|` inside a table separates cells. A trailing pipe only closes.
    pub(super) fn try_parse_table_pipe(&mut self) -> bool {
        if self.token().kind != TokenKind::Pipe {
            return false;
        }
        let Some(mut table) = self.open.table else {
            return false;
        };

        if table.cell {
            self.emit(Element::close(Tag::TableCell));
            table.cell = false;
        }
        let trailing = matches!(
            next_non_blank(self.tokens, self.pos),
            None | Some((_, TokenKind::LineEnd))
        );
        if !trailing {
            self.emit(Element::open(Tag::TableCell));
            table.cell = true;
        }
        self.open.table = Some(table);
        true
    }

    /// Line end followed by another pipe line: start the next row.
    pub(super) fn continue_table(&mut self) {
        self.promote_header_row();
        self.close_row();
        self.emit(Element::open(Tag::TableRow));
        self.emit(Element::open(Tag::TableCell));
        self.open.table = Some(TableParts {
            row: true,
            cell: true,
        });
    }

    pub(super) fn end_table(&mut self) {
        self.promote_header_row();
        self.close_row();
        self.emit(Element::close(Tag::Table));
        self.open.table = None;
        log::debug!("Closed table at token {}", self.pos);
    }

    fn close_row(&mut self) {
        let Some(table) = self.open.table.as_mut() else {
            return;
        };
        let (row, cell) = (table.row, table.cell);
        *table = TableParts::default();

        if cell {
            self.emit(Element::close(Tag::TableCell));
        }
        if row {
            self.emit(Element::close(Tag::TableRow));
        }
    }

    /// If the row being written is a delimiter row, drop it and turn the
    /// previous row of the same table into the header row.
    fn promote_header_row(&mut self) {
        let Some(row_start) = self.out.iter().rposition(|e| e.is_open(Tag::TableRow)) else {
            return;
        };
        if !is_delimiter_row(&self.out[row_start..]) {
            return;
        }

        let table_start = self.out[..row_start]
            .iter()
            .rposition(|e| e.is_open(Tag::Table))
            .unwrap_or(0);
        let Some(previous) = self.out[table_start..row_start]
            .iter()
            .rposition(|e| e.is_open(Tag::TableRow) || e.is_open(Tag::TableHeaderRow))
            .map(|i| table_start + i)
        else {
            return;
        };

        log::debug!("Promoting table row at element {} to header", previous);
        self.out.truncate(row_start);
        for element in &mut self.out[previous..] {
            if element.tag == Tag::TableRow {
                element.tag = Tag::TableHeaderRow;
            }
        }
        if let Some(table) = self.open.table.as_mut() {
            *table = TableParts::default();
        }
    }
}

/// Only row/cell markers and text made of `-`, `:` and whitespace, with at
/// least one `-`.
fn is_delimiter_row(row: &[Element]) -> bool {
    let mut has_dash = false;
    for element in row {
        match element.tag {
            Tag::TableRow | Tag::TableCell => {}
            Tag::Text => {
                let valid = element
                    .value
                    .chars()
                    .all(|c| c == '-' || c == ':' || c.is_whitespace());
                if !valid {
                    return false;
                }
                has_dash |= element.value.contains('-');
            }
            _ => return false,
        }
    }
    has_dash
}
