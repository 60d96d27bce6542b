//! Typed record of the contexts that are currently open.
//!
//! Each context kind has its own slot, so at most one instance of a kind is
//! active and a list item cannot be open without an enclosing list.

use crate::element::Tag;

/// Blocks that live on a single source line (continued blocks are re-opened
/// line by line). Only one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineBlock {
    Header(usize),
    Preformatted,
    Quote,
}

impl LineBlock {
    pub(crate) fn tag(self) -> Tag {
        match self {
            LineBlock::Header(_) => Tag::Header,
            LineBlock::Preformatted => Tag::PreformattedBlock,
            LineBlock::Quote => Tag::Quote,
        }
    }

    pub(crate) fn level(self) -> usize {
        match self {
            LineBlock::Header(level) => level,
            _ => 0,
        }
    }
}

/// Open lists. Present only while at least one list is open.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Lists {
    /// Raw indentation of the unordered list's first item
    pub(crate) unordered: Option<usize>,
    pub(crate) ordered: bool,
    pub(crate) item: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TableParts {
    pub(crate) row: bool,
    pub(crate) cell: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Inlines {
    pub(crate) strong: bool,
    pub(crate) emphasis: bool,
    pub(crate) strikethrough: bool,
    pub(crate) caption: bool,
    pub(crate) url: bool,
    /// Set when a link caption closes; cleared once a URL opens.
    pub(crate) expect_url: bool,
}

impl Inlines {
    fn flag_mut(&mut self, tag: Tag) -> Option<&mut bool> {
        match tag {
            Tag::Strong => Some(&mut self.strong),
            Tag::Emphasis => Some(&mut self.emphasis),
            Tag::Strikethrough => Some(&mut self.strikethrough),
            Tag::LinkCaption => Some(&mut self.caption),
            Tag::LinkUrl => Some(&mut self.url),
            _ => None,
        }
    }

    pub(crate) fn is_open(&self, tag: Tag) -> bool {
        match tag {
            Tag::Strong => self.strong,
            Tag::Emphasis => self.emphasis,
            Tag::Strikethrough => self.strikethrough,
            Tag::LinkCaption => self.caption,
            Tag::LinkUrl => self.url,
            _ => false,
        }
    }

    pub(crate) fn set(&mut self, tag: Tag, open: bool) {
        if let Some(flag) = self.flag_mut(tag) {
            *flag = open;
        }
    }

    /// Open spans in the order they are flushed: links, strikethrough, emphasis, strong.
    pub(crate) fn open_tags(&self) -> Vec<Tag> {
        [
            Tag::LinkUrl,
            Tag::LinkCaption,
            Tag::Strikethrough,
            Tag::Emphasis,
            Tag::Strong,
        ]
        .into_iter()
        .filter(|&tag| self.is_open(tag))
        .collect()
    }
}

#[derive(Debug, Default)]
pub(crate) struct OpenContexts {
    pub(crate) line_block: Option<LineBlock>,
    pub(crate) lists: Option<Lists>,
    pub(crate) table: Option<TableParts>,
    pub(crate) inlines: Inlines,
}

impl OpenContexts {
    /// Returns true when a new unordered list was opened.
    pub(crate) fn open_unordered(&mut self, width: usize) -> bool {
        let lists = self.lists.get_or_insert_with(Lists::default);
        if lists.unordered.is_some() {
            return false;
        }
        lists.unordered = Some(width);
        true
    }

    /// Returns true when a new ordered list was opened.
    pub(crate) fn open_ordered(&mut self) -> bool {
        let lists = self.lists.get_or_insert_with(Lists::default);
        if lists.ordered {
            return false;
        }
        lists.ordered = true;
        true
    }

    pub(crate) fn open_item(&mut self) {
        if let Some(lists) = self.lists.as_mut() {
            lists.item = true;
        }
    }

    pub(crate) fn close_item(&mut self) -> bool {
        match self.lists.as_mut() {
            Some(lists) if lists.item => {
                lists.item = false;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn close_unordered(&mut self) -> bool {
        let Some(lists) = self.lists.as_mut() else {
            return false;
        };
        if lists.unordered.take().is_none() {
            return false;
        }
        if !lists.ordered {
            self.lists = None;
        }
        true
    }

    pub(crate) fn close_ordered(&mut self) -> bool {
        let Some(lists) = self.lists.as_mut() else {
            return false;
        };
        if !lists.ordered {
            return false;
        }
        lists.ordered = false;
        if lists.unordered.is_none() {
            self.lists = None;
        }
        true
    }

    pub(crate) fn in_preformatted(&self) -> bool {
        self.line_block == Some(LineBlock::Preformatted)
    }

    pub(crate) fn cell_open(&self) -> bool {
        self.table.is_some_and(|table| table.cell)
    }
}
