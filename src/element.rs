//! Element stream vocabulary.
//!
//! The parser emits a flat sequence of open/close markers plus self-contained
//! leaf markers (`Text`, `LineBreak`, `EmptyLine`). The stream is not a tree:
//! consumers track nesting themselves.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    // Blocks
    Header,
    PreformattedBlock,
    Quote,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableHeaderRow,
    TableRow,
    TableCell,

    // Inline
    Strong,
    Emphasis,
    Strikethrough,
    LinkCaption,
    LinkUrl,

    // Leaves
    Text,
    LineBreak,
    EmptyLine,
}

impl Tag {
    /// Leaf tags never receive a closing marker.
    pub fn is_leaf(self) -> bool {
        matches!(self, Tag::Text | Tag::LineBreak | Tag::EmptyLine)
    }

    pub fn is_list(self) -> bool {
        matches!(self, Tag::UnorderedList | Tag::OrderedList)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Header => "HEADER",
            Tag::PreformattedBlock => "PRE",
            Tag::Quote => "QUOTE",
            Tag::UnorderedList => "UL",
            Tag::OrderedList => "OL",
            Tag::ListItem => "LI",
            Tag::Table => "TABLE",
            Tag::TableHeaderRow => "TABLEHEADER",
            Tag::TableRow => "TABLEROW",
            Tag::TableCell => "TABLECELL",
            Tag::Strong => "STRONG",
            Tag::Emphasis => "EMPHASIS",
            Tag::Strikethrough => "STRIKETHROUGH",
            Tag::LinkCaption => "URLCAPTION",
            Tag::LinkUrl => "URL",
            Tag::Text => "TEXT",
            Tag::LineBreak => "LINEBREAK",
            Tag::EmptyLine => "EMPTYLINE",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    /// Header level, or list indentation (raw width before normalization,
    /// nesting depth after).
    pub level: usize,
    pub closing: bool,
    pub value: String,
}

impl Element {
    pub fn open(tag: Tag) -> Self {
        Self {
            tag,
            level: 0,
            closing: false,
            value: String::new(),
        }
    }

    pub fn close(tag: Tag) -> Self {
        Self {
            closing: true,
            ..Self::open(tag)
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::open(Tag::Text)
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn is_open(&self, tag: Tag) -> bool {
        self.tag == tag && !self.closing
    }

    pub fn is_close(&self, tag: Tag) -> bool {
        self.tag == tag && self.closing
    }

    fn shows_level(&self) -> bool {
        match self.tag {
            Tag::Header => true,
            Tag::ListItem | Tag::UnorderedList => !self.closing,
            _ => false,
        }
    }
}

/// One-line dump: `/` prefix for closing markers, `(level)` where the level is
/// meaningful and the quoted value for text.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.closing {
            f.write_str("/")?;
        }
        write!(f, "{}", self.tag)?;
        if self.shows_level() {
            write!(f, "({})", self.level)?;
        }
        if self.tag == Tag::Text {
            write!(f, " {:?}", self.value)?;
        }
        Ok(())
    }
}

/// Render a stream as one element per line.
pub fn dump(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        out.push_str(&element.to_string());
        out.push('\n');
    }
    out
}
