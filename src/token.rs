//! Token kinds and the token record produced by the lexer.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    LineEnd,
    Whitespace,
    Tab,
    Digit,
    Hash,        // #
    Asterisk,    // *
    Underscore,  // _
    LeftBracket, // [
    RightBracket,
    LeftParen, // (
    RightParen,
    Exclamation,
    LessThan,    // <
    GreaterThan, // >
    Dash,        // -
    Dot,
    Backtick,
    Tilde,
    Pipe, // |
    Colon,
    Semicolon,
    DoubleQuote,
    SingleQuote,
    Backslash,
    Slash,
    At,
    Ampersand,
    Degree, // °
    Percent,
    Plus,
    Equal,
    Question,
    Comma,
    Caret,
    Dollar,
    Text,
}

impl TokenKind {
    /// Classify a single character. Newlines are handled by the lexer itself
    /// and never reach this function.
    pub fn classify(c: char) -> Self {
        match c {
            ' ' => TokenKind::Whitespace,
            '\t' => TokenKind::Tab,
            '0'..='9' => TokenKind::Digit,
            '#' => TokenKind::Hash,
            '*' => TokenKind::Asterisk,
            '_' => TokenKind::Underscore,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '!' => TokenKind::Exclamation,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '-' => TokenKind::Dash,
            '.' => TokenKind::Dot,
            '`' => TokenKind::Backtick,
            '~' => TokenKind::Tilde,
            '|' => TokenKind::Pipe,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '"' => TokenKind::DoubleQuote,
            '\'' => TokenKind::SingleQuote,
            '\\' => TokenKind::Backslash,
            '/' => TokenKind::Slash,
            '@' => TokenKind::At,
            '&' => TokenKind::Ampersand,
            '°' => TokenKind::Degree,
            '%' => TokenKind::Percent,
            '+' => TokenKind::Plus,
            '=' => TokenKind::Equal,
            '?' => TokenKind::Question,
            ',' => TokenKind::Comma,
            '^' => TokenKind::Caret,
            '$' => TokenKind::Dollar,
            _ => TokenKind::Text,
        }
    }

    /// Kinds whose adjacent occurrences are merged into a single token.
    pub fn is_runnable(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Tab
                | TokenKind::Hash
                | TokenKind::Asterisk
                | TokenKind::Underscore
                | TokenKind::Digit
                | TokenKind::Dash
                | TokenKind::Backtick
                | TokenKind::Text
        )
    }

    /// Kinds that keep every character of the run in `text` rather than a
    /// single representative character.
    pub(crate) fn accumulates_text(self) -> bool {
        matches!(self, TokenKind::Digit | TokenKind::Text)
    }

    /// Kinds whose literal form is the representative character repeated
    /// `count` times.
    fn expands_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Tab
                | TokenKind::Backtick
                | TokenKind::Underscore
                | TokenKind::Dash
                | TokenKind::Asterisk
        )
    }

    pub fn is_blank(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Tab)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LineEnd => "LN",
            TokenKind::Whitespace => "WS",
            TokenKind::Tab => "TAB",
            TokenKind::Digit => "DIGIT",
            TokenKind::Hash => "HASH",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Exclamation => "EXCLAMATION",
            TokenKind::LessThan => "LT",
            TokenKind::GreaterThan => "GT",
            TokenKind::Dash => "DASH",
            TokenKind::Dot => "DOT",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::Tilde => "TILDE",
            TokenKind::Pipe => "PIPE",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::DoubleQuote => "DQUOTE",
            TokenKind::SingleQuote => "SQUOTE",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::Slash => "SLASH",
            TokenKind::At => "AT",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Degree => "DEGREE",
            TokenKind::Percent => "PERCENT",
            TokenKind::Plus => "PLUS",
            TokenKind::Equal => "EQUAL",
            TokenKind::Question => "QUESTION",
            TokenKind::Comma => "COMMA",
            TokenKind::Caret => "CARET",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Text => "TEXT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical unit. For runnable kinds `count` is the run length in Unicode
/// scalar values; for all other kinds it is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub count: usize,
}

impl Token {
    pub fn new(kind: TokenKind, c: char) -> Self {
        Self {
            kind,
            text: c.to_string(),
            count: 1,
        }
    }

    /// Extend this run by one character.
    pub(crate) fn push(&mut self, c: char) {
        if self.kind.accumulates_text() {
            self.text.push(c);
        }
        self.count += 1;
    }

    /// The text this token contributes when it falls back to plain text.
    pub fn literal(&self) -> String {
        if self.kind.expands_literal() {
            self.text.repeat(self.count)
        } else {
            self.text.clone()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind.is_blank()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)?;
        if self.count > 1 {
            write!(f, " x{}", self.count)?;
        }
        Ok(())
    }
}
