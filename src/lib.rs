pub mod config;
pub mod element;
pub mod lexer;
pub mod parser;
pub mod token;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::OutputFormat;
pub use element::{Element, Tag, dump};
pub use lexer::lex;
pub use parser::{MarkupParser, normalize_list_levels};
pub use token::{Token, TokenKind};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a token sequence into a flat element stream using the default
/// configuration.
///
/// # Examples
///
/// ```rust
/// use markstream::{lex, parse, dump};
///
/// let tokens = lex("# Heading\n\nSome *text*.");
/// let elements = parse(&tokens);
/// println!("{}", dump(&elements));
/// ```
pub fn parse(tokens: &[Token]) -> Vec<Element> {
    parse_with_config(tokens, &Config::default())
}

pub fn parse_with_config(tokens: &[Token], config: &Config) -> Vec<Element> {
    MarkupParser::new(tokens, config).parse()
}

/// Lexes and parses a Markdown string in one step.
///
/// # Arguments
///
/// * `input` - The Markdown text
/// * `config` - Optional configuration (defaults to default config)
pub fn parse_markdown(input: &str, config: Option<Config>) -> Vec<Element> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let tokens = lex(input);
    parse_with_config(&tokens, &config)
}
