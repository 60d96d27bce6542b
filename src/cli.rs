use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use markstream::OutputFormat;

#[derive(Parser)]
#[command(name = "markstream")]
#[command(author, version)]
#[command(about = "Tokenize Markdown and dump its flat element stream")]
#[command(
    long_about = "Markstream lexes a small Markdown dialect (headers, quotes, preformatted \
    blocks, lists, pipe tables, emphasis, strikethrough and links) into run-coalesced tokens \
    and parses them into a flat stream of open/close markers for a renderer to consume."
)]
#[command(after_help = "\
EXAMPLES:

    # Dump the tokens of a file
    markstream lex notes.md

    # Dump the element stream from stdin
    echo '# Heading' | markstream parse

    # Element stream as JSON
    markstream parse --format json notes.md

CONFIGURATION:

Markstream looks for configuration files in this order:
  1. Explicit --config path
  2. markstream.toml or .markstream.toml in current/parent directories
  3. ~/.config/markstream/config.toml (XDG)
  4. Built-in defaults

Example .markstream.toml:

    normalize_list_levels = true
    close_unterminated = false
    preformatted_indent = 4
    output = \"text\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, markstream will \
        search for .markstream.toml or markstream.toml in the input's directory and its parents, \
        then fall back to ~/.config/markstream/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dump the token sequence, one token per line
    Lex {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Parse and dump the element stream
    #[command(
        long_about = "Parse a document and dump its element stream. Closing markers are \
        prefixed with '/', header and list levels are shown in parentheses and text values \
        are quoted."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file
    markstream parse notes.md

    # Flush markers left open at end of input
    markstream parse --config strict.toml notes.md")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output format (overrides the configured one)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
