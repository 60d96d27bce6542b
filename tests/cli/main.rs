//! CLI integration tests for markstream.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (lex, parse)
//! - Stdin/stdout handling
//! - Config discovery
//! - Error handling

mod common;
mod lex;
mod parse;
