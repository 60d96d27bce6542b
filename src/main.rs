use std::env;
use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use markstream::{Config, OutputFormat, lex, parse_with_config};

mod cli;
use cli::{Cli, Commands};

/// Read the document from `file`, or from stdin when none is given.
fn read_input(file: Option<&Path>) -> io::Result<String> {
    let Some(path) = file else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    };
    fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("cannot read {}: {e}", path.display())))
}

/// Directory config discovery starts from: the input's own directory, made
/// absolute so the walk reaches every ancestor, or the working directory for
/// stdin.
fn config_start_dir(file: Option<&Path>) -> io::Result<PathBuf> {
    let cwd = env::current_dir()?;
    Ok(match file.and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => cwd.join(dir),
        _ => cwd,
    })
}

/// Resolve the config for `file`, then read the document itself.
fn load_document(explicit: Option<&Path>, file: Option<&Path>) -> io::Result<(Config, String)> {
    let start_dir = config_start_dir(file)?;
    let (cfg, source) = markstream::config::load(explicit, &start_dir)?;
    match &source {
        Some(path) => log::debug!("Using config from: {}", path.display()),
        None => log::debug!("Using default config"),
    }
    Ok((cfg, read_input(file)?))
}

fn print_items<T: Display + Serialize>(items: &[T], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{item}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file } => {
            let (cfg, input) = load_document(cli.config.as_deref(), file.as_deref())?;
            print_items(&lex(&input), cfg.output)
        }
        Commands::Parse { file, format } => {
            let (cfg, input) = load_document(cli.config.as_deref(), file.as_deref())?;
            let tokens = lex(&input);
            let elements = parse_with_config(&tokens, &cfg);
            let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
            print_items(&elements, format)
        }
    }
}
