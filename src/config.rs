use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// How the command-line driver prints tokens and elements.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Text,
    /// A JSON array
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Rewrite raw list indentation widths into zero-based nesting levels.
    pub normalize_list_levels: bool,
    /// Emit closing markers for contexts still open when the input ends.
    pub close_unterminated: bool,
    /// Leading spaces that start a preformatted block.
    pub preformatted_indent: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_list_levels: true,
            close_unterminated: false,
            preformatted_indent: 4,
            output: OutputFormat::Text,
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn normalize_list_levels(mut self, normalize: bool) -> Self {
        self.config.normalize_list_levels = normalize;
        self
    }

    pub fn close_unterminated(mut self, close: bool) -> Self {
        self.config.close_unterminated = close;
        self
    }

    pub fn preformatted_indent(mut self, indent: usize) -> Self {
        self.config.preformatted_indent = indent;
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".markstream.toml", "markstream.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("cannot read config {}: {e}", path.display()))
    })?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

/// `markstream/config.toml` under `$XDG_CONFIG_HOME`, then under `~/.config`.
fn user_config_paths() -> impl Iterator<Item = PathBuf> {
    let xdg = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    let home = env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"));
    xdg.into_iter()
        .chain(home)
        .map(|base| base.join("markstream").join("config.toml"))
}

/// Existing config files in lookup order: every candidate name in `start_dir`
/// and each of its ancestors, nearest first, then the user config files.
fn discovered_paths(start_dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    start_dir
        .ancestors()
        .flat_map(|dir| CANDIDATE_NAMES.iter().map(move |name| dir.join(name)))
        .chain(user_config_paths())
        .filter(|path| path.is_file())
}

/// Resolve the configuration for a document in `start_dir`.
///
/// An explicit path must load. Otherwise the first discovered file that
/// parses wins; unusable ones are reported and skipped. With nothing found
/// the defaults apply. Returns the path the config came from, if any.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    for path in discovered_paths(start_dir) {
        match read_config(&path) {
            Ok(cfg) => return Ok((cfg, Some(path))),
            Err(err) => log::warn!("Skipping config: {err}"),
        }
    }

    log::debug!("No usable config file found, using defaults");
    Ok((Config::default(), None))
}
