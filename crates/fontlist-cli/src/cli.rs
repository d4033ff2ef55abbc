//! CLI argument definitions using Clap v4
//!
//! Every flag is optional; a bare `fontlist` behaves like the classic
//! enumerator: write `font.log`, prefer English names, wait for a key.

use clap::Parser;
use std::path::PathBuf;

use fontlist_core::DEFAULT_LOCALE;

/// Lists installed font families with their aliases and member fonts
#[derive(Parser, Debug)]
#[command(name = "fontlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log file receiving a UTF-8 copy of the report (truncated each run)
    #[arg(short = 'o', long = "log-file", default_value = "font.log")]
    pub log_file: PathBuf,

    /// Locale preferred when picking family and font names
    #[arg(short = 'l', long = "locale", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Exit right away instead of waiting for a key press
    #[arg(long = "no-wait")]
    pub no_wait: bool,

    /// Log diagnostics at debug level to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
