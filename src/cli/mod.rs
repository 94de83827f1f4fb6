pub mod commands;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "pageicon")]
#[command(about = "Find the icons a website advertises", long_about = None)]
pub struct Cli {
    /// Website to inspect; `https://` is assumed when no scheme is given
    pub url: String,

    /// Download every candidate and report only the best icon
    #[arg(short, long)]
    pub best: bool,

    /// Preferred extensions, highest priority first (implies --best)
    #[arg(short, long, value_delimiter = ',')]
    pub prefer: Vec<String>,

    /// Write the best icon to this file (implies --best)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds, overriding the config file
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn wants_best(&self) -> bool {
        self.best || !self.prefer.is_empty() || self.output.is_some()
    }

    /// Extension preference from the command line, else from the config.
    pub fn preference(&self, config: &Config) -> Vec<String> {
        if self.prefer.is_empty() {
            config.selection.preference.clone()
        } else {
            self.prefer.clone()
        }
    }

    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(timeout) = self.timeout {
            config.fetcher.timeout_secs = Some(timeout);
        }
    }
}
