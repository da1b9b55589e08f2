// src/cli.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use log::LevelFilter;

use crate::config::{Format, Params, Source};

#[derive(Parser, Debug)]
#[command(name = "jestad_scrape", version)]
#[command(about = "Extract sensor readings from a LoRaWAN dashboard table")]
#[command(group(ArgGroup::new("source").required(true).args(["file", "url"])))]
pub struct Args {
    /// Saved dashboard page
    #[arg(long)]
    file: Option<PathBuf>,

    /// Dashboard URL (plain http)
    #[arg(long)]
    url: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Header line for csv/tsv
    #[arg(long)]
    include_headers: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    quiet: bool,

    /// Append log lines here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_params(self) -> Params {
        let source = match (self.file, self.url) {
            (Some(path), None) => Source::File(path),
            (None, Some(url)) => Source::Url(url),
            _ => unreachable!("arg group `source` takes exactly one of --file/--url"),
        };
        let log_level = if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        };
        Params {
            source,
            format: self.format,
            out: self.out,
            include_headers: self.include_headers,
            log_level,
            log_file: self.log_file,
        }
    }
}

/// Parse the process arguments. Exits with usage on bad input.
pub fn params_from_env() -> Params {
    Args::parse().into_params()
}
