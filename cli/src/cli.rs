use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hooker_core::{parse_url, Url, Verb};

/// Collects multiple URLs from a config file and executes an HTTP request on
/// each of them.
#[derive(Debug, Parser)]
#[command(name = "hooker", version)]
pub struct Cli {
    /// Path of the config file
    #[arg(
        short,
        long,
        global = true,
        env = "HOOKER_CONFIG",
        default_value = "./config.json"
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists the URLs to be called (default)
    List,
    /// Adds a URL to the list
    Add(AddArgs),
    /// Removes all occurrences of a URL from the list
    Del(DelArgs),
    /// Calls every URL in the list
    Call(CallArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// The URL to be called
    #[arg(value_parser = parse_url)]
    pub url: Url,

    /// A descriptive name for the hook
    pub name: Vec<String>,

    /// HTTP verb used for this hook
    #[arg(short = 'X', long, default_value = "GET", value_parser = parse_verb)]
    pub verb: Verb,

    /// A request header in the format HEADERNAME:value
    #[arg(short = 'H', long = "header", num_args = 1..)]
    pub headers: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DelArgs {
    /// The URL to be removed
    #[arg(value_parser = parse_url)]
    pub url: Url,
}

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Dry run, does not call any URL
    #[arg(short = 't', long = "test")]
    pub dry_run: bool,

    /// Log friendly output, one line per call as it finishes
    #[arg(short, long)]
    pub log: bool,

    /// Accepted for compatibility; every hook is always called
    #[arg(long, default_value = "all", hide = true)]
    pub url: String,
}

fn parse_verb(raw: &str) -> Result<Verb, hooker_core::HookError> {
    raw.parse()
}
