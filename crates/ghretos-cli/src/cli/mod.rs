//! CLI module for ghretos.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support for every matcher option.

pub mod config;
pub mod output;

use clap::Parser;

/// Classify GitHub URLs and shorthand references.
///
/// Each input is matched as a URL and, with `--shorthand`, as an
/// `owner/repo#123` or `owner/repo@ref` reference. Inputs are read from
/// standard input, one per line, when none are given.
#[derive(Parser, Debug)]
#[command(name = "ghretos")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URLs or shorthand references to classify.
    pub inputs: Vec<String>,

    /// Comma-separated hosts treated as GitHub (include `:port` for
    /// non-default ports).
    #[arg(long, env = "GHRETOS_DOMAINS", value_delimiter = ',')]
    pub domains: Option<Vec<String>>,

    /// Comma-separated hosts treated as the gist service.
    #[arg(long, env = "GHRETOS_GIST_DOMAINS", value_delimiter = ',')]
    pub gist_domains: Option<Vec<String>>,

    /// Comma-separated resource kinds to match exclusively.
    /// Example: issue,pull_request,commit
    #[arg(long, env = "GHRETOS_ONLY", value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Comma-separated resource kinds to ignore.
    #[arg(long, env = "GHRETOS_DISABLE", value_delimiter = ',')]
    pub disable: Option<Vec<String>>,

    /// Let the URL fragment decide the resource type, whatever the path says.
    #[arg(long, env = "GHRETOS_LOOSE")]
    pub loose: bool,

    /// Also accept shorthand references such as owner/repo#123.
    #[arg(long, short = 's', env = "GHRETOS_SHORTHAND")]
    pub shorthand: bool,

    /// Owner used for shorthand references without one (repo#123).
    /// Implies --shorthand.
    #[arg(long, env = "GHRETOS_DEFAULT_USER")]
    pub default_user: Option<String>,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns true if shorthand references should be parsed.
    pub fn wants_shorthand(&self) -> bool {
        self.shorthand || self.default_user.is_some()
    }

    /// Returns true if inputs should be read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty()
    }
}
