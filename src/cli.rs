use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SalonTUI - Browse salons and book at-home beauty services from the terminal
#[derive(Parser)]
#[command(name = "salontui")]
#[command(about = "A salon discovery and at-home booking demo with a TUI interface")]
#[command(version)]
pub struct Cli {
    /// Preference file (defaults to $XDG_CONFIG_HOME/salontui/preferences.json)
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Log file for the interactive TUI (defaults to salontui.log in the temp dir)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search salons by name or address
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Price a set of at-home services
    Quote {
        /// Artist id (e.g. ah1)
        #[arg(short, long)]
        artist: String,
        /// Service id; repeat an id to book it more than once
        #[arg(short, long = "service", required = true)]
        services: Vec<String>,
    },
    /// Resolve a path to the screen it opens
    Route {
        /// Path such as /salon/s1
        path: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
