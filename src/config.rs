//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "A terminal-window countdown timer")]
#[command(version)]
pub struct Config {
    /// Text to prefill the seconds field with
    #[arg(short, long)]
    pub seconds: Option<String>,

    /// Address to serve the HTTP control routes on (disabled when omitted)
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Run without the terminal window, controlled over HTTP only
    #[arg(long, requires = "listen")]
    pub headless: bool,

    /// File to write logs to while the window owns the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> String {
        format!("countdown_timer={},tower_http=info", self.log_level())
    }
}
