//! Command-line argument parsing for CyberBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CyberBuddy - a cybersecurity awareness chatbot for the terminal
#[derive(Parser, Debug)]
#[command(name = "cyberbuddy")]
#[command(version)]
#[command(about = "Chat about phishing, passwords, scams and privacy; manage security to-dos; take a quiz", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reply variant selection (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Your name; skips the name prompt
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose), -vvv (trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand (defaults to `chat`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive chat session
    Chat,

    /// Send one or more lines and print each reply
    Ask {
        /// Lines to send, in order
        #[arg(value_name = "LINE", required = true)]
        lines: Vec<String>,
    },

    /// List topics and casual questions the bot knows
    Topics,

    /// Display current configuration
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
    Trace,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::VeryVerbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Subcommand to run, `chat` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }

    /// Reject flag combinations that make no sense
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose > 0 {
            return Err("Cannot combine --quiet with --verbose.".to_string());
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("--name must not be blank.".to_string());
            }
        }

        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
            Verbosity::Trace => "trace",
        }
    }

    /// Default tracing filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Check if the welcome banner should be shown
    pub fn show_banner(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
