//! CLI command definitions and dispatch for the `hdesk` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod faqs;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Customer-support FAQ chatbot: HTTP server, chat UI, and terminal tools.
#[derive(Parser)]
#[command(name = "hdesk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server and chat UI.
    Serve {
        /// Port to bind.
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Host to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Ask the engine one question from the terminal.
    Ask {
        /// The question; prompts interactively when omitted.
        text: Option<String>,
    },

    /// List the questions in the loaded FAQ pack.
    Faqs,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}
