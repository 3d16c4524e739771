//! CLI module for Dugout
//!
//! Provides command-line interface parsing and handling for the dugout-server
//! binary. Uses clap for argument parsing and owo-colors for colored terminal
//! output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dugout - JWT-secured REST backend for baseball team records
#[derive(Parser, Debug)]
#[command(
    name = "dugout-server",
    version,
    about = "Dugout - JWT-secured REST backend for baseball team records",
    long_about = "A small REST backend providing user registration/login with JWT-based\n\
                  stateless authentication, fronting CRUD endpoints for baseball teams.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold\n\
                  a new deployment.",
    after_help = "EXAMPLES:\n    \
                  dugout-server init              # Scaffold dugout.toml and data/\n    \
                  dugout-server                   # Start the server (requires dugout.toml)\n    \
                  dugout-server --config my.toml  # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "dugout.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new Dugout deployment with configuration files
    ///
    /// Creates dugout.toml, the data/ directory, and an .env.example
    /// naming the required secrets.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}
