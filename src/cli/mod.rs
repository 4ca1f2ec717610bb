//! CLI module - Command-line interface for Maricheck
//!
//! The `serve` command runs the web API. The remaining commands operate on
//! the database directly and are meant for administrators on the host.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maricheck - Maritime crew registration and status tracking
#[derive(Parser)]
#[command(name = "maricheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the standard search locations)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web API server
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Create default config file
    Init,

    /// Create an admin account (password is read from stdin)
    CreateAdmin {
        /// Login name for the new admin
        username: String,
    },

    /// List all crew registrations, newest first
    #[command(alias = "ls", alias = "l")]
    List,

    /// Show registration counts per stage
    Stats,

    /// Move a crew member to the next stage
    Advance {
        /// Crew member ID
        id: i32,
    },

    /// Look up a registration by passport number
    #[command(alias = "t")]
    Track {
        /// Passport number
        passport: String,
    },

    /// Show the stages of the review workflow
    Stages,
}

pub use commands::*;
