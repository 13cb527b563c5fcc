use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the actor roster
#[derive(Parser, Debug)]
#[command(name = "actor-roster")]
#[command(about = "Privilege-gated actor directory")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every actor; the requester must be privileged
    List {
        /// Requester id; several values are treated as one list-form id
        #[arg(required = true, num_args = 1..)]
        requester_id: Vec<String>,
    },
    /// Register a new actor
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Grant the privilege flag to an actor
    Promote { actor_id: String },
    /// Show one actor
    Show { actor_id: String },
}
