//! # TripleO Repos CLI
//!
//! This is the binary entry point for the `tripleo-repos` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Handing the parsed settings to the library pipeline and translating
//!   errors into a non-zero exit.
//!
//! The core logic lives in the `lib.rs` library crate, keeping the binary a
//! thin wrapper around it.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
