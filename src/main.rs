//! Entry point for grubctl, a terminal front end for the GRUB2 boot menu.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod cli;
mod config;
mod constants;
mod diff;
mod error;
mod grub;
mod logger;
mod menu;
mod output;
mod regen;
mod settings;

use anyhow::Result;

/// Runs the grubctl CLI.
///
/// Loads `.env` files (silently ignored if absent) so `{env:VAR}` placeholders
/// in the config can be filled, parses command-line arguments into a
/// [`cli::Cli`] struct, and dispatches the chosen subcommand via [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    cli::run(cli).await
}
