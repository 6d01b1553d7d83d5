//! Command-line interface definition and dispatch for grubctl.
//!
//! Uses [`clap`] for argument parsing with derive macros. Read-only commands
//! are handled here; commands that change settings live in the [`edit`]
//! submodule.

mod edit;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use crate::config::Config;
use crate::grub::SharedGrub;
use crate::logger::{self, StderrLogger};
use crate::output::{JsonRenderer, Renderer, StdoutRenderer, Summary};

/// Top-level CLI structure for grubctl.
#[derive(Parser)]
#[command(name = "grubctl", about = "Inspect and edit the GRUB2 boot menu defaults")]
pub struct Cli {
    /// Boot menu to read (overrides config)
    #[arg(long, global = true)]
    pub menu: Option<PathBuf>,
    /// Defaults file to read and write (overrides config)
    #[arg(long, global = true)]
    pub defaults: Option<PathBuf>,
    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the grubctl CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective default entry, timeout and the entry tree
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List entry titles
    Entries {
        /// Include entries inside submenus, qualified by their submenu titles
        #[arg(long)]
        full: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Set the default entry by title or index
    SetDefault {
        title: String,
        #[command(flatten)]
        write: WriteArgs,
    },
    /// Set the menu timeout in seconds (-1 waits forever, -2 disables)
    SetTimeout {
        #[arg(allow_hyphen_values = true)]
        seconds: i32,
        #[command(flatten)]
        write: WriteArgs,
    },
    /// Set the theme file (empty string removes it)
    SetTheme {
        path: String,
        #[command(flatten)]
        write: WriteArgs,
    },
    /// Set the graphics mode, e.g. 1024x768 (empty string removes it)
    SetGfxmode {
        mode: String,
        #[command(flatten)]
        write: WriteArgs,
    },
    /// Regenerate the boot menu with grub-mkconfig
    Regenerate,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options shared by the commands that change settings.
#[derive(Args, Clone, Copy)]
pub struct WriteArgs {
    /// Show the change as a diff instead of writing it
    #[arg(long)]
    pub dry_run: bool,
    /// Regenerate the boot menu after writing
    #[arg(long, conflicts_with = "dry_run")]
    pub regenerate: bool,
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

fn log_level(verbose: u8, config: &Config) -> LevelFilter {
    match verbose {
        0 => logger::parse_level(&config.log_level),
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Loads the model, explaining parse failures of the generated menu.
pub(crate) fn load_model(config: &Config) -> Result<SharedGrub> {
    let shared = SharedGrub::default();
    shared
        .reload(&config.menu_path, &config.defaults_path)
        .map_err(|e| {
            if e.is_parse_error() {
                anyhow::Error::new(e).context(format!(
                    "{} is malformed; try `grubctl regenerate`",
                    config.menu_path.display()
                ))
            } else {
                anyhow::Error::new(e)
            }
        })?;
    Ok(shared)
}

fn renderer(json: bool) -> Box<dyn Renderer> {
    if json {
        Box::new(JsonRenderer)
    } else {
        Box::new(StdoutRenderer)
    }
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_overrides(cli.menu, cli.defaults);
    StderrLogger::install(log_level(cli.verbose, &config));

    match cli.command {
        Commands::Show { json } => {
            let shared = load_model(&config)?;
            let summary = Summary::from_grub(&shared.read());
            renderer(json).render_summary(&summary)
        }
        Commands::Entries { full, json } => {
            let shared = load_model(&config)?;
            let grub = shared.read();
            let titles = if full {
                grub.entry_titles()
            } else {
                grub.simple_entry_titles()
            };
            if titles.is_empty() {
                anyhow::bail!("there is no menu entry in {}", config.menu_path.display());
            }
            renderer(json).render_titles(&titles, &grub.default_entry())
        }
        Commands::SetDefault { title, write } => edit::set_default(&config, title, write).await,
        Commands::SetTimeout { seconds, write } => {
            edit::apply(&config, write, |grub| grub.set_timeout(seconds)).await
        }
        Commands::SetTheme { path, write } => {
            edit::apply(&config, write, |grub| grub.set_theme(&path)).await
        }
        Commands::SetGfxmode { mode, write } => {
            edit::apply(&config, write, |grub| grub.set_gfxmode(&mode)).await
        }
        Commands::Regenerate => edit::regenerate(&config, None).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let path = Config::config_path()?;
                println!("{} {}", "Config path:".bold(), path.display());
                println!();
                let toml_str =
                    toml::to_string_pretty(&config).context("Failed to serialize config")?;
                println!("{}", toml_str);
                Ok(())
            }
        },
    }
}
