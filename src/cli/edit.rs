//! Settings-changing commands for grubctl.
//!
//! Each command loads the model, applies one mutator, then either previews
//! the resulting defaults file as a diff or writes it, optionally followed
//! by a boot menu regeneration.

use std::fs;

use anyhow::{anyhow, Result};
use colored::Colorize;
use log::warn;

use super::{load_model, WriteArgs};
use crate::config::Config;
use crate::diff;
use crate::grub::{Grub2, SharedGrub};
use crate::output::format_timeout;
use crate::regen::{Completion, Regenerator};

/// Sets the default entry, accepting a top-level index as well as a title.
pub(crate) async fn set_default(config: &Config, title: String, write: WriteArgs) -> Result<()> {
    apply(config, write, move |grub| {
        let simple = grub.simple_entry_titles();
        let title = match title.parse::<usize>() {
            Ok(index) if index < simple.len() => simple[index].clone(),
            _ => title,
        };
        if !simple.contains(&title) {
            warn!(
                "{:?} is not a top-level entry; GRUB will fall back to the first entry",
                title
            );
        }
        grub.set_default_entry(&title);
    })
    .await
}

/// Loads the model, applies `mutate` and persists or previews the result.
pub(crate) async fn apply<F>(config: &Config, write: WriteArgs, mutate: F) -> Result<()>
where
    F: FnOnce(&mut Grub2),
{
    let shared = load_model(config)?;
    mutate(&mut shared.write());

    let path = &config.defaults_path;
    if write.dry_run {
        let current = fs::read_to_string(path).unwrap_or_default();
        let pending = shared.read().settings_content();
        match diff::settings_diff(&current, &pending, path) {
            Some(d) => print!("{}", d),
            None => println!("{}", "No changes.".dimmed()),
        }
        return Ok(());
    }

    shared.read().write_settings(path)?;
    println!("{} {}", "Wrote".green().bold(), path.display());

    if write.regenerate {
        regenerate(config, Some(&shared)).await?;
    }
    Ok(())
}

/// Runs the regeneration tool and waits for its completion event.
///
/// When a model is given, its entries are reloaded from the new boot menu
/// afterwards.
pub(crate) async fn regenerate(config: &Config, shared: Option<&SharedGrub>) -> Result<()> {
    let regenerator = Regenerator::from_config(config);
    let (completion, mut rx) = Completion::channel();
    let id = regenerator.generate(completion);
    println!(
        "{} {} [{}]",
        "Regenerating".cyan().bold(),
        config.menu_path.display(),
        id
    );

    let event = tokio::select! {
        event = rx.recv() => event.ok_or_else(|| anyhow!("regeneration [{}] ended without a result", id))?,
        _ = tokio::signal::ctrl_c() => anyhow::bail!("interrupted; regeneration [{}] abandoned", id),
    };
    if !event.ok {
        anyhow::bail!(
            "{} failed to regenerate {}",
            config.mkconfig_program(),
            config.menu_path.display()
        );
    }
    println!("{} [{}]", "Done".green().bold(), event.id);

    if let Some(shared) = shared {
        shared.reload_entries(&config.menu_path)?;
        let grub = shared.read();
        println!(
            "{} {} ({})",
            "Default:".bold(),
            grub.default_entry().yellow(),
            format_timeout(grub.timeout())
        );
    }
    Ok(())
}
