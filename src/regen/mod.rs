//! Background regeneration of `grub.cfg` via `grub-mkconfig`.
//!
//! [`Regenerator::generate`] returns a correlation id immediately and runs
//! the tool on the tokio runtime. Exactly one [`Generated`] event carrying
//! that id is delivered when the tool exits, fails to start, or times out.
//! Invocations are independent: nothing is queued, merged, or cancelled.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

use log::{error, info};
use tokio::sync::mpsc;

use crate::config::Config;

/// Outcome of one regeneration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated {
    pub id: i32,
    pub ok: bool,
}

/// Where a [`Generated`] event is delivered.
pub enum Completion {
    Callback(Box<dyn FnOnce(Generated) + Send + 'static>),
    Channel(mpsc::UnboundedSender<Generated>),
}

impl Completion {
    #[allow(dead_code)]
    pub fn callback(f: impl FnOnce(Generated) + Send + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    /// A channel completion together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Generated>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::Channel(tx), rx)
    }

    fn deliver(self, event: Generated) {
        match self {
            Self::Callback(f) => f(event),
            Self::Channel(tx) => {
                // A dropped receiver means nobody is waiting for the result.
                let _ = tx.send(event);
            }
        }
    }
}

/// The external command that rebuilds the boot menu.
#[derive(Debug, Clone)]
pub struct MkconfigCommand {
    pub program: String,
    /// Leading arguments; `-o <output>` is always appended.
    pub args: Vec<String>,
    pub timeout: Duration,
}

/// Starts regeneration runs and numbers them.
pub struct Regenerator {
    command: MkconfigCommand,
    output: PathBuf,
    last_id: AtomicI32,
}

impl Regenerator {
    pub fn new(command: MkconfigCommand, output: PathBuf) -> Self {
        Self {
            command,
            output,
            last_id: AtomicI32::new(0),
        }
    }

    /// Builds a regenerator writing to the configured menu path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mkconfig_command(), config.menu_path.clone())
    }

    /// Spawns a run and returns its id. Must be called from within a tokio
    /// runtime; the run itself never blocks the caller.
    pub fn generate(&self, completion: Completion) -> i32 {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "start to generate a new grub configuration file [{}] {}",
            id,
            self.output.display()
        );

        let command = self.command.clone();
        let output = self.output.clone();
        tokio::spawn(async move {
            let ok = run_mkconfig(&command, &output).await;
            info!("generate grub configuration finished [{}] ok={}", id, ok);
            completion.deliver(Generated { id, ok });
        });
        id
    }
}

/// Runs the command to completion or until the timeout, killing it then.
async fn run_mkconfig(command: &MkconfigCommand, output: &Path) -> bool {
    let mut cmd = tokio::process::Command::new(&command.program);
    cmd.args(&command.args).arg("-o").arg(output);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true);

    let child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!("failed to execute {}: {}", command.program, e);
            return false;
        }
    };

    match tokio::time::timeout(command.timeout, child.wait_with_output()).await {
        Ok(Ok(out)) if out.status.success() => true,
        Ok(Ok(out)) => {
            error!(
                "{} exited with {}: {}",
                command.program,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
            false
        }
        Ok(Err(e)) => {
            error!("failed to wait for {}: {}", command.program, e);
            false
        }
        Err(_) => {
            error!(
                "{} timed out after {}s",
                command.program,
                command.timeout.as_secs_f32()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests;
