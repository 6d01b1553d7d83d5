//! Environment variable substitution and derived settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::Config;

use crate::constants::{MKCONFIG_PROGRAM, MKCONFIG_TIMEOUT_SECS};
use crate::regen::MkconfigCommand;

impl Config {
    /// Resolve {env:VAR} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        self.menu_path = Self::resolve_path(&self.menu_path);
        self.defaults_path = Self::resolve_path(&self.defaults_path);
        self.log_level = Self::resolve_str(&self.log_level);
        if let Some(ref mut program) = self.mkconfig.program {
            *program = Self::resolve_str(program);
        }
        for arg in &mut self.mkconfig.args {
            *arg = Self::resolve_str(arg);
        }
    }

    /// Applies [`Config::resolve_str`] to a path that is valid UTF-8.
    fn resolve_path(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(Self::resolve_str(s)),
            None => path.to_path_buf(),
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    pub(super) fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// Program used to regenerate the boot menu.
    pub fn mkconfig_program(&self) -> &str {
        self.mkconfig.program.as_deref().unwrap_or(MKCONFIG_PROGRAM)
    }

    /// How long a regeneration run may take.
    pub fn mkconfig_timeout(&self) -> Duration {
        Duration::from_secs(self.mkconfig.timeout_secs.unwrap_or(MKCONFIG_TIMEOUT_SECS))
    }

    pub fn mkconfig_command(&self) -> MkconfigCommand {
        MkconfigCommand {
            program: self.mkconfig_program().to_string(),
            args: self.mkconfig.args.clone(),
            timeout: self.mkconfig_timeout(),
        }
    }
}
