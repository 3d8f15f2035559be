use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

use crate::common::errors::CleanupError;

/// Default host package manager program
pub const DEFAULT_PROGRAM: &str = "composer";

/// External dependency-update collaborator.
///
/// One operation: re-resolve and install dependencies, restricted to the
/// given package names. An empty whitelist means an unrestricted update over
/// the whole manifest.
pub trait Installer {
    fn update(&mut self, whitelist: &[String]) -> Result<i32, CleanupError>;
}

/// Shells out to the host package manager CLI (`composer` by default),
/// running `update --no-interaction` in the manifest's directory.
pub struct CommandInstaller {
    program: String,
    working_dir: PathBuf,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }
}

impl Installer for CommandInstaller {
    fn update(&mut self, whitelist: &[String]) -> Result<i32, CleanupError> {
        let mut command = Command::new(&self.program);
        command
            .arg("update")
            .arg("--no-interaction")
            .args(whitelist)
            .current_dir(&self.working_dir);
        debug!(
            program = self.program.as_str(),
            ?whitelist,
            "running delegated update"
        );

        let status = command
            .status()
            .map_err(|source| CleanupError::InstallerSpawn {
                program: self.program.clone(),
                source,
            })?;
        // a signal-terminated child has no code; report plain failure
        Ok(status.code().unwrap_or(1))
    }
}
