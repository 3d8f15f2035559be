use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::manifest::ManifestFile;

/// Pre-edit snapshot of the manifest.
///
/// Captured before the first cleanup edit, kept in memory and as a
/// timestamped sibling file, so a failed update can roll the manifest back
/// and a crash mid-cleanup still leaves a copy on disk.
pub struct ManifestBackup {
    manifest_path: PathBuf,
    snapshot_path: PathBuf,
    contents: String,
}

impl ManifestBackup {
    pub fn capture(manifest: &ManifestFile) -> Result<Self> {
        let contents = manifest.raw()?;
        let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
        let file_name = manifest
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manifest".to_string());
        let snapshot_path = manifest
            .path()
            .with_file_name(format!("{file_name}.bak-{stamp}"));

        std::fs::write(&snapshot_path, &contents).with_context(|| {
            format!(
                "Failed to write backup snapshot: {}",
                snapshot_path.display()
            )
        })?;
        debug!(snapshot = %snapshot_path.display(), "captured manifest snapshot");

        Ok(Self {
            manifest_path: manifest.path().to_path_buf(),
            snapshot_path,
            contents,
        })
    }

    /// Where the on-disk snapshot lives
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Write the captured contents back over the manifest
    pub fn restore(&self) -> Result<()> {
        std::fs::write(&self.manifest_path, &self.contents).with_context(|| {
            format!(
                "Failed to restore manifest: {}",
                self.manifest_path.display()
            )
        })
    }

    /// Remove the on-disk snapshot once the run has settled
    pub fn discard(self) -> Result<()> {
        if self.snapshot_path.exists() {
            std::fs::remove_file(&self.snapshot_path).with_context(|| {
                format!(
                    "Failed to remove backup snapshot: {}",
                    self.snapshot_path.display()
                )
            })?;
        }
        Ok(())
    }
}
