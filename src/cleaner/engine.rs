use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{info, warn};

use super::backup::ManifestBackup;
use crate::common::config::{CleanupConfig, ConfigWarning};
use crate::common::descriptor::SelfDescriptor;
use crate::installer::Installer;
use crate::manifest::{ManifestFile, PackageRef};

/// Properties stripped from every scaffolded manifest
const SCAFFOLD_PROPERTIES: &[&str] = &["scripts.post-create-project-cmd", "extra.create-project"];

/// Outcome of the delegated update step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// Exit status reported by the installer
    pub status: i32,
    /// Whether the manifest was restored from the pre-edit snapshot
    pub rolled_back: bool,
}

/// Full report of one `clean_up` run
#[derive(Debug, serde::Serialize)]
pub struct CleanupReport {
    /// Warnings collected while reading `extra.create-project`
    pub config_warnings: Vec<ConfigWarning>,
    /// Dot-addressed properties that were present and removed
    pub removed_properties: Vec<String>,
    /// Dependency entries deleted from the manifest
    pub removed_packages: Vec<PackageRef>,
    /// Requested names that were not required in the manifest
    pub not_required: Vec<PackageRef>,
    /// Package names the delegated update was restricted to
    pub whitelist: Vec<String>,
    /// Exit status of the update step (0 when skipped)
    pub status: i32,
    pub rolled_back: bool,
    pub update_skipped: bool,
}

/// Orchestrates the cleanup sequence against one manifest.
///
/// The configuration block is read once at construction; every manifest
/// edit afterwards goes through [`ManifestFile`]'s read-modify-write cycle.
pub struct Cleaner<I: Installer> {
    manifest: ManifestFile,
    config: CleanupConfig,
    config_warnings: Vec<ConfigWarning>,
    descriptor: SelfDescriptor,
    installer: I,
}

impl<I: Installer> Cleaner<I> {
    /// Read the manifest's configuration block and build a cleaner
    pub fn new(manifest: ManifestFile, descriptor: SelfDescriptor, installer: I) -> Result<Self> {
        let root = manifest.read()?;
        let (config, config_warnings) = CleanupConfig::from_manifest(&root);
        Ok(Self::with_config(
            manifest,
            config,
            config_warnings,
            descriptor,
            installer,
        ))
    }

    /// Build a cleaner from an already-parsed configuration
    pub fn with_config(
        manifest: ManifestFile,
        config: CleanupConfig,
        config_warnings: Vec<ConfigWarning>,
        descriptor: SelfDescriptor,
        installer: I,
    ) -> Self {
        Self {
            manifest,
            config,
            config_warnings,
            descriptor,
            installer,
        }
    }

    /// Warnings collected while reading `extra.create-project`
    pub fn config_warnings(&self) -> &[ConfigWarning] {
        &self.config_warnings
    }

    /// Run the full cleanup sequence.
    ///
    /// Snapshots the manifest, strips the scaffolding properties, removes
    /// the configured dependencies and the helper's own package, then
    /// delegates the update restricted to the removed names. A failing
    /// update restores the snapshot; its status lands in the report
    /// unchanged.
    pub fn clean_up(&mut self, skip_update: bool, show_progress: bool) -> Result<CleanupReport> {
        let backup = ManifestBackup::capture(&self.manifest)
            .context("Failed to snapshot manifest before cleanup")?;

        let mut removed_properties = Vec::new();
        for property in SCAFFOLD_PROPERTIES {
            if self.manifest.remove_property(property)? {
                removed_properties.push(property.to_string());
            }
        }

        info!("removing no longer needed dependencies");
        let outcome = self.manifest.remove_packages(
            &self.config.remove_require,
            &self.config.remove_require_dev,
        )?;
        let self_outcome = self
            .manifest
            .remove_packages(std::slice::from_ref(&self.descriptor.name), &[])?;

        let mut removed_packages = outcome.removed;
        removed_packages.extend(self_outcome.removed);
        let mut not_required = outcome.missing;
        not_required.extend(self_outcome.missing);

        let whitelist = build_whitelist(
            &self.config.remove_require,
            &self.config.remove_require_dev,
            &self.descriptor.name,
        );

        if skip_update {
            backup.discard()?;
            return Ok(CleanupReport {
                config_warnings: self.config_warnings.clone(),
                removed_properties,
                removed_packages,
                not_required,
                whitelist,
                status: 0,
                rolled_back: false,
                update_skipped: true,
            });
        }

        let update = self.update(&whitelist, &backup, show_progress)?;
        backup.discard()?;

        Ok(CleanupReport {
            config_warnings: self.config_warnings.clone(),
            removed_properties,
            removed_packages,
            not_required,
            whitelist,
            status: update.status,
            rolled_back: update.rolled_back,
            update_skipped: false,
        })
    }

    /// Delegate the update, restricted to `whitelist` (empty = full update).
    ///
    /// On a non-zero status the manifest is restored from `backup` and the
    /// status is returned unchanged.
    pub fn update(
        &mut self,
        whitelist: &[String],
        backup: &ManifestBackup,
        show_progress: bool,
    ) -> Result<UpdateResult> {
        let spinner = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap(),
            );
            pb.set_message("Updating dependencies...");
            pb.enable_steady_tick(Duration::from_millis(120));
            Some(pb)
        } else {
            None
        };

        let result = self.installer.update(whitelist);

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let status = result?;
        if status != 0 {
            warn!(status, "delegated update failed, restoring manifest");
            backup
                .restore()
                .context("Failed to restore manifest after update failure")?;
            return Ok(UpdateResult {
                status,
                rolled_back: true,
            });
        }
        Ok(UpdateResult {
            status,
            rolled_back: false,
        })
    }
}

/// Union of the requested removal names plus the helper's own package,
/// first occurrence wins
fn build_whitelist(require: &[String], require_dev: &[String], self_name: &str) -> Vec<String> {
    let mut whitelist: Vec<String> = Vec::with_capacity(require.len() + require_dev.len() + 1);
    for name in require
        .iter()
        .chain(require_dev.iter())
        .map(String::as_str)
        .chain(std::iter::once(self_name))
    {
        if !whitelist.iter().any(|existing| existing.as_str() == name) {
            whitelist.push(name.to_string());
        }
    }
    whitelist
}
