use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::common::errors::CleanupError;

use super::matcher;

/// Dependency section of the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Require,
    RequireDev,
}

impl Section {
    /// Key of this section in the manifest root
    pub fn key(self) -> &'static str {
        match self {
            Section::Require => "require",
            Section::RequireDev => "require-dev",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A package reference inside one dependency section
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PackageRef {
    pub section: Section,
    pub name: String,
}

/// Result of one package-removal pass
#[derive(Debug, Default, serde::Serialize)]
pub struct RemovalOutcome {
    /// Entries actually deleted from the manifest
    pub removed: Vec<PackageRef>,
    /// Requested names that matched nothing
    pub missing: Vec<PackageRef>,
}

/// Read-modify-write handle on the JSON manifest.
///
/// No parsed document is held across operations: every mutation re-reads the
/// file and writes the edit back immediately, so edits made between two
/// operations are picked up rather than clobbered. Key order is preserved
/// across the round trip.
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, for snapshotting
    pub fn raw(&self) -> Result<String, CleanupError> {
        std::fs::read_to_string(&self.path).map_err(|source| CleanupError::ManifestRead {
            path: self.path.clone(),
            source,
        })
    }

    /// Parse the manifest's root object
    pub fn read(&self) -> Result<Map<String, Value>, CleanupError> {
        let contents = self.raw()?;
        let value: Value =
            serde_json::from_str(&contents).map_err(|source| CleanupError::ManifestParse {
                path: self.path.clone(),
                source,
            })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(CleanupError::NotAnObject {
                path: self.path.clone(),
            }),
        }
    }

    fn write(&self, root: &Map<String, Value>) -> Result<(), CleanupError> {
        let mut contents =
            serde_json::to_string_pretty(root).map_err(|source| CleanupError::ManifestSerialize {
                path: self.path.clone(),
                source,
            })?;
        contents.push('\n');
        std::fs::write(&self.path, contents).map_err(|source| CleanupError::ManifestWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Delete one dot-addressed property from the manifest.
    ///
    /// A missing path is a no-op; returns whether anything was removed.
    /// Persists immediately when an edit was made.
    pub fn remove_property(&self, dot_path: &str) -> Result<bool, CleanupError> {
        let mut root = self.read()?;
        let removed = remove_at_path(&mut root, dot_path);
        if removed {
            debug!(path = dot_path, "removed manifest property");
            self.write(&root)?;
        }
        Ok(removed)
    }

    /// Remove dependency entries from `require` and `require-dev`.
    ///
    /// Each requested name is resolved per [`matcher::select_removals`]: a
    /// literal key match wins, otherwise the name is matched
    /// case-insensitively, exact first and then as a glob pattern. Requests
    /// that match nothing are recorded in the outcome instead of failing.
    pub fn remove_packages(
        &self,
        require: &[String],
        require_dev: &[String],
    ) -> Result<RemovalOutcome, CleanupError> {
        let mut root = self.read()?;
        let mut outcome = RemovalOutcome::default();
        let mut changed = false;

        for (section, requested) in [
            (Section::Require, require),
            (Section::RequireDev, require_dev),
        ] {
            for name in requested {
                let keys: Vec<String> = root
                    .get(section.key())
                    .and_then(Value::as_object)
                    .map(|map| map.keys().cloned().collect())
                    .unwrap_or_default();

                let selected = matcher::select_removals(&keys, name);
                if selected.is_empty() {
                    outcome.missing.push(PackageRef {
                        section,
                        name: name.clone(),
                    });
                    continue;
                }

                if let Some(Value::Object(map)) = root.get_mut(section.key()) {
                    for key in selected {
                        if map.shift_remove(&key).is_some() {
                            debug!(
                                section = section.key(),
                                package = key.as_str(),
                                "removed dependency"
                            );
                            outcome.removed.push(PackageRef { section, name: key });
                            changed = true;
                        }
                    }
                }
            }
        }

        if changed {
            self.write(&root)?;
        }
        Ok(outcome)
    }
}

fn remove_at_path(root: &mut Map<String, Value>, dot_path: &str) -> bool {
    let mut segments: Vec<&str> = dot_path.split('.').collect();
    let Some(last) = segments.pop() else {
        return false;
    };
    if last.is_empty() {
        return false;
    }

    let mut cursor = root;
    for segment in segments {
        cursor = match cursor.get_mut(segment) {
            Some(Value::Object(map)) => map,
            _ => return false,
        };
    }
    cursor.shift_remove(last).is_some()
}
