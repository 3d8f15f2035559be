use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Package descriptor compiled into the binary
const BUNDLED_DESCRIPTOR: &str = include_str!("../../descriptor.json");

/// Identity metadata of this helper: the package name under which a
/// scaffolding template requires it, so the cleaner can remove the helper
/// from the generated project once its job is done.
///
/// Loaded once at startup and passed into the cleaner's constructor.
#[derive(Debug, Clone, Deserialize)]
pub struct SelfDescriptor {
    pub name: String,
}

impl SelfDescriptor {
    /// The descriptor bundled with this build
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_DESCRIPTOR).context("Failed to parse bundled descriptor")
    }

    /// Load a descriptor from an explicit path, overriding the bundled one
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse descriptor: {}", path.display()))
    }
}
