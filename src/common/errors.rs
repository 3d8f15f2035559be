use std::path::PathBuf;

use thiserror::Error;

/// Typed errors for the manifest and installer layers.
/// We use `anyhow` at the top level for CLI error handling,
/// but these keep the lower layers precise about what failed.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// Manifest file could not be read
    #[error("failed to read manifest '{}': {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest file could not be written back
    #[error("failed to write manifest '{}': {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest is not valid JSON
    #[error("failed to parse manifest '{}': {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Manifest could not be re-serialized
    #[error("failed to serialize manifest '{}': {source}", path.display())]
    ManifestSerialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Manifest root is not a JSON object
    #[error("manifest '{}' does not hold a JSON object at its root", path.display())]
    NotAnObject { path: PathBuf },

    /// The delegated installer could not be launched
    #[error("failed to launch installer '{program}': {source}")]
    InstallerSpawn {
        program: String,
        source: std::io::Error,
    },
}
