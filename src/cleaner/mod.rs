pub mod backup;
pub mod engine;

pub use backup::ManifestBackup;
pub use engine::{Cleaner, CleanupReport, UpdateResult};
