pub mod document;
pub mod matcher;

pub use document::{ManifestFile, PackageRef, RemovalOutcome, Section};
