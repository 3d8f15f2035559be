//! # unscaffold
//!
//! A post-scaffold cleanup helper for Composer-style JSON manifests.
//!
//! After a `create-project` run, the freshly generated project still carries
//! the scaffolding's own plumbing: the `post-create-project-cmd` hook, the
//! `extra.create-project` configuration block, and dependencies that only
//! mattered while the template was being instantiated. unscaffold:
//!
//! - **Strips scaffolding keys**: `scripts.post-create-project-cmd` and
//!   `extra.create-project` are removed unconditionally
//! - **Removes template-only dependencies**: exact names or glob patterns,
//!   matched case-insensitively against `require` and `require-dev`
//! - **Removes itself**: the helper's own package is dropped from `require`
//! - **Delegates the update**: the host package manager re-resolves only the
//!   packages that were removed
//! - **Rolls back on failure**: the manifest is snapshotted before the first
//!   edit and restored when the delegated update fails

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod installer;
pub mod manifest;
