//! Core domain types
//!
//! Everything here lives for a single run: created by the resolver pipeline,
//! consumed by the report, never persisted.

pub mod identity;
pub mod update;

pub use identity::{OsBuild, OsIdentity};
pub use update::{InstalledPatch, RawLink, Resolution, UpdateRecord};
