//! # svcgen-sync
//!
//! Generation orchestrator: renders every file of a service, preserves hook
//! files that already exist, and writes the result with hash-gated atomic
//! writes.
//!
//! Call [`generate_service`] for one parsed definition, or
//! [`pipeline::run`] to load and generate from definition files.

pub mod diff;
pub mod error;
pub mod hash_store;
pub mod pipeline;
pub mod status;
pub mod writer;

pub use diff::{diff_service, DiffServiceResult, FileDiff};
pub use error::SyncError;
pub use status::{FileState, FileStatus, ServiceStatus};
pub use writer::{generate_service, GenerateServiceResult, WriteResult};
