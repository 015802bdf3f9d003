//! Failures while generating, diffing or inspecting a service tree.

use std::path::PathBuf;

use thiserror::Error;

use svcgen_core::DefinitionError;
use svcgen_renderer::RenderError;

#[derive(Debug, Error)]
pub enum SyncError {
    /// A template failed to render; hook files never produce this.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Loading or discovering a service definition failed.
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Reading an existing output file or replacing it failed.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `.svcgen/hashes.json` is unreadable or could not be encoded.
    #[error("hash store: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
