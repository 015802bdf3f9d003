//! Error types for svcgen-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from rendering operations.
///
/// Only template-backed variants produce these; hook files never fail to render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, missing variable, bad filter).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
