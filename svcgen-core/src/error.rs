//! Error types for svcgen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from service definition operations.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse service definition at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The definition file did not exist at the expected path.
    #[error("service definition not found at {path}")]
    NotFound { path: PathBuf },

    /// The definition parsed but describes an unusable service.
    #[error("invalid service definition: {reason}")]
    Invalid { reason: String },
}
