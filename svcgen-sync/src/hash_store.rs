//! Hash store — SHA-256 digests of what the generator last wrote.
//!
//! Persists a `HashStoreFile` JSON document at
//! `<out_dir>/<service>/.svcgen/hashes.json`, keyed by output path relative
//! to `<out_dir>` with `/` separators.
//! Writes use the `.tmp` + rename pattern.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use svcgen_core::types::ServiceName;
use svcgen_renderer::renderable::{FileKind, NAME_PLACEHOLDER};

use crate::error::{io_err, SyncError};

/// In-memory hash store: relative output path → hex SHA-256 digest.
pub type HashStore = HashMap<String, String>;

/// On-disk hash store payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashStoreFile {
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub generator_version: String,
    pub files: HashStore,
}

impl Default for HashStoreFile {
    fn default() -> Self {
        HashStoreFile {
            generated_at: Utc::now(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            files: HashMap::new(),
        }
    }
}

/// `<service_root>/.svcgen/hashes.json`
pub fn store_path_at(service_root: &Path) -> PathBuf {
    service_root.join(".svcgen").join("hashes.json")
}

/// Store key for `kind` of `service`: its path pattern with `NAME` substituted.
pub fn store_key(kind: FileKind, service: &ServiceName) -> String {
    kind.path_pattern()
        .replace(NAME_PLACEHOLDER, &service.dir_name())
}

/// Hex SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Hex SHA-256 of the file at `path`.
pub fn digest_file(path: &Path) -> Result<String, SyncError> {
    let content = std::fs::read(path).map_err(|e| io_err(path, e))?;
    Ok(digest(&content))
}

/// Load the hash store under `service_root`.
///
/// Returns an empty store if the file does not yet exist.
pub fn load_at(service_root: &Path) -> Result<HashStoreFile, SyncError> {
    let path = store_path_at(service_root);
    if !path.exists() {
        return Ok(HashStoreFile::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the hash store under `service_root` atomically.
pub fn save_at(service_root: &Path, store: &HashStoreFile) -> Result<(), SyncError> {
    let path = store_path_at(service_root);
    let Some(dir) = path.parent() else {
        return Err(io_err(
            path,
            std::io::Error::other("invalid hash store path"),
        ));
    };

    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

    let json = serde_json::to_string_pretty(store)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}
