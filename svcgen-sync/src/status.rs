//! Per-file status of a generated service against its hash store.
//!
//! Classification per file:
//! 1. `Missing` — not on disk.
//! 2. `Untracked` — on disk but never recorded in the hash store.
//! 3. `Modified` — on disk content differs from the last generated hash.
//! 4. `Current`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use svcgen_core::types::ServiceDefinition;
use svcgen_renderer::FileKind;

use crate::{error::io_err, hash_store, SyncError};

/// State of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    Missing,
    Untracked,
    Modified,
    Current,
}

/// Status of one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub state: FileState,
    /// Hook files keep user edits; other files are overwritten on regeneration.
    pub preserved: bool,
}

impl FileStatus {
    /// Edits that the next generation will discard.
    pub fn will_be_overwritten(&self) -> bool {
        !self.preserved && self.state == FileState::Modified
    }
}

/// Status of a whole service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub service_name: String,
    /// `None` when the service has never been generated.
    pub generated_at: Option<DateTime<Utc>>,
    pub files: Vec<FileStatus>,
}

/// Compare the files of `definition` under `out_dir` with the hash store.
pub fn check(definition: &ServiceDefinition, out_dir: &Path) -> Result<ServiceStatus, SyncError> {
    let service_root = out_dir.join(definition.name.dir_name());
    let store_exists = hash_store::store_path_at(&service_root).exists();
    let store = hash_store::load_at(&service_root)?;

    let mut files = Vec::with_capacity(FileKind::all().len());
    for kind in FileKind::all() {
        let path = kind.output_path(out_dir, &definition.name);
        let key = hash_store::store_key(*kind, &definition.name);
        let state = match std::fs::metadata(&path) {
            Err(err) if err.kind() == ErrorKind::NotFound => FileState::Missing,
            Err(err) => return Err(io_err(&path, err)),
            Ok(_) => match store.files.get(&key) {
                None => FileState::Untracked,
                Some(expected) if hash_store::digest_file(&path)? == *expected => {
                    FileState::Current
                }
                Some(_) => FileState::Modified,
            },
        };
        files.push(FileStatus {
            path: kind.relative_path(&definition.name),
            state,
            preserved: kind.preserves_existing(),
        });
    }

    Ok(ServiceStatus {
        service_name: definition.name.0.clone(),
        generated_at: store_exists.then_some(store.generated_at),
        files,
    })
}

/// Format age from a chrono timestamp (hash store `generated_at`).
pub fn format_datetime_age(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let age = now.signed_duration_since(timestamp).num_seconds().max(0) as u64;
    format_seconds(age)
}

fn format_seconds(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    if seconds < 60 * 60 {
        return format!("{}m", seconds / 60);
    }
    if seconds < 60 * 60 * 24 {
        return format!("{}h", seconds / (60 * 60));
    }
    format!("{}d", seconds / (60 * 60 * 24))
}
