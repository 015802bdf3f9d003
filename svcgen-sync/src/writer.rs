//! Service generation and atomic writes.
//!
//! ## `atomic_write` protocol
//!
//! 1. Render content (already done by caller).
//! 2. SHA-256 hash the content.
//! 3. Hash the file currently on disk → skip if identical (the store entry
//!    is refreshed so status sees the file as tracked).
//! 4. Write to `<path>.svcgen.tmp`.
//! 5. Rename to final path (atomic on POSIX).
//! 6. Update the hash store entry (caller saves the store).

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use svcgen_core::types::ServiceDefinition;
use svcgen_renderer::{Data, FileKind, TemplateEngine};

use crate::error::{io_err, SyncError};
use crate::hash_store::{self, HashStore};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content matches the stored hash.
    Unchanged { path: PathBuf },
    /// A hook file already existed and its content was carried over.
    Preserved { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::Preserved { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically write a single rendered file and update the hash store.
///
/// `key` is the file's hash store key. The caller saves the store after all
/// files for a service are processed.
pub(crate) fn atomic_write(
    path: &Path,
    key: &str,
    content: &[u8],
    hashes: &mut HashStore,
    dry_run: bool,
) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.svcgen.tmp", path.display()));
    atomic_write_with_tmp(path, key, content, hashes, dry_run, &tmp)
}

fn atomic_write_with_tmp(
    path: &Path,
    key: &str,
    content: &[u8],
    hashes: &mut HashStore,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    let digest = hash_store::digest(content);

    if path.is_file() && hash_store::digest_file(path)? == digest {
        tracing::debug!("unchanged: {}", path.display());
        if !dry_run {
            hashes.insert(key.to_string(), digest);
        }
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    hashes.insert(key.to_string(), digest);

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// render_file
// ---------------------------------------------------------------------------

/// Open the current content of `path`, or `None` if there is no such file.
fn open_existing(path: &Path) -> Result<Option<File>, SyncError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

/// Rendered bytes of one file plus whether they came from the existing file.
pub(crate) struct RenderedFile {
    pub content: Vec<u8>,
    pub preserved: bool,
}

/// Render `kind` for the output at `path`.
///
/// Preserving kinds get the existing file as previous content; the file is
/// opened here and closed before this returns.
pub(crate) fn render_file(
    kind: FileKind,
    path: &Path,
    data: &Data,
    engine: &TemplateEngine,
) -> Result<RenderedFile, SyncError> {
    let prev = if kind.preserves_existing() {
        open_existing(path)?
    } else {
        None
    };
    let mut renderable = kind.renderable(engine, prev);
    if renderable.has_previous() {
        tracing::debug!("preserving existing: {}", path.display());
    }

    let stream = renderable.render(path, data)?;
    let preserved = stream.is_passthrough();
    let content = stream.into_bytes().map_err(|e| io_err(path, e))?;
    Ok(RenderedFile { content, preserved })
}

// ---------------------------------------------------------------------------
// generate_service
// ---------------------------------------------------------------------------

/// Outcome of generating a single service.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateServiceResult {
    pub service_name: String,
    pub service_root: PathBuf,
    pub writes: Vec<WriteResult>,
}

/// Render and write every file of `definition` under `out_dir`.
///
/// Hook files that already exist are carried over byte-for-byte; everything
/// else is regenerated. With `dry_run` nothing is written and the hash store
/// is left untouched.
pub fn generate_service(
    definition: &ServiceDefinition,
    out_dir: &Path,
    engine: &TemplateEngine,
    dry_run: bool,
) -> Result<GenerateServiceResult, SyncError> {
    let started_at = Utc::now();
    let data = Data::from_definition(definition);
    let service_root = out_dir.join(&data.dir_name);
    let mut store = hash_store::load_at(&service_root)?;
    let mut writes = Vec::with_capacity(FileKind::all().len());

    for kind in FileKind::all() {
        let path = kind.output_path(out_dir, &definition.name);
        let key = hash_store::store_key(*kind, &definition.name);
        let rendered = render_file(*kind, &path, &data, engine)?;
        let result = atomic_write(&path, &key, &rendered.content, &mut store.files, dry_run)?;
        if rendered.preserved {
            writes.push(WriteResult::Preserved { path });
        } else {
            writes.push(result);
        }
    }

    if !dry_run {
        store.generated_at = started_at;
        store.generator_version = data.meta.generator_version.clone();
        hash_store::save_at(&service_root, &store)?;
    }

    Ok(GenerateServiceResult {
        service_name: definition.name.0.clone(),
        service_root,
        writes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
