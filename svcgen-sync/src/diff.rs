//! Dry-run unified diff support for `svcgen diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use svcgen_core::types::ServiceDefinition;
use svcgen_renderer::{Data, FileKind, TemplateEngine};

use crate::{error::io_err, writer::render_file, SyncError};

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Diff result for a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffServiceResult {
    pub service_name: String,
    pub diffs: Vec<FileDiff>,
}

/// Render what `generate` would write and compare it to current on-disk content.
///
/// Preserved hook files never differ from themselves, so only template
/// files and missing files show up. No files are written.
pub fn diff_service(
    definition: &ServiceDefinition,
    out_dir: &Path,
    engine: &TemplateEngine,
) -> Result<DiffServiceResult, SyncError> {
    let data = Data::from_definition(definition);

    let mut diffs = Vec::new();
    for kind in FileKind::all() {
        let path = kind.output_path(out_dir, &definition.name);
        let rendered = render_file(*kind, &path, &data, engine)?;
        let rendered = String::from_utf8_lossy(&rendered.content).into_owned();
        let existing = read_existing_or_empty(&path)?;
        if existing == rendered {
            continue;
        }

        let relative = path.strip_prefix(out_dir).unwrap_or(path.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path,
            unified_diff: unified,
        });
    }

    Ok(DiffServiceResult {
        service_name: definition.name.0.clone(),
        diffs,
    })
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read(path) {
        Ok(content) => Ok(String::from_utf8_lossy(&content).into_owned()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
