//! Shared generation entrypoint used by the CLI.

use std::path::{Path, PathBuf};

use svcgen_core::definition;
use svcgen_renderer::TemplateEngine;

use crate::{generate_service, GenerateServiceResult, SyncError};

/// Where service definitions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// A single definition file.
    File(PathBuf),
    /// Every `*.yaml` / `*.yml` file in a directory.
    Directory(PathBuf),
}

impl DefinitionSource {
    /// Classify `path` by what is on disk.
    pub fn from_path(path: &Path) -> Self {
        if path.is_dir() {
            DefinitionSource::Directory(path.to_path_buf())
        } else {
            DefinitionSource::File(path.to_path_buf())
        }
    }

    /// Definition file paths in processing order.
    pub fn paths(&self) -> Result<Vec<PathBuf>, SyncError> {
        match self {
            DefinitionSource::File(path) => Ok(vec![path.clone()]),
            DefinitionSource::Directory(dir) => Ok(definition::discover_at(dir)?),
        }
    }
}

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root directory services are generated under.
    pub out_dir: PathBuf,
    /// Optional directory of `.tera` overrides.
    pub template_dir: Option<PathBuf>,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// Load every definition from `source` and generate each service.
///
/// Services are independent: each one gets freshly constructed renderers and
/// its own hash store. The first failure aborts the run.
pub fn run(
    source: &DefinitionSource,
    options: &GenerateOptions,
) -> Result<Vec<GenerateServiceResult>, SyncError> {
    let engine = TemplateEngine::new(options.template_dir.as_deref())?;
    let mut results = Vec::new();
    for path in source.paths()? {
        let def = definition::load_at(&path)?;
        tracing::debug!(definition = %path.display(), service = %def.name, "generating service");
        results.push(generate_service(
            &def,
            &options.out_dir,
            &engine,
            options.dry_run,
        )?);
    }
    Ok(results)
}
