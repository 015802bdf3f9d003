//! `svcgen diff <definition>` — show unified diffs for what generate would write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use svcgen_core::definition;
use svcgen_renderer::TemplateEngine;
use svcgen_sync::diff_service;

/// Arguments for `svcgen diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Definition file of the service to diff.
    pub definition: PathBuf,

    /// Directory the service was generated under.
    #[arg(long, short = 'o', default_value = ".")]
    pub out: PathBuf,

    /// Directory of `.tera` files overriding the built-in templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let def = definition::load_at(&self.definition)
            .with_context(|| format!("cannot load '{}'", self.definition.display()))?;
        let engine = TemplateEngine::new(self.templates.as_deref())
            .context("failed to load templates")?;

        let result = diff_service(&def, &self.out, &engine)
            .with_context(|| format!("diff failed for '{}'", def.name))?;

        if result.diffs.is_empty() {
            println!("No differences for '{}'.", result.service_name);
            return Ok(());
        }

        for diff in result.diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
