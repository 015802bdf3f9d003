//! `svcgen generate` — render and write service files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use svcgen_sync::{
    pipeline::{self, DefinitionSource, GenerateOptions},
    GenerateServiceResult, WriteResult,
};

/// Arguments for `svcgen generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Definition file, or a directory of definition files.
    pub definition: PathBuf,

    /// Directory services are generated under.
    #[arg(long, short = 'o', default_value = ".")]
    pub out: PathBuf,

    /// Directory of `.tera` files overriding the built-in templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let source = DefinitionSource::from_path(&self.definition);
        let options = GenerateOptions {
            out_dir: self.out.clone(),
            template_dir: self.templates.clone(),
            dry_run: self.dry_run,
        };
        let results = pipeline::run(&source, &options)
            .with_context(|| format!("generate failed for '{}'", self.definition.display()))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&results)
                    .context("failed to serialize generate JSON")?
            );
            return Ok(());
        }

        if results.is_empty() {
            println!(
                "No service definitions found in '{}'. Run `svcgen init` first.",
                self.definition.display()
            );
        }
        for r in &results {
            print_results(r, self.dry_run);
        }
        Ok(())
    }
}

fn print_results(result: &GenerateServiceResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let count = |f: fn(&WriteResult) -> bool| result.writes.iter().filter(|w| f(w)).count();
    let written = count(|w| matches!(w, WriteResult::Written { .. } | WriteResult::WouldWrite { .. }));
    let unchanged = count(|w| matches!(w, WriteResult::Unchanged { .. }));
    let preserved = count(|w| matches!(w, WriteResult::Preserved { .. }));

    println!(
        "{prefix}✓ '{}' generated ({written} written, {unchanged} unchanged, {preserved} preserved)",
        result.service_name
    );

    for r in &result.writes {
        match r {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
            WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
            WriteResult::Preserved { path } => println!("  ⚓  {} (kept)", path.display()),
        }
    }
}
