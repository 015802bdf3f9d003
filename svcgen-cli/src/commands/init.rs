//! `svcgen init <name> [--file <path>]`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use svcgen_core::definition;

/// Write a starter service definition.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Service name (e.g. "echo", "user-store").
    pub name: String,

    /// Definition file to create. Defaults to `<name>.yaml`.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Overwrite an existing definition file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let path = self
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.yaml", self.name)));
        if path.exists() && !self.force {
            bail!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            );
        }

        let def = definition::starter(&self.name);
        definition::validate(&def)
            .with_context(|| format!("'{}' is not a usable service name", self.name))?;
        definition::save_at(&path, &def)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        println!("✓ Wrote definition for '{}'", def.name);
        println!("  Saved to: {}", path.display());
        println!("  Next: svcgen generate {}", path.display());
        Ok(())
    }
}
