//! `svcgen status <definition>` — which generated files were edited.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use svcgen_core::definition;
use svcgen_sync::{
    status::{check, format_datetime_age},
    FileState, FileStatus, ServiceStatus,
};

/// Arguments for `svcgen status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Definition file of the service to inspect.
    pub definition: PathBuf,

    /// Directory the service was generated under.
    #[arg(long, short = 'o', default_value = ".")]
    pub out: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let def = definition::load_at(&self.definition)
            .with_context(|| format!("cannot load '{}'", self.definition.display()))?;
        let status = check(&def, &self.out)
            .with_context(|| format!("status failed for '{}'", def.name))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&status).context("failed to serialize status JSON")?
            );
            return Ok(());
        }

        print_table(&status);
        Ok(())
    }
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "")]
    indicator: String,
    #[tabled(rename = "file")]
    file: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "on regenerate")]
    policy: String,
}

fn print_table(status: &ServiceStatus) {
    let generated = match status.generated_at {
        Some(at) => format!("generated {} ago", format_datetime_age(at)),
        None => "never generated".to_string(),
    };
    println!("{} ({generated})", status.service_name.to_uppercase().bold());

    let rows: Vec<StatusTableRow> = status
        .files
        .iter()
        .map(|f| StatusTableRow {
            indicator: state_indicator(f),
            file: f.path.display().to_string(),
            status: state_label(f.state).to_string(),
            policy: if f.preserved { "kept" } else { "overwritten" }.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    let at_risk = status.files.iter().filter(|f| f.will_be_overwritten()).count();
    if at_risk > 0 {
        println!(
            "{} {at_risk} edited file(s) will be overwritten by the next 'svcgen generate'.",
            "warning:".yellow().bold()
        );
    }
}

fn state_label(state: FileState) -> &'static str {
    match state {
        FileState::Missing => "MISSING",
        FileState::Untracked => "UNTRACKED",
        FileState::Modified => "MODIFIED",
        FileState::Current => "CURRENT",
    }
}

fn state_indicator(file: &FileStatus) -> String {
    match file.state {
        FileState::Current => "■".green().bold().to_string(),
        FileState::Missing => "■".bright_black().bold().to_string(),
        FileState::Untracked => "■".magenta().bold().to_string(),
        FileState::Modified if file.preserved => "■".blue().bold().to_string(),
        FileState::Modified => "■".red().bold().to_string(),
    }
}
