//! Implementation of the `pyscaff filters` command.

use serde::Serialize;

use pyscaff_core::prelude::{FilterDef, FilterRegistry};

use crate::{
    cli::{FiltersArgs, ListFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Serialize)]
struct FilterSummary {
    name: &'static str,
    signature: &'static str,
    description: &'static str,
}

impl From<&FilterDef> for FilterSummary {
    fn from(def: &FilterDef) -> Self {
        Self {
            name: def.name,
            signature: def.signature,
            description: def.description,
        }
    }
}

pub fn execute(args: FiltersArgs, output: OutputManager) -> CliResult<()> {
    let registry = FilterRegistry::with_builtin().with_cli_context(|| "loading filters")?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Filters:")?;
            let width = registry.list().map(|d| d.name.len()).max().unwrap_or(0);
            for def in registry.list() {
                output.print(&format!("  {:<width$}  {}", def.name, def.description))?;
                output.print(&format!("  {:<width$}  usage: {}", "", def.signature))?;
            }
        }

        ListFormat::List => {
            // Bypasses OutputManager so names survive --quiet in scripts.
            for def in registry.list() {
                println!("{}", def.name);
            }
        }

        ListFormat::Json => {
            let summaries: Vec<FilterSummary> = registry.list().map(Into::into).collect();
            output.json(&summaries)?;
        }
    }

    Ok(())
}
