//! Implementation of the `pyscaff catalog` command.
//!
//! Prints the supported releases, optionally narrowed by a specifier. A
//! specifier that does not parse is a user error here, unlike in the
//! rendering filters, because nobody is waiting on template output.

use tracing::instrument;

use pyscaff_core::prelude::{Precision, SpecifierSet, Version, catalog};

use crate::{
    cli::{CatalogArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: CatalogArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let precision = args
        .precision
        .map(Precision::from)
        .unwrap_or(config.defaults.precision);
    let versions = select(precision, args.spec.as_deref())?;

    if output.format() == OutputFormat::Json {
        let texts: Vec<String> = versions.iter().map(ToString::to_string).collect();
        output.json(&texts)?;
        return Ok(());
    }

    for version in &versions {
        println!("{version}");
    }
    Ok(())
}

fn select(precision: Precision, spec: Option<&str>) -> CliResult<Vec<Version>> {
    let set = match spec {
        None => SpecifierSet::unconstrained(),
        Some(raw) => raw.parse::<SpecifierSet>().map_err(|e| CliError::InvalidInput {
            message: format!("'{raw}' is not a valid version specifier"),
            source: Some(Box::new(e)),
        })?,
    };
    Ok(set.filter(catalog(precision)).collect())
}
