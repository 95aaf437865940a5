//! `pyscaff validate`: the pre-generation gate.
//!
//! The orchestrator runs this before materializing any files. A non-zero
//! exit (with the message on stderr) aborts generation.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use pyscaff_core::prelude::{GenerationInputs, HookService};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Serialize)]
struct Report<'a> {
    valid: bool,
    #[serde(flatten)]
    inputs: &'a GenerationInputs,
}

#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let inputs = collect_inputs(args)?;

    HookService::new()
        .pre_generate(&inputs)
        .with_cli_context(|| "pre-generation checks")?;

    if output.format() == OutputFormat::Json {
        output.json(&Report {
            valid: true,
            inputs: &inputs,
        })?;
    } else {
        output.success(&format!(
            "Inputs are valid (project '{}', repository '{}')",
            inputs.project_name, inputs.repo_name
        ))?;
    }
    Ok(())
}

fn collect_inputs(args: ValidateArgs) -> CliResult<GenerationInputs> {
    if let Some(path) = args.context.as_deref() {
        return read_context(path);
    }

    // clap enforces both names unless --context is present.
    let (Some(project_name), Some(repo_name)) = (args.project_name, args.repo_name) else {
        return Err(CliError::InvalidInput {
            message: "--project-name and --repo-name are required without --context".into(),
            source: None,
        });
    };

    let inputs = GenerationInputs::new(project_name, repo_name);
    Ok(match args.python {
        Some(python) => inputs.with_python(python),
        None => inputs,
    })
}

fn read_context(path: &Path) -> CliResult<GenerationInputs> {
    debug!(path = %path.display(), "Reading generation context");
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("reading context file {}", path.display()))?;

    serde_json::from_str(&text).map_err(|e| CliError::InvalidInput {
        message: format!("{} is not a valid generation context", path.display()),
        source: Some(Box::new(e)),
    })
}
