//! Hook Service - the pre-generation gate.
//!
//! Runs before the orchestrator materializes any files:
//! 1. Validate the project name
//! 2. Validate the repository slug
//! 3. Check the Python specifier string for syntax (when supplied)
//!
//! The first failure is returned as-is; later checks do not run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    domain::{DomainError, Identifier, SpecifierSet},
    error::PyscaffResult,
};

/// Label used when the Python specifier fails the syntax check.
pub const PYTHON_SPECIFIER_LABEL: &str = "python version specifier";

/// Values the orchestrator substitutes into the hook.
///
/// Deserializes from the orchestrator's context dump, so field names match
/// the template variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInputs {
    pub project_name: String,
    pub repo_name: String,
    /// Raw specifier string, e.g. `>=3.9,<3.13`. Older templates omit it.
    #[serde(default)]
    pub python: Option<String>,
}

impl GenerationInputs {
    pub fn new(project_name: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            repo_name: repo_name.into(),
            python: None,
        }
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = Some(python.into());
        self
    }
}

/// Pre-generation validation service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookService;

impl HookService {
    pub fn new() -> Self {
        Self
    }

    /// Gate generation on `inputs`. `Ok(())` means "proceed".
    #[instrument(
        skip_all,
        fields(
            project = %inputs.project_name,
            repo = %inputs.repo_name,
            python = inputs.python.as_deref().unwrap_or("-")
        )
    )]
    pub fn pre_generate(&self, inputs: &GenerationInputs) -> PyscaffResult<()> {
        Identifier::project_name(inputs.project_name.as_str())?;
        Identifier::repo_slug(inputs.repo_name.as_str())?;

        if let Some(raw) = inputs.python.as_deref() {
            Self::check_python_specifier(raw)?;
        }

        info!("Pre-generation checks passed");
        Ok(())
    }

    /// Syntax-only check; the catalog is not consulted here.
    pub fn check_python_specifier(raw: &str) -> Result<SpecifierSet, DomainError> {
        raw.parse::<SpecifierSet>().map_err(|e| {
            debug!(error = %e, "Python specifier rejected");
            DomainError::InvalidIdentifier {
                value: raw.to_string(),
                label: PYTHON_SPECIFIER_LABEL.into(),
            }
        })
    }
}
