//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyscaff",
    bin_name = "pyscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Template hooks: input validation and Python version filters",
    long_about = "pyscaff runs the pre-generation checks for a Python project \
                  template and renders the template's Python version filters.",
    after_help = "EXAMPLES:\n\
        \x20 pyscaff validate --project-name My.Project --repo-name my_project --python '>=3.9'\n\
        \x20 pyscaff render py_vers_tox '>=3.9,<3.12'\n\
        \x20 pyscaff render py_vers_minimal '>=3.9' micro\n\
        \x20 pyscaff catalog --precision micro --spec '~=3.11.0'",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the pre-generation checks.
    #[command(
        visible_alias = "pre-gen",
        about = "Validate template inputs before generation",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff validate --project-name My.Project --repo-name my_project\n\
            \x20 pyscaff validate --project-name demo --repo-name demo --python '>=3.10'\n\
            \x20 pyscaff validate --context context.json"
    )]
    Validate(ValidateArgs),

    /// Apply a named filter to a value.
    #[command(
        about = "Render a filter",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff render py_vers_tox '>=3.9,<3.11'     # py3{9,10}\n\
            \x20 pyscaff render py_vers_yaml '>=3.10'         # ['3.10', '3.11', '3.12']\n\
            \x20 pyscaff render py_vers_minimal '>=3.9' micro # 3.9.0"
    )]
    Render(RenderArgs),

    /// List available filters.
    #[command(
        visible_alias = "ls",
        about = "List available filters",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff filters\n\
            \x20 pyscaff filters --format json"
    )]
    Filters(FiltersArgs),

    /// Print the supported release catalog.
    #[command(
        about = "Show supported Python releases",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff catalog\n\
            \x20 pyscaff catalog --precision micro --spec '>=3.12'"
    )]
    Catalog(CatalogArgs),

    /// Inspect the pyscaff configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyscaff config get defaults.precision\n\
            \x20 pyscaff config list\n\
            \x20 pyscaff config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Display name of the project.
    #[arg(
        long = "project-name",
        value_name = "NAME",
        allow_hyphen_values = true,
        required_unless_present = "context",
        conflicts_with = "context",
        help = "Project name to validate"
    )]
    pub project_name: Option<String>,

    /// Repository / package slug.
    #[arg(
        long = "repo-name",
        value_name = "SLUG",
        allow_hyphen_values = true,
        required_unless_present = "context",
        conflicts_with = "context",
        help = "Repository name to validate"
    )]
    pub repo_name: Option<String>,

    /// Python version specifier, checked for syntax only.
    #[arg(
        long = "python",
        value_name = "SPEC",
        allow_hyphen_values = true,
        conflicts_with = "context",
        help = "Python version specifier (e.g. '>=3.9,<3.13')"
    )]
    pub python: Option<String>,

    /// JSON file holding `project_name`, `repo_name` and optional `python`.
    #[arg(
        long = "context",
        value_name = "FILE",
        help = "Read inputs from a JSON context file"
    )]
    pub context: Option<PathBuf>,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Registered filter name.
    #[arg(value_name = "FILTER", help = "Filter name (see `pyscaff filters`)")]
    pub filter: String,

    /// Value piped into the filter.
    #[arg(
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Value to filter"
    )]
    pub value: String,

    /// Positional filter arguments.
    #[arg(value_name = "ARGS", help = "Filter arguments")]
    pub args: Vec<String>,
}

// ── filters ───────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff filters`.
#[derive(Debug, Args)]
pub struct FiltersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Catalog precision; defaults to `defaults.precision` from config.
    #[arg(short = 'p', long = "precision", value_enum, help = "Version precision")]
    pub precision: Option<PrecisionArg>,

    /// Only show versions accepted by this specifier.
    #[arg(
        short = 's',
        long = "spec",
        value_name = "SPEC",
        allow_hyphen_values = true,
        help = "Filter by version specifier"
    )]
    pub spec: Option<String>,
}

/// Catalog precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PrecisionArg {
    Major,
    Minor,
    /// Also accepted as `patch`.
    #[value(alias = "patch")]
    Micro,
}

impl From<PrecisionArg> for pyscaff_core::domain::Precision {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::Major => Self::Major,
            PrecisionArg::Minor => Self::Minor,
            PrecisionArg::Micro => Self::Micro,
        }
    }
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.precision`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
