//! `pyscaff render`: apply one registered filter.
//!
//! The result goes to stdout verbatim, even when empty and even with
//! `--quiet`: the caller substitutes it into a template.

use tracing::instrument;

use pyscaff_core::prelude::FilterRegistry;

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

#[instrument(skip_all, fields(filter = %args.filter))]
pub fn execute(args: RenderArgs, config: AppConfig) -> CliResult<()> {
    let registry = FilterRegistry::with_builtin().with_cli_context(|| "loading filters")?;
    let rendered = render(&registry, &args, &config)?;
    println!("{rendered}");
    Ok(())
}

fn render(registry: &FilterRegistry, args: &RenderArgs, config: &AppConfig) -> CliResult<String> {
    let mut call_args: Vec<&str> = args.args.iter().map(String::as_str).collect();

    // The only optional argument any filter takes is a precision.
    let takes_precision = registry
        .get(&args.filter)
        .is_some_and(|def| def.min_args == 0 && def.max_args == 1);
    if call_args.is_empty() && takes_precision {
        call_args.push(config.defaults.precision.as_str());
    }

    registry
        .apply(&args.filter, &args.value, &call_args)
        .with_cli_context(|| "rendering filter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyscaff_core::domain::Precision;

    fn args(filter: &str, value: &str, extra: &[&str]) -> RenderArgs {
        RenderArgs {
            filter: filter.into(),
            value: value.into(),
            args: extra.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run(call: RenderArgs, config: &AppConfig) -> CliResult<String> {
        render(&FilterRegistry::with_builtin().unwrap(), &call, config)
    }

    #[test]
    fn renders_tox_list() {
        let out = run(args("py_vers_tox", ">=3.9,<3.11", &[]), &AppConfig::default()).unwrap();
        assert_eq!(out, "py3{9,10}");
    }

    #[test]
    fn minimal_uses_configured_precision_when_omitted() {
        let mut config = AppConfig::default();
        config.defaults.precision = Precision::Micro;
        let out = run(args("py_vers_minimal", ">=3.9", &[]), &config).unwrap();
        assert_eq!(out, "3.9.0");
    }

    #[test]
    fn explicit_precision_beats_config() {
        let mut config = AppConfig::default();
        config.defaults.precision = Precision::Micro;
        let out = run(args("py_vers_minimal", ">=3.0", &["major"]), &config).unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn bad_value_renders_empty() {
        let out = run(args("py_vers_yaml", "not-a-specifier", &[]), &AppConfig::default()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn unknown_filter_is_not_found() {
        let err = run(args("py_vers_toml", ">=3.9", &[]), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = run(args("py_vers_tox", ">=3.9", &["x"]), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
