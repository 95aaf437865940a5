//! Filter Registry - engine-agnostic filter namespace.
//!
//! Holds the mapping from filter name to pure function and applies filters
//! by name. Rendering never fails on a bad value; only asking for a filter
//! that does not exist, or calling one with the wrong arity, is an error.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::FilterEnvironment},
    domain::{FILTER_REGISTRY, FilterDef},
    error::PyscaffResult,
};

/// Install every built-in filter into `env`.
///
/// This is the only integration point an engine binding needs: implement
/// [`FilterEnvironment`] for the engine's filter table, then call this.
pub fn install_builtin_filters(env: &mut dyn FilterEnvironment) -> PyscaffResult<()> {
    for def in FILTER_REGISTRY {
        env.add_filter(*def)?;
    }
    Ok(())
}

/// Name → filter map, sorted by name for stable listings.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    filters: BTreeMap<&'static str, FilterDef>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in filters.
    pub fn with_builtin() -> PyscaffResult<Self> {
        let mut registry = Self::new();
        install_builtin_filters(&mut registry)?;
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&FilterDef> {
        self.filters.get(name)
    }

    /// All registered filters, sorted by name.
    pub fn list(&self) -> impl Iterator<Item = &FilterDef> {
        self.filters.values()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply the filter `name` to `value`.
    #[instrument(skip(self, args), fields(arg_count = args.len()))]
    pub fn apply(&self, name: &str, value: &str, args: &[&str]) -> PyscaffResult<String> {
        let def = self.get(name).ok_or_else(|| ApplicationError::UnknownFilter {
            name: name.to_string(),
        })?;

        if !def.accepts_arity(args.len()) {
            let expected = if def.min_args == def.max_args {
                def.min_args.to_string()
            } else {
                format!("{} to {}", def.min_args, def.max_args)
            };
            return Err(ApplicationError::InvalidFilterArguments {
                name: name.to_string(),
                expected,
                got: args.len(),
            }
            .into());
        }

        let rendered = (def.apply)(value, args);
        debug!(filter = name, output = %rendered, "Filter applied");
        Ok(rendered)
    }
}

impl FilterEnvironment for FilterRegistry {
    fn add_filter(&mut self, def: FilterDef) -> PyscaffResult<()> {
        if self.filters.contains_key(def.name) {
            return Err(ApplicationError::DuplicateFilter {
                name: def.name.to_string(),
            }
            .into());
        }
        self.filters.insert(def.name, def);
        Ok(())
    }

    fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilterEnvironment;
    use crate::error::PyscaffError;

    fn shout(value: &str, _args: &[&str]) -> String {
        value.to_uppercase()
    }

    const SHOUT: FilterDef = FilterDef {
        name: "shout",
        signature: "value | shout",
        description: "upper-case the value",
        min_args: 0,
        max_args: 0,
        apply: shout,
    };

    #[test]
    fn builtin_registry_holds_every_builtin() {
        let registry = FilterRegistry::with_builtin().unwrap();
        assert_eq!(registry.len(), FILTER_REGISTRY.len());
        for def in FILTER_REGISTRY {
            assert!(registry.has_filter(def.name));
        }
    }

    #[test]
    fn list_is_sorted_by_name() {
        let registry = FilterRegistry::with_builtin().unwrap();
        let names: Vec<_> = registry.list().map(|d| d.name).collect();
        assert_eq!(names, ["py_vers_minimal", "py_vers_tox", "py_vers_yaml"]);
    }

    #[test]
    fn apply_by_name() {
        let registry = FilterRegistry::with_builtin().unwrap();
        assert_eq!(
            registry.apply("py_vers_tox", ">=3.9,<3.11", &[]).unwrap(),
            "py3{9,10}"
        );
        assert_eq!(
            registry.apply("py_vers_minimal", ">=3.10", &["micro"]).unwrap(),
            "3.10.0"
        );
    }

    #[test]
    fn apply_swallows_bad_values() {
        let registry = FilterRegistry::with_builtin().unwrap();
        assert_eq!(registry.apply("py_vers_yaml", "???", &[]).unwrap(), "");
    }

    #[test]
    fn unknown_filter_is_an_error() {
        let registry = FilterRegistry::with_builtin().unwrap();
        let err = registry.apply("nope", ">=3.9", &[]).unwrap_err();
        assert!(matches!(
            err,
            PyscaffError::Application(ApplicationError::UnknownFilter { .. })
        ));
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let registry = FilterRegistry::with_builtin().unwrap();
        let err = registry
            .apply("py_vers_tox", ">=3.9", &["extra"])
            .unwrap_err();
        assert!(err.to_string().contains("takes 0 argument(s), got 1"));

        let err = registry
            .apply("py_vers_minimal", ">=3.9", &["minor", "micro"])
            .unwrap_err();
        assert!(err.to_string().contains("0 to 1"));
    }

    #[test]
    fn custom_filters_register_alongside_builtins() {
        let mut registry = FilterRegistry::with_builtin().unwrap();
        registry.add_filter(SHOUT).unwrap();
        assert_eq!(registry.apply("shout", "hi", &[]).unwrap(), "HI");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = FilterRegistry::new();
        registry.add_filter(SHOUT).unwrap();
        assert!(registry.add_filter(SHOUT).is_err());
    }

    #[test]
    fn install_registers_each_builtin_once() {
        let mut env = MockFilterEnvironment::new();
        env.expect_add_filter()
            .times(FILTER_REGISTRY.len())
            .returning(|_| Ok(()));

        install_builtin_filters(&mut env).unwrap();
    }

    #[test]
    fn install_stops_on_first_failure() {
        let mut env = MockFilterEnvironment::new();
        env.expect_add_filter().times(1).returning(|def| {
            Err(ApplicationError::DuplicateFilter {
                name: def.name.to_string(),
            }
            .into())
        });

        assert!(install_builtin_filters(&mut env).is_err());
    }
}
