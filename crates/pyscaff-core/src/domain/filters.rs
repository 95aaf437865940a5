//! Built-in template filters.
//!
//! A filter is a name, an argument signature, and a pure function from the
//! piped value (plus positional arguments) to text. Templates call them as
//! `{{ python | py_vers_tox }}` or `{{ python | py_vers_minimal("micro") }}`;
//! which engine does the calling is not this module's concern.
//!
//! To add a filter: write the function, add one [`FilterDef`] to
//! [`FILTER_REGISTRY`].

use crate::domain::catalog::Precision;
use crate::domain::render::{render_minimal, render_tox, render_yaml_list};

/// Signature shared by every filter: piped value, then positional arguments.
pub type FilterFn = fn(&str, &[&str]) -> String;

/// Registration record for one filter.
#[derive(Debug, Clone, Copy)]
pub struct FilterDef {
    pub name: &'static str,
    /// Human-readable call shape, e.g. `value | py_vers_minimal(precision?)`.
    pub signature: &'static str,
    pub description: &'static str,
    /// Fewest positional arguments accepted.
    pub min_args: usize,
    /// Most positional arguments accepted.
    pub max_args: usize,
    pub apply: FilterFn,
}

impl FilterDef {
    pub fn accepts_arity(&self, n: usize) -> bool {
        (self.min_args..=self.max_args).contains(&n)
    }
}

/// Single source of truth for the built-in filters.
pub static FILTER_REGISTRY: &[FilterDef] = &[
    FilterDef {
        name: "py_vers_tox",
        signature: "value | py_vers_tox",
        description: "tox env list of supported minor versions, e.g. py3{9,10}",
        min_args: 0,
        max_args: 0,
        apply: py_vers_tox,
    },
    FilterDef {
        name: "py_vers_yaml",
        signature: "value | py_vers_yaml",
        description: "YAML list of supported minor versions, e.g. ['3.9', '3.10']",
        min_args: 0,
        max_args: 0,
        apply: py_vers_yaml,
    },
    FilterDef {
        name: "py_vers_minimal",
        signature: "value | py_vers_minimal(precision?)",
        description: "lowest supported version at major, minor (default) or micro precision",
        min_args: 0,
        max_args: 1,
        apply: py_vers_minimal,
    },
];

/// Look up a built-in filter by name.
pub fn find_filter(name: &str) -> Option<&'static FilterDef> {
    FILTER_REGISTRY.iter().find(|def| def.name == name)
}

fn py_vers_tox(value: &str, _args: &[&str]) -> String {
    render_tox(value)
}

fn py_vers_yaml(value: &str, _args: &[&str]) -> String {
    render_yaml_list(value)
}

// An unknown precision is a bad value like any other: empty output.
fn py_vers_minimal(value: &str, args: &[&str]) -> String {
    let precision = match args.first() {
        Some(raw) => match raw.parse::<Precision>() {
            Ok(p) => p,
            Err(_) => return String::new(),
        },
        None => Precision::default(),
    };
    render_minimal(value, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique() {
        let mut names: Vec<_> = FILTER_REGISTRY.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FILTER_REGISTRY.len());
    }

    #[test]
    fn registry_arity_bounds_are_ordered() {
        for def in FILTER_REGISTRY {
            assert!(def.min_args <= def.max_args, "{}", def.name);
        }
    }

    #[test]
    fn find_filter_by_name() {
        assert!(find_filter("py_vers_tox").is_some());
        assert!(find_filter("py_vers_yaml").is_some());
        assert!(find_filter("py_vers_minimal").is_some());
        assert!(find_filter("upper").is_none());
    }

    #[test]
    fn filters_delegate_to_renderers() {
        let tox = find_filter("py_vers_tox").unwrap();
        assert_eq!((tox.apply)(">=3.11", &[]), "py3{11,12}");

        let yaml = find_filter("py_vers_yaml").unwrap();
        assert_eq!((yaml.apply)(">=3.11", &[]), "['3.11', '3.12']");
    }

    #[test]
    fn minimal_precision_argument() {
        let minimal = find_filter("py_vers_minimal").unwrap();
        assert_eq!((minimal.apply)(">=3.9", &[]), "3.9");
        assert_eq!((minimal.apply)(">3.9", &["micro"]), "3.9.1");
        assert_eq!((minimal.apply)(">=3.9", &["nano"]), "");
        assert!(minimal.accepts_arity(1));
        assert!(!minimal.accepts_arity(2));
    }
}
