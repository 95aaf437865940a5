//! Turn a specifier string into text for generated configuration files.
//!
//! Every renderer absorbs parse failures and returns `""`. A template must
//! keep rendering when the user typed a bad specifier; the empty value in
//! the generated file is what tells them.

use tracing::debug;

use crate::domain::catalog::{Precision, catalog};
use crate::domain::specifier::SpecifierSet;
use crate::domain::version::Version;

/// Catalog versions at `precision` accepted by `raw`, or `None` if `raw`
/// does not parse.
fn resolve(raw: &str, precision: Precision) -> Option<Vec<Version>> {
    let Some(set) = SpecifierSet::parse(raw) else {
        debug!(specifier = raw, "unparseable version specifier, rendering empty");
        return None;
    };
    Some(filter(&set, catalog(precision)).collect())
}

/// Keep the versions `set` accepts, preserving input order.
pub fn filter<'a, I>(set: &'a SpecifierSet, versions: I) -> impl Iterator<Item = Version> + 'a
where
    I: IntoIterator<Item = Version>,
    I::IntoIter: 'a,
{
    set.filter(versions)
}

/// tox env list, e.g. `py3{9,10,11}`.
pub fn render_tox(raw: &str) -> String {
    let Some(versions) = resolve(raw, Precision::Minor) else {
        return String::new();
    };
    let minors: Vec<String> = versions
        .iter()
        .filter_map(Version::minor)
        .map(|m| m.to_string())
        .collect();
    format!("py3{{{}}}", minors.join(","))
}

/// Inline YAML list, e.g. `['3.9', '3.10']`.
pub fn render_yaml_list(raw: &str) -> String {
    let Some(versions) = resolve(raw, Precision::Minor) else {
        return String::new();
    };
    let items: Vec<String> = versions.iter().map(|v| format!("'{v}'")).collect();
    format!("[{}]", items.join(", "))
}

/// Lowest accepted catalog version at `precision`, or `""` if none.
pub fn render_minimal(raw: &str, precision: Precision) -> String {
    resolve(raw, precision)
        .and_then(|versions| versions.into_iter().min())
        .map(|v| v.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tox_bounded_range() {
        assert_eq!(render_tox(">=3.9,<3.11"), "py3{9,10}");
    }

    #[test]
    fn tox_compatible_release() {
        assert_eq!(render_tox("~=3.9"), "py3{9,10,11,12}");
        assert_eq!(render_tox("~=3.9.0"), "py3{9}");
    }

    #[test]
    fn tox_no_match_renders_empty_braces() {
        assert_eq!(render_tox("<3.0"), "py3{}");
    }

    #[test]
    fn tox_malformed_renders_empty_string() {
        assert_eq!(render_tox("not-a-specifier"), "");
    }

    #[test]
    fn yaml_list_quotes_full_versions() {
        assert_eq!(render_yaml_list(">=3.10"), "['3.10', '3.11', '3.12']");
        assert_eq!(render_yaml_list("==3.8"), "['3.8']");
    }

    #[test]
    fn yaml_list_edge_cases() {
        assert_eq!(render_yaml_list(">4"), "[]");
        assert_eq!(render_yaml_list(">=3.10,"), "");
    }

    #[test]
    fn minimal_is_version_ordered() {
        assert_eq!(render_minimal(">=3.9", Precision::Minor), "3.9");
        assert_eq!(render_minimal(">3.9", Precision::Minor), "3.10");
        assert_eq!(render_minimal(">=3.10.4", Precision::Micro), "3.10.4");
        assert_eq!(render_minimal(">=3.9", Precision::Major), "");
        assert_eq!(render_minimal(">=3", Precision::Major), "3");
    }

    #[test]
    fn minimal_empty_on_no_match_or_bad_input() {
        assert_eq!(render_minimal("<3.0", Precision::Minor), "");
        assert_eq!(render_minimal("bogus", Precision::Minor), "");
    }

    #[test]
    fn blank_specifier_is_unconstrained() {
        assert_eq!(render_tox(""), "py3{8,9,10,11,12}");
        assert_eq!(render_minimal(" ", Precision::Micro), "3.8.0");
    }

    #[test]
    fn rendering_is_idempotent() {
        for raw in [">=3.9,<3.11", "~=3.10", "junk", ""] {
            assert_eq!(render_tox(raw), render_tox(raw));
            assert_eq!(render_yaml_list(raw), render_yaml_list(raw));
        }
    }

    #[test]
    fn every_catalog_entry_satisfies_unconstrained_filter() {
        let set = SpecifierSet::unconstrained();
        for precision in Precision::ALL {
            let all: Vec<Version> = catalog(precision).collect();
            let kept: Vec<Version> = filter(&set, catalog(precision)).collect();
            assert_eq!(all, kept);
        }
    }
}
