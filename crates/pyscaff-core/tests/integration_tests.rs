//! Integration tests for pyscaff-core.

use pyscaff_core::{
    application::{FilterEnvironment, FilterRegistry, GenerationInputs, HookService},
    domain::{Precision, SpecifierSet, catalog, filter, render_minimal, render_tox, render_yaml_list},
    error::{ErrorCategory, PyscaffError},
};

#[test]
fn test_full_hook_workflow() {
    // Pre-generation gate
    let inputs = GenerationInputs::new("Data.Tools", "data_tools").with_python(">=3.10, <3.13");
    HookService::new().pre_generate(&inputs).unwrap();

    // Rendering with the same specifier
    let python = inputs.python.as_deref().unwrap();
    let filters = FilterRegistry::with_builtin().unwrap();

    assert_eq!(filters.apply("py_vers_tox", python, &[]).unwrap(), "py3{10,11,12}");
    assert_eq!(
        filters.apply("py_vers_yaml", python, &[]).unwrap(),
        "['3.10', '3.11', '3.12']"
    );
    assert_eq!(filters.apply("py_vers_minimal", python, &[]).unwrap(), "3.10");
    assert_eq!(
        filters.apply("py_vers_minimal", python, &["micro"]).unwrap(),
        "3.10.0"
    );
}

#[test]
fn test_gate_aborts_before_rendering() {
    let inputs = GenerationInputs::new("ok", "Not_OK").with_python(">=3.10");
    let err = HookService::new().pre_generate(&inputs).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(err.to_string().contains("Not_OK is not a valid repository name"));
}

#[test]
fn test_rendering_degrades_instead_of_failing() {
    for raw in ["not-a-specifier", ">=", "==3.*", "~=3", ">=3.9,,<4"] {
        assert_eq!(render_tox(raw), "", "{raw}");
        assert_eq!(render_yaml_list(raw), "", "{raw}");
        assert_eq!(render_minimal(raw, Precision::Minor), "", "{raw}");
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(render_tox(">=3.9,<3.11"), "py3{9,10}");
    assert_eq!(render_yaml_list(">=3.10"), "['3.10', '3.11', '3.12']");
    assert_eq!(render_minimal(">=3.9", Precision::Minor), "3.9");
    assert_eq!(render_minimal("<3.0", Precision::Minor), "");
    assert_eq!(render_tox("not-a-specifier"), "");
}

#[test]
fn test_catalog_round_trips_through_unconstrained_filter() {
    let unconstrained = SpecifierSet::unconstrained();
    for precision in [Precision::Major, Precision::Minor, Precision::Micro] {
        let all: Vec<_> = catalog(precision).collect();
        let kept: Vec<_> = filter(&unconstrained, catalog(precision)).collect();
        assert!(!all.is_empty());
        assert_eq!(all, kept);
    }
}

#[test]
fn test_custom_engine_receives_builtin_filters() {
    // A stand-in for a real templating engine's filter table.
    #[derive(Default)]
    struct Engine {
        names: Vec<&'static str>,
    }

    impl FilterEnvironment for Engine {
        fn add_filter(
            &mut self,
            def: pyscaff_core::domain::FilterDef,
        ) -> pyscaff_core::error::PyscaffResult<()> {
            self.names.push(def.name);
            Ok(())
        }

        fn has_filter(&self, name: &str) -> bool {
            self.names.contains(&name)
        }
    }

    let mut engine = Engine::default();
    pyscaff_core::application::services::install_builtin_filters(&mut engine).unwrap();

    assert!(engine.has_filter("py_vers_tox"));
    assert!(engine.has_filter("py_vers_yaml"));
    assert!(engine.has_filter("py_vers_minimal"));
}

#[test]
fn test_unknown_filter_reports_not_found() {
    let filters = FilterRegistry::with_builtin().unwrap();
    let err = filters.apply("py_vers_toml", ">=3.9", &[]).unwrap_err();
    assert!(matches!(err, PyscaffError::Application(_)));
    assert_eq!(err.category(), ErrorCategory::NotFound);
}
