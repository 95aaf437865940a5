//! pyscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers behind a project
//! template's hooks: the pre-generation input gate and the Python version
//! filters used while rendering generated configuration files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyscaff-cli (CLI)             │
//! │     (Process boundary for hooks)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (HookService, FilterRegistry)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (FilterEnvironment)            │
//! └──────────────────┬──────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Identifier, SpecifierSet, catalog,     │
//! │  renderers)                             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pyscaff_core::prelude::*;
//!
//! // Gate generation
//! let inputs = GenerationInputs::new("My.Project", "my_project").with_python(">=3.9");
//! HookService::new().pre_generate(&inputs).unwrap();
//!
//! // Render for a tox.ini
//! assert_eq!(render_tox(">=3.9,<3.11"), "py3{9,10}");
//!
//! // Or through the filter namespace
//! let filters = FilterRegistry::with_builtin().unwrap();
//! assert_eq!(filters.apply("py_vers_minimal", ">=3.9", &[]).unwrap(), "3.9");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FilterRegistry, GenerationInputs, HookService, ports::FilterEnvironment,
    };
    pub use crate::domain::{
        FilterDef, Identifier, IdentifierKind, Precision, SpecifierSet, Version, catalog,
        render_minimal, render_tox, render_yaml_list,
    };
    pub use crate::error::{PyscaffError, PyscaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
