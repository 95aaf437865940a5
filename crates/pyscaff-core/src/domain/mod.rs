// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pyscaff.
//!
//! Pure logic only: identifier grammars, version parsing and ordering,
//! specifier sets, the release catalog, and the text renderers built on them.
//!
//! - **No I/O**: nothing here touches the filesystem or environment
//! - **No state**: every operation is a function of its inputs and the
//!   static catalog
//! - **Soft rendering**: renderers return `""` instead of erroring
pub mod catalog;
pub mod error;
pub mod filters;
pub mod identifier;
pub mod render;
pub mod specifier;
pub mod version;

pub use catalog::{Precision, RELEASE_LINES, ReleaseLine, Releases, catalog};
pub use error::{DomainError, ErrorCategory};
pub use filters::{FILTER_REGISTRY, FilterDef, FilterFn, find_filter};
pub use identifier::{Identifier, IdentifierKind, validate_text};
pub use render::{filter, render_minimal, render_tox, render_yaml_list};
pub use specifier::{Operator, Specifier, SpecifierSet};
pub use version::{PreRelease, PreReleaseKind, Version};
