//! Driven (output) ports.
//!
//! These traits define what the application needs from external systems.

use crate::domain::FilterDef;
use crate::error::PyscaffResult;

/// Port for a templating engine's filter namespace.
///
/// Implemented by:
/// - `crate::application::FilterRegistry` (engine-agnostic name → function map)
/// - any engine binding that wants the built-in filters installed directly
///
/// ## Design Notes
///
/// - Registration is the whole contract: a name, a signature, a function
/// - Filters are plain `fn` pointers, so registration never captures state
#[cfg_attr(test, mockall::automock)]
pub trait FilterEnvironment {
    /// Register `def` under `def.name`.
    fn add_filter(&mut self, def: FilterDef) -> PyscaffResult<()>;

    /// Check whether a filter with this name is registered.
    fn has_filter(&self, name: &str) -> bool;
}
