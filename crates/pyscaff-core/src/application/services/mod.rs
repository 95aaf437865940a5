//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! hook-side use cases: "gate generation on valid inputs" and "apply a
//! named filter".

pub mod filter_registry;
pub mod hook_service;

pub use filter_registry::{FilterRegistry, install_builtin_filters};
pub use hook_service::{GenerationInputs, HookService};
