//! Application layer for pyscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (HookService, FilterRegistry)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FilterRegistry,
    GenerationInputs, // DTO for the pre-generation gate
    HookService,
};

// Re-export port traits (for engine integration)
pub use ports::FilterEnvironment;

pub use error::ApplicationError;
