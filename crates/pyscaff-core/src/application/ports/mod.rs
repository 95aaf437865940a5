//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented elsewhere
//!   - `FilterEnvironment`: a templating engine's filter namespace
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::FilterEnvironment;
