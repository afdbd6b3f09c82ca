//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating automata with minimal boilerplate. Everything built here
//! still goes through the engine's eager validation.

pub mod config;
pub mod error;
pub mod macros;

pub use config::DfaConfigBuilder;
pub use error::BuildError;
