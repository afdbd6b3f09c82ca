//! The pure automaton engine.
//!
//! This module contains the validated DFA and everything it produces:
//! - [`DfaConfig`]: the caller-supplied 5-tuple descriptor
//! - [`Dfa`]: the eagerly validated, immutable engine
//! - [`ExecutionTrace`] / [`ExecutionStep`]: per-run transition records
//! - the [`ValidationError`] / [`AutomatonError`] taxonomy
//!
//! All logic in this module is pure (no side effects): construction
//! either yields a fully validated instance or an error, and execution
//! never mutates the instance.

mod config;
mod dfa;
mod error;
mod trace;

pub use config::DfaConfig;
pub use dfa::Dfa;
pub use error::{AutomatonError, ValidationError};
pub use trace::{ExecutionStep, ExecutionTrace, RunResult};
