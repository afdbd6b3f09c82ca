//! Acceptor: a deterministic finite automaton engine
//!
//! Acceptor models a DFA as the classic 5-tuple (states, alphabet,
//! transition function, start state, accepting states) and classifies
//! input strings as accepted or rejected. The engine is a pure core:
//! a definition is validated eagerly and exactly once at construction,
//! and every execution after that is a side-effect-free pass over the
//! input that the caller can run from any number of threads.
//!
//! # Core Concepts
//!
//! - **Validation**: [`Dfa::new`] checks that the transition table is a
//!   total function over states × alphabet before any instance exists
//! - **Execution**: [`Dfa::run`] classifies an input; symbols outside
//!   the alphabet reject the run rather than raising an error
//! - **Tracing**: [`Dfa::run_with_trace`] records every transition
//!   taken, for debugging and visualization
//!
//! # Example
//!
//! ```rust
//! use acceptor::{Dfa, RunResult};
//! use acceptor::dfa;
//!
//! // Binary strings ending in '0'.
//! let dfa = Dfa::new(dfa! {
//!     states: [q0, q1],
//!     alphabet: ['0', '1'],
//!     start: q0,
//!     accepting: [q1],
//!     transitions: {
//!         q0: { '0' => q1, '1' => q0 },
//!         q1: { '0' => q1, '1' => q0 },
//!     }
//! })?;
//!
//! assert_eq!(dfa.run("1010"), RunResult::Accepted);
//! assert_eq!(dfa.run("101"), RunResult::Rejected);
//!
//! let trace = dfa.run_with_trace("10");
//! assert_eq!(trace.path(), vec!["q0", "q0", "q1"]);
//! # Ok::<(), acceptor::ValidationError>(())
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    AutomatonError, Dfa, DfaConfig, ExecutionStep, ExecutionTrace, RunResult, ValidationError,
};

pub use crate::builder::{BuildError, DfaConfigBuilder};
