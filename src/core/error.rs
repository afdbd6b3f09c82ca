//! Error taxonomy for automaton construction.
//!
//! Validation errors are raised eagerly by [`Dfa::new`](crate::core::Dfa::new)
//! and are always fatal to that construction attempt. Execution never
//! produces errors: an out-of-alphabet symbol is a normal `Rejected`
//! outcome, not an exceptional condition.

use thiserror::Error;

use crate::builder::BuildError;

/// Structural defects in a DFA definition, detected at construction.
///
/// Each variant corresponds to one of the five validation checks, in the
/// order they run. The first failure wins; no partially validated
/// automaton ever escapes.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{Dfa, DfaConfig, ValidationError};
/// use std::collections::HashMap;
///
/// let config = DfaConfig {
///     states: vec!["q0".to_string()],
///     alphabet: vec![],
///     transitions: HashMap::from([("q0".to_string(), HashMap::new())]),
///     start_state: "ghost".to_string(),
///     accepting_states: vec![],
/// };
///
/// let err = Dfa::new(config).unwrap_err();
/// assert_eq!(err, ValidationError::UnknownStartState("ghost".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The declared start state is not a member of the state set.
    #[error("start state \"{0}\" is not in the set of states")]
    UnknownStartState(String),

    /// An accepting state is not a member of the state set.
    #[error("accepting state \"{0}\" is not in the set of states")]
    UnknownAcceptingState(String),

    /// A declared state has no transition sub-mapping at all.
    #[error("state \"{0}\" has no transitions defined")]
    MissingStateTransitions(String),

    /// A (state, symbol) pair has no outgoing transition.
    #[error("missing transition for state \"{state}\" on symbol '{symbol}'")]
    MissingSymbolTransition { state: String, symbol: char },

    /// A transition points at a state outside the declared state set.
    #[error("transition from \"{from}\" on '{symbol}' leads to unknown state \"{to}\"")]
    UnknownTargetState {
        from: String,
        symbol: char,
        to: String,
    },
}

/// Umbrella error for every way obtaining an automaton can fail.
///
/// Callers that construct through both [`Dfa::new`](crate::core::Dfa::new)
/// and [`DfaConfigBuilder`](crate::builder::DfaConfigBuilder) can funnel
/// either failure into this one type via `?`.
#[derive(Debug, Error)]
pub enum AutomatonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
