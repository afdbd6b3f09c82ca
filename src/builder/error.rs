//! Build errors for the DFA config builder.

use thiserror::Error;

use crate::core::ValidationError;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start_state(label) before .build()")]
    MissingStartState,

    #[error("No states declared. Add at least one state")]
    NoStates,

    /// The assembled config failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
