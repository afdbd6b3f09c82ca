//! The caller-supplied DFA descriptor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declarative description of a DFA: the classic 5-tuple.
///
/// A config is plain data — it carries no guarantees. It becomes an
/// executable automaton only by passing the eager validation in
/// [`Dfa::new`](crate::core::Dfa::new), which consumes it. Where the
/// config comes from (literal, file, generated) is up to the caller.
///
/// `states` and `accepting_states` are ordered collections for ease of
/// construction; duplicates are harmless since the engine interns them
/// into sets.
///
/// # Example
///
/// ```rust
/// use acceptor::core::DfaConfig;
/// use std::collections::HashMap;
///
/// // One state, empty alphabet, start = accepting: accepts only "".
/// let config = DfaConfig {
///     states: vec!["q0".to_string()],
///     alphabet: vec![],
///     transitions: HashMap::from([("q0".to_string(), HashMap::new())]),
///     start_state: "q0".to_string(),
///     accepting_states: vec!["q0".to_string()],
/// };
///
/// assert_eq!(config.states.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DfaConfig {
    /// Every state of the automaton, identified by label.
    pub states: Vec<String>,

    /// The symbols the automaton recognizes. Anything else is
    /// out-of-alphabet and rejects the input at runtime.
    pub alphabet: Vec<char>,

    /// Transition table keyed by state, then symbol. Must be total over
    /// states × alphabet to pass validation.
    pub transitions: HashMap<String, HashMap<char, String>>,

    /// Where every run begins.
    pub start_state: String,

    /// States in which exhausted input is classified as accepted.
    pub accepting_states: Vec<String>,
}
