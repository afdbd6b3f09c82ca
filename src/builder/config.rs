//! Fluent builder for assembling and validating automata.

use std::collections::HashMap;

use crate::builder::error::BuildError;
use crate::core::{Dfa, DfaConfig};

/// Builder for constructing automata with a fluent API.
///
/// The builder accumulates the 5-tuple piece by piece and hands the
/// assembled [`DfaConfig`] to [`Dfa::new`] on [`build`](Self::build),
/// so a built automaton is always validated.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::DfaConfigBuilder;
///
/// // Binary strings ending in '0'.
/// let dfa = DfaConfigBuilder::new()
///     .states(["q0", "q1"])
///     .alphabet(['0', '1'])
///     .transition("q0", '0', "q1")
///     .transition("q0", '1', "q0")
///     .transition("q1", '0', "q1")
///     .transition("q1", '1', "q0")
///     .start_state("q0")
///     .accepting("q1")
///     .build()
///     .unwrap();
///
/// assert!(dfa.accepts("10"));
/// ```
pub struct DfaConfigBuilder {
    states: Vec<String>,
    alphabet: Vec<char>,
    transitions: HashMap<String, HashMap<char, String>>,
    start_state: Option<String>,
    accepting_states: Vec<String>,
}

impl DfaConfigBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: HashMap::new(),
            start_state: None,
            accepting_states: Vec::new(),
        }
    }

    /// Declare a single state.
    pub fn state(mut self, label: impl Into<String>) -> Self {
        self.states.push(label.into());
        self
    }

    /// Declare multiple states at once.
    pub fn states<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Declare a single alphabet symbol.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Declare multiple alphabet symbols at once.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Add one transition: `from` consumes `symbol` and moves to `to`.
    ///
    /// Later entries for the same (state, symbol) pair overwrite
    /// earlier ones.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: char,
        to: impl Into<String>,
    ) -> Self {
        self.transitions
            .entry(from.into())
            .or_default()
            .insert(symbol, to.into());
        self
    }

    /// Set the start state (required).
    pub fn start_state(mut self, label: impl Into<String>) -> Self {
        self.start_state = Some(label.into());
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, label: impl Into<String>) -> Self {
        self.accepting_states.push(label.into());
        self
    }

    /// Assemble the config and validate it into a [`Dfa`].
    ///
    /// Returns an error if required fields are missing, or a
    /// transparent [`ValidationError`](crate::core::ValidationError)
    /// if the assembled config is structurally unsound.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let start_state = self.start_state.ok_or(BuildError::MissingStartState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut transitions = self.transitions;

        // Every declared state gets a row, so states without outgoing
        // transitions (empty alphabet) pass the totality check.
        for state in &self.states {
            transitions.entry(state.clone()).or_default();
        }

        let config = DfaConfig {
            states: self.states,
            alphabet: self.alphabet,
            transitions,
            start_state,
            accepting_states: self.accepting_states,
        };

        Ok(Dfa::new(config)?)
    }
}

impl Default for DfaConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
