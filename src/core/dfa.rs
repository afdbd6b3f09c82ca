//! The DFA engine: eager validation and deterministic execution.

use std::collections::{HashMap, HashSet};

use crate::core::config::DfaConfig;
use crate::core::error::ValidationError;
use crate::core::trace::{ExecutionStep, ExecutionTrace, RunResult};

/// A validated deterministic finite automaton.
///
/// Constructed once from a [`DfaConfig`] and validated eagerly; a value
/// of this type always satisfies the structural invariant: the
/// transition table is a total function from every declared state and
/// every declared alphabet symbol to a declared state, the start state
/// is declared, and the accepting states are a subset of the declared
/// states.
///
/// All execution methods are pure: they take `&self`, mutate nothing,
/// and keep their cursor and step accumulator on the stack, so a `Dfa`
/// can be shared across threads and run concurrently without
/// synchronization.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{Dfa, RunResult};
/// use acceptor::dfa;
///
/// // Binary strings ending in '0'.
/// let dfa = Dfa::new(dfa! {
///     states: [q0, q1],
///     alphabet: ['0', '1'],
///     start: q0,
///     accepting: [q1],
///     transitions: {
///         q0: { '0' => q1, '1' => q0 },
///         q1: { '0' => q1, '1' => q0 },
///     }
/// })
/// .unwrap();
///
/// assert_eq!(dfa.run("1010"), RunResult::Accepted);
/// assert_eq!(dfa.run("1"), RunResult::Rejected);
/// assert!(!dfa.accepts(""));
/// ```
#[derive(Clone, Debug)]
pub struct Dfa {
    states: HashSet<String>,
    alphabet: HashSet<char>,
    transitions: HashMap<String, HashMap<char, String>>,
    start_state: String,
    accepting_states: HashSet<String>,
}

impl Dfa {
    /// Build an automaton from a descriptor, validating it eagerly.
    ///
    /// Validation runs once, here, in a fixed order; the first failure
    /// wins and no instance is produced:
    ///
    /// 1. the start state is declared ([`UnknownStartState`]);
    /// 2. every accepting state is declared ([`UnknownAcceptingState`]);
    /// 3. every declared state has a transition sub-mapping
    ///    ([`MissingStateTransitions`]);
    /// 4. every (state, symbol) pair has an outgoing transition
    ///    ([`MissingSymbolTransition`]);
    /// 5. every transition target is declared ([`UnknownTargetState`]).
    ///
    /// [`UnknownStartState`]: ValidationError::UnknownStartState
    /// [`UnknownAcceptingState`]: ValidationError::UnknownAcceptingState
    /// [`MissingStateTransitions`]: ValidationError::MissingStateTransitions
    /// [`MissingSymbolTransition`]: ValidationError::MissingSymbolTransition
    /// [`UnknownTargetState`]: ValidationError::UnknownTargetState
    ///
    /// # Example
    ///
    /// ```rust
    /// use acceptor::core::{Dfa, DfaConfig};
    /// use std::collections::HashMap;
    ///
    /// // Minimal valid automaton: one state, start = accepting.
    /// let dfa = Dfa::new(DfaConfig {
    ///     states: vec!["only".to_string()],
    ///     alphabet: vec![],
    ///     transitions: HashMap::from([("only".to_string(), HashMap::new())]),
    ///     start_state: "only".to_string(),
    ///     accepting_states: vec!["only".to_string()],
    /// })
    /// .unwrap();
    ///
    /// assert!(dfa.accepts(""));
    /// ```
    pub fn new(config: DfaConfig) -> Result<Self, ValidationError> {
        let dfa = Self {
            states: config.states.into_iter().collect(),
            alphabet: config.alphabet.into_iter().collect(),
            transitions: config.transitions,
            start_state: config.start_state,
            accepting_states: config.accepting_states.into_iter().collect(),
        };

        dfa.validate()?;
        Ok(dfa)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.states.contains(&self.start_state) {
            return Err(ValidationError::UnknownStartState(
                self.start_state.clone(),
            ));
        }

        for state in &self.accepting_states {
            if !self.states.contains(state) {
                return Err(ValidationError::UnknownAcceptingState(state.clone()));
            }
        }

        // Totality: every declared state, not just the states the table
        // happens to mention, needs a row covering the whole alphabet.
        for state in &self.states {
            let Some(row) = self.transitions.get(state) else {
                return Err(ValidationError::MissingStateTransitions(state.clone()));
            };

            for symbol in &self.alphabet {
                let Some(target) = row.get(symbol) else {
                    return Err(ValidationError::MissingSymbolTransition {
                        state: state.clone(),
                        symbol: *symbol,
                    });
                };

                if !self.states.contains(target) {
                    return Err(ValidationError::UnknownTargetState {
                        from: state.clone(),
                        symbol: *symbol,
                        to: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Classify an input string with a single deterministic pass.
    ///
    /// A symbol outside the alphabet rejects the whole run immediately;
    /// it is a normal outcome, never an error, so this method is total
    /// over arbitrary strings. Empty input performs zero transitions
    /// and is accepted iff the start state itself is accepting.
    pub fn run(&self, input: &str) -> RunResult {
        let mut current = &self.start_state;

        for symbol in input.chars() {
            let Some(next) = self.step(current, symbol) else {
                return RunResult::Rejected;
            };

            current = next;
        }

        self.classify(current)
    }

    /// Convenience boolean form of [`run`](Self::run).
    pub fn accepts(&self, input: &str) -> bool {
        self.run(input).is_accepted()
    }

    /// Classify an input string, recording one [`ExecutionStep`] per
    /// symbol consumed.
    ///
    /// Transition semantics are identical to [`run`](Self::run). On an
    /// out-of-alphabet symbol, execution stops: the trace keeps the
    /// steps accumulated so far, `final_state` is the state held before
    /// that symbol, and the result is `Rejected` — the failing symbol
    /// itself produces no step.
    pub fn run_with_trace(&self, input: &str) -> ExecutionTrace {
        let mut steps = Vec::new();
        let mut current = &self.start_state;
        let mut stuck = false;

        for symbol in input.chars() {
            let Some(next) = self.step(current, symbol) else {
                stuck = true;
                break;
            };

            steps.push(ExecutionStep {
                from: current.clone(),
                symbol,
                to: next.clone(),
            });

            current = next;
        }

        let result = if stuck {
            RunResult::Rejected
        } else {
            self.classify(current)
        };

        ExecutionTrace {
            input: input.to_string(),
            start_state: self.start_state.clone(),
            steps,
            final_state: current.clone(),
            result,
        }
    }

    /// One transition. `None` for an out-of-alphabet symbol; the table
    /// lookups cannot miss after validation, but degrade to `None`
    /// rather than panic.
    fn step(&self, state: &str, symbol: char) -> Option<&String> {
        if !self.alphabet.contains(&symbol) {
            return None;
        }

        self.transitions.get(state)?.get(&symbol)
    }

    fn classify(&self, state: &str) -> RunResult {
        if self.accepting_states.contains(state) {
            RunResult::Accepted
        } else {
            RunResult::Rejected
        }
    }

    /// The declared state set.
    pub fn states(&self) -> &HashSet<String> {
        &self.states
    }

    /// The declared alphabet.
    pub fn alphabet(&self) -> &HashSet<char> {
        &self.alphabet
    }

    /// The state every run begins in.
    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    /// The accepting subset of the state set.
    pub fn accepting_states(&self) -> &HashSet<String> {
        &self.accepting_states
    }

    /// Whether a state label names an accepting state.
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting_states.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa;

    /// Two states, accepts binary strings ending in '0'.
    fn ends_in_zero() -> Dfa {
        Dfa::new(dfa! {
            states: [q0, q1],
            alphabet: ['0', '1'],
            start: q0,
            accepting: [q1],
            transitions: {
                q0: { '0' => q1, '1' => q0 },
                q1: { '0' => q1, '1' => q0 },
            }
        })
        .unwrap()
    }

    /// Three states, accepts strings containing the substring "ab".
    fn contains_ab() -> Dfa {
        Dfa::new(dfa! {
            states: [start, seen_a, seen_ab],
            alphabet: ['a', 'b'],
            start: start,
            accepting: [seen_ab],
            transitions: {
                start: { 'a' => seen_a, 'b' => start },
                seen_a: { 'a' => seen_a, 'b' => seen_ab },
                seen_ab: { 'a' => seen_ab, 'b' => seen_ab },
            }
        })
        .unwrap()
    }

    #[test]
    fn minimal_automaton_accepts_empty_input() {
        let dfa = Dfa::new(dfa! {
            states: [only],
            alphabet: [],
            start: only,
            accepting: [only],
            transitions: {
                only: {},
            }
        })
        .unwrap();

        assert_eq!(dfa.run(""), RunResult::Accepted);
    }

    #[test]
    fn rejects_unknown_start_state() {
        let mut config = dfa! {
            states: [q0],
            alphabet: [],
            start: q0,
            accepting: [],
            transitions: {
                q0: {},
            }
        };
        config.start_state = "ghost".to_string();

        let err = Dfa::new(config).unwrap_err();
        assert_eq!(err, ValidationError::UnknownStartState("ghost".to_string()));
    }

    #[test]
    fn rejects_unknown_accepting_state() {
        let mut config = dfa! {
            states: [q0],
            alphabet: [],
            start: q0,
            accepting: [],
            transitions: {
                q0: {},
            }
        };
        config.accepting_states = vec!["ghost".to_string()];

        let err = Dfa::new(config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownAcceptingState("ghost".to_string())
        );
    }

    #[test]
    fn rejects_state_with_no_transition_row() {
        let mut config = dfa! {
            states: [q0, q1],
            alphabet: ['x'],
            start: q0,
            accepting: [],
            transitions: {
                q0: { 'x' => q1 },
                q1: { 'x' => q0 },
            }
        };
        config.transitions.remove("q1");

        let err = Dfa::new(config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingStateTransitions("q1".to_string())
        );
    }

    #[test]
    fn rejects_missing_symbol_transition() {
        let mut config = dfa! {
            states: [q0],
            alphabet: ['x', 'y'],
            start: q0,
            accepting: [],
            transitions: {
                q0: { 'x' => q0, 'y' => q0 },
            }
        };
        config
            .transitions
            .get_mut("q0")
            .unwrap()
            .remove(&'y');

        let err = Dfa::new(config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingSymbolTransition {
                state: "q0".to_string(),
                symbol: 'y',
            }
        );
    }

    #[test]
    fn rejects_unknown_transition_target() {
        let config = dfa! {
            states: [q0],
            alphabet: ['x'],
            start: q0,
            accepting: [],
            transitions: {
                q0: { 'x' => ghost },
            }
        };

        let err = Dfa::new(config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownTargetState {
                from: "q0".to_string(),
                symbol: 'x',
                to: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn ends_in_zero_accepts_expected_strings() {
        let dfa = ends_in_zero();

        assert_eq!(dfa.run("0"), RunResult::Accepted);
        assert_eq!(dfa.run("10"), RunResult::Accepted);
        assert_eq!(dfa.run("1010"), RunResult::Accepted);
    }

    #[test]
    fn ends_in_zero_rejects_expected_strings() {
        let dfa = ends_in_zero();

        assert_eq!(dfa.run("1"), RunResult::Rejected);
        assert_eq!(dfa.run(""), RunResult::Rejected);
    }

    #[test]
    fn out_of_alphabet_symbol_rejects() {
        let dfa = ends_in_zero();

        // '2' is not in the alphabet; rejection, not an error.
        assert_eq!(dfa.run("102"), RunResult::Rejected);
    }

    #[test]
    fn contains_ab_scenarios() {
        let dfa = contains_ab();

        for input in ["ab", "aab", "bab", "abbb"] {
            assert!(dfa.accepts(input), "expected \"{input}\" to be accepted");
        }
        for input in ["a", "ba", "bbb", ""] {
            assert!(!dfa.accepts(input), "expected \"{input}\" to be rejected");
        }
    }

    #[test]
    fn trace_records_each_step() {
        let dfa = ends_in_zero();

        let trace = dfa.run_with_trace("10");

        assert_eq!(
            trace.steps,
            vec![
                ExecutionStep {
                    from: "q0".to_string(),
                    symbol: '1',
                    to: "q0".to_string(),
                },
                ExecutionStep {
                    from: "q0".to_string(),
                    symbol: '0',
                    to: "q1".to_string(),
                },
            ]
        );
        assert_eq!(trace.final_state, "q1");
        assert_eq!(trace.result, RunResult::Accepted);
    }

    #[test]
    fn trace_of_empty_input_has_no_steps() {
        let dfa = ends_in_zero();

        let trace = dfa.run_with_trace("");

        assert!(trace.steps.is_empty());
        assert_eq!(trace.final_state, "q0");
        assert_eq!(trace.result, RunResult::Rejected);
    }

    #[test]
    fn trace_stops_before_out_of_alphabet_symbol() {
        let dfa = ends_in_zero();

        let trace = dfa.run_with_trace("102");

        // Two steps for "10"; the '2' contributes none.
        assert_eq!(trace.steps.len(), 2);
        assert_eq!(trace.final_state, "q1");
        assert_eq!(trace.result, RunResult::Rejected);
    }

    #[test]
    fn trace_of_immediately_invalid_symbol_holds_the_start_state() {
        let dfa = ends_in_zero();

        let trace = dfa.run_with_trace("x01");

        assert!(trace.steps.is_empty());
        assert_eq!(trace.final_state, "q0");
        assert_eq!(trace.start_state, "q0");
        assert_eq!(trace.input, "x01");
        assert_eq!(trace.result, RunResult::Rejected);
    }

    #[test]
    fn accessors_expose_the_declared_tuple() {
        let dfa = ends_in_zero();

        assert_eq!(dfa.states().len(), 2);
        assert_eq!(dfa.alphabet().len(), 2);
        assert_eq!(dfa.start_state(), "q0");
        assert!(dfa.is_accepting("q1"));
        assert!(!dfa.is_accepting("q0"));
        assert!(dfa.accepting_states().contains("q1"));
    }

    #[test]
    fn runs_do_not_interfere() {
        let dfa = ends_in_zero();

        // Each call carries its own cursor; interleaved calls on the
        // same instance see identical results.
        let first = dfa.run("1010");
        let trace = dfa.run_with_trace("1");
        let second = dfa.run("1010");

        assert_eq!(first, second);
        assert_eq!(trace.result, RunResult::Rejected);
    }

    #[test]
    fn dfa_is_shareable_across_threads() {
        use std::sync::Arc;

        let dfa = Arc::new(ends_in_zero());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dfa = Arc::clone(&dfa);
                std::thread::spawn(move || dfa.run("1010"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), RunResult::Accepted);
        }
    }
}
